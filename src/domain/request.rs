use crate::config::GatewayCredentials;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::form_urlencoded;

/// Value of `tran_class` for every request this adapter sends.
pub const TRANSACTION_CLASS: &str = "ecom";

/// The processor's action codes (`tran_type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Hold,
    Capture,
    Refund,
    Void,
}

impl TransactionType {
    pub fn code(self) -> &'static str {
        match self {
            TransactionType::Sale => "Sale",
            TransactionType::Hold => "hold",
            TransactionType::Capture => "capture",
            TransactionType::Refund => "refund",
            TransactionType::Void => "void",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Every field name the processor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    AuthId,
    AuthPass,
    TranType,
    TranClass,
    TranTestMode,
    TranRef,
    TranDesc,
    TranAmount,
    TranCurrency,
    TranOrigId,
    CardNum,
    CardCvv,
    CardExpiry,
    CustName,
    CustAddress,
    CustPostcode,
    CustCountry,
    CustTel,
    CustEmail,
    CustIp,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::AuthId => "auth_id",
            Field::AuthPass => "auth_pass",
            Field::TranType => "tran_type",
            Field::TranClass => "tran_class",
            Field::TranTestMode => "tran_testmode",
            Field::TranRef => "tran_ref",
            Field::TranDesc => "tran_desc",
            Field::TranAmount => "tran_amount",
            Field::TranCurrency => "tran_currency",
            Field::TranOrigId => "tran_orig_id",
            Field::CardNum => "card_num",
            Field::CardCvv => "card_cvv",
            Field::CardExpiry => "card_expiry",
            Field::CustName => "cust_name",
            Field::CustAddress => "cust_address",
            Field::CustPostcode => "cust_postcode",
            Field::CustCountry => "cust_country",
            Field::CustTel => "cust_tel",
            Field::CustEmail => "cust_email",
            Field::CustIp => "cust_ip",
        }
    }
}

/// Ordered field mapping for one outgoing request.
///
/// Fields keep the position of their first insertion; setting a field again
/// replaces its value in place, so encoding is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionRequest {
    fields: Vec<(Field, String)>,
}

impl TransactionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed fields every request starts with.
    pub fn envelope(
        credentials: &GatewayCredentials,
        action: TransactionType,
        test_mode: bool,
    ) -> Self {
        let mut request = Self::new();
        request.set(Field::AuthId, credentials.auth_id());
        request.set(Field::AuthPass, credentials.auth_pass());
        request.set(Field::TranType, action.code());
        request.set(Field::TranClass, TRANSACTION_CLASS);
        request.set(Field::TranTestMode, if test_mode { "1" } else { "0" });
        request
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((field, value)),
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Appends `other`'s fields after this request's, `other` winning on conflicts.
    pub fn merge(mut self, other: TransactionRequest) -> Self {
        for (field, value) in other.fields {
            self.set(field, value);
        }
        self
    }

    /// Serializes the fields as an `application/x-www-form-urlencoded` body.
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (field, value) in &self.fields {
            serializer.append_pair(field.as_str(), value);
        }
        serializer.finish()
    }
}
