use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

/// Per-call options shared by every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOptions {
    /// Merchant order reference. Required by purchase and authorize.
    pub order_id: Option<String>,
    /// Overrides the currency carried by the money.
    pub currency: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub ip: Option<String>,
    pub billing_address: Option<Address>,
    pub address: Option<Address>,
}

impl TransactionOptions {
    pub fn with_order_id(order_id: impl Into<String>) -> Self {
        Self {
            order_id: Some(order_id.into()),
            ..Self::default()
        }
    }

    /// The billing address, falling back to the general address.
    pub fn effective_address(&self) -> Option<&Address> {
        self.billing_address.as_ref().or(self.address.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_address_wins() {
        let options = TransactionOptions {
            billing_address: Some(Address {
                city: Some("Ottawa".to_string()),
                ..Address::default()
            }),
            address: Some(Address {
                city: Some("Toronto".to_string()),
                ..Address::default()
            }),
            ..TransactionOptions::default()
        };

        let address = options.effective_address().unwrap();
        assert_eq!(address.city.as_deref(), Some("Ottawa"));
    }

    #[test]
    fn test_general_address_is_fallback() {
        let options = TransactionOptions {
            address: Some(Address::default()),
            ..TransactionOptions::default()
        };
        assert!(options.effective_address().is_some());
        assert!(TransactionOptions::default().effective_address().is_none());
    }
}
