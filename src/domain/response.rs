use crate::error::{GatewayError, Result};
use serde::{Deserialize, Serialize};

/// Response field delimiter.
pub const DELIMITER: char = '|';

/// Authorised flag value for an approved transaction.
pub const APPROVED: &str = "A";

/// The processor's response, one named field per position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub authorised: String,
    pub transaction_id: String,
    pub cvv_response: String,
    pub authorisation: String,
    pub message: String,
}

impl ResponseRecord {
    /// Parses `flag|transaction id|cvv code|authorisation code|message`.
    ///
    /// Fails with [`GatewayError::MalformedResponse`] when fewer than five
    /// fields are present. Fields past the fifth are ignored and only the
    /// message is trimmed.
    pub fn parse(body: &str) -> Result<Self> {
        let fields: Vec<&str> = body.split(DELIMITER).collect();
        let [authorised, transaction_id, cvv_response, authorisation, message, ..] =
            fields.as_slice()
        else {
            return Err(GatewayError::MalformedResponse {
                fields: fields.len(),
            });
        };

        Ok(Self {
            authorised: authorised.to_string(),
            transaction_id: transaction_id.to_string(),
            cvv_response: cvv_response.to_string(),
            authorisation: authorisation.to_string(),
            message: message.trim().to_string(),
        })
    }

    pub fn is_approved(&self) -> bool {
        self.authorised == APPROVED
    }

    pub fn cvv_result(&self) -> Option<CvvResult> {
        CvvResult::from_code(&self.cvv_response)
    }
}

/// Card verification value check outcome reported by the issuer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CvvResult {
    Match,
    NoMatch,
    NotProcessed,
    ShouldBeOnCard,
    IssuerNotCertified,
    NoResponse,
    Suspicious,
    FailedValidation,
}

impl CvvResult {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "M" => Some(CvvResult::Match),
            "N" => Some(CvvResult::NoMatch),
            "P" => Some(CvvResult::NotProcessed),
            "S" => Some(CvvResult::ShouldBeOnCard),
            "U" => Some(CvvResult::IssuerNotCertified),
            "X" => Some(CvvResult::NoResponse),
            "D" => Some(CvvResult::Suspicious),
            "I" => Some(CvvResult::FailedValidation),
            _ => None,
        }
    }
}

/// Normalized outcome of one operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub success: bool,
    pub message: String,
    pub params: ResponseRecord,
    /// Token referencing this transaction in a later capture, refund or void.
    pub authorization: String,
    pub test: bool,
}

impl TransactionResult {
    /// Classifies a parsed response. Approval (`A`) is the only success.
    pub fn from_record(params: ResponseRecord, test: bool) -> Self {
        Self {
            success: params.is_approved(),
            message: params.message.clone(),
            authorization: params.transaction_id.clone(),
            params,
            test,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}
