use crate::domain::card::CreditCard;
use crate::domain::money::Money;
use crate::domain::options::TransactionOptions;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Purchase,
    Authorize,
    Capture,
    Refund,
    Void,
    Verify,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Purchase => "purchase",
            Operation::Authorize => "authorize",
            Operation::Capture => "capture",
            Operation::Refund => "refund",
            Operation::Void => "void",
            Operation::Verify => "verify",
        };
        f.write_str(name)
    }
}

/// One fully specified gateway operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Purchase {
        money: Money,
        card: CreditCard,
        options: TransactionOptions,
    },
    Authorize {
        money: Money,
        card: CreditCard,
        options: TransactionOptions,
    },
    Capture {
        money: Money,
        authorization: String,
        options: TransactionOptions,
    },
    Refund {
        money: Money,
        authorization: String,
        options: TransactionOptions,
    },
    Void {
        money: Money,
        authorization: String,
        options: TransactionOptions,
    },
    Verify {
        card: CreditCard,
        options: TransactionOptions,
    },
}

impl Command {
    pub fn operation(&self) -> Operation {
        match self {
            Command::Purchase { .. } => Operation::Purchase,
            Command::Authorize { .. } => Operation::Authorize,
            Command::Capture { .. } => Operation::Capture,
            Command::Refund { .. } => Operation::Refund,
            Command::Void { .. } => Operation::Void,
            Command::Verify { .. } => Operation::Verify,
        }
    }

    pub fn options(&self) -> &TransactionOptions {
        match self {
            Command::Purchase { options, .. }
            | Command::Authorize { options, .. }
            | Command::Capture { options, .. }
            | Command::Refund { options, .. }
            | Command::Void { options, .. }
            | Command::Verify { options, .. } => options,
        }
    }
}
