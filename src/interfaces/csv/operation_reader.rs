use crate::application::command::{Command, Operation};
use crate::domain::card::CreditCard;
use crate::domain::money::{DEFAULT_CURRENCY, Money};
use crate::domain::options::{Address, TransactionOptions};
use crate::error::{GatewayError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One row of the batch input. Columns an operation does not use may be left empty.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OperationRecord {
    pub r#type: Operation,
    pub order_id: Option<String>,
    /// Major units, e.g. `10.50`.
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub authorization: Option<String>,
    pub card_number: Option<String>,
    pub card_cvv: Option<String>,
    pub card_month: Option<u8>,
    pub card_year: Option<u16>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub ip: Option<String>,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub country: Option<String>,
    pub phone: Option<String>,
}

impl OperationRecord {
    /// Validates the row and turns it into a [`Command`].
    pub fn into_command(self) -> Result<Command> {
        let operation = self.r#type;
        let options = self.options();

        let command = match operation {
            Operation::Purchase => Command::Purchase {
                money: self.money()?,
                card: self.card()?,
                options,
            },
            Operation::Authorize => Command::Authorize {
                money: self.money()?,
                card: self.card()?,
                options,
            },
            Operation::Capture => Command::Capture {
                money: self.money()?,
                authorization: self.authorization()?,
                options,
            },
            Operation::Refund => Command::Refund {
                money: self.money()?,
                authorization: self.authorization()?,
                options,
            },
            Operation::Void => Command::Void {
                money: self.money()?,
                authorization: self.authorization()?,
                options,
            },
            Operation::Verify => Command::Verify {
                card: self.card()?,
                options,
            },
        };
        Ok(command)
    }

    fn money(&self) -> Result<Money> {
        let amount = self.amount.ok_or_else(|| {
            GatewayError::precondition(format!("Missing amount for {}", self.r#type))
        })?;
        let currency = self.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
        Money::from_major(amount, currency)
    }

    fn card(&self) -> Result<CreditCard> {
        let missing =
            |column: &str| GatewayError::precondition(format!("Missing {column} for {}", self.r#type));
        Ok(CreditCard {
            number: self.card_number.clone().ok_or_else(|| missing("card_number"))?,
            verification_value: self.card_cvv.clone().unwrap_or_default(),
            month: self.card_month.ok_or_else(|| missing("card_month"))?,
            year: self.card_year.ok_or_else(|| missing("card_year"))?,
            first_name: self.first_name.clone().unwrap_or_default(),
            last_name: self.last_name.clone().unwrap_or_default(),
        })
    }

    fn authorization(&self) -> Result<String> {
        self.authorization.clone().ok_or_else(|| {
            GatewayError::precondition(format!("Missing authorization for {}", self.r#type))
        })
    }

    fn address(&self) -> Option<Address> {
        let address = Address {
            address1: self.address1.clone(),
            address2: self.address2.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            country: self.country.clone(),
            phone: self.phone.clone(),
        };
        (address != Address::default()).then_some(address)
    }

    fn options(&self) -> TransactionOptions {
        TransactionOptions {
            order_id: self.order_id.clone(),
            currency: self.currency.clone(),
            description: self.description.clone(),
            email: self.email.clone(),
            ip: self.ip.clone(),
            billing_address: self.address(),
            address: None,
        }
    }
}

/// Reads operations from a CSV source.
///
/// Whitespace around fields is trimmed and rows may omit trailing columns.
pub struct OperationReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OperationReader<R> {
    /// Creates a new `OperationReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes rows. Row errors are yielded, not fatal.
    pub fn records(self) -> impl Iterator<Item = Result<OperationRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(GatewayError::from))
    }

    /// Like [`Self::records`], converting each row into a [`Command`].
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.records()
            .map(|record| record.and_then(OperationRecord::into_command))
    }
}
