//! Field builders shared by the gateway operations.
//!
//! Each `add_*` function writes its fields into the request in place. Only
//! [`add_invoice`] can fail, and it does so before anything is sent.

use crate::domain::card::CreditCard;
use crate::domain::money::Money;
use crate::domain::options::TransactionOptions;
use crate::domain::request::{Field, TransactionRequest};
use crate::error::{GatewayError, Result};

/// Maximum length of `tran_desc`.
pub const MAX_DESCRIPTION_LENGTH: usize = 99;

pub const DEFAULT_EMAIL: &str = "test@example.com";
pub const DEFAULT_IP: &str = "0.0.0.0";

/// Joins the address lines in `cust_address`.
pub const ADDRESS_SEPARATOR: &str = "\n";

pub fn add_invoice(request: &mut TransactionRequest, options: &TransactionOptions) -> Result<()> {
    let order_id = options
        .order_id
        .as_deref()
        .ok_or_else(|| GatewayError::precondition("Missing required option: order_id"))?;
    request.set(Field::TranRef, order_id);

    if let Some(description) = &options.description {
        let description: String = description.chars().take(MAX_DESCRIPTION_LENGTH).collect();
        request.set(Field::TranDesc, description);
    }
    Ok(())
}

pub fn add_amount(request: &mut TransactionRequest, money: &Money, options: &TransactionOptions) {
    request.set(Field::TranAmount, money.format_amount());
    let currency = options.currency.as_deref().unwrap_or(money.currency());
    request.set(Field::TranCurrency, currency);
}

pub fn add_payment(request: &mut TransactionRequest, card: &CreditCard) {
    request.set(Field::CardNum, card.number.as_str());
    request.set(Field::CardCvv, card.verification_value.as_str());
    request.set(Field::CardExpiry, card.expiry());
    request.set(Field::CustName, card.name());
}

pub fn add_address(request: &mut TransactionRequest, options: &TransactionOptions) {
    let Some(address) = options.effective_address() else {
        return;
    };

    // Missing lines stay as empty strings so each line keeps its position.
    let lines = [
        &address.address1,
        &address.address2,
        &address.city,
        &address.state,
    ]
    .map(|line| line.as_deref().unwrap_or_default());
    request.set(Field::CustAddress, lines.join(ADDRESS_SEPARATOR));
    request.set(Field::CustPostcode, address.zip.clone().unwrap_or_default());
    request.set(Field::CustCountry, address.country.clone().unwrap_or_default());
    request.set(Field::CustTel, address.phone.clone().unwrap_or_default());
}

pub fn add_customer_data(request: &mut TransactionRequest, options: &TransactionOptions) {
    request.set(
        Field::CustEmail,
        options.email.as_deref().unwrap_or(DEFAULT_EMAIL),
    );
    request.set(Field::CustIp, options.ip.as_deref().unwrap_or(DEFAULT_IP));
}

/// Links a follow-up operation to the transaction it acts on: the order id
/// when one is given, otherwise the authorization token.
pub fn add_original_reference(
    request: &mut TransactionRequest,
    authorization: &str,
    options: &TransactionOptions,
) {
    let reference = options.order_id.as_deref().unwrap_or(authorization);
    request.set(Field::TranOrigId, reference);
}
