#![allow(dead_code)]

use cashflows::application::gateway::CashFlowsGateway;
use cashflows::config::{GatewayConfig, GatewayCredentials};
use cashflows::domain::card::CreditCard;
use cashflows::infrastructure::in_memory::ScriptedTransport;

pub const AUTH_ID: &str = "merchant-1";
pub const AUTH_PASS: &str = "p@ss word";

pub fn config() -> GatewayConfig {
    GatewayConfig::new(GatewayCredentials::new(AUTH_ID, AUTH_PASS).unwrap())
}

/// A test-mode gateway sharing its transport with the returned handle.
pub fn gateway() -> (CashFlowsGateway, ScriptedTransport) {
    let transport = ScriptedTransport::new();
    let gateway = CashFlowsGateway::new(config(), Box::new(transport.clone()));
    (gateway, transport)
}

pub fn card() -> CreditCard {
    CreditCard {
        number: "4000100011112224".to_string(),
        verification_value: "123".to_string(),
        month: 9,
        year: 2025,
        first_name: "Longbob".to_string(),
        last_name: "Longsen".to_string(),
    }
}

pub const HEADER: &str = "type,order_id,amount,currency,authorization,card_number,card_cvv,card_month,card_year,first_name,last_name,description,email,ip,address1,address2,city,state,zip,country,phone";
