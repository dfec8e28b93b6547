//! Value types of the CashFlows protocol and the transport port.

pub mod card;
pub mod money;
pub mod options;
pub mod ports;
pub mod request;
pub mod response;
