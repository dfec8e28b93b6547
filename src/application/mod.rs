//! Application layer: request building and operation orchestration.
//!
//! [`gateway::CashFlowsGateway`] is the entry point. Each operation builds a
//! fresh field mapping, sends it through the injected transport and
//! classifies the reply. `verify` chains authorize and void through
//! [`multi_response::MultiResponse`].

pub mod builder;
pub mod command;
pub mod gateway;
pub mod multi_response;
