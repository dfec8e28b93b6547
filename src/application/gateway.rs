use crate::application::builder::{
    add_address, add_amount, add_customer_data, add_invoice, add_original_reference, add_payment,
};
use crate::application::command::Command;
use crate::application::multi_response::{MultiResponse, ResponsePolicy};
use crate::config::GatewayConfig;
use crate::domain::card::CreditCard;
use crate::domain::money::Money;
use crate::domain::options::TransactionOptions;
use crate::domain::ports::TransportBox;
use crate::domain::request::{TransactionRequest, TransactionType};
use crate::domain::response::{ResponseRecord, TransactionResult};
use crate::error::Result;
use tracing::{debug, info};

/// Amount, in minor units, authorized and voided by [`CashFlowsGateway::verify`].
pub const VERIFY_AMOUNT: u64 = 100;

/// Adapter between the payment operations and the CashFlows remote API.
///
/// Holds only immutable configuration and its transport. Every call builds
/// its own request, so one instance can serve concurrent callers.
pub struct CashFlowsGateway {
    config: GatewayConfig,
    transport: TransportBox,
}

impl CashFlowsGateway {
    /// Creates a new gateway.
    ///
    /// # Arguments
    ///
    /// * `config` - Credentials, mode and endpoints.
    /// * `transport` - Delivers request bodies to the processor.
    pub fn new(config: GatewayConfig, transport: TransportBox) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    pub fn is_test(&self) -> bool {
        self.config.test_mode
    }

    /// Charges the card in one step. Requires `options.order_id`.
    pub async fn purchase(
        &self,
        money: &Money,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<TransactionResult> {
        let request = card_request(money, card, options)?;
        self.commit(TransactionType::Sale, request).await
    }

    /// Places a hold on the card. Requires `options.order_id`.
    pub async fn authorize(
        &self,
        money: &Money,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<TransactionResult> {
        let request = card_request(money, card, options)?;
        self.commit(TransactionType::Hold, request).await
    }

    pub async fn capture(
        &self,
        money: &Money,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<TransactionResult> {
        let request = reference_request(money, authorization, options);
        self.commit(TransactionType::Capture, request).await
    }

    pub async fn refund(
        &self,
        money: &Money,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<TransactionResult> {
        let request = reference_request(money, authorization, options);
        self.commit(TransactionType::Refund, request).await
    }

    pub async fn void(
        &self,
        money: &Money,
        authorization: &str,
        options: &TransactionOptions,
    ) -> Result<TransactionResult> {
        let request = reference_request(money, authorization, options);
        self.commit(TransactionType::Void, request).await
    }

    /// Checks that the card is chargeable by authorizing [`VERIFY_AMOUNT`] and
    /// voiding the hold.
    ///
    /// The result is always the authorization's. The void is skipped when the
    /// authorization is declined, and its own outcome is ignored otherwise, so
    /// a successful verify does not guarantee the hold was released.
    pub async fn verify(
        &self,
        card: &CreditCard,
        options: &TransactionOptions,
    ) -> Result<TransactionResult> {
        let money = Money::from_minor(VERIFY_AMOUNT);
        let mut responses = MultiResponse::start(
            ResponsePolicy::UseFirstResponse,
            self.authorize(&money, card, options),
        )
        .await?;

        let authorization = responses.authorization().to_owned();
        responses
            .process_ignoring_result(self.void(&money, &authorization, options))
            .await;

        Ok(responses.into_primary())
    }

    /// Dispatches a command to the matching operation.
    pub async fn execute(&self, command: &Command) -> Result<TransactionResult> {
        match command {
            Command::Purchase {
                money,
                card,
                options,
            } => self.purchase(money, card, options).await,
            Command::Authorize {
                money,
                card,
                options,
            } => self.authorize(money, card, options).await,
            Command::Capture {
                money,
                authorization,
                options,
            } => self.capture(money, authorization, options).await,
            Command::Refund {
                money,
                authorization,
                options,
            } => self.refund(money, authorization, options).await,
            Command::Void {
                money,
                authorization,
                options,
            } => self.void(money, authorization, options).await,
            Command::Verify { card, options } => self.verify(card, options).await,
        }
    }

    async fn commit(
        &self,
        action: TransactionType,
        parameters: TransactionRequest,
    ) -> Result<TransactionResult> {
        let test = self.config.test_mode;
        let url = self.config.url();
        let body = TransactionRequest::envelope(&self.config.credentials, action, test)
            .merge(parameters)
            .encode();

        debug!(%action, url, test, "Submitting request");
        let raw = self.transport.submit(url, &body).await?;
        let result = TransactionResult::from_record(ResponseRecord::parse(&raw)?, test);
        info!(
            %action,
            success = result.success,
            authorization = %result.authorization,
            "Transaction processed"
        );

        Ok(result)
    }
}

fn card_request(
    money: &Money,
    card: &CreditCard,
    options: &TransactionOptions,
) -> Result<TransactionRequest> {
    let mut request = TransactionRequest::new();
    add_invoice(&mut request, options)?;
    add_amount(&mut request, money, options);
    add_payment(&mut request, card);
    add_address(&mut request, options);
    add_customer_data(&mut request, options);
    Ok(request)
}

fn reference_request(
    money: &Money,
    authorization: &str,
    options: &TransactionOptions,
) -> TransactionRequest {
    let mut request = TransactionRequest::new();
    add_amount(&mut request, money, options);
    add_original_reference(&mut request, authorization, options);
    request
}
