use crate::domain::response::TransactionResult;
use crate::error::Result;
use std::future::Future;
use tracing::warn;

/// Which step's result a [`MultiResponse`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponsePolicy {
    /// Report the first successful step, or the step that failed.
    UseFirstResponse,
    /// Report the last non-ignored step.
    UseLastResponse,
}

/// Runs a sequence of operations, stopping at the first failed step.
///
/// Steps are passed as futures and are only awaited while the sequence is
/// still successful, so a skipped step never reaches the transport.
#[derive(Debug)]
pub struct MultiResponse {
    policy: ResponsePolicy,
    responses: Vec<TransactionResult>,
    primary: usize,
}

impl MultiResponse {
    /// Runs the first step. Its result is the primary one until a later step replaces it.
    pub async fn start<F>(policy: ResponsePolicy, step: F) -> Result<Self>
    where
        F: Future<Output = Result<TransactionResult>>,
    {
        let first = step.await?;
        Ok(Self {
            policy,
            responses: vec![first],
            primary: 0,
        })
    }

    pub fn is_success(&self) -> bool {
        self.primary().success
    }

    pub fn primary(&self) -> &TransactionResult {
        &self.responses[self.primary]
    }

    /// Authorization token of the primary result.
    pub fn authorization(&self) -> &str {
        &self.primary().authorization
    }

    pub fn responses(&self) -> &[TransactionResult] {
        &self.responses
    }

    /// Runs `step` if every step so far succeeded.
    pub async fn process<F>(&mut self, step: F) -> Result<()>
    where
        F: Future<Output = Result<TransactionResult>>,
    {
        if !self.is_success() {
            return Ok(());
        }
        let response = step.await?;
        self.push(response, false);
        Ok(())
    }

    /// Runs `step` if every step so far succeeded, without letting its outcome,
    /// or its failure to complete, affect the sequence.
    pub async fn process_ignoring_result<F>(&mut self, step: F)
    where
        F: Future<Output = Result<TransactionResult>>,
    {
        if !self.is_success() {
            return;
        }
        match step.await {
            Ok(response) => {
                if !response.success {
                    warn!(reason = %response.message, "Ignored step was not successful");
                }
                self.push(response, true);
            }
            Err(err) => warn!(error = %err, "Ignored step failed"),
        }
    }

    fn push(&mut self, response: TransactionResult, ignore_result: bool) {
        self.responses.push(response);
        if ignore_result {
            return;
        }
        let latest = self.responses.len() - 1;
        match self.policy {
            // The first step already succeeded, or we would not be here.
            ResponsePolicy::UseFirstResponse => {
                if !self.responses[latest].success {
                    self.primary = latest;
                }
            }
            ResponsePolicy::UseLastResponse => self.primary = latest,
        }
    }

    pub fn into_primary(mut self) -> TransactionResult {
        self.responses.swap_remove(self.primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::response::ResponseRecord;
    use crate::error::GatewayError;

    fn result(raw: &str) -> TransactionResult {
        TransactionResult::from_record(ResponseRecord::parse(raw).unwrap(), true)
    }

    async fn ok(raw: &str) -> Result<TransactionResult> {
        Ok(result(raw))
    }

    async fn unreachable_step() -> Result<TransactionResult> {
        panic!("step should not run")
    }

    #[tokio::test]
    async fn test_first_response_is_reported() {
        let mut responses = MultiResponse::start(
            ResponsePolicy::UseFirstResponse,
            ok("A|1|M|X|Approved"),
        )
        .await
        .unwrap();
        responses.process(ok("A|2|M|X|Also approved")).await.unwrap();

        assert!(responses.is_success());
        assert_eq!(responses.responses().len(), 2);
        assert_eq!(responses.into_primary().authorization, "1");
    }

    #[tokio::test]
    async fn test_failed_first_step_skips_the_rest() {
        let mut responses =
            MultiResponse::start(ResponsePolicy::UseFirstResponse, ok("D|1||X|Declined"))
                .await
                .unwrap();
        responses.process(unreachable_step()).await.unwrap();
        responses.process_ignoring_result(unreachable_step()).await;

        assert!(!responses.is_success());
        assert_eq!(responses.responses().len(), 1);
        assert_eq!(responses.into_primary().message, "Declined");
    }

    #[tokio::test]
    async fn test_failed_later_step_becomes_primary() {
        let mut responses =
            MultiResponse::start(ResponsePolicy::UseFirstResponse, ok("A|1|M|X|Approved"))
                .await
                .unwrap();
        responses.process(ok("D|2||X|Declined")).await.unwrap();

        assert!(!responses.is_success());
        assert_eq!(responses.into_primary().authorization, "2");
    }

    #[tokio::test]
    async fn test_ignored_step_never_changes_outcome() {
        let mut responses =
            MultiResponse::start(ResponsePolicy::UseFirstResponse, ok("A|1|M|X|Approved"))
                .await
                .unwrap();
        responses.process_ignoring_result(ok("D|2||X|Void failed")).await;
        responses
            .process_ignoring_result(async { Err(GatewayError::MalformedResponse { fields: 1 }) })
            .await;

        assert!(responses.is_success());
        assert_eq!(responses.responses().len(), 2);
        assert_eq!(responses.into_primary().message, "Approved");
    }

    #[tokio::test]
    async fn test_last_response_policy() {
        let mut responses =
            MultiResponse::start(ResponsePolicy::UseLastResponse, ok("A|1|M|X|First"))
                .await
                .unwrap();
        responses.process(ok("A|2|M|X|Second")).await.unwrap();
        responses.process_ignoring_result(ok("A|3|M|X|Third")).await;

        assert_eq!(responses.into_primary().message, "Second");
    }

    #[tokio::test]
    async fn test_step_error_propagates() {
        let mut responses =
            MultiResponse::start(ResponsePolicy::UseFirstResponse, ok("A|1|M|X|Approved"))
                .await
                .unwrap();
        let err = responses
            .process(async { Err(GatewayError::MalformedResponse { fields: 2 }) })
            .await
            .unwrap_err();

        assert!(matches!(err, GatewayError::MalformedResponse { fields: 2 }));
    }
}
