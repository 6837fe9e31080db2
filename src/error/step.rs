use thiserror::Error;

use super::ClientError;

/// Why a single smoke-test step failed. Step failures are reported and
/// counted by the runner, never propagated.
#[derive(Debug, Error)]
pub enum StepError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("response declared JSON but the body did not parse: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
