use aws_sdk_ssm::error::SdkError;
use aws_sdk_ssm::operation::get_parameters::GetParametersError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("SSM error: {0}")]
    GetParameters(#[from] SdkError<GetParametersError>),

    #[error("Callback delivery error: {0}")]
    Callback(#[from] reqwest::Error),

    #[error("Response serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
