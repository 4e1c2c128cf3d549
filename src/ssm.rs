use crate::errors::AppError;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ssm::operation::get_parameters::GetParametersOutput;

/// Outcome of a parameter lookup. Transport faults are not represented
/// here; they surface as `AppError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretLookup {
    Found(String),
    NotFound,
}

#[async_trait]
pub trait ParameterStore {
    async fn fetch(&self, name: &str, region: &str) -> Result<SecretLookup, AppError>;
}

/// Parameter store backed by AWS Systems Manager. The region comes from
/// the event, not the function's own region, so the client is built per
/// request.
pub struct SsmParameterStore;

#[async_trait]
impl ParameterStore for SsmParameterStore {
    async fn fetch(&self, name: &str, region: &str) -> Result<SecretLookup, AppError> {
        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;
        let client = aws_sdk_ssm::Client::new(&config);

        let resp = client
            .get_parameters()
            .names(name)
            .with_decryption(true)
            .send()
            .await?;

        Ok(classify(resp))
    }
}

/// Maps a GetParameters response onto the lookup outcome: any invalid
/// parameter entry means the requested name does not exist.
fn classify(resp: GetParametersOutput) -> SecretLookup {
    if !resp.invalid_parameters().is_empty() {
        return SecretLookup::NotFound;
    }

    match resp.parameters().first().and_then(|p| p.value()) {
        Some(value) => SecretLookup::Found(value.to_string()),
        None => SecretLookup::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::types::Parameter;

    #[test]
    fn invalid_parameter_entries_mean_not_found() {
        let resp = GetParametersOutput::builder()
            .invalid_parameters("/app/missing")
            .build();
        assert_eq!(classify(resp), SecretLookup::NotFound);
    }

    #[test]
    fn first_parameter_value_is_the_secret() {
        let resp = GetParametersOutput::builder()
            .parameters(Parameter::builder().name("/app/db/pass").value("abc123").build())
            .build();
        assert_eq!(classify(resp), SecretLookup::Found("abc123".to_string()));
    }

    #[test]
    fn parameter_without_value_is_not_found() {
        let resp = GetParametersOutput::builder()
            .parameters(Parameter::builder().name("/app/db/pass").build())
            .build();
        assert_eq!(classify(resp), SecretLookup::NotFound);
    }

    #[test]
    fn empty_response_is_not_found() {
        assert_eq!(classify(GetParametersOutput::builder().build()), SecretLookup::NotFound);
    }
}
