use crate::callback::send_response;
use crate::errors::AppError;
use crate::model::{ResourceRequest, ResponseEnvelope, ResponseStatus};
use crate::ssm::{ParameterStore, SecretLookup};
use lambda_runtime::tracing::{info, warn};

/// Resolves the requested parameter and reports the outcome to the
/// stack's ResponseURL. Validation and not-found failures travel through
/// the envelope protocol; SDK and transport faults propagate and fail
/// the invocation with nothing further sent.
pub async fn provide_secret(
    store: &impl ParameterStore,
    http: &reqwest::Client,
    request: &ResourceRequest,
) -> Result<(), AppError> {
    let props = &request.resource_properties;

    let (Some(name), Some(region)) = (props.name.as_deref(), props.region.as_deref()) else {
        warn!(
            "request {}: Name or Region property missing",
            request.request_id
        );
        let envelope = ResponseEnvelope::new(
            ResponseStatus::Failed,
            "Name or Region property missing",
            request,
            None,
        );
        return send_response(http, &request.response_url, &envelope).await;
    };

    if name.is_empty() || region.is_empty() {
        warn!("request {}: Name or Region property empty", request.request_id);
        let envelope = ResponseEnvelope::new(
            ResponseStatus::Failed,
            "Name or Region property empty",
            request,
            None,
        );
        send_response(http, &request.response_url, &envelope).await?;
        // No early return: the deployed handler falls through here and
        // still runs the lookup with the empty value.
    }

    let envelope = match store.fetch(name, region).await? {
        SecretLookup::NotFound => {
            info!("parameter {} not found in {}", name, region);
            ResponseEnvelope::new(ResponseStatus::Failed, "Parameter doesn't exist", request, None)
        }
        SecretLookup::Found(value) => {
            info!("parameter {} retrieved from {}", name, region);
            ResponseEnvelope::new(
                ResponseStatus::Success,
                "Parameter retrieves successfully",
                request,
                Some(value),
            )
        }
    };

    send_response(http, &request.response_url, &envelope).await
}
