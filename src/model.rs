use serde::{Deserialize, Serialize};

/// Custom resource event as CloudFormation delivers it to the function.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceRequest {
    #[serde(default)]
    pub resource_properties: ResourceProperties,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
}

/// Template-supplied properties. Both fields are optional on the wire;
/// missing and empty are distinguished by the handler.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    pub name: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Body of the PUT to the pre-signed ResponseURL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseEnvelope {
    pub status: ResponseStatus,
    pub reason: String,
    pub stack_id: String,
    pub request_id: String,
    pub physical_resource_id: String,
    pub logical_resource_id: String,
    pub data: ResponseData,
}

#[derive(Debug, Default, Serialize)]
pub struct ResponseData {
    #[serde(rename = "Secret", skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
}

impl ResponseEnvelope {
    /// Builds an envelope echoing the request identifiers. The secret is
    /// attached only on SUCCESS; the physical resource id is freshly
    /// generated for every envelope.
    pub fn new(
        status: ResponseStatus,
        reason: &str,
        request: &ResourceRequest,
        secret: Option<String>,
    ) -> Self {
        let secret = match status {
            ResponseStatus::Success => secret,
            ResponseStatus::Failed => None,
        };

        Self {
            status,
            reason: reason.to_string(),
            stack_id: request.stack_id.clone(),
            request_id: request.request_id.clone(),
            physical_resource_id: uuid::Uuid::new_v4().to_string(),
            logical_resource_id: request.logical_resource_id.clone(),
            data: ResponseData { secret },
        }
    }
}
