use crate::errors::AppError;
use crate::model::ResponseEnvelope;
use reqwest::header::CONTENT_TYPE;

/// Delivers the envelope to the pre-signed ResponseURL. CloudFormation's
/// S3 endpoint rejects a real content type, so the header is sent blank.
/// The PUT's response status is not inspected and nothing is retried.
pub async fn send_response(
    client: &reqwest::Client,
    url: &str,
    envelope: &ResponseEnvelope,
) -> Result<(), AppError> {
    let body = serde_json::to_string(envelope)?;

    client
        .put(url)
        .header(CONTENT_TYPE, "")
        .body(body)
        .send()
        .await?;

    Ok(())
}
