use std::time::Duration;

use reqwest::Client;

use crate::models::{CompletionRequest, CompletionResponse};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

/// POST one completion payload to the configured endpoint and decode the
/// answer. Non-2xx statuses surface as errors before the body is touched.
pub async fn call_completion(
    client: &Client,
    api_key: &str,
    api_url: &str,
    request: &CompletionRequest
) -> Result<CompletionResponse, reqwest::Error> {

    let response = client
        .post(api_url)
        .timeout(UPSTREAM_TIMEOUT)
        .header("Authorization", format!("Bearer {}", api_key))
        .json(request)
        .send()
        .await?;

    response
        .error_for_status()?
        .json()
        .await

}
