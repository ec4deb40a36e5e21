use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};

use crate::errors::{BlogrollError, BlogrollResult};

const USER_AGENT: &str = concat!("blogroll/", env!("CARGO_PKG_VERSION"));

/// Client with the given transport timeout; falls back to reqwest defaults.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Send the request and reject any non-success status.
pub async fn send_checked(request: RequestBuilder) -> BlogrollResult<Response> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(BlogrollError::HttpStatus {
            url: response.url().to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response)
}
