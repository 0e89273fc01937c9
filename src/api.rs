use gloo_net::http::Request;
use thiserror::Error;

use crate::person::Person;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error calling people endpoint: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("people endpoint responded with HTTP {0}")]
    Status(u16),
    #[error("failed to parse people JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub const USER_MESSAGE: &'static str = "Something went wrong";

    /// What the page shows; the detail only goes to the console.
    pub fn user_message(&self) -> &'static str {
        Self::USER_MESSAGE
    }
}

pub async fn fetch_people(url: &str) -> Result<Vec<Person>, FetchError> {
    let resp = Request::get(url).send().await?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let body = resp.text().await?;
    parse_people(&body)
}

pub fn parse_people(body: &str) -> Result<Vec<Person>, FetchError> {
    Ok(serde_json::from_str(body)?)
}
