use serde::{Deserialize, Serialize};

/// Public quote API used by both the server route and the client fallback,
/// filtered to study-adjacent tags.
pub const PUBLIC_QUOTE_URL: &str = "https://api.quotable.io/random?tags=education|inspirational";

/// A motivational quote as the API and client present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// Wire format of the public quote provider; `content` is reshaped to `text`.
#[derive(Debug, Deserialize)]
pub struct QuotableResponse {
    pub content: String,
    pub author: String,
}

impl From<QuotableResponse> for Quote {
    fn from(body: QuotableResponse) -> Self {
        Quote {
            text: body.content,
            author: body.author,
        }
    }
}

/// Fetches a random quote from the public provider. Non-success statuses and
/// malformed bodies are errors; callers decide whether failure is fatal.
pub async fn fetch_public_quote(http: &reqwest::Client) -> Result<Quote, reqwest::Error> {
    fetch_quote_from(http, PUBLIC_QUOTE_URL).await
}

/// Fetches a quotable-shaped quote from an arbitrary URL.
pub async fn fetch_quote_from(http: &reqwest::Client, url: &str) -> Result<Quote, reqwest::Error> {
    let body: QuotableResponse = http
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    Ok(body.into())
}
