//! High-level fetch operations against the LibInsult service.

use std::time::Duration;

use reqwest::Client;

use crate::core::http::{self, DEFAULT_TIMEOUT};
use crate::core::models::{InsultPayload, RawInsult};
use crate::core::request::{BASE_URL, InsultRequest, Language, RequestKind, ResponseFormat};
use crate::error::{BarbError, Result};

/// Client for the LibInsult REST API.
///
/// Holds a configured reqwest client and the service base URL. Every fetch is
/// an independent round trip; no state carries over between calls, and the
/// service randomizes its output, so identical calls return different
/// insults.
#[derive(Debug, Clone)]
pub struct InsultClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl InsultClient {
    /// Client against the production service with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Client against the production service with a custom timeout.
    ///
    /// The timeout bounds the whole round trip of each fetch.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::with_base_url(BASE_URL, timeout)
    }

    /// Client against an alternate base URL (mirrors, mock servers).
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http::build_client(timeout)?,
            base_url: base_url.into(),
            timeout,
        })
    }

    /// The base URL requests are composed against.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Compose the insult request for this client's base URL.
    fn compose(
        &self,
        format: ResponseFormat,
        language: Language,
        who: Option<&str>,
        plural: bool,
    ) -> String {
        let mut request = InsultRequest::new(RequestKind::Insult, format)
            .language(language)
            .plural(plural);
        if let Some(who) = who {
            request = request.who(who);
        }
        request.url_with_base(&self.base_url)
    }

    /// Fetch the parsed json payload, error fields uninterpreted.
    async fn fetch_payload(
        &self,
        language: Language,
        who: Option<&str>,
        plural: bool,
    ) -> Result<InsultPayload> {
        let url = self.compose(ResponseFormat::Json, language, who, plural);
        tracing::debug!(%url, "fetching insult payload");
        http::get_json(&self.client, &url, self.timeout).await
    }

    /// Fetch a raw insult response in the requested format.
    ///
    /// html and txt bodies come back undecoded; json bodies are parsed but
    /// otherwise uninterpreted, service-reported error fields included as-is.
    ///
    /// # Errors
    ///
    /// Network failure, timeout, non-2xx status, or (json only) a body that
    /// does not parse.
    pub async fn fetch_raw(
        &self,
        format: ResponseFormat,
        language: Language,
        who: Option<&str>,
        plural: bool,
    ) -> Result<RawInsult> {
        match format {
            ResponseFormat::Html | ResponseFormat::Txt => {
                let url = self.compose(format, language, who, plural);
                tracing::debug!(%url, "fetching insult body");
                let body = http::get_text(&self.client, &url, self.timeout).await?;
                Ok(RawInsult::Text(body))
            }
            ResponseFormat::Json => {
                let payload = self.fetch_payload(language, who, plural).await?;
                Ok(RawInsult::Json(payload))
            }
        }
    }

    /// Fetch a randomly generated insult as plain text.
    ///
    /// Uses the json format under the hood and extracts the `insult` field.
    ///
    /// # Errors
    ///
    /// Everything [`Self::fetch_raw`] can fail with, plus
    /// [`BarbError::Service`] when the service reports an error of its own.
    pub async fn fetch_insult(
        &self,
        language: Language,
        who: Option<&str>,
        plural: bool,
    ) -> Result<String> {
        let payload = self.fetch_payload(language, who, plural).await?;

        if payload.error {
            return Err(BarbError::Service(payload.error_message.unwrap_or_else(
                || "service reported an error without a message".to_string(),
            )));
        }

        payload.insult.ok_or_else(|| {
            BarbError::ParseResponse("missing 'insult' field in success response".to_string())
        })
    }
}
