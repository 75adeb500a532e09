//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod dialer;
mod virtual_num;

pub use dialer::{DialerClient, DialerClientBuilder};
pub use virtual_num::{VirtualNumClient, VirtualNumClientBuilder};

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde_json::{Map, Value};

use crate::domain::{AccountId, AppId, ErrorCode, ValidationError};
use crate::transport::Envelope;

/// Default timeout applied to both the connect and the read leg.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

pub(crate) trait HttpTransport: Send + Sync {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Map<String, Value>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub(crate) fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post_json<'a>(
        &'a self,
        url: &'a str,
        body: &'a Map<String, Value>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let payload = serde_json::to_string(body)?;
            let response = self
                .client
                .post(url)
                .header(reqwest::header::ACCEPT, "application/json")
                .header(
                    reqwest::header::CONTENT_TYPE,
                    "application/json;charset=utf-8",
                )
                .body(payload)
                .send()
                .await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

/// Account and application identifiers shared by every request of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    account_id: AccountId,
    app_id: AppId,
}

impl Credentials {
    pub fn new(account_id: AccountId, app_id: AppId) -> Self {
        Self { account_id, app_id }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    pub fn app_id(&self) -> &AppId {
        &self.app_id
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`DialerClient`] and [`VirtualNumClient`].
///
/// This error preserves:
/// - transport failures (DNS, TLS, connect/read timeouts),
/// - non-2xx HTTP statuses,
/// - vendor business errors (non-`"0"` `errorCode`, kept verbatim),
/// - parse failures (malformed body or missing envelope),
/// - validation failures from domain constructors.
pub enum PstnError {
    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// The vendor reported a business error; code and message are verbatim.
    #[error("API error: {code:?} {msg:?}")]
    Api { code: ErrorCode, msg: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// The configured host does not form a valid URL.
    #[error("invalid host: {input}")]
    InvalidHost { input: String },

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Shared request path: filter the body, POST, check the HTTP status, decode
/// the envelope, and fail on a non-success vendor code.
pub(crate) async fn execute(
    http: &dyn HttpTransport,
    url: &str,
    body: Map<String, Value>,
) -> Result<Envelope, PstnError> {
    let body = crate::transport::filter_absent(body);

    let response = http
        .post_json(url, &body)
        .await
        .map_err(PstnError::Transport)?;

    if !(200..=299).contains(&response.status) {
        let body = if response.body.trim().is_empty() {
            None
        } else {
            Some(response.body)
        };
        return Err(PstnError::HttpStatus {
            status: response.status,
            body,
        });
    }

    let envelope = crate::transport::decode_envelope(&response.body)
        .map_err(|err| PstnError::Parse(Box::new(err)))?;

    if !envelope.error_code.is_success() {
        return Err(PstnError::Api {
            code: envelope.error_code,
            msg: envelope.msg,
        });
    }

    Ok(envelope)
}
