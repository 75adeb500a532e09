use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::{Credentials, DEFAULT_TIMEOUT, HttpTransport, PstnError, ReqwestTransport, execute};
use crate::domain::{
    AccountId, CallBack, CallBackResponse, CallId, CancelCall, CancelCallResponse, GetCdrResponse,
    GetStatusResponse, NotifyUrls,
};

const CALL_BACK_PATH: &str = "/201511v3/callBack";
const CALL_CANCEL_PATH: &str = "/201511v3/callCancel";
const GET_STATUS_PATH: &str = "/201511v3/getStatus";
const GET_CDR_PATH: &str = "/201511v3/getCdr";

#[derive(Debug, Clone)]
/// Builder for [`DialerClient`].
///
/// Use this to attach default notification URLs or to customize timeouts and
/// the user-agent.
pub struct DialerClientBuilder {
    credentials: Credentials,
    host: String,
    notify: NotifyUrls,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: Option<String>,
}

impl DialerClientBuilder {
    /// Create a builder with default timeouts and no notification URLs.
    pub fn new(credentials: Credentials, host: impl Into<String>) -> Self {
        Self {
            credentials,
            host: host.into(),
            notify: NotifyUrls::default(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Webhook destinations injected into every call-back body.
    pub fn notify_urls(mut self, notify: NotifyUrls) -> Self {
        self.notify = notify;
        self
    }

    /// Total per-request timeout (covers the read leg).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Timeout for connection establishment.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Build a [`DialerClient`].
    pub fn build(self) -> Result<DialerClient, PstnError> {
        let base = Url::parse(&format!("http://{}", self.host)).map_err(|_| {
            PstnError::InvalidHost {
                input: self.host.clone(),
            }
        })?;

        let mut builder = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout);
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let client = builder
            .build()
            .map_err(|err| PstnError::Transport(Box::new(err)))?;

        Ok(DialerClient {
            credentials: self.credentials,
            base,
            notify: self.notify,
            http: Arc::new(ReqwestTransport::new(client)),
        })
    }
}

#[derive(Clone)]
/// Client for the call-back dialer endpoint family.
///
/// The account id travels as the `id` query parameter on every request; the
/// app id travels in the JSON body. Configured notification URLs are injected
/// into every [`call_back`](DialerClient::call_back) body.
pub struct DialerClient {
    credentials: Credentials,
    base: Url,
    notify: NotifyUrls,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for DialerClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialerClient")
            .field("credentials", &self.credentials)
            .field("base", &self.base)
            .field("notify", &self.notify)
            .finish_non_exhaustive()
    }
}

impl DialerClient {
    /// Create a client with default timeouts and no notification URLs.
    ///
    /// For more customization, use [`DialerClient::builder`].
    pub fn new(credentials: Credentials, host: impl Into<String>) -> Result<Self, PstnError> {
        Self::builder(credentials, host).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials, host: impl Into<String>) -> DialerClientBuilder {
        DialerClientBuilder::new(credentials, host)
    }

    fn endpoint(&self, path: &str) -> Result<String, PstnError> {
        let mut url = self.base.join(path).map_err(|_| PstnError::InvalidHost {
            input: self.base.to_string(),
        })?;
        url.query_pairs_mut()
            .append_pair(AccountId::FIELD, self.credentials.account_id().as_str());
        Ok(url.into())
    }

    /// Initiate a two-leg call-back call.
    ///
    /// Errors:
    /// - [`PstnError::Api`] when the vendor returns a non-`"0"` `errorCode`,
    /// - [`PstnError::HttpStatus`] for non-2xx HTTP responses,
    /// - [`PstnError::Parse`] for malformed bodies.
    pub async fn call_back(&self, request: CallBack) -> Result<CallBackResponse, PstnError> {
        let url = self.endpoint(CALL_BACK_PATH)?;
        let body =
            crate::transport::encode_call_back_body(self.credentials.app_id(), &self.notify, &request);
        let envelope = execute(self.http.as_ref(), &url, body).await?;
        crate::transport::decode_call_back_response(envelope)
            .map_err(|err| PstnError::Parse(Box::new(err)))
    }

    /// Cancel an in-flight call.
    ///
    /// The cancel flag is passed through unvalidated; the vendor defines
    /// stages 0 through 4.
    pub async fn cancel_call(&self, request: CancelCall) -> Result<CancelCallResponse, PstnError> {
        let url = self.endpoint(CALL_CANCEL_PATH)?;
        let body = crate::transport::encode_cancel_call_body(self.credentials.app_id(), &request);
        let envelope = execute(self.http.as_ref(), &url, body).await?;
        crate::transport::decode_cancel_call_response(envelope)
            .map_err(|err| PstnError::Parse(Box::new(err)))
    }

    /// Poll the current state of a call.
    pub async fn get_status(&self, call_id: &CallId) -> Result<GetStatusResponse, PstnError> {
        let url = self.endpoint(GET_STATUS_PATH)?;
        let body = crate::transport::encode_call_id_body(self.credentials.app_id(), call_id);
        let envelope = execute(self.http.as_ref(), &url, body).await?;
        crate::transport::decode_get_status_response(envelope)
            .map_err(|err| PstnError::Parse(Box::new(err)))
    }

    /// Fetch the call detail record of a finished call.
    pub async fn get_cdr(&self, call_id: &CallId) -> Result<GetCdrResponse, PstnError> {
        let url = self.endpoint(GET_CDR_PATH)?;
        let body = crate::transport::encode_call_id_body(self.credentials.app_id(), call_id);
        let envelope = execute(self.http.as_ref(), &url, body).await?;
        crate::transport::decode_get_cdr_response(envelope)
            .map_err(|err| PstnError::Parse(Box::new(err)))
    }
}
