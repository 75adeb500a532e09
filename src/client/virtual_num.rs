use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::{Credentials, DEFAULT_TIMEOUT, HttpTransport, PstnError, ReqwestTransport, execute};
use crate::domain::{DelNum, DelNumResponse, Get400Cdr, Get400CdrResponse, GetNum, GetNumResponse};

const GET_VIRTUAL_NUM_PATH: &str = "/201511v3/getVirtualNum";
const DEL_VIRTUAL_NUM_PATH: &str = "/201511v3/delVirtualNum";
const GET_400_CDR_PATH: &str = "/201511v3/get400Cdr";

#[derive(Debug, Clone)]
/// Builder for [`VirtualNumClient`].
pub struct VirtualNumClientBuilder {
    credentials: Credentials,
    host: String,
    timeout: Duration,
    connect_timeout: Duration,
    user_agent: Option<String>,
}

impl VirtualNumClientBuilder {
    /// Create a builder with default timeouts.
    pub fn new(credentials: Credentials, host: impl Into<String>) -> Self {
        Self {
            credentials,
            host: host.into(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
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

    /// Build a [`VirtualNumClient`].
    pub fn build(self) -> Result<VirtualNumClient, PstnError> {
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

        Ok(VirtualNumClient {
            credentials: self.credentials,
            base,
            http: Arc::new(ReqwestTransport::new(client)),
        })
    }
}

#[derive(Clone)]
/// Client for the virtual-number (number protection) endpoint family.
///
/// Unlike the dialer family, the account and app identifiers travel inside
/// the JSON body; the query string stays empty.
pub struct VirtualNumClient {
    credentials: Credentials,
    base: Url,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for VirtualNumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualNumClient")
            .field("credentials", &self.credentials)
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl VirtualNumClient {
    /// Create a client with default timeouts.
    ///
    /// For more customization, use [`VirtualNumClient::builder`].
    pub fn new(credentials: Credentials, host: impl Into<String>) -> Result<Self, PstnError> {
        Self::builder(credentials, host).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(credentials: Credentials, host: impl Into<String>) -> VirtualNumClientBuilder {
        VirtualNumClientBuilder::new(credentials, host)
    }

    fn endpoint(&self, path: &str) -> Result<String, PstnError> {
        let url = self.base.join(path).map_err(|_| PstnError::InvalidHost {
            input: self.base.to_string(),
        })?;
        Ok(url.into())
    }

    /// Acquire a virtual-number binding for the destination.
    ///
    /// On success the vendor returns the allocated number, the globally
    /// unique binding id, and the binding's reference count.
    pub async fn get_num(&self, request: GetNum) -> Result<GetNumResponse, PstnError> {
        let url = self.endpoint(GET_VIRTUAL_NUM_PATH)?;
        let body = crate::transport::encode_get_num_body(
            self.credentials.account_id(),
            self.credentials.app_id(),
            &request,
        );
        let envelope = execute(self.http.as_ref(), &url, body).await?;
        crate::transport::decode_get_num_response(envelope)
            .map_err(|err| PstnError::Parse(Box::new(err)))
    }

    /// Release a binding: decrements its reference count; the vendor unbinds
    /// when the count reaches zero.
    pub async fn del_num(&self, request: DelNum) -> Result<DelNumResponse, PstnError> {
        let url = self.endpoint(DEL_VIRTUAL_NUM_PATH)?;
        let body = crate::transport::encode_del_num_body(
            self.credentials.account_id(),
            self.credentials.app_id(),
            &request,
        );
        let envelope = execute(self.http.as_ref(), &url, body).await?;
        crate::transport::decode_del_num_response(envelope)
            .map_err(|err| PstnError::Parse(Box::new(err)))
    }

    /// Fetch virtual-number call detail records.
    ///
    /// With [`CompressMode::Zlib`](crate::domain::CompressMode::Zlib) the
    /// vendor compresses the payload; decompression is the caller's job.
    pub async fn get_400_cdr(&self, request: Get400Cdr) -> Result<Get400CdrResponse, PstnError> {
        let url = self.endpoint(GET_400_CDR_PATH)?;
        let body = crate::transport::encode_get400cdr_body(
            self.credentials.account_id(),
            self.credentials.app_id(),
            &request,
        );
        let envelope = execute(self.http.as_ref(), &url, body).await?;
        crate::transport::decode_get400cdr_response(envelope)
            .map_err(|err| PstnError::Parse(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::client::testing::FakeTransport;
    use crate::domain::{
        AccountId, AppId, BindId, CallId, GetNumOptions, KnownErrorCode, RawMobile,
    };

    fn credentials() -> Credentials {
        Credentials::new(
            AccountId::new("1400012345").unwrap(),
            AppId::new("app01").unwrap(),
        )
    }

    fn make_client(transport: FakeTransport) -> VirtualNumClient {
        VirtualNumClient {
            credentials: credentials(),
            base: Url::parse("http://pstn.example.invalid").unwrap(),
            http: Arc::new(transport),
        }
    }

    fn sample_get_num() -> GetNum {
        GetNum::new(
            RawMobile::new("008613912345678").unwrap(),
            GetNumOptions::default(),
        )
    }

    #[tokio::test]
    async fn get_num_puts_identifiers_in_body_only() {
        let transport = FakeTransport::new(
            200,
            r#"{"errorCode":"0","virtualNum":"4001234567","bindId":"abc"}"#,
        );
        let client = make_client(transport.clone());

        let response = client.get_num(sample_get_num()).await.unwrap();
        assert!(response.error_code.is_success());
        assert_eq!(response.virtual_num, "4001234567");
        assert_eq!(response.bind_id, "abc");
        assert!(response.ref_num.is_none());

        let (url, body) = transport.last_request();
        // No query string for this family.
        assert_eq!(
            url.as_deref(),
            Some("http://pstn.example.invalid/201511v3/getVirtualNum")
        );
        let body = body.unwrap();
        assert_eq!(body.get("appid"), Some(&json!("app01")));
        assert_eq!(body.get("id"), Some(&json!("1400012345")));
    }

    #[tokio::test]
    async fn get_num_omits_src_when_absent() {
        let transport = FakeTransport::new(
            200,
            r#"{"errorCode":"0","virtualNum":"4001234567","bindId":"abc"}"#,
        );
        let client = make_client(transport.clone());

        client.get_num(sample_get_num()).await.unwrap();

        let (_, body) = transport.last_request();
        assert!(!body.unwrap().contains_key("src"));
    }

    #[tokio::test]
    async fn get_num_surfaces_pool_exhausted_verbatim() {
        let transport =
            FakeTransport::new(200, r#"{"errorCode":"-107","msg":"number pool exhausted"}"#);
        let client = make_client(transport);

        let err = client.get_num(sample_get_num()).await.unwrap_err();
        match err {
            PstnError::Api { code, msg } => {
                assert_eq!(code.as_str(), "-107");
                assert_eq!(code.known_kind(), Some(KnownErrorCode::NumberPoolExhausted));
                assert_eq!(msg.as_deref(), Some("number pool exhausted"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_num_maps_invalid_json_to_parse_error() {
        let transport = FakeTransport::new(200, "<html>maintenance</html>");
        let client = make_client(transport);

        let err = client.get_num(sample_get_num()).await.unwrap_err();
        assert!(matches!(err, PstnError::Parse(_)));
    }

    #[tokio::test]
    async fn del_num_sends_bind_id_and_parses_ref_count() {
        let transport = FakeTransport::new(
            200,
            r#"{"errorCode":"0","bindId":"b-7","refLeftNum":"0","requestId":"req-1"}"#,
        );
        let client = make_client(transport.clone());

        let response = client
            .del_num(DelNum::new(BindId::new("b-7").unwrap()))
            .await
            .unwrap();
        assert_eq!(response.ref_left_num.as_deref(), Some("0"));
        assert_eq!(response.bind_id.as_deref(), Some("b-7"));

        let (url, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("http://pstn.example.invalid/201511v3/delVirtualNum")
        );
        assert_eq!(body.unwrap().get("bindId"), Some(&json!("b-7")));
    }

    #[tokio::test]
    async fn del_num_surfaces_unknown_bind_id() {
        let transport =
            FakeTransport::new(200, r#"{"errorCode":"-204","msg":"bindId not found"}"#);
        let client = make_client(transport);

        let err = client
            .del_num(DelNum::new(BindId::new("gone").unwrap()))
            .await
            .unwrap_err();
        match err {
            PstnError::Api { code, .. } => {
                assert_eq!(code.known_kind(), Some(KnownErrorCode::BindIdNotFound));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_400_cdr_selects_by_call_id() {
        let transport = FakeTransport::new(
            200,
            r#"{"errorCode":"0","callId":"c-1","dstVirtualNum":"4001234567","callEndStatus":"1"}"#,
        );
        let client = make_client(transport.clone());

        let request = Get400Cdr {
            call_id: Some(CallId::new("c-1").unwrap()),
            ..Default::default()
        };
        let response = client.get_400_cdr(request).await.unwrap();
        assert_eq!(response.cdr.call_id.as_deref(), Some("c-1"));
        assert_eq!(response.cdr.dst_virtual_num.as_deref(), Some("4001234567"));

        let (url, body) = transport.last_request();
        assert_eq!(
            url.as_deref(),
            Some("http://pstn.example.invalid/201511v3/get400Cdr")
        );
        let body = body.unwrap();
        assert_eq!(body.get("callId"), Some(&json!("c-1")));
        assert_eq!(body.get("compress"), Some(&json!(0)));
    }

    #[tokio::test]
    async fn get_400_cdr_maps_http_failure() {
        let transport = FakeTransport::new(500, "oops");
        let client = make_client(transport);

        let err = client.get_400_cdr(Get400Cdr::default()).await.unwrap_err();
        assert!(matches!(
            err,
            PstnError::HttpStatus {
                status: 500,
                body: Some(_)
            }
        ));
    }

    #[test]
    fn builder_rejects_invalid_host() {
        let err = VirtualNumClient::new(credentials(), "not a host").unwrap_err();
        assert!(matches!(err, PstnError::InvalidHost { .. }));
    }
}
