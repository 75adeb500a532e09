//! Typed Rust client for the Tencent Cloud PSTN (201511v3) HTTP API.
//!
//! Two endpoint families share one wire micro-protocol (flat JSON body,
//! absent fields omitted, `errorCode == "0"` means success):
//!
//! - [`DialerClient`]: call-back dialing between two PSTN legs, plus
//!   cancellation, status polling, and call detail records.
//! - [`VirtualNumClient`]: virtual-number (400) bindings that hide the real
//!   numbers of both parties, plus their call detail records.
//!
//! The crate is layered: a domain layer of strong types, a transport layer
//! for wire-format quirks, and a small client layer orchestrating requests.
//!
//! ```rust,no_run
//! use qcloud_pstn::{
//!     CallBack, CallBackOptions, Credentials, DialerClient, NotifyUrl, NotifyUrls, RawMobile,
//!     RequestId,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), qcloud_pstn::PstnError> {
//!     let credentials = Credentials::new(
//!         qcloud_pstn::AccountId::new("1400012345")?,
//!         qcloud_pstn::AppId::new("myapp")?,
//!     );
//!     let notify = NotifyUrls {
//!         status_url: Some(NotifyUrl::new("https://example.com/status")?),
//!         hangup_url: Some(NotifyUrl::new("https://example.com/hangup")?),
//!         record_url: None,
//!     };
//!     let client = DialerClient::builder(credentials, "pstn.example.com")
//!         .notify_urls(notify)
//!         .build()?;
//!
//!     let request = CallBack::new(
//!         RequestId::new("order-42")?,
//!         RawMobile::new("13631686024")?,
//!         RawMobile::new("13912345678")?,
//!         CallBackOptions::default(),
//!     );
//!     let response = client.call_back(request).await?;
//!     println!("callId: {:?}", response.call_id);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    Credentials, DialerClient, DialerClientBuilder, PstnError, VirtualNumClient,
    VirtualNumClientBuilder,
};
pub use domain::{
    AccountId, AccreditList, AppId, BindId, BizId, CallBack, CallBackOptions, CallBackResponse,
    CallEndStatus, CallId, CancelCall, CancelCallResponse, CancelFlag, Cdr400, CityId,
    CompressMode, DelNum, DelNumResponse, DisplayNumber, ErrorCode, Get400Cdr, Get400CdrResponse,
    GetCdrResponse, GetNum, GetNumOptions, GetNumResponse, GetStatusResponse, KnownCallEndStatus,
    KnownErrorCode, Mobile, NotifyUrl, NotifyUrls, RawMobile, RecordMode, RequestId, StatusFlags,
    UnixTimestamp, ValidationError,
};
