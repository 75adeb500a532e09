use crate::domain::value::{CallEndStatus, ErrorCode};

#[derive(Debug, Clone, PartialEq)]
/// Response to a call-back request.
pub struct CallBackResponse {
    pub error_code: ErrorCode,
    pub msg: Option<String>,
    /// Opaque token identifying the placed call; input to cancel/status/CDR.
    pub call_id: Option<String>,
    /// The caller's correlation token, echoed back.
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Response to a call-cancel request.
pub struct CancelCallResponse {
    pub error_code: ErrorCode,
    pub msg: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Response to a status poll.
///
/// The vendor does not publish a stable field set for this payload, so the
/// non-envelope fields are preserved as a JSON object.
pub struct GetStatusResponse {
    pub error_code: ErrorCode,
    pub msg: Option<String>,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
/// Response to a dialer CDR fetch.
///
/// Like [`GetStatusResponse`], the record fields are preserved as a JSON
/// object.
pub struct GetCdrResponse {
    pub error_code: ErrorCode,
    pub msg: Option<String>,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq)]
/// Response to an acquire-binding request.
pub struct GetNumResponse {
    pub error_code: ErrorCode,
    pub msg: Option<String>,
    /// The allocated virtual number.
    pub virtual_num: String,
    /// Globally unique binding id for the number pair.
    pub bind_id: String,
    /// Reference count on the binding after this acquire.
    pub ref_num: Option<String>,
    /// The caller's correlation token, echoed back.
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Response to a release-binding request.
pub struct DelNumResponse {
    pub error_code: ErrorCode,
    pub msg: Option<String>,
    pub bind_id: Option<String>,
    /// Remaining reference count; the vendor unbinds at zero.
    pub ref_left_num: Option<String>,
    pub request_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// A virtual-number call detail record.
///
/// Every field is optional; `compress=1` responses in particular may not
/// carry them in decodable form.
pub struct Cdr400 {
    pub call_id: Option<String>,
    pub request_id: Option<String>,
    pub bind_id: Option<String>,
    pub src: Option<String>,
    pub dst: Option<String>,
    /// The virtual number the caller actually dialed.
    pub dst_virtual_num: Option<String>,
    pub start_dst_call_time: Option<String>,
    pub start_dst_ring_time: Option<String>,
    pub dst_accept_time: Option<String>,
    pub end_call_time: Option<String>,
    pub call_end_status: Option<CallEndStatus>,
    /// Caller-leg talk time.
    pub src_duration: Option<String>,
    /// Callee-leg talk time.
    pub dst_duration: Option<String>,
    /// Empty when recording was off or failed.
    pub record_url: Option<String>,
    pub call_center_accept_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Response to a virtual-number CDR fetch.
pub struct Get400CdrResponse {
    pub error_code: ErrorCode,
    pub msg: Option<String>,
    pub cdr: Cdr400,
}
