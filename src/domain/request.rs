use crate::domain::value::{
    AccreditList, BindId, BizId, CallId, CancelFlag, CityId, CompressMode, DisplayNumber,
    NotifyUrl, RawMobile, RecordMode, RequestId, StatusFlags, UnixTimestamp,
};

/// Vendor default for the dialer's `maxAllowTime` (seconds).
pub const CALL_BACK_DEFAULT_MAX_ALLOW_TIME: u32 = 60;
/// Vendor default for the virtual-number `maxAllowTime` (minutes).
pub const GET_NUM_DEFAULT_MAX_ALLOW_TIME: u32 = 30;
/// Vendor default for the virtual-number `maxAssignTime` (seconds, 24h).
pub const GET_NUM_DEFAULT_MAX_ASSIGN_TIME: u32 = 24 * 3600;

#[derive(Debug, Clone)]
/// Optional knobs for [`CallBack`].
pub struct CallBackOptions {
    /// Display-number override for the caller leg (`srcDisplayNum`).
    pub src_display_num: Option<DisplayNumber>,
    /// Display-number override for the callee leg (`dstDisplayNum`).
    pub dst_display_num: Option<DisplayNumber>,
    /// Call-recording toggle (`record`).
    pub record: RecordMode,
    /// Maximum call duration (`maxAllowTime`).
    pub max_allow_time: u32,
    /// Which call-state transitions are pushed to the status URL (`statusFlag`).
    pub status_flag: StatusFlags,
    /// Business tag (`bizId`).
    pub biz_id: Option<BizId>,
    /// Line-reuse hint: the platform prefers not to reuse this call's line
    /// (`lastCallId`).
    pub last_call_id: Option<CallId>,
}

impl Default for CallBackOptions {
    fn default() -> Self {
        Self {
            src_display_num: None,
            dst_display_num: None,
            record: RecordMode::Off,
            max_allow_time: CALL_BACK_DEFAULT_MAX_ALLOW_TIME,
            status_flag: StatusFlags::ALL,
            biz_id: None,
            last_call_id: None,
        }
    }
}

#[derive(Debug, Clone)]
/// Initiate a two-leg call-back call (`/201511v3/callBack`).
pub struct CallBack {
    request_id: RequestId,
    src: RawMobile,
    dst: RawMobile,
    options: CallBackOptions,
}

impl CallBack {
    /// Build a call-back request.
    pub fn new(
        request_id: RequestId,
        src: RawMobile,
        dst: RawMobile,
        options: CallBackOptions,
    ) -> Self {
        Self {
            request_id,
            src,
            dst,
            options,
        }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn src(&self) -> &RawMobile {
        &self.src
    }

    pub fn dst(&self) -> &RawMobile {
        &self.dst
    }

    pub fn options(&self) -> &CallBackOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Cancel an in-flight call-back call (`/201511v3/callCancel`).
///
/// `cancel_flag` selects at which call-progress stage the cancel still takes
/// effect; out-of-range values are passed through unvalidated.
pub struct CancelCall {
    call_id: CallId,
    cancel_flag: CancelFlag,
}

impl CancelCall {
    /// Build a cancel request.
    pub fn new(call_id: CallId, cancel_flag: CancelFlag) -> Self {
        Self {
            call_id,
            cancel_flag,
        }
    }

    pub fn call_id(&self) -> &CallId {
        &self.call_id
    }

    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel_flag
    }
}

#[derive(Debug, Clone)]
/// Optional knobs for [`GetNum`].
pub struct GetNumOptions {
    /// Calling party (`src`). Omitted for shared bindings.
    pub src: Option<RawMobile>,
    /// Correlation token echoed back in responses and callbacks (`requestId`).
    pub request_id: Option<RequestId>,
    /// Callers allowed to reach an exclusively-bound destination
    /// (`accreditList`).
    pub accredit_list: Option<AccreditList>,
    /// Ask for a specific virtual number instead of pool allocation
    /// (`assignVirtualNum`). Fails with `-106` if it is already bound.
    pub assign_virtual_num: Option<RawMobile>,
    /// Display-number override for the callee (`calleeDisplayNum`).
    pub callee_display_num: Option<DisplayNumber>,
    /// Call-recording toggle (`record`).
    pub record: RecordMode,
    /// Number-locality hint (`cityId`).
    pub city_id: Option<CityId>,
    /// Business tag (`bizId`).
    pub biz_id: Option<BizId>,
    /// Which call-state transitions are pushed (`statusFlag`).
    pub status_flag: StatusFlags,
    /// Maximum call duration in minutes (`maxAllowTime`).
    pub max_allow_time: u32,
    /// Maximum binding lifetime in seconds (`maxAssignTime`).
    pub max_assign_time: u32,
    /// Per-request status notification URL (`statusUrl`).
    pub status_url: Option<NotifyUrl>,
    /// Per-request CDR notification URL (`hangupUrl`).
    pub hangup_url: Option<NotifyUrl>,
    /// Per-request recording notification URL (`recordUrl`).
    pub record_url: Option<NotifyUrl>,
}

impl Default for GetNumOptions {
    fn default() -> Self {
        Self {
            src: None,
            request_id: None,
            accredit_list: None,
            assign_virtual_num: None,
            callee_display_num: None,
            record: RecordMode::Off,
            city_id: None,
            biz_id: None,
            status_flag: StatusFlags::ALL,
            max_allow_time: GET_NUM_DEFAULT_MAX_ALLOW_TIME,
            max_assign_time: GET_NUM_DEFAULT_MAX_ASSIGN_TIME,
            status_url: None,
            hangup_url: None,
            record_url: None,
        }
    }
}

#[derive(Debug, Clone)]
/// Acquire a virtual-number binding (`/201511v3/getVirtualNum`).
pub struct GetNum {
    dst: RawMobile,
    options: GetNumOptions,
}

impl GetNum {
    /// Build an acquire-binding request for `dst`.
    pub fn new(dst: RawMobile, options: GetNumOptions) -> Self {
        Self { dst, options }
    }

    pub fn dst(&self) -> &RawMobile {
        &self.dst
    }

    pub fn options(&self) -> &GetNumOptions {
        &self.options
    }
}

#[derive(Debug, Clone)]
/// Release a virtual-number binding (`/201511v3/delVirtualNum`).
///
/// Decrements the binding's reference count; the vendor unbinds at zero.
pub struct DelNum {
    bind_id: BindId,
    request_id: Option<RequestId>,
    biz_id: Option<BizId>,
}

impl DelNum {
    /// Build a release request for `bind_id`.
    pub fn new(bind_id: BindId) -> Self {
        Self {
            bind_id,
            request_id: None,
            biz_id: None,
        }
    }

    /// Attach a correlation token.
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Attach the business tag; required by the vendor when the binding was
    /// created with one (`-205` otherwise).
    pub fn with_biz_id(mut self, biz_id: BizId) -> Self {
        self.biz_id = Some(biz_id);
        self
    }

    pub fn bind_id(&self) -> &BindId {
        &self.bind_id
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn biz_id(&self) -> Option<&BizId> {
        self.biz_id.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
/// Fetch virtual-number CDRs (`/201511v3/get400Cdr`).
///
/// All selectors are optional; an empty request asks for everything in the
/// vendor's default window.
pub struct Get400Cdr {
    /// Select a single call (`callId`).
    pub call_id: Option<CallId>,
    /// Select calls originated by this number; `"0"` means all callers
    /// (`src`).
    pub src: Option<RawMobile>,
    /// Start of the time range (`startTimeStamp`).
    pub start_time_stamp: Option<UnixTimestamp>,
    /// End of the time range (`endTimeStamp`).
    pub end_time_stamp: Option<UnixTimestamp>,
    /// Ask the vendor for a zlib-compressed payload (`compress`); the caller
    /// decompresses.
    pub compress: CompressMode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value::{CancelFlag, StatusFlags};

    #[test]
    fn call_back_options_use_vendor_defaults() {
        let options = CallBackOptions::default();
        assert_eq!(options.record, RecordMode::Off);
        assert_eq!(options.max_allow_time, CALL_BACK_DEFAULT_MAX_ALLOW_TIME);
        assert_eq!(options.status_flag, StatusFlags::ALL);
        assert!(options.src_display_num.is_none());
        assert!(options.biz_id.is_none());
    }

    #[test]
    fn get_num_options_use_vendor_defaults() {
        let options = GetNumOptions::default();
        assert_eq!(options.status_flag, StatusFlags::ALL);
        assert_eq!(options.max_allow_time, GET_NUM_DEFAULT_MAX_ALLOW_TIME);
        assert_eq!(options.max_assign_time, 86_400);
        assert_eq!(options.record, RecordMode::Off);
        assert!(options.src.is_none());
        assert!(options.accredit_list.is_none());
    }

    #[test]
    fn del_num_builder_attaches_optional_fields() {
        let req = DelNum::new(BindId::new("b-1").unwrap())
            .with_request_id(RequestId::new("r-1").unwrap())
            .with_biz_id(BizId::new("meet").unwrap());
        assert_eq!(req.bind_id().as_str(), "b-1");
        assert_eq!(req.request_id().map(RequestId::as_str), Some("r-1"));
        assert_eq!(req.biz_id().map(BizId::as_str), Some("meet"));
    }

    #[test]
    fn cancel_call_keeps_flag_verbatim() {
        let req = CancelCall::new(CallId::new("c-1").unwrap(), CancelFlag::new(7));
        assert_eq!(req.cancel_flag().value(), 7);
    }
}
