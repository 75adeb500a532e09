//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CALL_BACK_DEFAULT_MAX_ALLOW_TIME, CallBack, CallBackOptions, CancelCall, DelNum,
    GET_NUM_DEFAULT_MAX_ALLOW_TIME, GET_NUM_DEFAULT_MAX_ASSIGN_TIME, Get400Cdr, GetNum,
    GetNumOptions,
};
pub use response::{
    CallBackResponse, CancelCallResponse, Cdr400, DelNumResponse, Get400CdrResponse,
    GetCdrResponse, GetNumResponse, GetStatusResponse,
};
pub use validation::ValidationError;
pub use value::{
    ACCREDIT_LIST_MAX, AccountId, AccreditList, AppId, BindId, BizId, CallEndStatus, CallId,
    CancelFlag, CityId, CompressMode, DisplayNumber, ErrorCode, KnownCallEndStatus, KnownErrorCode,
    Mobile, NotifyUrl, NotifyUrls, RawMobile, RecordMode, RequestId, StatusFlags, UnixTimestamp,
};
