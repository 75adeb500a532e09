use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// PSTN account identifier (`id`), assigned by the vendor.
///
/// Invariant: non-empty after trimming.
pub struct AccountId(String);

impl AccountId {
    /// Query/body field name used by the vendor (`id`).
    pub const FIELD: &'static str = "id";

    /// Create a validated [`AccountId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// PSTN application identifier.
///
/// The dialer endpoints spell the body field `appId`, the virtual-number
/// endpoints spell it `appid`.
///
/// Invariant: non-empty after trimming.
pub struct AppId(String);

impl AppId {
    /// Body field name used by the dialer family (`appId`).
    pub const FIELD: &'static str = "appId";
    /// Body field name used by the virtual-number family (`appid`).
    pub const VIRTUAL_FIELD: &'static str = "appid";

    /// Create a validated [`AppId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Caller-supplied correlation token (`requestId`).
///
/// The vendor echoes it back in responses and webhook callbacks.
///
/// Invariant: non-empty after trimming, at most 48 bytes.
pub struct RequestId(String);

impl RequestId {
    /// Body field name used by the vendor (`requestId`).
    pub const FIELD: &'static str = "requestId";

    /// Maximum length in bytes.
    pub const MAX_BYTES: usize = 48;

    /// Create a validated [`RequestId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() > Self::MAX_BYTES {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max_bytes: Self::MAX_BYTES,
                actual: trimmed.len(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Unvalidated mobile number as sent to the vendor (`src`/`dst`).
///
/// Invariant: non-empty after trimming. This type does not normalize; the
/// vendor expects an 11-digit national number (the dialer encoder prepends
/// the `0086` country prefix). If you want normalization, parse into
/// [`Mobile`] and convert it into [`RawMobile`].
pub struct RawMobile(String);

impl RawMobile {
    /// Body field name for the calling party (`src`).
    pub const SRC_FIELD: &'static str = "src";
    /// Body field name for the called party (`dst`).
    pub const DST_FIELD: &'static str = "dst";

    /// Create a validated (non-empty) raw mobile number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::DST_FIELD,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to the vendor.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<Mobile> for RawMobile {
    /// Convert an already-parsed mobile number to its national-digit form.
    fn from(value: Mobile) -> Self {
        Self(value.national)
    }
}

#[derive(Debug, Clone)]
/// Parsed mobile number with national-digit and E.164 representations.
///
/// Equality, ordering, and hashing are based on the E.164 form.
pub struct Mobile {
    raw: String,
    e164: String,
    national: String,
}

impl Mobile {
    /// Parse and normalize a mobile number.
    ///
    /// `default_region` is used when the input does not carry an explicit
    /// country prefix; pass [`country::Id::CN`] for the vendor's home market.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty {
                field: RawMobile::DST_FIELD,
            });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidMobileNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();
        let national = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::National)
            .to_string()
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>();

        Ok(Self { raw, e164, national })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// National significant number, digits only (what goes on the wire).
    pub fn national(&self) -> &str {
        &self.national
    }
}

impl PartialEq for Mobile {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for Mobile {}

impl std::hash::Hash for Mobile {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Display-number override (`srcDisplayNum`/`dstDisplayNum`/`calleeDisplayNum`).
///
/// Invariant: non-empty after trimming. When omitted the vendor shows its own
/// default (the other party's number or the virtual number).
pub struct DisplayNumber(String);

impl DisplayNumber {
    /// Create a validated [`DisplayNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "displayNum",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated number.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Call identifier (`callId`) returned by the call-back request.
///
/// Invariant: non-empty after trimming.
pub struct CallId(String);

impl CallId {
    /// Body field name used by the vendor (`callId`).
    pub const FIELD: &'static str = "callId";

    /// Create a validated [`CallId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Virtual-number binding identifier (`bindId`), globally unique.
///
/// Invariant: non-empty after trimming.
pub struct BindId(String);

impl BindId {
    /// Body field name used by the vendor (`bindId`).
    pub const FIELD: &'static str = "bindId";

    /// Create a validated [`BindId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Second-level business tag (`bizId`), unique within an app id.
///
/// Invariant: ASCII alphanumeric, non-empty, at most 16 bytes.
pub struct BizId(String);

impl BizId {
    /// Body field name used by the vendor (`bizId`).
    pub const FIELD: &'static str = "bizId";

    /// Maximum length in bytes.
    pub const MAX_BYTES: usize = 16;

    /// Create a validated [`BizId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if trimmed.len() > Self::MAX_BYTES {
            return Err(ValidationError::TooLong {
                field: Self::FIELD,
                max_bytes: Self::MAX_BYTES,
                actual: trimmed.len(),
            });
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ValidationError::NotAlphanumeric {
                field: Self::FIELD,
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Number-locality hint (`cityId`).
///
/// Invariant: non-empty after trimming.
pub struct CityId(String);

impl CityId {
    /// Body field name used by the vendor (`cityId`).
    pub const FIELD: &'static str = "cityId";

    /// Create a validated [`CityId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Webhook notification URL (`statusUrl`/`hangupUrl`/`recordUrl`).
///
/// The vendor rejects malformed URLs with error `-103`; this type rejects
/// them locally at construction.
pub struct NotifyUrl(url::Url);

impl NotifyUrl {
    /// Body field name for call-state notifications (`statusUrl`).
    pub const STATUS_FIELD: &'static str = "statusUrl";
    /// Body field name for hangup/CDR notifications (`hangupUrl`).
    pub const HANGUP_FIELD: &'static str = "hangupUrl";
    /// Body field name for recording notifications (`recordUrl`).
    pub const RECORD_FIELD: &'static str = "recordUrl";

    /// Create a validated [`NotifyUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: Self::STATUS_FIELD,
            });
        }
        let parsed = url::Url::parse(trimmed).map_err(|_| ValidationError::InvalidNotifyUrl {
            input: trimmed.to_owned(),
        })?;
        Ok(Self(parsed))
    }

    /// Borrow the URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Webhook destinations for call events.
///
/// A dialer client injects its configured set into every call-back body;
/// `get_num` takes per-request values instead. Unset entries are omitted
/// from the wire.
pub struct NotifyUrls {
    pub status_url: Option<NotifyUrl>,
    pub hangup_url: Option<NotifyUrl>,
    pub record_url: Option<NotifyUrl>,
}

/// Maximum number of entries in an [`AccreditList`].
pub const ACCREDIT_LIST_MAX: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Numbers permitted to dial an exclusively-bound virtual number
/// (`accreditList`).
///
/// Invariant: non-empty, at most [`ACCREDIT_LIST_MAX`] entries. Omit the list
/// entirely to allow any caller.
pub struct AccreditList(Vec<RawMobile>);

impl AccreditList {
    /// Body field name used by the vendor (`accreditList`).
    pub const FIELD: &'static str = "accreditList";

    /// Create a validated [`AccreditList`].
    pub fn new(numbers: Vec<RawMobile>) -> Result<Self, ValidationError> {
        if numbers.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if numbers.len() > ACCREDIT_LIST_MAX {
            return Err(ValidationError::TooManyAccredits {
                max: ACCREDIT_LIST_MAX,
                actual: numbers.len(),
            });
        }
        Ok(Self(numbers))
    }

    /// Borrow the accredited numbers.
    pub fn numbers(&self) -> &[RawMobile] {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Bitmask selecting which call-state transitions trigger webhook pushes
/// (`statusFlag`).
///
/// `NONE` disables all pushes; `ALL` (the sum of every flag, 16191) pushes
/// every transition. Combine individual flags with `|`.
pub struct StatusFlags(u32);

impl StatusFlags {
    /// Body field name used by the vendor (`statusFlag`).
    pub const FIELD: &'static str = "statusFlag";

    /// Caller leg initiated.
    pub const CALLER_INITIATED: Self = Self(1);
    /// Caller leg ringing.
    pub const CALLER_RINGING: Self = Self(2);
    /// Caller answered.
    pub const CALLER_ANSWERED: Self = Self(4);
    /// Caller rejected the call.
    pub const CALLER_REJECTED: Self = Self(8);
    /// Caller hung up normally.
    pub const CALLER_HANGUP: Self = Self(16);
    /// Caller leg failed.
    pub const CALLER_ERROR: Self = Self(32);
    /// Callee leg initiated.
    pub const CALLEE_INITIATED: Self = Self(256);
    /// Callee leg ringing.
    pub const CALLEE_RINGING: Self = Self(512);
    /// Callee answered.
    pub const CALLEE_ANSWERED: Self = Self(1024);
    /// Callee rejected the call.
    pub const CALLEE_REJECTED: Self = Self(2048);
    /// Callee hung up normally.
    pub const CALLEE_HANGUP: Self = Self(4096);
    /// Callee leg failed.
    pub const CALLEE_ERROR: Self = Self(8192);

    /// No transitions pushed.
    pub const NONE: Self = Self(0);
    /// Every transition pushed (16191).
    pub const ALL: Self = Self(16191);

    /// Construct from a raw bit pattern (no validation; unknown bits are
    /// passed through to the vendor).
    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The raw bit pattern as sent to the vendor.
    pub fn bits(self) -> u32 {
        self.0
    }

    /// Whether every bit of `other` is set in `self`.
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self::ALL
    }
}

impl std::ops::BitOr for StatusFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for StatusFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Cancellation stage selector (`cancelFlag`).
///
/// The vendor defines 0 through 4; this type deliberately does not validate
/// the range and passes any value through unchanged.
pub struct CancelFlag(u32);

impl CancelFlag {
    /// Body field name used by the vendor (`cancelFlag`).
    pub const FIELD: &'static str = "cancelFlag";

    /// Tear the call down regardless of its state.
    pub const TEAR_DOWN: Self = Self(0);
    /// Keep the call once the caller leg is ringing.
    pub const KEEP_AFTER_CALLER_RING: Self = Self(1);
    /// Keep the call once the caller has answered.
    pub const KEEP_AFTER_CALLER_ANSWER: Self = Self(2);
    /// Keep the call once the callee leg is ringing.
    pub const KEEP_AFTER_CALLEE_RING: Self = Self(3);
    /// Keep the call once the callee has answered.
    pub const KEEP_AFTER_CALLEE_ANSWER: Self = Self(4);

    /// Construct from a raw value (no range validation).
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// The raw value as sent to the vendor.
    pub fn value(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Call-recording toggle (`record`).
pub enum RecordMode {
    #[default]
    Off,
    On,
}

impl RecordMode {
    /// Body field name used by the vendor (`record`).
    pub const FIELD: &'static str = "record";

    /// Numeric wire value (`0`/`1`).
    pub fn as_flag(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::On => 1,
        }
    }

    /// String wire value (`"0"`/`"1"`), used by the dialer body.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "0",
            Self::On => "1",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// CDR payload compression selector for `get400Cdr` (`compress`).
///
/// `Zlib` asks the vendor for a zlib-compressed payload; decompression is the
/// caller's responsibility.
pub enum CompressMode {
    #[default]
    Off,
    Zlib,
}

impl CompressMode {
    /// Body field name used by the vendor (`compress`).
    pub const FIELD: &'static str = "compress";

    /// Numeric wire value (`0`/`1`).
    pub fn as_flag(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Zlib => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Unix timestamp in seconds, used for the `get400Cdr` time range.
pub struct UnixTimestamp(u64);

impl UnixTimestamp {
    /// Create a timestamp value (no range validation is performed).
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the underlying timestamp in seconds.
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Vendor result code (`errorCode`), preserved verbatim.
///
/// `"0"` means success; every other value is a vendor business error. The
/// wire representation is usually a JSON string but numbers are tolerated.
pub struct ErrorCode(String);

impl ErrorCode {
    /// Body field name used by the vendor (`errorCode`).
    pub const FIELD: &'static str = "errorCode";

    /// The success code (`"0"`).
    pub const SUCCESS: &'static str = "0";

    /// Construct a code from its wire representation.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// The verbatim code as provided by the vendor.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this code means success.
    pub fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS
    }

    /// The code parsed as an integer, when it is numeric.
    pub fn as_i32(&self) -> Option<i32> {
        self.0.trim().parse().ok()
    }

    /// Map this code to a known variant, if one exists.
    pub fn known_kind(&self) -> Option<KnownErrorCode> {
        self.as_i32().and_then(KnownErrorCode::from_code)
    }

    /// Returns `true` if this code is considered transient by the crate.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_retryable()
        )
    }

    /// Returns `true` if this code indicates an account/access problem.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.known_kind(),
            Some(kind) if kind.is_auth_error()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known vendor error codes.
///
/// Unknown codes are preserved as [`ErrorCode`] and return `None` from
/// [`KnownErrorCode::from_code`].
pub enum KnownErrorCode {
    UnsupportedVersion,
    BadParameter,
    InvalidSrcOrDst,
    InvalidDisplayNum,
    InvalidNotifyUrl,
    VirtualNumAlreadyBound,
    NumberPoolExhausted,
    BindReuseLimitExceeded,
    BindTooFrequent,
    InvalidAccreditList,
    InvalidCallId,
    InvalidTimestamp,
    NetworkError,
    BindIdNotFound,
    MissingBizId,
    InvalidAppId,
    UriMismatch,
    IpNotWhitelisted,
    CallerBlocked,
    ServerError,
}

impl KnownErrorCode {
    /// Convert a raw vendor integer code into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            -1 => Self::UnsupportedVersion,
            -2 => Self::BadParameter,
            -101 => Self::InvalidSrcOrDst,
            -102 => Self::InvalidDisplayNum,
            -103 => Self::InvalidNotifyUrl,
            -106 => Self::VirtualNumAlreadyBound,
            -107 => Self::NumberPoolExhausted,
            -108 => Self::BindReuseLimitExceeded,
            -109 => Self::BindTooFrequent,
            -111 => Self::InvalidAccreditList,
            -201 => Self::InvalidCallId,
            -202 => Self::InvalidTimestamp,
            -203 => Self::NetworkError,
            -204 => Self::BindIdNotFound,
            -205 => Self::MissingBizId,
            -401 => Self::InvalidAppId,
            -402 => Self::UriMismatch,
            -403 => Self::IpNotWhitelisted,
            -423 => Self::CallerBlocked,
            -501 => Self::ServerError,
            _ => return None,
        })
    }

    /// Whether this code is likely transient and can be retried by the caller.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::NetworkError | Self::ServerError)
    }

    /// Whether this code indicates invalid credentials or blocked access.
    pub fn is_auth_error(self) -> bool {
        matches!(
            self,
            Self::InvalidAppId | Self::UriMismatch | Self::IpNotWhitelisted | Self::CallerBlocked
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Final call state from a CDR (`callEndStatus`), preserved verbatim.
pub struct CallEndStatus(String);

impl CallEndStatus {
    /// Body field name used by the vendor (`callEndStatus`).
    pub const FIELD: &'static str = "callEndStatus";

    /// Construct a status from its wire representation.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The verbatim status as provided by the vendor.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The status parsed as an integer, when it is numeric.
    pub fn as_i32(&self) -> Option<i32> {
        self.0.trim().parse().ok()
    }

    /// Map this status to a known variant, if one exists.
    pub fn known_kind(&self) -> Option<KnownCallEndStatus> {
        self.as_i32().and_then(KnownCallEndStatus::from_code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known `callEndStatus` values.
pub enum KnownCallEndStatus {
    Unknown,
    Finished,
    TransferQueryFailed,
    NotConnected,
    NoAnswer,
    Rejected,
    PoweredOff,
    VacantNumber,
    Busy,
    InArrears,
    CarrierError,
}

impl KnownCallEndStatus {
    /// Convert a raw integer status into a known variant.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            0 => Self::Unknown,
            1 => Self::Finished,
            2 => Self::TransferQueryFailed,
            3 => Self::NotConnected,
            4 => Self::NoAnswer,
            5 => Self::Rejected,
            6 => Self::PoweredOff,
            7 => Self::VacantNumber,
            8 => Self::Busy,
            9 => Self::InArrears,
            10 => Self::CarrierError,
            _ => return None,
        })
    }
}
