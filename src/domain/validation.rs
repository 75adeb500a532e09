use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    TooLong { field: &'static str, max_bytes: usize, actual: usize },
    NotAlphanumeric { field: &'static str, input: String },
    TooManyAccredits { max: usize, actual: usize },
    InvalidMobileNumber { input: String },
    InvalidNotifyUrl { input: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong {
                field,
                max_bytes,
                actual,
            } => {
                write!(f, "{field} too long: {actual} bytes (max {max_bytes})")
            }
            Self::NotAlphanumeric { field, input } => {
                write!(f, "{field} must be ASCII alphanumeric: {input}")
            }
            Self::TooManyAccredits { max, actual } => {
                write!(f, "too many accredited numbers: {actual} (max {max})")
            }
            Self::InvalidMobileNumber { input } => write!(f, "invalid mobile number: {input}"),
            Self::InvalidNotifyUrl { input } => write!(f, "invalid notify url: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "dst" };
        assert_eq!(err.to_string(), "dst must not be empty");

        let err = ValidationError::TooLong {
            field: "requestId",
            max_bytes: 48,
            actual: 49,
        };
        assert_eq!(err.to_string(), "requestId too long: 49 bytes (max 48)");

        let err = ValidationError::NotAlphanumeric {
            field: "bizId",
            input: "a-b".to_owned(),
        };
        assert_eq!(err.to_string(), "bizId must be ASCII alphanumeric: a-b");

        let err = ValidationError::TooManyAccredits { max: 30, actual: 31 };
        assert_eq!(err.to_string(), "too many accredited numbers: 31 (max 30)");

        let err = ValidationError::InvalidMobileNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid mobile number: bad");

        let err = ValidationError::InvalidNotifyUrl {
            input: "::".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid notify url: ::");
    }
}
