/// Error code registry for arraylab
///
/// Error codes are organized by category:
/// - 1000-1999: Invalid argument errors
/// - 2000-2999: Empty input errors
/// - 3000-3999: Insufficient data errors
/// - 4000-4999: Function lookup errors
/// - 5000-5999: Configuration errors
/// - 9000-9999: Other errors
pub struct ErrorCode;

impl ErrorCode {
    // Invalid argument errors (1000-1999)
    pub const INVALID_ARGUMENT_GENERIC: u16 = 1000;
    pub const INVALID_ARITY: u16 = 1001;
    pub const INVALID_TYPE: u16 = 1002;
    pub const INVALID_CHUNK_SIZE: u16 = 1003;
    pub const INVALID_ROTATION: u16 = 1004;
    pub const INVALID_NUMBER: u16 = 1005;
    pub const INVALID_INDEX: u16 = 1006;
    pub const RESULT_TOO_LARGE: u16 = 1007;

    // Empty input errors (2000-2999)
    pub const EMPTY_INPUT_GENERIC: u16 = 2000;
    pub const EMPTY_SEQUENCE: u16 = 2001;

    // Insufficient data errors (3000-3999)
    pub const INSUFFICIENT_DATA_GENERIC: u16 = 3000;
    pub const INSUFFICIENT_DISTINCT_VALUES: u16 = 3001;

    // Function lookup errors (4000-4999)
    pub const UNKNOWN_FUNCTION: u16 = 4000;

    // Configuration errors (5000-5999)
    pub const CONFIG_GENERIC: u16 = 5000;
    pub const CONFIG_NOT_FOUND: u16 = 5001;
    pub const CONFIG_PARSE_ERROR: u16 = 5002;
    pub const CONFIG_INVALID_VALUE: u16 = 5003;
    pub const CONFIG_IO_ERROR: u16 = 5004;

    // Other errors (9000-9999)
    pub const OTHER_GENERIC: u16 = 9000;
    pub const OTHER_SERIALIZATION: u16 = 9001;
    pub const OTHER_IO: u16 = 9002;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        // Invalid argument errors
        1000 => "Invalid argument",
        1001 => "Wrong number of arguments",
        1002 => "Argument has the wrong shape or type",
        1003 => "Chunk size must be positive",
        1004 => "Cannot rotate an empty sequence",
        1005 => "Argument is not a usable number",
        1006 => "Index is out of range",
        1007 => "Result would exceed the size limit",

        // Empty input errors
        2000 => "Operation requires input",
        2001 => "Operation requires at least one element",

        // Insufficient data errors
        3000 => "Not enough data for operation",
        3001 => "Not enough distinct values for operation",

        // Function lookup errors
        4000 => "No function with this name",

        // Configuration errors
        5000 => "Generic configuration error",
        5001 => "Configuration file not found",
        5002 => "Failed to parse configuration",
        5003 => "Invalid value in configuration",
        5004 => "Failed to read configuration",

        // Other errors
        9000 => "Unexpected error",
        9001 => "Serialization error",
        9002 => "I/O error",

        _ => "Unknown error code",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_is_described() {
        let codes = [
            ErrorCode::INVALID_ARGUMENT_GENERIC,
            ErrorCode::INVALID_ARITY,
            ErrorCode::INVALID_TYPE,
            ErrorCode::INVALID_CHUNK_SIZE,
            ErrorCode::INVALID_ROTATION,
            ErrorCode::INVALID_NUMBER,
            ErrorCode::INVALID_INDEX,
            ErrorCode::RESULT_TOO_LARGE,
            ErrorCode::EMPTY_INPUT_GENERIC,
            ErrorCode::EMPTY_SEQUENCE,
            ErrorCode::INSUFFICIENT_DATA_GENERIC,
            ErrorCode::INSUFFICIENT_DISTINCT_VALUES,
            ErrorCode::UNKNOWN_FUNCTION,
            ErrorCode::CONFIG_GENERIC,
            ErrorCode::CONFIG_NOT_FOUND,
            ErrorCode::CONFIG_PARSE_ERROR,
            ErrorCode::CONFIG_INVALID_VALUE,
            ErrorCode::CONFIG_IO_ERROR,
            ErrorCode::OTHER_GENERIC,
            ErrorCode::OTHER_SERIALIZATION,
            ErrorCode::OTHER_IO,
        ];

        for code in codes {
            assert_ne!(describe_error_code(code), "Unknown error code", "code {code}");
        }
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(describe_error_code(42), "Unknown error code");
    }
}
