use super::station::StationKind;
use thiserror::Error;

/// Why a slot failed validation. `Display` yields the message reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotValidationError {
    #[error("Item ID cannot be negative")]
    NegativeItemId,
    #[error("Quantity must be at least 1")]
    QuantityTooLow,
    #[error("Quantity cannot exceed {max} for {kind}")]
    QuantityTooHigh { max: i32, kind: StationKind },
    #[error("MinLoadPercentage must be between 0 and 100")]
    MinLoadOutOfRange,
    #[error("Invalid SupplyDemandMode {mode} for {kind}")]
    InvalidMode { mode: i32, kind: StationKind },
}

/// Errors raised by the editor shell (arguments, config, commands, I/O)
#[derive(Debug, Error)]
pub enum EditorError {
    /// Failed to parse a number from user input
    #[error("Parse error: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Command line flag missing a value or not recognized
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// Editor command that could not be understood
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("Unknown station kind: {0}")]
    UnknownStationKind(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using EditorError
pub type EditorResult<T> = Result<T, EditorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_render_limits() {
        let err = SlotValidationError::QuantityTooHigh {
            max: 5000,
            kind: StationKind::Planetary,
        };
        assert_eq!(err.to_string(), "Quantity cannot exceed 5000 for Planetary");

        let err = SlotValidationError::InvalidMode {
            mode: 9,
            kind: StationKind::Distributor,
        };
        assert_eq!(err.to_string(), "Invalid SupplyDemandMode 9 for Distributor");
    }

    #[test]
    fn parse_errors_convert() {
        let err: EditorError = "abc".parse::<i32>().unwrap_err().into();
        assert!(matches!(err, EditorError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }
}
