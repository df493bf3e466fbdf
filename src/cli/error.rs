//! CLI-level errors (wraps domain and config errors)

use thiserror::Error;

use crate::domain::CalcError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Calc(#[from] CalcError),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Usage(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Calc(_) => crate::exitcode::DATAERR,
            CliError::Config(_) => crate::exitcode::CONFIG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exitcode;

    #[test]
    fn test_usage_error_maps_to_usage_exit_code() {
        let err = CliError::Usage("no command given".to_string());
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }

    #[test]
    fn test_calc_error_maps_to_dataerr_exit_code() {
        let err = CliError::Calc(CalcError::DivisionByZero);
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn test_config_error_maps_to_config_exit_code() {
        let err = CliError::Config(config::ConfigError::Message("bad config".to_string()));
        assert_eq!(err.exit_code(), exitcode::CONFIG);
    }
}
