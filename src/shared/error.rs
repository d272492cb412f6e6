use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow cron jobs and CI systems to distinguish a fleet with
/// offline printers from a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - sweep completed (and all printers online when checked)
    Success = 0,
    /// At least one printer was offline and `--fail-on-offline` was requested
    PrintersOffline = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (inventory I/O, configuration, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PrintersOffline => write!(f, "Printers Offline (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for printer monitoring.
///
/// Per-device network failures are never represented here: they are folded
/// into the device's outcome. These errors cover the inventory, the audit
/// trail and configuration.
#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("Inventory file not found: {path}\n\n💡 Hint: {suggestion}")]
    InventoryNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse inventory file: {path}\nDetails: {details}\n\n💡 Hint: The inventory must be a JSON array of printer records")]
    InventoryParseError { path: PathBuf, details: String },

    #[error("Failed to write inventory file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    InventoryWriteError { path: PathBuf, details: String },

    #[error("Printer {id} is not in the inventory\n\n💡 Hint: The printer may have been removed while a sweep was running")]
    DeviceNotFound { id: u64 },

    #[error("Invalid configuration: {field}\nReason: {reason}\n\n💡 Hint: {hint}")]
    InvalidConfig {
        field: String,
        reason: String,
        hint: String,
    },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::PrintersOffline.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::PrintersOffline),
            "Printers Offline (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_inventory_not_found_display() {
        let error = MonitorError::InventoryNotFound {
            path: PathBuf::from("/srv/printers.json"),
            suggestion: "Create the file first".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Inventory file not found"));
        assert!(display.contains("/srv/printers.json"));
        assert!(display.contains("💡 Hint:"));
        assert!(display.contains("Create the file first"));
    }

    #[test]
    fn test_inventory_parse_error_display() {
        let error = MonitorError::InventoryParseError {
            path: PathBuf::from("printers.json"),
            details: "expected value at line 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse inventory file"));
        assert!(display.contains("expected value at line 1"));
    }

    #[test]
    fn test_device_not_found_display() {
        let error = MonitorError::DeviceNotFound { id: 42 };
        assert!(format!("{}", error).contains("Printer 42 is not in the inventory"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = MonitorError::InvalidConfig {
            field: "worker_cap".to_string(),
            reason: "must be greater than zero".to_string(),
            hint: "Use a value such as 50".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid configuration: worker_cap"));
        assert!(display.contains("must be greater than zero"));
        assert!(display.contains("Use a value such as 50"));
    }
}
