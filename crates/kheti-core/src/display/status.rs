//! Confirmation messages for operations that have no resource to show.

use std::fmt;

/// Outcome line for an operation, e.g. a catalog check or a removal.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.success { "✓" } else { "✗" };
        writeln!(f, "{marker} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let ok = OperationStatus::success("Catalog verified: 23 crops");
        assert_eq!(ok.to_string(), "✓ Catalog verified: 23 crops\n");

        let failed = OperationStatus::failure(format!("Entry {} has no sowing date", 4));
        assert!(failed.to_string().starts_with("✗ Entry 4"));
    }
}
