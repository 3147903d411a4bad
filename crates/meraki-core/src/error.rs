//! Error types for the Meraki site core

use thiserror::Error;

/// Main error type for site core operations.
///
/// None of these ever reach the page: the host logs them and carries on.
#[derive(Error, Debug)]
pub enum SiteError {
    /// Contact form received a project type outside the fixed option set
    #[error("Unknown project type: {0}")]
    UnknownProjectType(String),

    /// Anchor id does not name any section of the page
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Host bridge sent a message that is not a viewport event
    #[error("Bridge message error: {0}")]
    BridgeMessage(#[from] serde_json::Error),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::UnknownSection("gallery".to_string());
        assert_eq!(format!("{}", err), "Unknown section: gallery");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::BridgeMessage(_)));
    }
}
