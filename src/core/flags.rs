//! Feature flags and display strings handed over by the embedding app.
//!
//! The embedder ships these as one JSON blob at startup (the equivalent of
//! a load-time data table); the model never re-reads them mid-session.

use serde::Deserialize;

use crate::core::ModelError;

/// Navigation feature flags plus the localized labels the model stamps
/// onto synthetic items.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct NavigationFlags {
    /// Unified my-files mode: the local-storage volume is not mounted as a
    /// separate volume and the synthetic root owns a live directory.
    pub my_files_volume_enabled: bool,
    /// Label of the synthetic My Files root.
    pub my_files_root_label: String,
    /// Label of the local-storage child shown under My Files.
    pub downloads_directory_label: String,
    /// Label of the cloud drive volume.
    pub drive_directory_label: String,
}

impl Default for NavigationFlags {
    fn default() -> Self {
        Self {
            my_files_volume_enabled: false,
            my_files_root_label: "My files".to_string(),
            downloads_directory_label: "Downloads".to_string(),
            drive_directory_label: "My Drive".to_string(),
        }
    }
}

impl NavigationFlags {
    /// Parse flags from the embedder's JSON blob. Missing keys fall back
    /// to the defaults above.
    pub fn from_json(blob: &str) -> Result<Self, ModelError> {
        serde_json::from_str(blob).map_err(|err| ModelError::InvalidFlags(err.to_string()))
    }

    /// Defaults with unified my-files mode switched on.
    pub fn unified() -> Self {
        Self {
            my_files_volume_enabled: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let flags = NavigationFlags::default();
        assert!(!flags.my_files_volume_enabled);
        assert_eq!(flags.my_files_root_label, "My files");
        assert_eq!(flags.downloads_directory_label, "Downloads");
        assert_eq!(flags.drive_directory_label, "My Drive");
    }

    #[test]
    fn test_from_json_partial_blob() {
        let flags = NavigationFlags::from_json(
            r#"{"MY_FILES_VOLUME_ENABLED": true, "MY_FILES_ROOT_LABEL": "Mes fichiers"}"#,
        )
        .unwrap();
        assert!(flags.my_files_volume_enabled);
        assert_eq!(flags.my_files_root_label, "Mes fichiers");
        // Unset keys keep their defaults.
        assert_eq!(flags.drive_directory_label, "My Drive");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = NavigationFlags::from_json("not json").unwrap_err();
        assert!(matches!(err, ModelError::InvalidFlags(_)));
    }
}
