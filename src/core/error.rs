//! Error types for the navigation list model.
//!
//! The model is a pure in-memory structure, so most operations are
//! infallible; errors are reserved for contract violations surfaced to
//! the caller:
//!
//! - [`ModelError::IndexOutOfBounds`] - indexed access past the list end
//! - [`ModelError::UnclassifiableVolume`] - a volume type with no section
//! - [`ModelError::InvalidFlags`] - malformed flags blob from the embedder
//! - [`ModelError::ReadFailed`] - a directory read that could not complete

use crate::models::VolumeType;
use thiserror::Error;

/// Errors surfaced by the navigation list model and its collaborators.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// Indexed access outside `0..len`.
    #[error("index {index} out of bounds for navigation list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A volume reached the section classifier that no section accepts.
    ///
    /// The volume type catalog is closed; types that are absorbed into the
    /// synthetic My Files root (downloads, Android, Crostini) must be
    /// filtered out before classification. Hitting this is a caller bug.
    #[error("volume '{volume_id}' of type {volume_type} has no navigation section")]
    UnclassifiableVolume {
        volume_id: String,
        volume_type: VolumeType,
    },

    /// The flags blob handed over by the embedding application was not
    /// valid JSON or had the wrong shape.
    #[error("invalid navigation flags: {0}")]
    InvalidFlags(String),

    /// An asynchronous directory read failed. Batches delivered before the
    /// failure remain valid; the read is simply cut short.
    #[error("directory read failed: {0}")]
    ReadFailed(String),
}
