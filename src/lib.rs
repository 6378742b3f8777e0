//! Navigation list model for a file-manager side panel.
//!
//! Combines several independently changing sources - mounted volumes,
//! user folder shortcuts, a "recent files" pseudo-entry and synthetic
//! platform roots - into one ordered, sectioned list ready to render as a
//! tree widget. The interesting part is the merge: stable multi-source
//! ordering, section classification, device-aware grouping of removable
//! media, and nesting of local storage under a virtual "My files" root.
//!
//! The model is single-threaded and event-driven. Sources notify through
//! callbacks; every notification triggers one full synchronous rebuild,
//! while item identity is preserved across rebuilds so the rendering
//! layer can diff by instance. The one genuinely asynchronous operation
//! is reading the synthetic root's children, which merges an immediate
//! batch of attached fake children with lazy reads of the real backing
//! directory.
//!
//! ```
//! use std::rc::Rc;
//! use filenav::core::{NavigationFlags, NavigationListModel};
//! use filenav::models::{ShortcutList, VolumeList};
//!
//! let volumes = VolumeList::new();
//! let shortcuts = ShortcutList::new();
//! let model = NavigationListModel::new(
//!     Rc::clone(&volumes),
//!     shortcuts,
//!     None,
//!     NavigationFlags::default(),
//! );
//! // Only the synthetic My Files root until something mounts.
//! assert_eq!(model.len(), 1);
//! ```

pub mod core;
pub mod models;
pub mod utils;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use self::core::{classify, ModelError, NavigationFlags, NavigationListModel};
pub use self::models::{
    DirReader, EntryList, EntryRc, FakeEntry, FakeItemType, FileEntry, NavigationItem,
    NavigationItemKind, Section, ShortcutList, VolumeEntry, VolumeInfo, VolumeList, VolumeType,
};
