//! Data model for the navigation panel.
//!
//! Contains domain types for:
//! - [`FileEntry`], [`DirReader`], [`FakeEntry`], [`VolumeEntry`], [`EntryList`] - entry abstraction
//! - [`VolumeType`], [`VolumeInfo`], [`VolumeList`] - volume metadata and source
//! - [`ShortcutList`] - folder shortcut source
//! - [`NavigationItem`], [`Section`], [`FakeItemType`] - panel rows and display buckets

mod entry;
mod item;
mod shortcut;
mod volume;

pub use entry::{DirReader, EmptyReader, EntryList, EntryRc, FakeEntry, FileEntry, VolumeEntry};
pub use item::{FakeItemType, NavigationItem, NavigationItemKind, Section};
pub(crate) use item::NavigationKey;
pub use shortcut::ShortcutList;
pub use volume::{VolumeInfo, VolumeList, VolumeType};
