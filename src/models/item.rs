//! Navigation items: the rows of the side panel, and their sections.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::models::{EntryList, EntryRc, FileEntry, VolumeInfo};

/// Display bucket of a navigation item. Buckets render as contiguous runs
/// in this exact order; sections never interleave.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Recents, media views and shortcuts.
    #[default]
    Top,
    /// The single synthetic My Files root.
    MyFiles,
    /// Drive and file-system-provider volumes.
    Cloud,
    /// Removable media, archives and MTP devices.
    Removable,
}

/// Discriminates fake (non-mounted, synthetic) navigation items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FakeItemType {
    /// The "recent files" pseudo-entry.
    Recent,
    /// Linux files bridge, shown before the Crostini volume mounts.
    Crostini,
    /// Android apps bridge.
    AndroidApps,
}

/// Variant payload of a navigation item.
pub enum NavigationItemKind {
    /// A mounted volume.
    Volume(Rc<VolumeInfo>),
    /// A user-created folder shortcut.
    Shortcut(EntryRc),
    /// A synthetic, non-mounted root.
    Fake {
        item_type: FakeItemType,
        entry: EntryRc,
    },
    /// The synthetic My Files root with its UI-visible children.
    EntryList(Rc<EntryList>),
}

/// One row of the navigation panel.
///
/// Items are handed out as shared `Rc` handles and reused across rebuilds
/// for the same logical volume/shortcut/fake, so the rendering tree can
/// key selection and expansion state on item identity. Only the section
/// is (re)assigned during a rebuild.
pub struct NavigationItem {
    label: String,
    section: Cell<Section>,
    kind: NavigationItemKind,
}

impl NavigationItem {
    /// Wrap a mounted volume; the label derives from the volume.
    pub fn for_volume(volume: Rc<VolumeInfo>) -> Rc<Self> {
        Rc::new(Self {
            label: volume.label().to_string(),
            section: Cell::new(Section::default()),
            kind: NavigationItemKind::Volume(volume),
        })
    }

    /// Wrap a shortcut entry; the label is the entry name.
    pub fn for_shortcut(entry: EntryRc) -> Rc<Self> {
        Rc::new(Self {
            label: entry.name().to_string(),
            section: Cell::new(Section::default()),
            kind: NavigationItemKind::Shortcut(entry),
        })
    }

    /// Wrap a fake entry under an explicit label.
    pub fn for_fake(label: impl Into<String>, item_type: FakeItemType, entry: EntryRc) -> Rc<Self> {
        Rc::new(Self {
            label: label.into(),
            section: Cell::new(Section::default()),
            kind: NavigationItemKind::Fake { item_type, entry },
        })
    }

    /// Wrap the synthetic My Files root.
    pub fn for_entry_list(entry: Rc<EntryList>) -> Rc<Self> {
        Rc::new(Self {
            label: entry.name().to_string(),
            section: Cell::new(Section::default()),
            kind: NavigationItemKind::EntryList(entry),
        })
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Section assigned by the last rebuild.
    pub fn section(&self) -> Section {
        self.section.get()
    }

    pub(crate) fn set_section(&self, section: Section) {
        self.section.set(section);
    }

    /// Variant payload.
    pub fn kind(&self) -> &NavigationItemKind {
        &self.kind
    }

    /// The wrapped volume, for volume items.
    pub fn volume_info(&self) -> Option<&Rc<VolumeInfo>> {
        match &self.kind {
            NavigationItemKind::Volume(volume) => Some(volume),
            _ => None,
        }
    }

    /// The backing entry, for every variant that has one.
    pub fn entry(&self) -> Option<EntryRc> {
        match &self.kind {
            NavigationItemKind::Volume(volume) => Some(Rc::clone(volume.root())),
            NavigationItemKind::Shortcut(entry) => Some(Rc::clone(entry)),
            NavigationItemKind::Fake { entry, .. } => Some(Rc::clone(entry)),
            NavigationItemKind::EntryList(list) => Some(Rc::clone(list) as EntryRc),
        }
    }

    /// The synthetic root, for the My Files item.
    pub fn entry_list(&self) -> Option<&Rc<EntryList>> {
        match &self.kind {
            NavigationItemKind::EntryList(list) => Some(list),
            _ => None,
        }
    }

    /// Stable identity key for the rebuild cache.
    pub(crate) fn key(&self) -> NavigationKey {
        match &self.kind {
            NavigationItemKind::Volume(volume) => {
                NavigationKey::Volume(volume.volume_id().to_string())
            }
            NavigationItemKind::Shortcut(entry) => NavigationKey::Shortcut(entry.to_url()),
            NavigationItemKind::Fake { item_type, .. } => NavigationKey::Fake(*item_type),
            NavigationItemKind::EntryList(_) => NavigationKey::MyFiles,
        }
    }
}

impl fmt::Debug for NavigationItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match &self.kind {
            NavigationItemKind::Volume(_) => "Volume",
            NavigationItemKind::Shortcut(_) => "Shortcut",
            NavigationItemKind::Fake { .. } => "Fake",
            NavigationItemKind::EntryList(_) => "EntryList",
        };
        f.debug_struct("NavigationItem")
            .field("label", &self.label)
            .field("section", &self.section.get())
            .field("kind", &variant)
            .finish()
    }
}

/// Stable logical key identifying an item across full rebuilds.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum NavigationKey {
    Volume(String),
    Shortcut(String),
    Fake(FakeItemType),
    MyFiles,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FakeEntry, VolumeType};

    #[test]
    fn test_section_display_order() {
        assert!(Section::Top < Section::MyFiles);
        assert!(Section::MyFiles < Section::Cloud);
        assert!(Section::Cloud < Section::Removable);
    }

    #[test]
    fn test_labels_derive_from_backing_objects() {
        let volume = VolumeInfo::new(
            VolumeType::Drive,
            "drive",
            "My Drive",
            None,
            FakeEntry::new("drive", "filesystem:drive/") as EntryRc,
        );
        let item = NavigationItem::for_volume(volume);
        assert_eq!(item.label(), "My Drive");
        assert_eq!(item.section(), Section::Top);

        let shortcut = NavigationItem::for_shortcut(FakeEntry::new(
            "shortcut",
            "filesystem:drive/root/shortcut",
        ));
        assert_eq!(shortcut.label(), "shortcut");

        // The synthetic root's label comes off the concrete EntryList.
        let my_files = NavigationItem::for_entry_list(EntryList::new(
            "My files",
            "entry-list://my-files",
        ));
        assert_eq!(my_files.label(), "My files");
    }

    #[test]
    fn test_identity_keys() {
        let recent = NavigationItem::for_fake(
            "recent-label",
            FakeItemType::Recent,
            FakeEntry::new("recent-label", "fake-entry://recent") as EntryRc,
        );
        assert_eq!(recent.key(), NavigationKey::Fake(FakeItemType::Recent));

        let list = EntryList::new("My files", "entry-list://my-files");
        let my_files = NavigationItem::for_entry_list(list);
        assert_eq!(my_files.key(), NavigationKey::MyFiles);
    }
}
