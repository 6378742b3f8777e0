//! Volume metadata and the observable volume source.
//!
//! [`VolumeList`] mirrors the volume-manager collaborator's surface: an
//! ordered, mutable list of [`VolumeInfo`] records with add/remove
//! notifications. The navigation model consumes it read-only and rebuilds
//! on every notification.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::models::EntryRc;
use crate::utils::{ListenerKey, Listeners};

/// Closed catalog of volume types reported by the volume manager.
///
/// The section classifier matches exhaustively on this enum; any new type
/// added here must also be routed to a section (or absorbed into the
/// synthetic My Files root) before it can appear in the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VolumeType {
    /// Local user storage (the My Files volume).
    Downloads,
    /// Cloud drive.
    Drive,
    /// Removable media (USB sticks, SD cards).
    Removable,
    /// Mounted archive file.
    Archive,
    /// File-system-provider backed volume.
    Provided,
    /// Media transfer protocol device (phones, cameras).
    Mtp,
    /// Android container files.
    AndroidFiles,
    /// Media view roots (images, videos, audio).
    MediaView,
    /// Linux container files.
    Crostini,
}

impl VolumeType {
    /// Canonical lower-snake name, matching volume-id prefixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Downloads => "downloads",
            Self::Drive => "drive",
            Self::Removable => "removable",
            Self::Archive => "archive",
            Self::Provided => "provided",
            Self::Mtp => "mtp",
            Self::AndroidFiles => "android_files",
            Self::MediaView => "media_view",
            Self::Crostini => "crostini",
        }
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only record describing one mounted volume.
///
/// Owned by the volume manager; the navigation model only holds shared
/// handles and never mutates volume state.
pub struct VolumeInfo {
    volume_id: String,
    volume_type: VolumeType,
    device_path: Option<String>,
    label: String,
    root: EntryRc,
}

impl VolumeInfo {
    /// Describe a mounted volume. `device_path` identifies the physical
    /// device; partitions of one device share it.
    pub fn new(
        volume_type: VolumeType,
        volume_id: impl Into<String>,
        label: impl Into<String>,
        device_path: Option<String>,
        root: EntryRc,
    ) -> Rc<Self> {
        Rc::new(Self {
            volume_id: volume_id.into(),
            volume_type,
            device_path: device_path.filter(|path| !path.is_empty()),
            label: label.into(),
            root,
        })
    }

    /// Unique volume identifier, stable for the lifetime of the mount.
    pub fn volume_id(&self) -> &str {
        &self.volume_id
    }

    /// The volume's type from the closed catalog.
    pub fn volume_type(&self) -> VolumeType {
        self.volume_type
    }

    /// Physical device identifier shared by sibling partitions, if known.
    pub fn device_path(&self) -> Option<&str> {
        self.device_path.as_deref()
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Handle to the volume's real root directory entry.
    pub fn root(&self) -> &EntryRc {
        &self.root
    }
}

impl fmt::Debug for VolumeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VolumeInfo")
            .field("volume_id", &self.volume_id)
            .field("volume_type", &self.volume_type)
            .field("device_path", &self.device_path)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// VolumeList
// ============================================================================

/// Ordered, observable list of mounted volumes.
///
/// Order is mount order; the volume manager mounts partitions of one
/// physical device together, so volumes sharing a device path arrive
/// adjacently. The navigation model relies on that as a precondition.
#[derive(Default)]
pub struct VolumeList {
    volumes: RefCell<Vec<Rc<VolumeInfo>>>,
    listeners: Listeners,
}

impl VolumeList {
    /// Create an empty list.
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Number of mounted volumes.
    pub fn len(&self) -> usize {
        self.volumes.borrow().len()
    }

    /// Whether no volumes are mounted.
    pub fn is_empty(&self) -> bool {
        self.volumes.borrow().is_empty()
    }

    /// Volume at `index`, if in range.
    pub fn item(&self, index: usize) -> Option<Rc<VolumeInfo>> {
        self.volumes.borrow().get(index).cloned()
    }

    /// Snapshot of all volumes in mount order.
    pub fn snapshot(&self) -> Vec<Rc<VolumeInfo>> {
        self.volumes.borrow().clone()
    }

    /// First volume of the given type, in mount order.
    pub fn find_by_type(&self, volume_type: VolumeType) -> Option<Rc<VolumeInfo>> {
        self.volumes
            .borrow()
            .iter()
            .find(|volume| volume.volume_type() == volume_type)
            .cloned()
    }

    /// Append a newly mounted volume and notify observers.
    pub fn add(&self, volume: Rc<VolumeInfo>) {
        self.volumes.borrow_mut().push(volume);
        self.listeners.notify();
    }

    /// Remove the volume with `volume_id`, returning it. Observers are
    /// notified only when something was actually removed.
    pub fn remove(&self, volume_id: &str) -> Option<Rc<VolumeInfo>> {
        let removed = {
            let mut volumes = self.volumes.borrow_mut();
            let index = volumes
                .iter()
                .position(|volume| volume.volume_id() == volume_id)?;
            volumes.remove(index)
        };
        self.listeners.notify();
        Some(removed)
    }

    /// Register a mount/unmount observer.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> ListenerKey {
        self.listeners.subscribe(callback)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&self, key: ListenerKey) {
        self.listeners.unsubscribe(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FakeEntry;
    use std::cell::Cell;

    fn volume(volume_type: VolumeType, id: &str) -> Rc<VolumeInfo> {
        VolumeInfo::new(
            volume_type,
            id,
            id,
            None,
            FakeEntry::new(id, format!("filesystem:{id}/")) as EntryRc,
        )
    }

    #[test]
    fn test_add_and_remove_notify() {
        let list = VolumeList::new();
        let hits = Rc::new(Cell::new(0));
        let hits_clone = Rc::clone(&hits);
        list.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        list.add(volume(VolumeType::Drive, "drive"));
        assert_eq!(hits.get(), 1);
        assert_eq!(list.len(), 1);

        assert!(list.remove("drive").is_some());
        assert_eq!(hits.get(), 2);
        assert!(list.is_empty());

        // Removing an unknown id neither panics nor notifies.
        assert!(list.remove("drive").is_none());
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_mount_order_preserved() {
        let list = VolumeList::new();
        list.add(volume(VolumeType::Removable, "removable:hoge"));
        list.add(volume(VolumeType::Provided, "provided:prov1"));
        list.add(volume(VolumeType::Removable, "removable:fuga"));

        let ids: Vec<String> = list
            .snapshot()
            .iter()
            .map(|v| v.volume_id().to_string())
            .collect();
        assert_eq!(ids, ["removable:hoge", "provided:prov1", "removable:fuga"]);
    }

    #[test]
    fn test_find_by_type_returns_first_mounted() {
        let list = VolumeList::new();
        list.add(volume(VolumeType::Provided, "provided:prov1"));
        list.add(volume(VolumeType::Provided, "provided:prov2"));
        let found = list.find_by_type(VolumeType::Provided).unwrap();
        assert_eq!(found.volume_id(), "provided:prov1");
    }

    #[test]
    fn test_empty_device_path_treated_as_absent() {
        let info = VolumeInfo::new(
            VolumeType::Removable,
            "removable:hoge",
            "hoge",
            Some(String::new()),
            FakeEntry::new("hoge", "filesystem:removable:hoge/") as EntryRc,
        );
        assert_eq!(info.device_path(), None);
    }
}
