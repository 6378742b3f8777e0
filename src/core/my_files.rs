//! Synthetic root builder: assembles the "My files" entry and its
//! UI-visible children.
//!
//! Local storage, Android containers and the Crostini bridge never render
//! as top-level rows; they are absorbed here as children of one synthetic
//! root. The builder reuses its [`EntryList`] instance across rebuilds so
//! the rendering tree keeps selection and expansion state.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::NavigationFlags;
use crate::models::{EntryList, EntryRc, VolumeEntry, VolumeInfo, VolumeType};

/// URL of the synthetic root, stable across sessions.
const MY_FILES_URL: &str = "entry-list://my-files";

/// Builds and maintains the synthetic My Files root.
pub struct MyFilesBuilder {
    flags: NavigationFlags,
    cached: RefCell<Option<Rc<EntryList>>>,
}

impl MyFilesBuilder {
    /// Create a builder for the given feature flags.
    pub fn new(flags: NavigationFlags) -> Self {
        Self {
            flags,
            cached: RefCell::new(None),
        }
    }

    /// The flags this builder was configured with.
    pub fn flags(&self) -> &NavigationFlags {
        &self.flags
    }

    /// Assemble the My Files root from the current volume snapshot plus
    /// the optionally attached Android-apps and Crostini fake entries.
    ///
    /// With unified my-files off, the local-storage volume becomes the
    /// first child; with it on, that volume backs the root directly and
    /// its real children surface through the merged reader. Mounted
    /// Android and Crostini volumes always nest as children; a mounted
    /// Crostini volume supersedes the Crostini fake entry.
    ///
    /// Repeated calls return the same [`EntryList`] instance with an
    /// updated child set.
    pub fn build(
        &self,
        volumes: &[Rc<VolumeInfo>],
        android_apps: Option<EntryRc>,
        crostini: Option<EntryRc>,
    ) -> Rc<EntryList> {
        let root = self.root();

        let downloads = volumes
            .iter()
            .find(|volume| volume.volume_type() == VolumeType::Downloads)
            .cloned();

        let mut children: Vec<EntryRc> = Vec::new();
        if self.flags.my_files_volume_enabled {
            root.set_backing_entry(downloads.map(|volume| Rc::clone(volume.root())));
        } else {
            root.set_backing_entry(None);
            if let Some(volume) = downloads {
                children.push(VolumeEntry::new(volume) as EntryRc);
            }
        }

        let mut crostini_mounted = false;
        for volume in volumes {
            match volume.volume_type() {
                VolumeType::AndroidFiles => {
                    children.push(VolumeEntry::new(Rc::clone(volume)) as EntryRc);
                }
                VolumeType::Crostini => {
                    children.push(VolumeEntry::new(Rc::clone(volume)) as EntryRc);
                    crostini_mounted = true;
                }
                _ => {}
            }
        }
        if let Some(entry) = android_apps {
            children.push(entry);
        }
        if let Some(entry) = crostini {
            if !crostini_mounted {
                children.push(entry);
            }
        }

        root.set_ui_children(children);
        root
    }

    /// The cached synthetic root, created on first use.
    fn root(&self) -> Rc<EntryList> {
        let mut cached = self.cached.borrow_mut();
        match &*cached {
            Some(root) => Rc::clone(root),
            None => {
                let root = EntryList::new(self.flags.my_files_root_label.clone(), MY_FILES_URL);
                *cached = Some(Rc::clone(&root));
                root
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FakeEntry, FileEntry};

    fn volume(volume_type: VolumeType, id: &str, label: &str) -> Rc<VolumeInfo> {
        VolumeInfo::new(
            volume_type,
            id,
            label,
            None,
            FakeEntry::new(label, format!("filesystem:{id}/")) as EntryRc,
        )
    }

    fn crostini_fake() -> EntryRc {
        FakeEntry::new("linux-files-label", "fake-entry://crostini")
    }

    #[test]
    fn test_absorbs_downloads_and_fakes_as_children() {
        let builder = MyFilesBuilder::new(NavigationFlags::default());
        let volumes = vec![
            volume(VolumeType::Drive, "drive", "My Drive"),
            volume(VolumeType::Downloads, "downloads:Downloads", "Downloads"),
        ];
        let root = builder.build(&volumes, None, Some(crostini_fake()));

        assert_eq!(root.name(), "My files");
        assert!(root.backing_entry().is_none());
        let children = root.ui_children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name(), "Downloads");
        assert_eq!(children[1].name(), "linux-files-label");
    }

    #[test]
    fn test_android_volume_nests_between_downloads_and_crostini() {
        let builder = MyFilesBuilder::new(NavigationFlags::default());
        let volumes = vec![
            volume(VolumeType::Downloads, "downloads:Downloads", "Downloads"),
            volume(VolumeType::AndroidFiles, "android_files:droid", "Play files"),
        ];
        let root = builder.build(&volumes, None, Some(crostini_fake()));

        let children = root.ui_children();
        let names: Vec<&str> = children.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Downloads", "Play files", "linux-files-label"]);
    }

    #[test]
    fn test_unified_mode_backs_root_with_local_volume() {
        let builder = MyFilesBuilder::new(NavigationFlags::unified());
        let downloads = volume(VolumeType::Downloads, "downloads:MyFiles", "My files");
        let volumes = vec![
            Rc::clone(&downloads),
            volume(VolumeType::AndroidFiles, "android_files:droid", "Play files"),
        ];
        let root = builder.build(&volumes, None, Some(crostini_fake()));

        let backing = root.backing_entry().unwrap();
        assert!(Rc::ptr_eq(&backing, downloads.root()));
        let children = root.ui_children();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].name(), "Play files");
        assert_eq!(children[1].name(), "linux-files-label");
    }

    #[test]
    fn test_mounted_crostini_supersedes_fake() {
        let builder = MyFilesBuilder::new(NavigationFlags::default());
        let volumes = vec![volume(VolumeType::Crostini, "crostini:termina", "Linux files")];
        let root = builder.build(&volumes, None, Some(crostini_fake()));

        let children = root.ui_children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].name(), "Linux files");
    }

    #[test]
    fn test_instance_reused_across_rebuilds() {
        let builder = MyFilesBuilder::new(NavigationFlags::default());
        let first = builder.build(&[], None, None);
        let second = builder.build(&[], None, Some(crostini_fake()));
        assert!(Rc::ptr_eq(&first, &second));
        assert_eq!(second.ui_children().len(), 1);
    }
}
