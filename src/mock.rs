//! Mock collaborators for tests: in-memory directory entries with batched
//! asynchronous readers, and a mock volume factory mirroring the volume
//! manager's defaults (a drive volume, plus a local-storage volume when
//! unified my-files is off).
//!
//! Compiled for unit tests and behind the `mock` feature for integration
//! tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::core::{ModelError, NavigationFlags};
use crate::models::{
    DirReader, EntryRc, FakeItemType, FileEntry, NavigationItem, VolumeInfo, VolumeList,
    VolumeType,
};

/// How many children a mock reader delivers per batch; small enough that
/// listings of a few entries still take several read calls.
const READ_BATCH: usize = 2;

/// In-memory entry with optional children and a scripted read failure.
pub struct MockEntry {
    name: String,
    url: String,
    is_dir: bool,
    children: RefCell<Vec<EntryRc>>,
    read_error: RefCell<Option<String>>,
}

impl MockEntry {
    /// A directory entry.
    pub fn dir(name: impl Into<String>, url: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            url: url.into(),
            is_dir: true,
            children: RefCell::new(Vec::new()),
            read_error: RefCell::new(None),
        })
    }

    /// A file entry.
    pub fn file(name: impl Into<String>, url: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            name: name.into(),
            url: url.into(),
            is_dir: false,
            children: RefCell::new(Vec::new()),
            read_error: RefCell::new(None),
        })
    }

    /// An entry addressed by filesystem id and absolute path; the name is
    /// the last path component.
    pub fn at_path(fs_id: &str, path: &str) -> Rc<Self> {
        let name = path.rsplit('/').next().unwrap_or(path).to_string();
        Self::dir(name, format!("filesystem:{fs_id}{path}"))
    }

    /// Append a child to this directory.
    pub fn add_child(&self, child: EntryRc) {
        self.children.borrow_mut().push(child);
    }

    /// Make readers fail with [`ModelError::ReadFailed`] after delivering
    /// all children, instead of terminating cleanly.
    pub fn fail_after_listing(&self, message: impl Into<String>) {
        *self.read_error.borrow_mut() = Some(message.into());
    }
}

impl FileEntry for MockEntry {
    fn name(&self) -> &str {
        &self.name
    }

    fn to_url(&self) -> String {
        self.url.clone()
    }

    fn is_directory(&self) -> bool {
        self.is_dir
    }

    fn create_reader(&self) -> Box<dyn DirReader> {
        Box::new(MockReader {
            remaining: self.children.borrow().clone().into(),
            trailing_error: self.read_error.borrow().clone(),
        })
    }
}

/// Reader yielding a directory's children in fixed-size batches.
struct MockReader {
    remaining: VecDeque<EntryRc>,
    trailing_error: Option<String>,
}

impl DirReader for MockReader {
    fn read_entries(&mut self) -> LocalBoxFuture<'_, Result<Vec<EntryRc>, ModelError>> {
        Box::pin(async move {
            if self.remaining.is_empty() {
                if let Some(message) = self.trailing_error.take() {
                    return Err(ModelError::ReadFailed(message));
                }
                return Ok(Vec::new());
            }
            let take = self.remaining.len().min(READ_BATCH);
            Ok(self.remaining.drain(..take).collect())
        })
    }
}

/// A volume whose root is an empty mock directory. Drive and downloads
/// volumes get their conventional labels; everything else is labeled by
/// its id, matching how the real volume manager labels test volumes.
pub fn mock_volume(
    volume_type: VolumeType,
    volume_id: &str,
    device_path: Option<&str>,
) -> Rc<VolumeInfo> {
    let label = match volume_type {
        VolumeType::Drive => "My Drive",
        VolumeType::Downloads => "Downloads",
        _ => volume_id,
    };
    mock_volume_with_root(
        volume_type,
        volume_id,
        label,
        device_path,
        MockEntry::dir(label, format!("filesystem:{volume_id}/")) as EntryRc,
    )
}

/// A volume with an explicit label and root entry.
pub fn mock_volume_with_root(
    volume_type: VolumeType,
    volume_id: &str,
    label: &str,
    device_path: Option<&str>,
    root: EntryRc,
) -> Rc<VolumeInfo> {
    VolumeInfo::new(
        volume_type,
        volume_id,
        label,
        device_path.map(str::to_string),
        root,
    )
}

/// A volume list pre-mounted like the real volume manager at startup: a
/// drive volume, and a downloads volume unless unified my-files owns the
/// local storage.
pub fn mock_volume_list(flags: &NavigationFlags) -> Rc<VolumeList> {
    let list = VolumeList::new();
    list.add(mock_volume(VolumeType::Drive, "drive", None));
    if flags.my_files_volume_enabled {
        list.add(mock_volume(VolumeType::Downloads, "downloads:MyFiles", None));
    } else {
        list.add(mock_volume(VolumeType::Downloads, "downloads:Downloads", None));
    }
    list
}

/// The "recent files" fake navigation item.
pub fn mock_recent_item(label: &str) -> Rc<NavigationItem> {
    NavigationItem::for_fake(
        label,
        FakeItemType::Recent,
        MockEntry::dir(label, "fake-entry://recent") as EntryRc,
    )
}

/// A Crostini "Linux files" fake navigation item.
pub fn mock_crostini_item(label: &str) -> Rc<NavigationItem> {
    NavigationItem::for_fake(
        label,
        FakeItemType::Crostini,
        MockEntry::dir(label, "fake-entry://crostini") as EntryRc,
    )
}
