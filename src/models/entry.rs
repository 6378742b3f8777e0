//! Directory entry abstraction backing every navigation item.
//!
//! Real filesystem entries, synthetic roots and fake platform entries all
//! implement [`FileEntry`]. Directory listing goes through [`DirReader`]:
//! a lazy, restartable producer that yields batches of child entries and
//! terminates with an empty batch, mirroring how the underlying volume
//! subsystem delivers results.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::core::ModelError;
use crate::models::VolumeInfo;

/// Shared handle to any entry. The model is single-threaded, so entries
/// are reference-counted without atomics and are not `Send`.
pub type EntryRc = Rc<dyn FileEntry>;

/// A directory-or-file abstraction: the minimal surface the navigation
/// model needs from the real filesystem collaborator.
pub trait FileEntry {
    /// Display name of the entry.
    fn name(&self) -> &str;

    /// Stable URL identifying the entry across rebuilds.
    fn to_url(&self) -> String;

    /// Whether the entry can be listed.
    fn is_directory(&self) -> bool;

    /// Create a fresh reader over this entry's children.
    ///
    /// Readers are restartable by creating a new one; an in-flight reader
    /// is simply dropped, never cancelled. Non-directories yield an empty
    /// listing.
    fn create_reader(&self) -> Box<dyn DirReader> {
        Box::new(EmptyReader)
    }
}

/// Lazy batched producer of child entries.
pub trait DirReader {
    /// Produce the next batch of children. An empty batch signals the end
    /// of the listing; errors cut the listing short without invalidating
    /// batches already delivered.
    fn read_entries(&mut self) -> LocalBoxFuture<'_, Result<Vec<EntryRc>, ModelError>>;
}

/// Reader over nothing; used for files and empty synthetic entries.
pub struct EmptyReader;

impl DirReader for EmptyReader {
    fn read_entries(&mut self) -> LocalBoxFuture<'_, Result<Vec<EntryRc>, ModelError>> {
        Box::pin(async { Ok(Vec::new()) })
    }
}

// ============================================================================
// FakeEntry
// ============================================================================

/// A synthetic, non-mounted root such as Recents or the Crostini bridge.
///
/// Fake entries look like directories so the rendering tree can expand
/// them, but they own no children of their own.
#[derive(Clone, Debug)]
pub struct FakeEntry {
    label: String,
    url: String,
}

impl FakeEntry {
    /// Create a fake entry with an explicit URL, e.g. `fake-entry://recent`.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            label: label.into(),
            url: url.into(),
        })
    }
}

impl FileEntry for FakeEntry {
    fn name(&self) -> &str {
        &self.label
    }

    fn to_url(&self) -> String {
        self.url.clone()
    }

    fn is_directory(&self) -> bool {
        true
    }
}

// ============================================================================
// VolumeEntry
// ============================================================================

/// An entry presenting a mounted volume's root under the volume's display
/// label, used when a whole volume is nested as a child of the synthetic
/// My Files root.
pub struct VolumeEntry {
    label: String,
    volume: Rc<VolumeInfo>,
}

impl VolumeEntry {
    /// Wrap a volume's root entry, naming it after the volume label.
    pub fn new(volume: Rc<VolumeInfo>) -> Rc<Self> {
        Rc::new(Self {
            label: volume.label().to_string(),
            volume,
        })
    }

    /// The wrapped volume.
    pub fn volume_info(&self) -> &Rc<VolumeInfo> {
        &self.volume
    }
}

impl FileEntry for VolumeEntry {
    fn name(&self) -> &str {
        &self.label
    }

    fn to_url(&self) -> String {
        self.volume.root().to_url()
    }

    fn is_directory(&self) -> bool {
        true
    }

    fn create_reader(&self) -> Box<dyn DirReader> {
        self.volume.root().create_reader()
    }
}

// ============================================================================
// EntryList
// ============================================================================

/// The synthetic "My files" root: an entry that owns an ordered set of
/// UI-visible children and, in unified mode, a live backing directory.
///
/// Listing an `EntryList` merges two producers: the statically attached
/// children, which are available immediately, and a lazy read of the
/// backing directory. Backing entries whose name collides with an
/// attached child are dropped so each name appears once.
pub struct EntryList {
    label: String,
    url: String,
    children: RefCell<Vec<EntryRc>>,
    backing: RefCell<Option<EntryRc>>,
}

impl EntryList {
    /// Create an empty synthetic root.
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            label: label.into(),
            url: url.into(),
            children: RefCell::new(Vec::new()),
            backing: RefCell::new(None),
        })
    }

    /// Snapshot of the statically attached children, in display order.
    pub fn ui_children(&self) -> Vec<EntryRc> {
        self.children.borrow().clone()
    }

    /// Replace the attached children with `desired`, reusing any existing
    /// child whose URL matches so identity-sensitive consumers keep their
    /// expansion/selection state.
    pub fn set_ui_children(&self, desired: Vec<EntryRc>) {
        let mut children = self.children.borrow_mut();
        let reused: Vec<EntryRc> = desired
            .into_iter()
            .map(|wanted| {
                children
                    .iter()
                    .find(|existing| existing.to_url() == wanted.to_url())
                    .cloned()
                    .unwrap_or(wanted)
            })
            .collect();
        *children = reused;
    }

    /// Attach or detach the live backing directory (unified mode).
    pub fn set_backing_entry(&self, entry: Option<EntryRc>) {
        *self.backing.borrow_mut() = entry;
    }

    /// The live backing directory, if any.
    pub fn backing_entry(&self) -> Option<EntryRc> {
        self.backing.borrow().clone()
    }
}

impl FileEntry for EntryList {
    fn name(&self) -> &str {
        &self.label
    }

    fn to_url(&self) -> String {
        self.url.clone()
    }

    fn is_directory(&self) -> bool {
        true
    }

    fn create_reader(&self) -> Box<dyn DirReader> {
        let fakes = self.ui_children();
        let fake_names: HashSet<String> =
            fakes.iter().map(|entry| entry.name().to_string()).collect();
        let backing = self
            .backing
            .borrow()
            .as_ref()
            .filter(|entry| entry.is_directory())
            .map(|entry| entry.create_reader());
        Box::new(EntryListReader {
            pending_fakes: Some(fakes),
            fake_names,
            backing,
        })
    }
}

/// Reader merging the immediately available attached children with the
/// lazy batches of the backing directory.
struct EntryListReader {
    pending_fakes: Option<Vec<EntryRc>>,
    fake_names: HashSet<String>,
    backing: Option<Box<dyn DirReader>>,
}

impl DirReader for EntryListReader {
    fn read_entries(&mut self) -> LocalBoxFuture<'_, Result<Vec<EntryRc>, ModelError>> {
        Box::pin(async move {
            // Attached children first: they cost nothing to produce, so the
            // consumer can render them before any real I/O completes.
            if let Some(fakes) = self.pending_fakes.take() {
                if !fakes.is_empty() {
                    return Ok(fakes);
                }
            }
            let Some(reader) = self.backing.as_mut() else {
                return Ok(Vec::new());
            };
            loop {
                let batch = reader.read_entries().await?;
                if batch.is_empty() {
                    return Ok(Vec::new());
                }
                let filtered: Vec<EntryRc> = batch
                    .into_iter()
                    .filter(|entry| !self.fake_names.contains(entry.name()))
                    .collect();
                // An all-shadowed batch must not be surfaced: an empty batch
                // means end-of-listing to the consumer. Keep reading.
                if !filtered.is_empty() {
                    return Ok(filtered);
                }
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
