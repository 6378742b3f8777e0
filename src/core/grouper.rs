//! Device/partition grouping check for the removable bucket.
//!
//! The volume manager mounts all partitions of one physical device
//! together, so volumes sharing a device path arrive adjacently in mount
//! order. The engine trusts that order and never re-sorts the removable
//! bucket; this module only asserts the precondition. A violation is an
//! upstream defect and is reported, not repaired.

use std::collections::HashSet;
use std::rc::Rc;

use crate::models::VolumeInfo;

/// Check that volumes sharing a non-null device path form contiguous runs
/// in `bucket` (the removable/archive/MTP volumes, in mount order).
pub fn device_groups_contiguous(bucket: &[Rc<VolumeInfo>]) -> bool {
    let mut closed: HashSet<&str> = HashSet::new();
    let mut current: Option<&str> = None;

    for volume in bucket {
        let Some(path) = volume.device_path() else {
            // Volumes without a device path (archives, MTP) end any open
            // run but never violate contiguity themselves.
            if let Some(open) = current.take() {
                closed.insert(open);
            }
            continue;
        };
        if current == Some(path) {
            continue;
        }
        if let Some(open) = current.take() {
            closed.insert(open);
        }
        if closed.contains(path) {
            return false;
        }
        current = Some(path);
    }
    true
}

/// Assert the grouping precondition on a freshly built removable bucket.
///
/// Debug builds abort on violation; release builds log and keep the
/// source order untouched, since no recovery policy is defined.
pub(crate) fn assert_device_grouping(bucket: &[Rc<VolumeInfo>]) {
    if !device_groups_contiguous(bucket) {
        log::warn!("volume source interleaved partitions of one device; keeping source order");
        debug_assert!(false, "volume source interleaved device partitions");
    }
}
