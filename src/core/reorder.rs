//! Merge/order engine: folds the volume list, shortcut list, recent item
//! and synthetic root into one flat, sectioned sequence.
//!
//! Every recomputation is a full rebuild from current source state, but
//! wrapper items are reused through a cache keyed by stable logical
//! identity (volume id, shortcut URL), so a diffing observer sees minimal
//! change.

use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::core::{classifier, grouper};
use crate::models::{EntryRc, NavigationItem, NavigationKey, VolumeInfo, VolumeType};

/// Wrapper cache reused across rebuilds.
pub(crate) type ItemCache = HashMap<NavigationKey, Rc<NavigationItem>>;

/// Build the ordered navigation sequence.
///
/// Order within sections:
/// - TOP: recent item, media-view volumes in mount order, shortcuts
///   sorted case-sensitively by label (stable, so equal labels keep
///   insertion order).
/// - MY_FILES: the synthetic root, exactly once.
/// - CLOUD: the drive volume, then provided volumes in mount order.
/// - REMOVABLE: removable/archive/MTP volumes exactly in mount order;
///   this bucket is never re-sorted, which keeps partitions of one
///   physical device adjacent (see [`grouper`]).
///
/// Sections concatenate in the fixed TOP, MY_FILES, CLOUD, REMOVABLE
/// order. Volumes the classifier rejects are logged and skipped.
pub(crate) fn reorder(
    volumes: &[Rc<VolumeInfo>],
    shortcuts: &[EntryRc],
    recent: Option<&Rc<NavigationItem>>,
    my_files: &Rc<NavigationItem>,
    cache: &mut ItemCache,
) -> Vec<Rc<NavigationItem>> {
    let mut drive: Option<Rc<VolumeInfo>> = None;
    let mut media_views: Vec<Rc<VolumeInfo>> = Vec::new();
    let mut provided: Vec<Rc<VolumeInfo>> = Vec::new();
    let mut removable: Vec<Rc<VolumeInfo>> = Vec::new();

    for volume in volumes {
        match volume.volume_type() {
            VolumeType::Drive => {
                if drive.is_none() {
                    drive = Some(Rc::clone(volume));
                } else {
                    log::debug!("ignoring extra drive volume '{}'", volume.volume_id());
                }
            }
            VolumeType::MediaView => media_views.push(Rc::clone(volume)),
            VolumeType::Provided => provided.push(Rc::clone(volume)),
            VolumeType::Removable | VolumeType::Archive | VolumeType::Mtp => {
                removable.push(Rc::clone(volume));
            }
            // Absorbed into the synthetic root by the my-files builder.
            VolumeType::Downloads | VolumeType::AndroidFiles | VolumeType::Crostini => {}
        }
    }

    grouper::assert_device_grouping(&removable);

    let mut shortcut_items: Vec<Rc<NavigationItem>> = shortcuts
        .iter()
        .map(|entry| shortcut_item(cache, entry))
        .collect();
    // Stable sort: equal labels keep their insertion order.
    shortcut_items.sort_by(|a, b| a.label().cmp(b.label()));

    let mut ordered: Vec<Rc<NavigationItem>> = Vec::new();
    if let Some(item) = recent {
        push_classified(&mut ordered, Rc::clone(item));
    }
    for volume in &media_views {
        push_classified(&mut ordered, volume_item(cache, volume));
    }
    for item in shortcut_items {
        push_classified(&mut ordered, item);
    }
    push_classified(&mut ordered, Rc::clone(my_files));
    if let Some(volume) = &drive {
        push_classified(&mut ordered, volume_item(cache, volume));
    }
    for volume in &provided {
        push_classified(&mut ordered, volume_item(cache, volume));
    }
    for volume in &removable {
        push_classified(&mut ordered, volume_item(cache, volume));
    }

    prune_cache(cache, &ordered);
    ordered
}

/// Classify, stamp the section and append; skip items the closed type
/// catalog rejects (a caller bug, surfaced in the log rather than by
/// misplacing the row).
fn push_classified(ordered: &mut Vec<Rc<NavigationItem>>, item: Rc<NavigationItem>) {
    match classifier::classify(&item) {
        Ok(section) => {
            item.set_section(section);
            ordered.push(item);
        }
        Err(err) => log::warn!("skipping navigation item '{}': {err}", item.label()),
    }
}

/// Wrapper for `volume`, reused from the cache while the cached wrapper
/// still points at the same volume record.
fn volume_item(cache: &mut ItemCache, volume: &Rc<VolumeInfo>) -> Rc<NavigationItem> {
    let key = NavigationKey::Volume(volume.volume_id().to_string());
    if let Some(existing) = cache.get(&key) {
        let same_record = existing
            .volume_info()
            .is_some_and(|cached| Rc::ptr_eq(cached, volume));
        if same_record {
            return Rc::clone(existing);
        }
    }
    let item = NavigationItem::for_volume(Rc::clone(volume));
    cache.insert(key, Rc::clone(&item));
    item
}

/// Wrapper for a shortcut entry, reused from the cache by URL.
fn shortcut_item(cache: &mut ItemCache, entry: &EntryRc) -> Rc<NavigationItem> {
    let key = NavigationKey::Shortcut(entry.to_url());
    if let Some(existing) = cache.get(&key) {
        return Rc::clone(existing);
    }
    let item = NavigationItem::for_shortcut(Rc::clone(entry));
    cache.insert(key, Rc::clone(&item));
    item
}

/// Drop cache entries whose logical key no longer appears in the list, so
/// unmounted volumes and deleted shortcuts do not leak wrappers.
fn prune_cache(cache: &mut ItemCache, ordered: &[Rc<NavigationItem>]) {
    let live: HashSet<NavigationKey> = ordered.iter().map(|item| item.key()).collect();
    cache.retain(|key, _| live.contains(key));
}
