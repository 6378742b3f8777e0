//! Section classifier: maps a navigation item to its display bucket.

use crate::core::ModelError;
use crate::models::{FakeItemType, NavigationItem, NavigationItemKind, Section, VolumeType};

/// Classify `item` into a [`Section`].
///
/// Rules in priority order:
/// 1. Recent fake item and media-view volumes go [`Section::Top`].
/// 2. Shortcuts go [`Section::Top`].
/// 3. The synthetic My Files root goes [`Section::MyFiles`].
/// 4. Drive and provided volumes go [`Section::Cloud`].
/// 5. Removable, archive and MTP volumes go [`Section::Removable`].
///
/// The catalog is closed: everything else is unclassifiable and must have
/// been absorbed into My Files (downloads, Android, Crostini) before the
/// engine classifies. Reaching the error here is a programming error in
/// the caller, not a recoverable state.
pub fn classify(item: &NavigationItem) -> Result<Section, ModelError> {
    match item.kind() {
        NavigationItemKind::Fake {
            item_type: FakeItemType::Recent,
            ..
        } => Ok(Section::Top),
        NavigationItemKind::Shortcut(_) => Ok(Section::Top),
        NavigationItemKind::EntryList(_) => Ok(Section::MyFiles),
        NavigationItemKind::Volume(volume) => match volume.volume_type() {
            VolumeType::MediaView => Ok(Section::Top),
            VolumeType::Drive | VolumeType::Provided => Ok(Section::Cloud),
            VolumeType::Removable | VolumeType::Archive | VolumeType::Mtp => {
                Ok(Section::Removable)
            }
            volume_type @ (VolumeType::Downloads
            | VolumeType::AndroidFiles
            | VolumeType::Crostini) => Err(ModelError::UnclassifiableVolume {
                volume_id: volume.volume_id().to_string(),
                volume_type,
            }),
        },
        // Non-recent fake items (Crostini, Android apps) only ever render
        // as children of My Files, never as top-level rows.
        NavigationItemKind::Fake { item_type, .. } => Err(ModelError::UnclassifiableVolume {
            volume_id: format!("fake:{item_type:?}"),
            volume_type: match item_type {
                FakeItemType::Crostini => VolumeType::Crostini,
                _ => VolumeType::AndroidFiles,
            },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryList, EntryRc, FakeEntry, VolumeInfo};
    use std::rc::Rc;

    fn volume_item(volume_type: VolumeType, id: &str) -> Rc<NavigationItem> {
        NavigationItem::for_volume(VolumeInfo::new(
            volume_type,
            id,
            id,
            None,
            FakeEntry::new(id, format!("filesystem:{id}/")) as EntryRc,
        ))
    }

    #[test]
    fn test_top_section() {
        let recent = NavigationItem::for_fake(
            "recent-label",
            FakeItemType::Recent,
            FakeEntry::new("recent-label", "fake-entry://recent") as EntryRc,
        );
        assert_eq!(classify(&recent).unwrap(), Section::Top);

        let media = volume_item(VolumeType::MediaView, "media_view:images_root");
        assert_eq!(classify(&media).unwrap(), Section::Top);

        let shortcut = NavigationItem::for_shortcut(FakeEntry::new(
            "shortcut",
            "filesystem:drive/root/shortcut",
        ));
        assert_eq!(classify(&shortcut).unwrap(), Section::Top);
    }

    #[test]
    fn test_my_files_section() {
        let my_files =
            NavigationItem::for_entry_list(EntryList::new("My files", "entry-list://my-files"));
        assert_eq!(classify(&my_files).unwrap(), Section::MyFiles);
    }

    #[test]
    fn test_cloud_section() {
        assert_eq!(
            classify(&volume_item(VolumeType::Drive, "drive")).unwrap(),
            Section::Cloud
        );
        assert_eq!(
            classify(&volume_item(VolumeType::Provided, "provided:prov1")).unwrap(),
            Section::Cloud
        );
    }

    #[test]
    fn test_removable_section() {
        for (volume_type, id) in [
            (VolumeType::Removable, "removable:hoge"),
            (VolumeType::Archive, "archive:a-rar"),
            (VolumeType::Mtp, "mtp:a-phone"),
        ] {
            assert_eq!(
                classify(&volume_item(volume_type, id)).unwrap(),
                Section::Removable
            );
        }
    }

    #[test]
    fn test_absorbed_types_are_errors() {
        for (volume_type, id) in [
            (VolumeType::Downloads, "downloads:Downloads"),
            (VolumeType::AndroidFiles, "android_files:droid"),
            (VolumeType::Crostini, "crostini:termina"),
        ] {
            let err = classify(&volume_item(volume_type, id)).unwrap_err();
            assert!(matches!(err, ModelError::UnclassifiableVolume { .. }));
        }
    }
}
