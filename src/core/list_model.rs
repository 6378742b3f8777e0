//! Observable navigation list model: the read-only, list-shaped facade
//! the rendering layer binds to.
//!
//! The model owns no mutation methods. It subscribes to the volume and
//! shortcut sources, rebuilds the full ordered sequence on every source
//! notification (and on fake-item reassignment), and notifies its own
//! observers only when the sequence actually changed. Item identity is
//! preserved across rebuilds so observers can diff by instance.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::reorder::{reorder, ItemCache};
use crate::core::{ModelError, MyFilesBuilder, NavigationFlags};
use crate::models::{
    NavigationItem, NavigationItemKind, ShortcutList, VolumeList,
};
use crate::utils::{ListenerKey, Listeners};

/// The navigation list model. Constructed once per session and mutated
/// only through its sources; discarded with the owning UI.
pub struct NavigationListModel {
    volumes: Rc<VolumeList>,
    shortcuts: Rc<ShortcutList>,
    builder: MyFilesBuilder,
    recent: RefCell<Option<Rc<NavigationItem>>>,
    linux_files: RefCell<Option<Rc<NavigationItem>>>,
    android_apps: RefCell<Option<Rc<NavigationItem>>>,
    my_files: RefCell<Option<Rc<NavigationItem>>>,
    items: RefCell<Vec<Rc<NavigationItem>>>,
    cache: RefCell<ItemCache>,
    listeners: Listeners,
    rebuilding: Cell<bool>,
    rebuild_queued: Cell<bool>,
    volume_subscription: Cell<Option<ListenerKey>>,
    shortcut_subscription: Cell<Option<ListenerKey>>,
}

impl NavigationListModel {
    /// Build the model from its four inputs and compute the initial
    /// sequence. The model keeps observing both sources until dropped.
    pub fn new(
        volumes: Rc<VolumeList>,
        shortcuts: Rc<ShortcutList>,
        recent: Option<Rc<NavigationItem>>,
        flags: NavigationFlags,
    ) -> Rc<Self> {
        let model = Rc::new(Self {
            volumes: Rc::clone(&volumes),
            shortcuts: Rc::clone(&shortcuts),
            builder: MyFilesBuilder::new(flags),
            recent: RefCell::new(recent),
            linux_files: RefCell::new(None),
            android_apps: RefCell::new(None),
            my_files: RefCell::new(None),
            items: RefCell::new(Vec::new()),
            cache: RefCell::new(ItemCache::new()),
            listeners: Listeners::new(),
            rebuilding: Cell::new(false),
            rebuild_queued: Cell::new(false),
            volume_subscription: Cell::new(None),
            shortcut_subscription: Cell::new(None),
        });

        let weak = Rc::downgrade(&model);
        let key = volumes.subscribe(move || {
            if let Some(model) = weak.upgrade() {
                model.rebuild();
            }
        });
        model.volume_subscription.set(Some(key));

        let weak = Rc::downgrade(&model);
        let key = shortcuts.subscribe(move || {
            if let Some(model) = weak.upgrade() {
                model.rebuild();
            }
        });
        model.shortcut_subscription.set(Some(key));

        model.rebuild();
        model
    }

    /// Number of navigation items.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    /// Whether the list is empty (only before the first rebuild; a built
    /// list always holds at least the My Files item).
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Item at `index`; out-of-range access is an error, never a panic.
    pub fn item(&self, index: usize) -> Result<Rc<NavigationItem>, ModelError> {
        let items = self.items.borrow();
        items
            .get(index)
            .cloned()
            .ok_or(ModelError::IndexOutOfBounds {
                index,
                len: items.len(),
            })
    }

    /// Snapshot of the full ordered sequence.
    pub fn snapshot(&self) -> Vec<Rc<NavigationItem>> {
        self.items.borrow().clone()
    }

    /// Register a change observer, fired after any rebuild that altered
    /// the sequence.
    pub fn subscribe(&self, callback: impl Fn() + 'static) -> ListenerKey {
        self.listeners.subscribe(callback)
    }

    /// Remove a previously registered observer.
    pub fn unsubscribe(&self, key: ListenerKey) {
        self.listeners.unsubscribe(key);
    }

    /// The currently attached recent item.
    pub fn recent_item(&self) -> Option<Rc<NavigationItem>> {
        self.recent.borrow().clone()
    }

    /// Attach or detach the recent pseudo-entry and recompute.
    pub fn set_recent_item(&self, item: Option<Rc<NavigationItem>>) {
        *self.recent.borrow_mut() = item;
        self.rebuild();
    }

    /// The currently attached Linux-files item.
    pub fn linux_files_item(&self) -> Option<Rc<NavigationItem>> {
        self.linux_files.borrow().clone()
    }

    /// Attach or detach the Linux-files fake item (a My Files child) and
    /// recompute.
    pub fn set_linux_files_item(&self, item: Option<Rc<NavigationItem>>) {
        debug_assert!(
            item.as_ref()
                .is_none_or(|i| matches!(i.kind(), NavigationItemKind::Fake { .. })),
            "linux files item must be a fake item"
        );
        *self.linux_files.borrow_mut() = item;
        self.rebuild();
    }

    /// The currently attached Android-apps item.
    pub fn android_apps_item(&self) -> Option<Rc<NavigationItem>> {
        self.android_apps.borrow().clone()
    }

    /// Attach or detach the Android-apps fake item (a My Files child) and
    /// recompute.
    pub fn set_android_apps_item(&self, item: Option<Rc<NavigationItem>>) {
        debug_assert!(
            item.as_ref()
                .is_none_or(|i| matches!(i.kind(), NavigationItemKind::Fake { .. })),
            "android apps item must be a fake item"
        );
        *self.android_apps.borrow_mut() = item;
        self.rebuild();
    }

    /// Full recomputation from current source state.
    ///
    /// Not re-entrant: a rebuild requested while one is running (e.g. by
    /// a change observer mutating a source) is queued and executed after
    /// the current one completes, never interleaved.
    fn rebuild(&self) {
        if self.rebuilding.get() {
            self.rebuild_queued.set(true);
            return;
        }
        self.rebuilding.set(true);
        loop {
            self.rebuild_once();
            if !self.rebuild_queued.replace(false) {
                break;
            }
        }
        self.rebuilding.set(false);
    }

    fn rebuild_once(&self) {
        let volumes = self.volumes.snapshot();
        let shortcuts = self.shortcuts.snapshot();

        let android_apps = self
            .android_apps
            .borrow()
            .as_ref()
            .and_then(|item| item.entry());
        let crostini = self
            .linux_files
            .borrow()
            .as_ref()
            .and_then(|item| item.entry());
        let root = self.builder.build(&volumes, android_apps, crostini);

        // Wrap the synthetic root once; the wrapper must stay the same
        // instance for as long as the root does, since the rendering tree
        // locates My Files by identity.
        let my_files = {
            let mut slot = self.my_files.borrow_mut();
            match &*slot {
                Some(item)
                    if item
                        .entry_list()
                        .is_some_and(|list| Rc::ptr_eq(list, &root)) =>
                {
                    Rc::clone(item)
                }
                _ => {
                    let item = NavigationItem::for_entry_list(root);
                    *slot = Some(Rc::clone(&item));
                    item
                }
            }
        };

        let recent = self.recent.borrow().clone();
        let ordered = reorder(
            &volumes,
            &shortcuts,
            recent.as_ref(),
            &my_files,
            &mut self.cache.borrow_mut(),
        );

        let changed = {
            let current = self.items.borrow();
            current.len() != ordered.len()
                || current
                    .iter()
                    .zip(&ordered)
                    .any(|(old, new)| !Rc::ptr_eq(old, new))
        };
        *self.items.borrow_mut() = ordered;
        if changed {
            self.listeners.notify();
        }
    }
}

impl Drop for NavigationListModel {
    fn drop(&mut self) {
        if let Some(key) = self.volume_subscription.take() {
            self.volumes.unsubscribe(key);
        }
        if let Some(key) = self.shortcut_subscription.take() {
            self.shortcuts.unsubscribe(key);
        }
    }
}
