// ── Controller ──
//
// Entry point for consumers. Owns the one configured store and hands out
// screen view models. Every view's scope is a child of the controller's
// token, so `shutdown` unmounts all of them at once.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::CoreError;
use crate::model::CustomerId;
use crate::route::Route;
use crate::store::RemoteStore;
use crate::view::{CreateView, ListView, ProfileView, UnmountHandle, UpdateView, ViewScope};

/// A screen opened by route.
pub enum Screen {
    List(ListView<RemoteStore>),
    Create(CreateView<RemoteStore>),
    Profile(ProfileView<RemoteStore>),
    Update(UpdateView<RemoteStore>),
}

impl Screen {
    pub fn scope(&self) -> &ViewScope {
        match self {
            Self::List(v) => v.scope(),
            Self::Create(v) => v.scope(),
            Self::Profile(v) => v.scope(),
            Self::Update(v) => v.scope(),
        }
    }
}

pub struct Controller {
    config: StoreConfig,
    store: Arc<RemoteStore>,
    cancel: CancellationToken,
}

impl Controller {
    /// Build the HTTP client. Nothing is fetched until a view loads.
    pub fn new(config: StoreConfig) -> Result<Self, CoreError> {
        let store = RemoteStore::connect(&config)?;
        debug!(api_url = %config.api_url, timeout = ?config.timeout, "controller ready");
        Ok(Self {
            config,
            store: Arc::new(store),
            cancel: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<RemoteStore> {
        &self.store
    }

    // ── Screens ──────────────────────────────────────────────────────

    pub fn list_view(&self) -> ListView<RemoteStore> {
        ListView::with_scope(Arc::clone(&self.store), self.scope())
    }

    pub fn create_view(&self) -> CreateView<RemoteStore> {
        CreateView::with_scope(Arc::clone(&self.store), self.scope())
    }

    pub fn profile_view(&self, id: Option<CustomerId>) -> ProfileView<RemoteStore> {
        ProfileView::with_scope(Arc::clone(&self.store), id, self.scope())
    }

    pub fn update_view(&self, id: CustomerId) -> UpdateView<RemoteStore> {
        UpdateView::with_scope(Arc::clone(&self.store), id, self.scope())
    }

    pub fn open(&self, route: &Route) -> Screen {
        match route {
            Route::List => Screen::List(self.list_view()),
            Route::Create => Screen::Create(self.create_view()),
            Route::Profile(id) => Screen::Profile(self.profile_view(Some(id.clone()))),
            Route::Update(id) => Screen::Update(self.update_view(id.clone())),
        }
    }

    /// Unmount every view handed out so far.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    /// A handle that shuts the controller down from another task.
    pub fn unmount_handle(&self) -> UnmountHandle {
        UnmountHandle::from_token(self.cancel.clone())
    }

    fn scope(&self) -> ViewScope {
        ViewScope::child_of(&self.cancel)
    }
}
