// ── Customer profile screen ──
//
// Shows one customer and edits its address list. Every edit is computed
// on a copy of the list, sent as a full-record update, and only applied
// locally once the store accepts it.

use std::sync::Arc;

use tracing::{info, warn};

use super::ViewScope;
use crate::error::CoreError;
use crate::model::{Address, AddressBook, AddressIndexError, Customer, CustomerId};
use crate::route::Route;
use crate::store::CustomerStore;
use crate::validation::{self, AddressCheck};
use crate::workflow::{SubmitForm, SubmitPhase};

const LOAD_FAILED: &str = "Error fetching customer data";
const UPDATE_FAILED: &str = "Error updating customer";
const REMOVE_FAILED: &str = "Error removing address";

/// The inline address form on the profile screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AddressEditor {
    #[default]
    Closed,
    /// New address, appended on save.
    Adding(Address),
    /// Edit of the address at `index`, replaced on save.
    Updating { index: usize, draft: Address },
}

impl AddressEditor {
    pub fn draft(&self) -> Option<&Address> {
        match self {
            Self::Closed => None,
            Self::Adding(draft) | Self::Updating { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut Address> {
        match self {
            Self::Closed => None,
            Self::Adding(draft) | Self::Updating { draft, .. } => Some(draft),
        }
    }
}

pub struct ProfileView<S> {
    store: Arc<S>,
    scope: ViewScope,
    id: Option<CustomerId>,
    customer: Option<Customer>,
    editor: AddressEditor,
    form: SubmitForm,
    loading: bool,
}

impl<S: CustomerStore> ProfileView<S> {
    /// `id` comes from the route; `None` is reported on [`load`](Self::load).
    pub fn new(store: Arc<S>, id: Option<CustomerId>) -> Self {
        Self::with_scope(store, id, ViewScope::new())
    }

    pub fn with_scope(store: Arc<S>, id: Option<CustomerId>, scope: ViewScope) -> Self {
        Self {
            store,
            scope,
            id,
            customer: None,
            editor: AddressEditor::Closed,
            form: SubmitForm::new(),
            loading: false,
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> &SubmitPhase {
        self.form.phase()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.form.error_message()
    }

    // ── Loading ──────────────────────────────────────────────────────

    pub async fn load(&mut self) -> Result<(), CoreError> {
        let Some(id) = self.id.clone() else {
            self.form.notice(CoreError::MissingId.to_string());
            return Err(CoreError::MissingId);
        };

        self.loading = true;
        let result = self.scope.guard(self.store.get(&id)).await;
        self.loading = false;

        match result {
            Ok(customer) => {
                self.customer = Some(customer);
                self.form.clear_message();
                Ok(())
            }
            Err(CoreError::Cancelled) => Err(CoreError::Cancelled),
            Err(e) => {
                warn!(%id, error = %e, "customer fetch failed");
                self.form.notice(LOAD_FAILED);
                Err(e)
            }
        }
    }

    // ── Address editor ───────────────────────────────────────────────

    pub fn editor(&self) -> &AddressEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut AddressEditor {
        &mut self.editor
    }

    /// Open a blank add form.
    pub fn open_add(&mut self) {
        self.editor = AddressEditor::Adding(Address::default());
    }

    /// Open the edit form pre-filled with the address at `index`.
    pub fn open_update(&mut self, index: usize) -> Result<(), CoreError> {
        let customer = self.customer.as_ref().ok_or(CoreError::NotLoaded)?;
        let book = &customer.addresses;
        let draft = book
            .get(index)
            .cloned()
            .ok_or(AddressIndexError {
                index,
                len: book.len(),
            })?;
        self.editor = AddressEditor::Updating { index, draft };
        Ok(())
    }

    pub fn close_editor(&mut self) {
        self.editor = AddressEditor::Closed;
    }

    /// Save whatever the editor holds. Closes it on success.
    pub async fn save_editor(&mut self) -> Result<(), CoreError> {
        let result = match self.editor.clone() {
            AddressEditor::Closed => return Ok(()),
            AddressEditor::Adding(draft) => self.add_address(draft).await,
            AddressEditor::Updating { index, draft } => self.update_address(index, draft).await,
        };
        if result.is_ok() {
            self.editor = AddressEditor::Closed;
        }
        result
    }

    // ── Address mutations ────────────────────────────────────────────

    pub async fn add_address(&mut self, address: Address) -> Result<(), CoreError> {
        let (id, mut book) = self.editable()?;
        self.check(&address, book.len())?;
        book.append(address);
        self.commit(id, book, UPDATE_FAILED).await
    }

    pub async fn update_address(&mut self, index: usize, address: Address) -> Result<(), CoreError> {
        let (id, mut book) = self.editable()?;
        self.check(&address, index)?;
        if let Err(e) = book.replace_at(index, address) {
            self.form.reject_index(&e);
            return Err(e.into());
        }
        self.commit(id, book, UPDATE_FAILED).await
    }

    pub async fn remove_address(&mut self, index: usize) -> Result<(), CoreError> {
        let (id, mut book) = self.editable()?;
        self.form.begin_validation()?;
        if let Err(e) = book.remove_at(index) {
            self.form.reject_index(&e);
            return Err(e.into());
        }
        self.commit(id, book, REMOVE_FAILED).await
    }

    /// Make the address at `index` the only primary one.
    pub async fn mark_primary(&mut self, index: usize) -> Result<(), CoreError> {
        let (id, mut book) = self.editable()?;
        self.form.begin_validation()?;
        if let Err(e) = book.mark_primary(index) {
            self.form.reject_index(&e);
            return Err(e.into());
        }
        self.commit(id, book, UPDATE_FAILED).await
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Id and a working copy of the address list, or why there are none.
    fn editable(&mut self) -> Result<(CustomerId, AddressBook), CoreError> {
        let Some(customer) = self.customer.as_ref() else {
            self.form.notice(CoreError::NotLoaded.to_string());
            return Err(CoreError::NotLoaded);
        };
        let Some(id) = customer.id.clone().or_else(|| self.id.clone()) else {
            self.form.notice(CoreError::MissingId.to_string());
            return Err(CoreError::MissingId);
        };
        Ok((id, customer.addresses.clone()))
    }

    fn check(&mut self, address: &Address, index: usize) -> Result<(), CoreError> {
        self.form.begin_validation()?;
        if let Err(e) = validation::validate_address(address, index, AddressCheck::ProfileEdit) {
            self.form.reject(e);
            return Err(e.into());
        }
        Ok(())
    }

    /// Send the full record with `book` as its addresses. Local state
    /// changes only on success, preferring the server's echo.
    async fn commit(
        &mut self,
        id: CustomerId,
        book: AddressBook,
        failure: &'static str,
    ) -> Result<(), CoreError> {
        let outgoing = match self.customer.as_ref() {
            Some(current) => current.with_addresses(book),
            None => {
                self.form.abandon();
                return Err(CoreError::NotLoaded);
            }
        };

        let submission = self.form.begin_submit();
        match self.scope.guard(self.store.update(&id, &outgoing)).await {
            Ok(echo) => {
                let reconciled = echo.unwrap_or(outgoing);
                info!(%id, addresses = reconciled.addresses.len(), "profile addresses saved");
                self.customer = Some(reconciled);
                submission.succeed(Route::Profile(id));
                Ok(())
            }
            Err(CoreError::Cancelled) => {
                submission.abandon();
                Err(CoreError::Cancelled)
            }
            Err(e) => {
                warn!(%id, error = %e, "address change rejected");
                submission.fail(failure);
                Err(e)
            }
        }
    }
}
