// ── Contact-field edit screen ──

use std::sync::Arc;

use tracing::{info, warn};

use super::ViewScope;
use crate::error::CoreError;
use crate::model::{Customer, CustomerId};
use crate::route::Route;
use crate::store::CustomerStore;
use crate::validation;
use crate::workflow::{SubmitForm, SubmitPhase};

const LOAD_FAILED: &str = "Error fetching customer data";
const UPDATE_FAILED: &str = "Error updating customer";

/// Edits first/last name, phone, and email of an existing customer.
///
/// Addresses ride along unchanged in the full-record update.
pub struct UpdateView<S> {
    store: Arc<S>,
    scope: ViewScope,
    id: CustomerId,
    customer: Option<Customer>,
    form: SubmitForm,
    loading: bool,
}

impl<S: CustomerStore> UpdateView<S> {
    pub fn new(store: Arc<S>, id: CustomerId) -> Self {
        Self::with_scope(store, id, ViewScope::new())
    }

    pub fn with_scope(store: Arc<S>, id: CustomerId, scope: ViewScope) -> Self {
        Self {
            store,
            scope,
            id,
            customer: None,
            form: SubmitForm::new(),
            loading: false,
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Editable record. `None` until loaded.
    pub fn customer_mut(&mut self) -> Option<&mut Customer> {
        self.customer.as_mut()
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

    pub async fn load(&mut self) -> Result<(), CoreError> {
        self.loading = true;
        let result = self.scope.guard(self.store.get(&self.id)).await;
        self.loading = false;

        match result {
            Ok(customer) => {
                self.customer = Some(customer);
                self.form.clear_message();
                Ok(())
            }
            Err(CoreError::Cancelled) => Err(CoreError::Cancelled),
            Err(e) => {
                warn!(id = %self.id, error = %e, "customer fetch failed");
                self.form.notice(LOAD_FAILED);
                Err(e)
            }
        }
    }

    /// Validate the contact fields and send the full record.
    /// Navigates to the profile on success.
    pub async fn submit(&mut self) -> Result<Route, CoreError> {
        let Some(current) = self.customer.as_ref() else {
            self.form.notice(CoreError::NotLoaded.to_string());
            return Err(CoreError::NotLoaded);
        };

        self.form.begin_validation()?;
        if let Err(e) = validation::validate_contact(current.contact()) {
            self.form.reject(e);
            return Err(e.into());
        }

        let outgoing = current.clone();
        let submission = self.form.begin_submit();
        match self.scope.guard(self.store.update(&self.id, &outgoing)).await {
            Ok(echo) => {
                info!(id = %self.id, "customer contact details updated");
                self.customer = Some(echo.unwrap_or(outgoing));
                let next = Route::Profile(self.id.clone());
                submission.succeed(next.clone());
                Ok(next)
            }
            Err(CoreError::Cancelled) => {
                submission.abandon();
                Err(CoreError::Cancelled)
            }
            Err(e) => {
                warn!(id = %self.id, error = %e, "customer update failed");
                submission.fail(UPDATE_FAILED);
                Err(e)
            }
        }
    }
}
