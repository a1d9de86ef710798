// ── New customer screen ──

use std::sync::Arc;

use tracing::{info, warn};

use super::ViewScope;
use crate::error::CoreError;
use crate::model::{Address, Customer};
use crate::route::Route;
use crate::store::CustomerStore;
use crate::validation::{self, AddressCheck};
use crate::workflow::{SubmitForm, SubmitPhase};

const CREATE_FAILED: &str = "Failed to create customer";

/// Draft customer being filled in, plus its submit state.
pub struct CreateView<S> {
    store: Arc<S>,
    scope: ViewScope,
    draft: Customer,
    form: SubmitForm,
}

impl<S: CustomerStore> CreateView<S> {
    /// Starts with blank contact fields and one empty address slot.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_scope(store, ViewScope::new())
    }

    pub fn with_scope(store: Arc<S>, scope: ViewScope) -> Self {
        Self {
            store,
            scope,
            draft: Customer::draft(),
            form: SubmitForm::new(),
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn draft(&self) -> &Customer {
        &self.draft
    }

    /// Editable draft. The id is ignored on submit.
    pub fn draft_mut(&mut self) -> &mut Customer {
        &mut self.draft
    }

    pub fn phase(&self) -> &SubmitPhase {
        self.form.phase()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.form.error_message()
    }

    /// Append an empty address slot and return its index.
    pub fn add_address_slot(&mut self) -> usize {
        self.draft.addresses.append(Address::default());
        self.draft.addresses.len() - 1
    }

    /// Validate, then create. Navigates back to the list on success.
    pub async fn submit(&mut self) -> Result<Customer, CoreError> {
        self.form.begin_validation()?;
        if let Err(e) = validation::validate_customer(&self.draft, AddressCheck::Creation) {
            self.form.reject(e);
            return Err(e.into());
        }

        let submission = self.form.begin_submit();
        match self.scope.guard(self.store.create(&self.draft)).await {
            Ok(created) => {
                info!(id = ?created.id, "customer created from form");
                submission.succeed(Route::List);
                Ok(created)
            }
            Err(CoreError::Cancelled) => {
                submission.abandon();
                Err(CoreError::Cancelled)
            }
            Err(e) => {
                warn!(error = %e, "customer create failed");
                submission.fail(CREATE_FAILED);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::fake::{FakeStore, Op};
    use crate::validation::ValidationError;

    fn fill_asha(view: &mut CreateView<FakeStore>) {
        let draft = view.draft_mut();
        draft.first_name = "Asha".into();
        draft.last_name = "Rao".into();
        draft.phone_number = "9876543210".into();
        draft.email_address = "asha.rao@example.com".into();
        *draft.addresses.get_mut(0).unwrap() =
            Address::new("12 MG Road", "Warangal", "Telangana", "506002");
    }

    #[tokio::test]
    async fn creates_and_routes_to_list() {
        let store = Arc::new(FakeStore::new());
        let mut view = CreateView::new(Arc::clone(&store));
        fill_asha(&mut view);

        let created = view.submit().await.unwrap();
        assert_eq!(created.id.as_ref().unwrap().as_str(), "c-001");
        assert_eq!(view.phase(), &SubmitPhase::Succeeded(Route::List));
        assert_eq!(store.calls(), vec!["create".to_owned()]);
    }

    #[tokio::test]
    async fn invalid_phone_never_reaches_store() {
        let store = Arc::new(FakeStore::new());
        let mut view = CreateView::new(Arc::clone(&store));
        fill_asha(&mut view);
        view.draft_mut().phone_number = "12345".into();

        let err = view.submit().await.unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::InvalidPhone)));
        assert_eq!(
            view.error_message(),
            Some("Phone number must contain exactly 10 digits")
        );
        assert_eq!(view.phase(), &SubmitPhase::Empty);
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn extra_blank_slot_blocks_submit() {
        let store = Arc::new(FakeStore::new());
        let mut view = CreateView::new(Arc::clone(&store));
        fill_asha(&mut view);
        assert_eq!(view.add_address_slot(), 1);

        let err = view.submit().await.unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::IncompleteAddress { index: 1 })
        ));
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn store_failure_keeps_draft() {
        let store = Arc::new(FakeStore::new());
        store.fail(Op::Create);
        let mut view = CreateView::new(Arc::clone(&store));
        fill_asha(&mut view);

        assert!(view.submit().await.is_err());
        assert_eq!(view.error_message(), Some("Failed to create customer"));
        assert_eq!(view.phase(), &SubmitPhase::Empty);
        assert_eq!(view.draft().first_name, "Asha");
        assert_eq!(store.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_submit_can_be_retried() {
        let store = Arc::new(FakeStore::new());
        store.stall(Op::Create);
        let mut view = CreateView::new(Arc::clone(&store));
        fill_asha(&mut view);

        let attempt = tokio::time::timeout(Duration::from_secs(1), view.submit()).await;
        assert!(attempt.is_err());
        assert_eq!(view.phase(), &SubmitPhase::Empty);

        store.resume(Op::Create);
        let created = view.submit().await.unwrap();
        assert_eq!(created.first_name, "Asha");
        assert_eq!(view.phase(), &SubmitPhase::Succeeded(Route::List));
        assert_eq!(store.calls(), vec!["create".to_owned(), "create".to_owned()]);
    }
}
