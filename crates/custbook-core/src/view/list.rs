// ── Customer list screen ──

use std::sync::Arc;

use tracing::warn;

use super::ViewScope;
use crate::error::CoreError;
use crate::model::{Customer, CustomerId};
use crate::store::CustomerStore;

const LOAD_FAILED: &str = "Error fetching customers";
const DELETE_FAILED: &str = "Failed to delete customer";

/// All customers, filtered by a search query.
pub struct ListView<S> {
    store: Arc<S>,
    scope: ViewScope,
    customers: Vec<Customer>,
    query: String,
    loading: bool,
    message: Option<String>,
}

impl<S: CustomerStore> ListView<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_scope(store, ViewScope::new())
    }

    pub fn with_scope(store: Arc<S>, scope: ViewScope) -> Self {
        Self {
            store,
            scope,
            customers: Vec::new(),
            query: String::new(),
            loading: false,
            message: None,
        }
    }

    pub fn scope(&self) -> &ViewScope {
        &self.scope
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Everything fetched by the last successful load, unfiltered.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Customers matching the current query, in server order.
    pub fn visible(&self) -> Vec<&Customer> {
        self.customers
            .iter()
            .filter(|c| c.matches(&self.query))
            .collect()
    }

    /// Fetch the full list. On failure the previous list stays in place.
    pub async fn load(&mut self) -> Result<(), CoreError> {
        self.loading = true;
        let result = self.scope.guard(self.store.list()).await;
        self.loading = false;

        match result {
            Ok(customers) => {
                self.customers = customers;
                self.message = None;
                Ok(())
            }
            Err(CoreError::Cancelled) => Err(CoreError::Cancelled),
            Err(e) => {
                warn!(error = %e, "customer list load failed");
                self.message = Some(LOAD_FAILED.to_owned());
                Err(e)
            }
        }
    }

    /// Delete a customer and drop it from the list once the store agrees.
    pub async fn delete(&mut self, id: &CustomerId) -> Result<(), CoreError> {
        match self.scope.guard(self.store.delete(id)).await {
            Ok(()) => {
                self.customers.retain(|c| c.id.as_ref() != Some(id));
                self.message = None;
                Ok(())
            }
            Err(CoreError::Cancelled) => Err(CoreError::Cancelled),
            Err(e) => {
                warn!(%id, error = %e, "customer delete failed");
                self.message = Some(DELETE_FAILED.to_owned());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::store::fake::{FakeStore, Op, sample};

    fn two_customers() -> Arc<FakeStore> {
        Arc::new(FakeStore::with(vec![
            sample("c-001", "Asha", 1),
            sample("c-002", "Priya", 2),
        ]))
    }

    #[tokio::test]
    async fn load_then_search() {
        let mut view = ListView::new(two_customers());
        view.load().await.unwrap();
        assert_eq!(view.customers().len(), 2);

        view.set_query("PRI");
        let visible = view.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].first_name, "Priya");

        view.set_query("");
        assert_eq!(view.visible().len(), 2);
    }

    #[tokio::test]
    async fn load_failure_sets_message_and_keeps_previous_list() {
        let store = two_customers();
        let mut view = ListView::new(Arc::clone(&store));
        view.load().await.unwrap();

        store.fail(Op::List);
        assert!(view.load().await.is_err());
        assert_eq!(view.error_message(), Some("Error fetching customers"));
        assert_eq!(view.customers().len(), 2);
        assert!(!view.is_loading());
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = two_customers();
        let mut view = ListView::new(Arc::clone(&store));
        view.load().await.unwrap();

        let id = CustomerId::new("c-001").unwrap();
        view.delete(&id).await.unwrap();
        assert_eq!(view.customers().len(), 1);
        assert_eq!(store.count(), 1);
    }

    #[tokio::test]
    async fn failed_delete_leaves_list_unchanged() {
        let store = two_customers();
        let mut view = ListView::new(Arc::clone(&store));
        view.load().await.unwrap();
        store.fail(Op::Delete);

        let id = CustomerId::new("c-001").unwrap();
        assert!(view.delete(&id).await.is_err());
        assert_eq!(view.customers().len(), 2);
        assert_eq!(view.error_message(), Some("Failed to delete customer"));
    }

    #[tokio::test]
    async fn unmounted_view_ignores_late_results() {
        let store = two_customers();
        store.stall(Op::List);
        let mut view = ListView::new(store);
        let handle = view.scope().handle();

        let unmount = async {
            tokio::task::yield_now().await;
            handle.unmount();
        };
        let (result, ()) = tokio::join!(view.load(), unmount);

        assert!(matches!(result, Err(CoreError::Cancelled)));
        assert!(view.customers().is_empty());
        assert_eq!(view.error_message(), None);
    }
}
