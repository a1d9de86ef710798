// ── Customer store contract ──
//
// The remote customer service, seen from the view models. Every method is
// one request; nothing is cached between calls.

mod remote;

#[cfg(test)]
pub(crate) mod fake;

use std::future::Future;

use crate::error::CoreError;
use crate::model::{Customer, CustomerId};

pub use remote::RemoteStore;

/// Read/write access to customer records.
pub trait CustomerStore: Send + Sync {
    /// All customers, in server order.
    fn list(&self) -> impl Future<Output = Result<Vec<Customer>, CoreError>> + Send;

    /// One customer. [`CoreError::NotFound`] when the id is unknown.
    fn get(&self, id: &CustomerId) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    /// Persist a draft. The returned customer carries the assigned id.
    fn create(
        &self,
        draft: &Customer,
    ) -> impl Future<Output = Result<Customer, CoreError>> + Send;

    /// Replace the whole record.
    ///
    /// `Ok(None)` means the server acknowledged without echoing the record;
    /// callers fall back to what they sent.
    fn update(
        &self,
        id: &CustomerId,
        customer: &Customer,
    ) -> impl Future<Output = Result<Option<Customer>, CoreError>> + Send;

    fn delete(&self, id: &CustomerId) -> impl Future<Output = Result<(), CoreError>> + Send;
}
