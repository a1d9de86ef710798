// In-memory store for view-model tests.

use std::sync::Mutex;

use super::CustomerStore;
use crate::error::CoreError;
use crate::model::{Customer, CustomerId};

/// Which operation a test wants to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    List,
    Get,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct State {
    customers: Vec<Customer>,
    next_id: u32,
    failing: Vec<Op>,
    stalled: Vec<Op>,
    echo_updates: bool,
    calls: Vec<String>,
}

/// Records every call; failures and stalls are opt-in per operation.
pub(crate) struct FakeStore {
    state: Mutex<State>,
}

impl FakeStore {
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(State {
                echo_updates: true,
                next_id: 1,
                ..State::default()
            }),
        }
    }

    pub(crate) fn with(customers: Vec<Customer>) -> Self {
        let store = Self::new();
        store.lock().customers = customers;
        store
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    pub(crate) fn fail(&self, op: Op) {
        self.lock().failing.push(op);
    }

    /// The operation never completes.
    pub(crate) fn stall(&self, op: Op) {
        self.lock().stalled.push(op);
    }

    /// Let a stalled operation complete again.
    pub(crate) fn resume(&self, op: Op) {
        self.lock().stalled.retain(|o| *o != op);
    }

    /// Answer updates with an empty body.
    pub(crate) fn silent_updates(&self) {
        self.lock().echo_updates = false;
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.lock().calls.clone()
    }

    pub(crate) fn snapshot(&self, id: &str) -> Option<Customer> {
        self.lock()
            .customers
            .iter()
            .find(|c| c.id.as_ref().is_some_and(|cid| cid.as_str() == id))
            .cloned()
    }

    pub(crate) fn count(&self) -> usize {
        self.lock().customers.len()
    }

    /// Log the call, then report whether it should stall or fail.
    fn enter(&self, op: Op, call: String) -> (bool, bool) {
        let mut state = self.lock();
        state.calls.push(call);
        (state.stalled.contains(&op), state.failing.contains(&op))
    }

    async fn gate(&self, op: Op, call: String) -> Result<(), CoreError> {
        let (stall, fail) = self.enter(op, call);
        if stall {
            std::future::pending::<()>().await;
        }
        if fail {
            return Err(CoreError::Transport {
                message: "injected failure".into(),
                status: Some(500),
            });
        }
        Ok(())
    }
}

impl CustomerStore for FakeStore {
    async fn list(&self) -> Result<Vec<Customer>, CoreError> {
        self.gate(Op::List, "list".into()).await?;
        Ok(self.lock().customers.clone())
    }

    async fn get(&self, id: &CustomerId) -> Result<Customer, CoreError> {
        self.gate(Op::Get, format!("get {id}")).await?;
        self.snapshot(id.as_str()).ok_or_else(|| CoreError::NotFound {
            identifier: id.to_string(),
        })
    }

    async fn create(&self, draft: &Customer) -> Result<Customer, CoreError> {
        self.gate(Op::Create, "create".into()).await?;
        let mut state = self.lock();
        let mut created = draft.clone();
        created.id = CustomerId::new(format!("c-{:03}", state.next_id));
        state.next_id += 1;
        state.customers.push(created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: &CustomerId,
        customer: &Customer,
    ) -> Result<Option<Customer>, CoreError> {
        self.gate(Op::Update, format!("update {id}")).await?;
        let mut state = self.lock();
        let echo = state.echo_updates;
        let slot = state
            .customers
            .iter_mut()
            .find(|c| c.id.as_ref() == Some(id))
            .ok_or_else(|| CoreError::NotFound {
                identifier: id.to_string(),
            })?;
        *slot = Customer {
            id: Some(id.clone()),
            ..customer.clone()
        };
        Ok(echo.then(|| slot.clone()))
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), CoreError> {
        self.gate(Op::Delete, format!("delete {id}")).await?;
        let mut state = self.lock();
        let before = state.customers.len();
        state.customers.retain(|c| c.id.as_ref() != Some(id));
        if state.customers.len() == before {
            return Err(CoreError::NotFound {
                identifier: id.to_string(),
            });
        }
        Ok(())
    }
}

/// A valid, persisted customer with `n` complete addresses.
pub(crate) fn sample(id: &str, first: &str, n: usize) -> Customer {
    use crate::model::{Address, AddressBook};

    let addresses = (0..n)
        .map(|i| Address::new(format!("{} Main Road", i + 1), "Warangal", "Telangana", "506002"))
        .collect::<AddressBook>();
    Customer {
        id: CustomerId::new(id),
        first_name: first.into(),
        last_name: "Rao".into(),
        phone_number: "9876543210".into(),
        email_address: format!("{}@example.com", first.to_lowercase()),
        addresses,
    }
}
