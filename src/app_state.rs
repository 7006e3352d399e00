//! Implements the structs that hold the state of the dashboard server.

use std::sync::{Arc, Mutex};

use crate::{Currency, RateTable, SavingsPlan, Transaction, stores::TransactionStore};

/// The mutable, in-memory session shared by all requests.
///
/// This is the explicit form of what the original dashboard kept as loose
/// globals: the display currency, the active savings plan, and the cached
/// transaction list. The cache is fully replaced on every refresh; nothing in
/// here survives a server restart.
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// The currency used for all conversions and labels.
    pub display_currency: Currency,
    /// The active savings plan, if any. Cleared when the user stops saving.
    pub savings_plan: Option<SavingsPlan>,
    /// The transient copy of the backend's transaction list.
    pub transactions: Vec<Transaction>,
}

/// The state of the dashboard server.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore,
{
    /// The exchange-rate snapshot, immutable after startup.
    pub rates: Arc<RateTable>,
    /// The mutable session: display currency, savings plan, cached list.
    pub session: Arc<Mutex<Session>>,
    /// The client for the external transaction backend.
    pub store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore,
{
    /// Create a new [AppState] with an empty session.
    pub fn new(rates: RateTable, store: T) -> Self {
        Self {
            rates: Arc::new(rates),
            session: Arc::new(Mutex::new(Session::default())),
            store,
        }
    }
}
