//! The client for the external transaction backend.
//!
//! The backend owns transaction persistence; this crate only talks to it
//! through the [TransactionStore] trait so that tests can substitute an
//! in-memory implementation.

mod http;

pub use http::HttpTransactionStore;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The operations the external transaction backend exposes.
///
/// All three operations are fire-and-forget from the caller's perspective:
/// the controller always performs a full `list`-based refresh after a
/// mutation rather than trusting the mutation's response.
#[async_trait]
pub trait TransactionStore: Clone + Send + Sync + 'static {
    /// Every transaction, in whatever order the backend returns them.
    async fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Persist one signed-amount transaction. The created record returned by
    /// the backend is not consumed.
    async fn create(&self, record: NewTransaction) -> Result<(), Error>;

    /// Delete one transaction by ID.
    ///
    /// Removing an ID the backend does not know is not an error: the next
    /// refresh simply shows an unchanged list.
    async fn remove(&self, id: TransactionId) -> Result<(), Error>;
}
