//! An in-memory [TransactionStore] used as a test double.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// A [TransactionStore] holding its records in memory.
///
/// Tracks how many times `list` was called so tests can assert which
/// operations trigger a backend refresh.
#[derive(Debug, Clone, Default)]
pub(crate) struct MemoryTransactionStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    list_calls: usize,
}

impl MemoryTransactionStore {
    pub(crate) fn with_transactions(transactions: Vec<Transaction>) -> Self {
        let next_id = transactions.iter().map(|t| t.id).max().unwrap_or(0) + 1;

        Self {
            inner: Arc::new(Mutex::new(Inner {
                transactions,
                next_id,
                list_calls: 0,
            })),
        }
    }

    pub(crate) fn transactions(&self) -> Vec<Transaction> {
        self.inner.lock().unwrap().transactions.clone()
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn list(&self) -> Result<Vec<Transaction>, Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;

        Ok(inner.transactions.clone())
    }

    async fn create(&self, record: NewTransaction) -> Result<(), Error> {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id.max(1);
        inner.next_id = id + 1;

        inner.transactions.push(Transaction {
            id,
            text: record.text,
            amount: record.amount,
            month: record.month,
            kind: record.kind,
        });

        Ok(())
    }

    async fn remove(&self, id: TransactionId) -> Result<(), Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.transactions.retain(|transaction| transaction.id != id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryTransactionStore;
    use crate::{
        stores::TransactionStore,
        transaction::{NewTransaction, TransactionKind},
    };

    #[tokio::test]
    async fn created_transactions_appear_in_the_list_with_the_same_sign() {
        let store = MemoryTransactionStore::default();

        store
            .create(NewTransaction {
                text: "Groceries".to_owned(),
                amount: -42.5,
                month: "2024-02".parse().unwrap(),
                kind: TransactionKind::Expense,
            })
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].amount, -42.5);
        assert_eq!(listed[0].kind, TransactionKind::Expense);
    }

    #[tokio::test]
    async fn removing_an_unknown_id_is_a_no_op() {
        let store = MemoryTransactionStore::default();

        store
            .create(NewTransaction {
                text: "Salary".to_owned(),
                amount: 1000.0,
                month: "2024-01".parse().unwrap(),
                kind: TransactionKind::Income,
            })
            .await
            .unwrap();

        store.remove(999).await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = MemoryTransactionStore::default();

        for month in ["2024-01", "2024-02"] {
            store
                .create(NewTransaction {
                    text: "Salary".to_owned(),
                    amount: 1000.0,
                    month: month.parse().unwrap(),
                    kind: TransactionKind::Income,
                })
                .await
                .unwrap();
        }

        let ids: Vec<_> = store.list().await.unwrap().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
