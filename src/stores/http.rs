//! The reqwest-backed implementation of [TransactionStore].

use async_trait::async_trait;

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// A thin request wrapper around the backend transaction API.
///
/// Mutations do not inspect the response body, and a non-success status on
/// `create` or `remove` is not treated as an error; only transport failures
/// propagate. The follow-up refresh is what reconciles the client with the
/// backend's state.
#[derive(Debug, Clone)]
pub struct HttpTransactionStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransactionStore {
    /// Create a store client for the backend at `base_url`,
    /// e.g. `http://localhost:5000`.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();

        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self { client, base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl TransactionStore for HttpTransactionStore {
    async fn list(&self) -> Result<Vec<Transaction>, Error> {
        let transactions = self
            .client
            .get(self.url("/transactions"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(transactions)
    }

    async fn create(&self, record: NewTransaction) -> Result<(), Error> {
        self.client
            .post(self.url("/transactions"))
            .json(&record)
            .send()
            .await?;

        Ok(())
    }

    async fn remove(&self, id: TransactionId) -> Result<(), Error> {
        self.client
            .delete(self.url(&format!("/delete/{id}")))
            .send()
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::HttpTransactionStore;

    #[test]
    fn builds_urls_against_the_base() {
        let store = HttpTransactionStore::new(reqwest::Client::new(), "http://localhost:5000");

        assert_eq!(store.url("/transactions"), "http://localhost:5000/transactions");
        assert_eq!(store.url("/delete/3"), "http://localhost:5000/delete/3");
    }

    #[test]
    fn strips_trailing_slashes_from_the_base_url() {
        let store = HttpTransactionStore::new(reqwest::Client::new(), "http://localhost:5000/");

        assert_eq!(store.url("/transactions"), "http://localhost:5000/transactions");
    }
}
