//! The exchange-rate cache.
//!
//! A snapshot mapping currency codes to their value relative to USD is
//! fetched once at startup and never refreshed for the lifetime of the
//! session.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{Currency, Error};

/// A snapshot of exchange rates relative to USD.
///
/// The table is immutable after loading. Currencies missing from the table
/// convert at a 1:1 rate; this silent fallback mirrors the degraded mode the
/// table enters when the rate fetch fails entirely.
#[derive(Debug, Clone, Default)]
pub struct RateTable {
    rates: HashMap<String, f64>,
}

/// The body of the exchange-rate endpoint, e.g.
/// `{"rates": {"EUR": 0.93, "BRL": 5.12}}`. Fields other than `rates` are
/// ignored.
#[derive(Debug, Deserialize)]
struct RateSnapshot {
    rates: HashMap<String, f64>,
}

impl RateTable {
    /// Create a rate table from an already-known mapping of currency code to
    /// USD rate.
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    /// Fetch the rate snapshot from `url`, once.
    ///
    /// On any fetch or decode failure the returned table is empty and all
    /// conversions fall back to a 1:1 rate. The failure is logged but not
    /// surfaced to the user, so converted totals can be silently misstated
    /// until the server is restarted.
    pub async fn load(client: &reqwest::Client, url: &str) -> Self {
        match Self::fetch(client, url).await {
            Ok(table) => table,
            Err(error) => {
                tracing::warn!(
                    "could not load exchange rates, conversions will fall back to 1:1: {error}"
                );
                Self::default()
            }
        }
    }

    async fn fetch(client: &reqwest::Client, url: &str) -> Result<Self, Error> {
        let snapshot: RateSnapshot = client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(Self::new(snapshot.rates))
    }

    /// The rate for `currency` relative to USD, defaulting to 1 if unknown.
    pub fn rate_for(&self, currency: Currency) -> f64 {
        self.rates.get(currency.code()).copied().unwrap_or(1.0)
    }

    /// Convert an amount in `currency` to USD.
    pub fn to_base(&self, amount: f64, currency: Currency) -> f64 {
        amount / self.rate_for(currency)
    }

    /// Convert an amount in USD to `currency`.
    pub fn to_display(&self, amount: f64, currency: Currency) -> f64 {
        amount * self.rate_for(currency)
    }
}

/// A fixed rate table for tests: BRL 5.0, EUR 0.8, HUF 350.0.
#[cfg(test)]
pub(crate) fn test_table() -> RateTable {
    RateTable::new(std::collections::HashMap::from([
        ("BRL".to_owned(), 5.0),
        ("EUR".to_owned(), 0.8),
        ("HUF".to_owned(), 350.0),
    ]))
}
