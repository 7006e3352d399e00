//! Ledgerette is a web dashboard for personal finances: it records income and
//! expense transactions, converts amounts between currencies using a rate
//! snapshot fetched at startup, renders a monthly balance chart, and tracks an
//! optional savings target.
//!
//! Transactions are persisted by an external backend API; this crate renders
//! HTML pages directly and holds only a transient, fully-replaced-on-refresh
//! copy of the transaction list.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod currency;
mod dashboard;
mod endpoints;
mod html;
mod month;
mod not_found;
mod rates;
mod routing;
mod savings;
mod stores;
mod transaction;

pub use app_state::{AppState, Session};
pub use currency::Currency;
pub use month::{Month, month_range};
pub use rates::RateTable;
pub use routing::build_router;
pub use savings::{SavingsMode, SavingsPlan};
pub use stores::{HttpTransactionStore, TransactionStore};
pub use transaction::{NewTransaction, Transaction, TransactionId, TransactionKind};

use crate::html::error_view;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A request to an external service (the transaction backend or the
    /// exchange-rate provider) failed.
    ///
    /// The wrapped string is the underlying client error, intended for the
    /// server logs rather than the client.
    #[error("http request failed: {0}")]
    Http(String),

    /// Could not acquire the lock on the in-memory session state.
    #[error("could not acquire the session lock")]
    SessionLock,

    /// A month string was not in "YYYY-MM" format.
    #[error("could not parse {0:?} as a month in YYYY-MM format")]
    InvalidMonth(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Error::Http(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // None of these errors carry details the client should see.
        tracing::error!("An unexpected error occurred: {}", self);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_view(
                "Server Error",
                "500",
                "Sorry, something went wrong.",
                "Try again later or check the server logs.",
            ),
        )
            .into_response()
    }
}
