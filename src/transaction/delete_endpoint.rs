//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error, endpoints,
    stores::TransactionStore,
    transaction::TransactionId,
};

/// The state needed to delete a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState<T> {
    /// The client for the external transaction backend.
    pub store: T,
}

impl<T> FromRef<AppState<T>> for DeleteTransactionState<T>
where
    T: TransactionStore,
{
    fn from_ref(state: &AppState<T>) -> Self {
        Self {
            store: state.store.clone(),
        }
    }
}

/// A route handler for deleting a transaction, redirects to the dashboard on
/// completion.
///
/// The backend treats deleting an unknown ID as a no-op, so the redirect and
/// the refresh it triggers are the only confirmation the user gets.
pub async fn delete_transaction<T>(
    State(state): State<DeleteTransactionState<T>>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error>
where
    T: TransactionStore,
{
    state.store.remove(transaction_id).await?;

    Ok((
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}
