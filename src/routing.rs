//! Application router configuration.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{
    AppState,
    dashboard::{get_dashboard_page, switch_currency},
    endpoints,
    not_found::get_404_not_found,
    savings::{apply_savings_plan, disable_savings_plan, get_savings_symbol},
    stores::TransactionStore,
    transaction::{create_transaction, delete_transaction, get_category_options},
};

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore,
{
    Router::new()
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page::<T>))
        .route(endpoints::CATEGORY_OPTIONS, get(get_category_options))
        .route(endpoints::TRANSACTIONS_API, post(create_transaction::<T>))
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction::<T>),
        )
        .route(endpoints::CURRENCY, post(switch_currency::<T>))
        .route(
            endpoints::SAVINGS,
            post(apply_savings_plan).delete(disable_savings_plan),
        )
        .route(endpoints::SAVINGS_SYMBOL, get(get_savings_symbol))
        .fallback(get_404_not_found)
        .with_state(state)
}
