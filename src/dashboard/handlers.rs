//! Dashboard HTTP handlers.
//!
//! The dashboard page is the application's single full view. Loading it is
//! what the rest of the application calls a "full refresh": the backend's
//! transaction list is fetched, the session cache is replaced wholesale, and
//! the page is rendered from the fresh snapshot. Switching the display
//! currency is the one cheaper path: it re-renders the same content from the
//! cached list without touching the backend.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;

use crate::{
    AppState, Currency, Error, RateTable, Session,
    dashboard::{
        aggregation::{
            contiguous_months, flows_by_month, group_by_month, savings_projection, totals,
        },
        charts::{balance_chart, chart_series, chart_view},
        figures::figures_view,
        forms::{currency_form, new_transaction_form, savings_panel},
        tree::transaction_tree,
    },
    html::{HeadElement, base},
    stores::TransactionStore,
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState<T> {
    /// The exchange-rate snapshot.
    pub rates: Arc<RateTable>,
    /// The session holding the display currency, savings plan, and cache.
    pub session: Arc<Mutex<Session>>,
    /// The client for the external transaction backend.
    pub store: T,
}

impl<T> FromRef<AppState<T>> for DashboardState<T>
where
    T: TransactionStore,
{
    fn from_ref(state: &AppState<T>) -> Self {
        Self {
            rates: state.rates.clone(),
            session: state.session.clone(),
            store: state.store.clone(),
        }
    }
}

/// The form data for switching the display currency.
#[derive(Debug, Deserialize)]
pub struct CurrencyForm {
    /// The newly selected display currency.
    pub currency: Currency,
}

/// Display the dashboard, refreshing the session's transaction cache from
/// the backend first.
pub async fn get_dashboard_page<T>(
    State(state): State<DashboardState<T>>,
) -> Result<Response, Error>
where
    T: TransactionStore,
{
    // Fetch before taking the lock so it is never held across an await.
    let transactions = state
        .store
        .list()
        .await
        .inspect_err(|error| tracing::error!("could not list transactions: {error}"))?;

    let snapshot = {
        let mut session = state
            .session
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
            .map_err(|_| Error::SessionLock)?;

        session.transactions = transactions;
        session.clone()
    };

    Ok(dashboard_page(&snapshot, &state.rates).into_response())
}

/// Switch the display currency and re-render the dashboard content from the
/// cached transaction list, without a backend fetch.
pub async fn switch_currency<T>(
    State(state): State<DashboardState<T>>,
    Form(form): Form<CurrencyForm>,
) -> Result<Markup, Error>
where
    T: TransactionStore,
{
    let snapshot = {
        let mut session = state
            .session
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
            .map_err(|_| Error::SessionLock)?;

        session.display_currency = form.currency;
        session.clone()
    };

    Ok(dashboard_content(&snapshot, &state.rates))
}

fn dashboard_page(session: &Session, rates: &RateTable) -> Markup {
    let content = html!(
        header class="flex items-center justify-between px-6 py-4" {
            h1 class="text-2xl font-bold" { "Ledgerette" }
            (currency_form(session.display_currency))
        }

        div class="flex flex-col lg:flex-row gap-4 px-6 pb-8 mx-auto max-w-screen-xl" {
            aside class="lg:w-80 shrink-0" {
                (new_transaction_form())
            }

            main
                id="dashboard-content"
                class="grow"
            {
                (dashboard_content(session, rates))
            }
        }
    );

    let head = [
        HeadElement::ScriptLink(
            "https://cdn.jsdelivr.net/npm/echarts@5.6.0/dist/echarts.min.js".to_owned(),
        ),
        HeadElement::Style(PreEscaped(
            "summary::marker { color: rgb(37 99 235); }".to_owned(),
        )),
    ];

    base("Dashboard", &head, &content)
}

/// The content swapped on currency changes: figures, savings panel, tree,
/// and chart, all projected into the session's display currency.
fn dashboard_content(session: &Session, rates: &RateTable) -> Markup {
    let currency = session.display_currency;
    let transactions = &session.transactions;

    let saved_so_far = session.savings_plan.and_then(|plan| {
        let flows = flows_by_month(transactions);
        let months = contiguous_months(&flows);

        savings_projection(&months, &flows, plan, rates).last().copied()
    });

    let series = chart_series(transactions, session.savings_plan, rates, currency);

    html!(
        div class="text-gray-900 dark:text-white" {
            (figures_view(totals(transactions), saved_so_far, currency, rates))

            (savings_panel(session.savings_plan, currency))

            @match &series {
                Some(series) => (chart_view(&balance_chart(series, currency)))
                None => p class="mb-4" {
                    "The chart will show up here once you add some transactions."
                }
            }

            (transaction_tree(&group_by_month(transactions), currency, rates))
        }
    )
}
