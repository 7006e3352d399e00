//! The savings plan: its model and the endpoints for applying, clearing, and
//! labelling it.
//!
//! At most one plan is active at a time. It lives only in the session and is
//! cleared when the user stops saving; it is never persisted.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Currency, Error, RateTable, Session, alert::error_alert, endpoints,
    stores::TransactionStore,
};

/// How the monthly savings target is calculated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SavingsMode {
    /// A fixed amount per month, interpreted in the plan's currency.
    Fixed,
    /// A percentage of each month's income.
    Percent,
}

/// A target for how much to put aside each month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SavingsPlan {
    /// Whether the target is a fixed amount or a share of income.
    pub mode: SavingsMode,
    /// The fixed amount or the percentage. Always positive.
    pub value: f64,
    /// The currency a fixed value is interpreted in, captured from the
    /// display currency when the plan was applied.
    pub currency: Currency,
}

impl SavingsPlan {
    /// The target contribution for one month, in USD.
    ///
    /// Fixed mode contributes every month regardless of income; percent mode
    /// contributes nothing for income-less months.
    pub fn monthly_target_usd(&self, income_in_month_usd: f64, rates: &RateTable) -> f64 {
        match self.mode {
            SavingsMode::Fixed => rates.to_base(self.value, self.currency),
            SavingsMode::Percent => income_in_month_usd * (self.value / 100.0),
        }
    }
}

/// The state needed to configure the savings plan.
#[derive(Debug, Clone)]
pub struct SavingsState {
    /// The session holding the active plan and display currency.
    pub session: Arc<Mutex<Session>>,
}

impl<T> FromRef<AppState<T>> for SavingsState
where
    T: TransactionStore,
{
    fn from_ref(state: &AppState<T>) -> Self {
        Self {
            session: state.session.clone(),
        }
    }
}

/// The form data for applying a savings plan.
#[derive(Debug, Deserialize)]
pub struct SavingsForm {
    /// The selected mode, defaulting to a fixed amount when absent.
    #[serde(default)]
    pub mode: Option<SavingsMode>,
    /// The fixed amount or percentage entered by the user.
    #[serde(default)]
    pub value: Option<f64>,
}

/// A route handler that applies a savings plan, replacing any existing one.
///
/// The plan's currency is the display currency at the time it is applied.
/// A missing, non-positive, or non-finite value is rejected with a blocking
/// alert and leaves the current plan unchanged.
pub async fn apply_savings_plan(
    State(state): State<SavingsState>,
    Form(form): Form<SavingsForm>,
) -> Result<Response, Error> {
    let value = match form.value {
        Some(value) if value > 0.0 && value.is_finite() => value,
        _ => {
            return Ok((
                StatusCode::BAD_REQUEST,
                error_alert("Enter a valid saving value.", "The value must be a positive number."),
            )
                .into_response());
        }
    };

    let mut session = state
        .session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
        .map_err(|_| Error::SessionLock)?;

    session.savings_plan = Some(SavingsPlan {
        mode: form.mode.unwrap_or(SavingsMode::Fixed),
        value,
        currency: session.display_currency,
    });

    Ok((
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}

/// A route handler that clears the active savings plan.
pub async fn disable_savings_plan(State(state): State<SavingsState>) -> Result<Response, Error> {
    let mut session = state
        .session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
        .map_err(|_| Error::SessionLock)?;

    session.savings_plan = None;

    Ok((
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}

/// Query parameters for the savings symbol partial.
#[derive(Debug, Deserialize)]
pub struct SymbolQuery {
    /// The currently selected mode.
    #[serde(default)]
    pub mode: Option<SavingsMode>,
}

/// A route handler returning the symbol shown next to the savings value
/// input: the display currency's symbol in fixed mode, `%` in percent mode.
pub async fn get_savings_symbol(
    State(state): State<SavingsState>,
    Query(query): Query<SymbolQuery>,
) -> Result<Markup, Error> {
    let session = state
        .session
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
        .map_err(|_| Error::SessionLock)?;

    Ok(savings_symbol(
        query.mode.unwrap_or(SavingsMode::Fixed),
        session.display_currency,
    ))
}

/// The symbol for the savings value input.
pub fn savings_symbol(mode: SavingsMode, currency: Currency) -> Markup {
    let symbol = match mode {
        SavingsMode::Fixed => currency.symbol(),
        SavingsMode::Percent => "%",
    };

    html!( (symbol) )
}
