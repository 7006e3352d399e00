//! Defines the endpoint for creating a new transaction.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{
    AppState, Error, Month, RateTable, Session, endpoints,
    stores::TransactionStore,
    transaction::{NewTransaction, TransactionKind},
};

/// The state needed to create a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState<T> {
    /// The exchange-rate snapshot for converting the entered amount to USD.
    pub rates: Arc<RateTable>,
    /// The session holding the display currency the amount is entered in.
    pub session: Arc<Mutex<Session>>,
    /// The client for the external transaction backend.
    pub store: T,
}

impl<T> FromRef<AppState<T>> for CreateTransactionState<T>
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

/// The form data for creating a transaction.
///
/// Every field is required; the handler ignores submissions with any field
/// missing or empty.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Whether the transaction is income or an expense.
    #[serde(default)]
    pub kind: Option<TransactionKind>,
    /// The selected category label.
    #[serde(default)]
    pub category: Option<String>,
    /// The amount in the current display currency. The sign is ignored; the
    /// kind decides it.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The month the transaction belongs to.
    #[serde(default)]
    pub month: Option<Month>,
}

/// A route handler for creating a new transaction, redirects to the dashboard
/// on completion.
///
/// An incomplete form is silently dropped: the handler redirects without
/// creating anything, matching how the form behaves for untouched fields.
/// The entered amount is interpreted in the current display currency and
/// stored in USD, with the sign derived from the kind.
pub async fn create_transaction<T>(
    State(state): State<CreateTransactionState<T>>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error>
where
    T: TransactionStore,
{
    let redirect = (
        HxRedirect(endpoints::DASHBOARD_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    );

    let (Some(kind), Some(category), Some(amount), Some(month)) =
        (form.kind, form.category, form.amount, form.month)
    else {
        return Ok(redirect.into_response());
    };

    if category.is_empty() || !amount.is_finite() {
        return Ok(redirect.into_response());
    }

    let display_currency = {
        let session = state
            .session
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
            .map_err(|_| Error::SessionLock)?;

        session.display_currency
    };

    let amount_usd = state.rates.to_base(kind.signed(amount), display_currency);

    state
        .store
        .create(NewTransaction {
            text: category,
            amount: amount_usd,
            month,
            kind,
        })
        .await?;

    Ok(redirect.into_response())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{body::Body, extract::State, http::Response};
    use axum_extra::extract::Form;
    use axum_htmx::HX_REDIRECT;

    use super::{CreateTransactionState, TransactionForm, create_transaction};
    use crate::{
        Currency, Session,
        rates::test_table,
        stores::memory::MemoryTransactionStore,
        transaction::TransactionKind,
    };

    fn test_state(currency: Currency) -> CreateTransactionState<MemoryTransactionStore> {
        CreateTransactionState {
            rates: Arc::new(test_table()),
            session: Arc::new(Mutex::new(Session {
                display_currency: currency,
                ..Session::default()
            })),
            store: MemoryTransactionStore::default(),
        }
    }

    fn complete_form() -> TransactionForm {
        TransactionForm {
            kind: Some(TransactionKind::Expense),
            category: Some("Groceries".to_owned()),
            amount: Some(40.0),
            month: Some("2024-03".parse().unwrap()),
        }
    }

    #[tokio::test]
    async fn stores_expenses_negative_in_usd() {
        // EUR trades at 0.8 per USD, so 40 EUR is 50 USD.
        let state = test_state(Currency::Eur);

        let response = create_transaction(State(state.clone()), Form(complete_form()))
            .await
            .unwrap();

        assert_redirects_to_dashboard(response);

        let stored = state.store.transactions();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, -50.0);
        assert_eq!(stored[0].text, "Groceries");
        assert_eq!(stored[0].kind, TransactionKind::Expense);
    }

    #[tokio::test]
    async fn stores_income_positive_regardless_of_entered_sign() {
        let state = test_state(Currency::Usd);

        let form = TransactionForm {
            kind: Some(TransactionKind::Income),
            category: Some("Salary".to_owned()),
            amount: Some(-1000.0),
            month: Some("2024-01".parse().unwrap()),
        };
        create_transaction(State(state.clone()), Form(form))
            .await
            .unwrap();

        assert_eq!(state.store.transactions()[0].amount, 1000.0);
    }

    #[tokio::test]
    async fn converts_using_the_display_currency() {
        // BRL trades at 5 per USD.
        let state = test_state(Currency::Brl);

        let form = TransactionForm {
            amount: Some(500.0),
            ..complete_form_income()
        };
        create_transaction(State(state.clone()), Form(form))
            .await
            .unwrap();

        assert_eq!(state.store.transactions()[0].amount, 100.0);
    }

    #[tokio::test]
    async fn incomplete_forms_are_silently_dropped() {
        let incomplete_forms = [
            TransactionForm {
                kind: None,
                ..complete_form()
            },
            TransactionForm {
                category: None,
                ..complete_form()
            },
            TransactionForm {
                category: Some(String::new()),
                ..complete_form()
            },
            TransactionForm {
                amount: None,
                ..complete_form()
            },
            TransactionForm {
                month: None,
                ..complete_form()
            },
        ];

        for form in incomplete_forms {
            let state = test_state(Currency::Usd);

            let response = create_transaction(State(state.clone()), Form(form))
                .await
                .unwrap();

            assert_redirects_to_dashboard(response);
            assert!(
                state.store.transactions().is_empty(),
                "nothing should have been created"
            );
        }
    }

    #[test]
    fn form_treats_empty_fields_as_missing() {
        let form: TransactionForm =
            serde_html_form::from_str("kind=expense&category=Rent&amount=&month=").unwrap();

        assert_eq!(form.kind, Some(TransactionKind::Expense));
        assert_eq!(form.category.as_deref(), Some("Rent"));
        assert_eq!(form.amount, None);
        assert_eq!(form.month, None);
    }

    fn complete_form_income() -> TransactionForm {
        TransactionForm {
            kind: Some(TransactionKind::Income),
            category: Some("Salary".to_owned()),
            amount: Some(100.0),
            month: Some("2024-01".parse().unwrap()),
        }
    }

    #[track_caller]
    fn assert_redirects_to_dashboard(response: Response<Body>) {
        let location = response
            .headers()
            .get(HX_REDIRECT)
            .expect("expected an HX-Redirect header")
            .to_str()
            .unwrap();

        assert_eq!(location, "/");
    }
}
