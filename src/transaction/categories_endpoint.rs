//! Defines the endpoint serving the category options for a transaction kind.
//!
//! The new-transaction form swaps these into its category `<select>` whenever
//! the kind changes, so the offered categories always match the kind.

use axum::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use crate::transaction::TransactionKind;

/// Query parameters selecting which category list to render.
#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    /// The transaction kind, defaulting to expense like the form does.
    #[serde(default)]
    pub kind: Option<TransactionKind>,
}

/// A route handler returning the `<option>` elements for the given kind.
pub async fn get_category_options(Query(query): Query<CategoryQuery>) -> Markup {
    category_options(query.kind.unwrap_or(TransactionKind::Expense))
}

/// The `<option>` elements for `kind`'s fixed category list.
pub fn category_options(kind: TransactionKind) -> Markup {
    html! {
        @for category in kind.categories() {
            option value=(category) { (category) }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use scraper::{Html, Selector};

    use super::{CategoryQuery, get_category_options};
    use crate::transaction::TransactionKind;

    async fn get_options(kind: Option<TransactionKind>) -> Vec<String> {
        let markup = get_category_options(Query(CategoryQuery { kind })).await;
        let html = Html::parse_fragment(&markup.into_string());
        let selector = Selector::parse("option").unwrap();

        html.select(&selector)
            .map(|option| option.text().collect())
            .collect()
    }

    #[tokio::test]
    async fn income_options_match_the_income_list() {
        let options = get_options(Some(TransactionKind::Income)).await;

        assert_eq!(options, ["Salary", "Rent", "Investment", "Other"]);
    }

    #[tokio::test]
    async fn expense_options_match_the_expense_list() {
        let options = get_options(Some(TransactionKind::Expense)).await;

        assert_eq!(options.len(), 11);
        assert_eq!(options.first().map(String::as_str), Some("Rent"));
        assert_eq!(options.last().map(String::as_str), Some("Other"));
    }

    #[tokio::test]
    async fn missing_kind_defaults_to_expense() {
        assert_eq!(
            get_options(None).await,
            get_options(Some(TransactionKind::Expense)).await
        );
    }
}
