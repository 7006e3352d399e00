//! The headline figure cards: balance, income, expenses, and the savings
//! total when a plan is active.

use maud::{Markup, html};

use crate::{Currency, RateTable, currency::format_amount, dashboard::aggregation::Totals};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md flex flex-col";
const CARD_LABEL_STYLE: &str = "text-sm text-gray-600 dark:text-gray-400";

/// Render the figure cards, converting the USD totals to the display
/// currency.
///
/// `saved_so_far` is the cumulative savings target in USD, present only when
/// a plan is active.
pub(super) fn figures_view(
    totals: Totals,
    saved_so_far: Option<f64>,
    currency: Currency,
    rates: &RateTable,
) -> Markup {
    let balance = rates.to_display(totals.balance, currency);
    let balance_color = if balance < 0.0 {
        "text-red-600 dark:text-red-500"
    } else {
        "text-green-600 dark:text-green-500"
    };

    html! {
        section class="w-full mx-auto mb-4" {
            div class="grid grid-cols-1 sm:grid-cols-3 gap-4" {
                div class=(CARD_STYLE) {
                    span class=(CARD_LABEL_STYLE) { "Balance" }
                    span class=(format!("text-2xl font-bold {balance_color}")) {
                        (format_amount(balance, currency))
                    }
                }

                div class=(CARD_STYLE) {
                    span class=(CARD_LABEL_STYLE) { "Income" }
                    span class="text-2xl font-bold" {
                        (format_amount(rates.to_display(totals.income, currency), currency))
                    }
                }

                div class=(CARD_STYLE) {
                    span class=(CARD_LABEL_STYLE) { "Expenses" }
                    span class="text-2xl font-bold" {
                        (format_amount(rates.to_display(totals.expense, currency), currency))
                    }
                }

                @if let Some(saved) = saved_so_far {
                    div class=(CARD_STYLE) {
                        span class=(CARD_LABEL_STYLE) { "Saved so far" }
                        span class="text-2xl font-bold text-blue-600 dark:text-blue-500" {
                            (format_amount(rates.to_display(saved, currency), currency))
                        }
                    }
                }
            }
        }
    }
}
