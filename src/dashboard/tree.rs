//! The collapsible month/kind/transaction tree.
//!
//! Rendered from scratch on every refresh with plain `<details>` elements, so
//! every group starts collapsed and expansion state does not survive a
//! refresh.

use maud::{Markup, html};

use crate::{
    Currency, RateTable,
    currency::format_amount,
    dashboard::aggregation::MonthGroup,
    endpoints::{self, format_endpoint},
    html::BUTTON_DELETE_STYLE,
    transaction::Transaction,
};

/// Render the transaction tree, amounts converted to the display currency.
pub(super) fn transaction_tree(
    groups: &[MonthGroup],
    currency: Currency,
    rates: &RateTable,
) -> Markup {
    html! {
        section class="w-full mx-auto mb-4" {
            h3 class="text-xl font-semibold mb-2" { "Transactions" }

            @for group in groups {
                details class="mb-1" {
                    summary class="cursor-pointer font-semibold" { (group.month) }

                    div class="pl-4" {
                        @for kind_group in &group.kinds {
                            details class="mb-1" {
                                summary class="cursor-pointer" {
                                    (kind_group.kind.label())
                                }

                                ul class="pl-4" {
                                    @for transaction in &kind_group.transactions {
                                        (tree_leaf(transaction, currency, rates))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn tree_leaf(transaction: &Transaction, currency: Currency, rates: &RateTable) -> Markup {
    let converted = rates.to_display(transaction.amount, currency);
    let sign = if converted >= 0.0 { "+" } else { "-" };
    let formatted = format_amount(converted.abs(), currency);

    html! {
        li class="flex items-center gap-2" {
            span { (transaction.text) ": " (sign) (formatted) }

            button
                type="button"
                class=(BUTTON_DELETE_STYLE)
                hx-delete=(format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id))
                hx-confirm="Delete this transaction?"
                hx-target-error="#alert-container"
            {
                "Delete"
            }
        }
    }
}
