//! The dashboard's forms: new transaction, display currency, and the savings
//! plan panel.

use maud::{Markup, html};

use crate::{
    Currency, SavingsMode, SavingsPlan, endpoints,
    html::{BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_INPUT_STYLE, FORM_LABEL_STYLE},
    savings::savings_symbol,
    transaction::{TransactionKind, category_options},
};

/// The form for creating a transaction.
///
/// Changing the kind swaps the category options in place; the amount is
/// entered in the current display currency.
pub(super) fn new_transaction_form() -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target-error="#alert-container"
            class="bg-gray-50 dark:bg-gray-800 p-4 rounded-lg mb-4"
        {
            h3 class="text-xl font-semibold mb-2" { "New transaction" }

            div class="mb-3" {
                label for="kind" class=(FORM_LABEL_STYLE) { "Type" }
                select
                    id="kind"
                    name="kind"
                    class=(FORM_INPUT_STYLE)
                    hx-get=(endpoints::CATEGORY_OPTIONS)
                    hx-trigger="change"
                    hx-target="#category"
                    hx-swap="innerHTML"
                {
                    option value="expense" { "Expense" }
                    option value="income" { "Income" }
                }
            }

            div class="mb-3" {
                label for="category" class=(FORM_LABEL_STYLE) { "Category" }
                select id="category" name="category" class=(FORM_INPUT_STYLE) {
                    (category_options(TransactionKind::Expense))
                }
            }

            div class="mb-3" {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }
                input
                    id="amount"
                    name="amount"
                    type="number"
                    step="0.01"
                    min="0"
                    placeholder="0.00"
                    class=(FORM_INPUT_STYLE);
            }

            div class="mb-3" {
                label for="month" class=(FORM_LABEL_STYLE) { "Month" }
                input id="month" name="month" type="month" class=(FORM_INPUT_STYLE);
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
        }
    }
}

/// The display currency selector. Switching re-renders the dashboard content
/// from the cached transactions without a backend fetch.
pub(super) fn currency_form(selected: Currency) -> Markup {
    html! {
        form {
            label for="currency" class="sr-only" { "Display currency" }
            select
                id="currency"
                name="currency"
                class=(FORM_INPUT_STYLE)
                hx-post=(endpoints::CURRENCY)
                hx-trigger="change"
                hx-target="#dashboard-content"
                hx-swap="innerHTML"
                hx-target-error="#alert-container"
            {
                @for currency in Currency::ALL {
                    option value=(currency.code()) selected[currency == selected] {
                        (currency.code())
                    }
                }
            }
        }
    }
}

/// The savings panel: the plan summary and a stop button when a plan is
/// active, otherwise the form to start one.
pub(super) fn savings_panel(plan: Option<SavingsPlan>, currency: Currency) -> Markup {
    match plan {
        Some(plan) => active_plan_view(plan),
        None => savings_form(currency),
    }
}

fn active_plan_view(plan: SavingsPlan) -> Markup {
    let description = match plan.mode {
        SavingsMode::Fixed => format!("{}{} per month", plan.currency.symbol(), plan.value),
        SavingsMode::Percent => format!("{}% of monthly income", plan.value),
    };

    html! {
        div class="bg-gray-50 dark:bg-gray-800 p-4 rounded-lg mb-4" {
            h3 class="text-xl font-semibold mb-2" { "Saving" }
            p class="mb-2" { "Target: " (description) }

            button
                type="button"
                class=(BUTTON_DELETE_STYLE)
                hx-delete=(endpoints::SAVINGS)
                hx-target-error="#alert-container"
            {
                "Stop saving"
            }
        }
    }
}

fn savings_form(currency: Currency) -> Markup {
    html! {
        details class="bg-gray-50 dark:bg-gray-800 p-4 rounded-lg mb-4" {
            summary class="cursor-pointer text-xl font-semibold" { "Start saving" }

            form
                hx-post=(endpoints::SAVINGS)
                hx-target-error="#alert-container"
                class="mt-3"
            {
                fieldset class="mb-3" {
                    legend class=(FORM_LABEL_STYLE) { "Mode" }

                    label class="mr-4" {
                        input
                            type="radio"
                            name="mode"
                            value="fixed"
                            checked
                            hx-get=(endpoints::SAVINGS_SYMBOL)
                            hx-trigger="change"
                            hx-target="#saving-symbol";
                        " Fixed amount"
                    }

                    label {
                        input
                            type="radio"
                            name="mode"
                            value="percent"
                            hx-get=(endpoints::SAVINGS_SYMBOL)
                            hx-trigger="change"
                            hx-target="#saving-symbol";
                        " Share of income"
                    }
                }

                div class="mb-3" {
                    label for="saving-value" class=(FORM_LABEL_STYLE) {
                        "Value ("
                        span id="saving-symbol" {
                            (savings_symbol(SavingsMode::Fixed, currency))
                        }
                        ")"
                    }
                    input
                        id="saving-value"
                        name="value"
                        type="number"
                        step="any"
                        min="0"
                        class=(FORM_INPUT_STYLE);
                }

                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Apply" }
            }
        }
    }
}
