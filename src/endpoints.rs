//! The endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}',
//! use [format_endpoint].

/// The dashboard page, which is also the root of the application.
pub const DASHBOARD_VIEW: &str = "/";
/// The category `<option>` partial for a transaction kind.
pub const CATEGORY_OPTIONS: &str = "/categories";
/// The route to create a transaction.
pub const TRANSACTIONS_API: &str = "/transactions";
/// The route to delete a single transaction.
pub const DELETE_TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to switch the display currency.
pub const CURRENCY: &str = "/currency";
/// The route to apply (POST) or clear (DELETE) the savings plan.
pub const SAVINGS: &str = "/savings";
/// The partial showing the symbol for the savings value input.
pub const SAVINGS_SYMBOL: &str = "/savings/symbol";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace. For
/// example, in the endpoint path '/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
