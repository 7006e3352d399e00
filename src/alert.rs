//! Alert partials for displaying blocking error messages to users.
//!
//! Alerts are swapped into the fixed `#alert-container` element via the htmx
//! response-targets extension when a request fails validation.

use maud::{Markup, html};

/// Renders an error alert with a message and optional details.
pub fn error_alert(message: &str, details: &str) -> Markup {
    html!(
        div
            class="flex items-start p-4 mb-4 text-red-800 rounded-lg bg-red-50
                dark:bg-gray-800 dark:text-red-400 border border-red-300
                dark:border-red-800 shadow-md"
            role="alert"
        {
            div class="text-sm font-medium"
            {
                p class="font-semibold" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }
            }

            button
                type="button"
                class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 text-red-500
                    hover:bg-red-200 dark:hover:bg-gray-700"
                aria-label="Close"
                onclick="this.closest('[role=alert]').remove()"
            {
                "✕"
            }
        }
    )
}
