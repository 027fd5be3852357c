//! Alert messages that htmx swaps into the page's alert container.

use maud::{Markup, html};

/// An alert message to show to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// Tell the user an operation went wrong.
    Error {
        /// The headline of the alert.
        message: String,
        /// Further explanation, may be empty.
        details: String,
    },
}

impl Alert {
    pub fn into_html(self) -> Markup {
        match self {
            Alert::Error { message, details } => html!(
                div
                    role="alert"
                    class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                        dark:bg-gray-800 dark:text-red-400 shadow-lg"
                {
                    p class="font-semibold" { (message) }

                    @if !details.is_empty() {
                        p { (details) }
                    }

                    button
                        type="button"
                        class="mt-2 underline"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "Dismiss"
                    }
                }
            ),
        }
    }
}
