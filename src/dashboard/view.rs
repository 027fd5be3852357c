//! HTML views for the dashboard: summary cards for the balance and a table of
//! transactions.

use maud::{Markup, html};

use crate::{
    dashboard::{
        controller::ViewState,
        transaction::{DisplayTransaction, TransactionType},
    },
    endpoints,
    header::Header,
    html::{PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base},
};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 rounded-lg px-8 py-6 shadow-md \
    text-gray-900 dark:text-white";
const TOTAL_CARD_STYLE: &str = "bg-orange-400 rounded-lg px-8 py-6 shadow-md text-white";
const CARD_VALUE_STYLE: &str = "mt-4 text-4xl font-medium min-h-[2.5rem]";

// The `income` and `outcome` classes identify the row variant, the others colour it.
const INCOME_CELL_STYLE: &str = "income text-green-600 dark:text-green-400";
const OUTCOME_CELL_STYLE: &str = "outcome text-red-600 dark:text-red-400";

/// The column titles of the transactions table: title, value, category and date.
const TABLE_COLUMNS: [&str; 4] = ["Título", "Preço", "Categoria", "Data"];

/// Renders the full dashboard page with `view` and asks htmx to load the
/// populated content once the page has loaded.
pub(super) fn dashboard_view(view: &ViewState) -> Markup {
    let header = Header::new(endpoints::DASHBOARD_VIEW).into_html();

    let content = html!(
        (header)

        main class=(PAGE_CONTAINER_STYLE)
        {
            div
                id="dashboard-content"
                class="w-full max-w-screen-xl"
                hx-get=(endpoints::DASHBOARD_CONTENT)
                hx-trigger="load"
                hx-swap="innerHTML"
                hx-target-error="#alert-container"
            {
                (dashboard_content(view))
            }
        }
    );

    base("Dashboard", &content)
}

/// Renders the summary cards and the transactions table for `view`.
///
/// The summary cards are empty until `view` has a balance.
pub(super) fn dashboard_content(view: &ViewState) -> Markup {
    let balance = view.balance.as_ref();

    html!(
        section id="summary" class="grid grid-cols-1 md:grid-cols-3 gap-8 -mt-36 w-full"
        {
            (summary_card(
                "Entradas",
                "balance-income",
                balance.map(|balance| balance.income.as_str()),
                CARD_STYLE,
            ))
            (summary_card(
                "Saídas",
                "balance-outcome",
                balance.map(|balance| balance.outcome.as_str()),
                CARD_STYLE,
            ))
            (summary_card(
                "Total",
                "balance-total",
                balance.map(|balance| balance.total.as_str()),
                TOTAL_CARD_STYLE,
            ))
        }

        section id="transactions" class="w-full mt-16 overflow-x-auto rounded-lg shadow"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        @for column in TABLE_COLUMNS {
                            th scope="col" class=(TABLE_CELL_STYLE) { (column) }
                        }
                    }
                }

                tbody
                {
                    @for transaction in &view.transactions {
                        (transaction_row(transaction))
                    }
                }
            }
        }
    )
}

fn summary_card(label: &str, test_id: &str, value: Option<&str>, style: &str) -> Markup {
    html!(
        div class=(style)
        {
            header class="flex items-center justify-between"
            {
                p { (label) }
            }

            h1 data-testid=(test_id) class=(CARD_VALUE_STYLE)
            {
                @if let Some(value) = value {
                    (value)
                }
            }
        }
    )
}

fn transaction_row(transaction: &DisplayTransaction) -> Markup {
    let value_style = match transaction.kind {
        TransactionType::Income => INCOME_CELL_STYLE,
        TransactionType::Outcome => OUTCOME_CELL_STYLE,
    };

    html!(
        tr class=(TABLE_ROW_STYLE)
        {
            td class={"title font-medium text-gray-900 dark:text-white " (TABLE_CELL_STYLE)}
            {
                (transaction.title)
            }
            td class={(value_style) " " (TABLE_CELL_STYLE)} { (transaction.formatted_value) }
            td class=(TABLE_CELL_STYLE) { (transaction.category.title) }
            td class=(TABLE_CELL_STYLE) { (transaction.formatted_date) }
        }
    )
}
