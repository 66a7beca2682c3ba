use super::DashboardLayout;
use crate::Route;
use crate::api::{ApiClient, BankApi};
use crate::error::{ApiError, describe_api};
use crate::filter::{TransactionFilter, TypeFilter, footer_summary, tab_rows};
use crate::model::Transaction;
use crate::session::Session;
use crate::toast::Toaster;
use crate::utils::classes;
use dioxus::prelude::*;

/// Fetches the full list once. Failures are logged here and shown by the page.
async fn fetch_transactions(
    api: &dyn BankApi,
    token: Option<&str>,
) -> Result<Vec<Transaction>, ApiError> {
    match api.list_transactions(token).await {
        Ok(transactions) => {
            log::debug!("Loaded {} transactions", transactions.len());
            Ok(transactions)
        }
        Err(e) => {
            log::error!("Error fetching transactions: {}", e);
            Err(e)
        }
    }
}

#[component]
pub fn Transactions() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Session>();
    let toaster = use_context::<Toaster>();
    let search = use_signal(String::new);
    let tab = use_signal(TypeFilter::default);

    let transactions_resource = use_resource(move || {
        let api = api.clone();
        let token = session.token();
        async move {
            let result = fetch_transactions(&*api, token.as_deref()).await;
            if let Err(e) = &result {
                toaster.error("Could not load transactions", &describe_api(e));
            }
            result
        }
    });

    let loaded = transactions_resource.read().clone();

    rsx! {
        DashboardLayout {
            match loaded {
                None => rsx! {
                    p { class: "loading-text", "Loading transactions..." }
                },
                Some(Ok(all)) => rsx! {
                    TransactionsView { all, failed: false, search, tab }
                },
                Some(Err(_)) => rsx! {
                    TransactionsView { all: Vec::new(), failed: true, search, tab }
                },
            }
        }
    }
}

#[component]
fn TransactionsView(
    all: Vec<Transaction>,
    failed: bool,
    search: Signal<String>,
    tab: Signal<TypeFilter>,
) -> Element {
    let mut search = search;
    let active = tab();
    let filter = TransactionFilter {
        search: search(),
        kind: active,
    };
    let filtered = filter.apply(&all);
    let rows: Vec<Transaction> = tab_rows(&filtered, active).into_iter().cloned().collect();
    let panel = active.panel();
    let summary = footer_summary(filtered.len(), all.len());

    rsx! {
        div { id: "transactions-page", class: "page",
            div { class: "page-header",
                h1 { "Transactions" }
                Link {
                    to: Route::NewTransaction {},
                    class: "button button-primary button-small",
                    "New Transaction"
                }
            }
            div { class: "toolbar",
                div { class: "tabs", role: "tablist",
                    for kind in TypeFilter::TABS {
                        TabButton { key: "{kind:?}", kind, tab }
                    }
                }
                input {
                    r#type: "search",
                    class: "input search-input",
                    placeholder: "Search transactions...",
                    value: "{search}",
                    oninput: move |event| search.set(event.value()),
                }
            }
            if failed {
                p { class: "error-message", "Transactions could not be loaded. Please try again later." }
            }
            div { class: "card",
                div { class: "card-header",
                    h2 { "{panel.title}" }
                    p { class: "muted", "{panel.description}" }
                }
                TransactionTable { rows, show_type: panel.show_type_column }
                if panel.show_footer {
                    div { class: "card-footer muted small", "{summary}" }
                }
            }
        }
    }
}

#[component]
fn TabButton(kind: TypeFilter, tab: Signal<TypeFilter>) -> Element {
    let mut tab = tab;
    let selected = tab() == kind;
    let label = kind.tab_label();

    rsx! {
        button {
            role: "tab",
            class: classes(&["tab", if selected { "tab-active" } else { "" }]),
            aria_selected: selected,
            onclick: move |_| tab.set(kind),
            "{label}"
        }
    }
}

#[component]
fn TransactionTable(rows: Vec<Transaction>, show_type: bool) -> Element {
    let columns = if show_type { 4 } else { 3 };

    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "Description" }
                    if show_type {
                        th { "Type" }
                    }
                    th { "Date" }
                    th { class: "text-right", "Amount" }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td { class: "muted empty-row", colspan: columns, "No transactions found." }
                    }
                }
                for transaction in rows {
                    TransactionRow { key: "{transaction.id}", transaction, show_type }
                }
            }
        }
    }
}

#[component]
fn TransactionRow(transaction: Transaction, show_type: bool) -> Element {
    let tone = transaction.tone();
    let arrow = transaction.kind.arrow();
    let kind = transaction.kind.as_str();
    let description = transaction.description();
    let date = transaction.display_date();
    let amount = transaction.signed_amount();
    let amount_class = classes(&["text-right", "amount", tone.text_class()]);

    rsx! {
        tr {
            td { class: "description",
                span { class: tone.badge_class(), "{arrow}" }
                span { "{description}" }
            }
            if show_type {
                td { "{kind}" }
            }
            td { "{date}" }
            td { class: amount_class, "{amount}" }
        }
    }
}
