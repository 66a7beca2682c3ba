use super::DashboardLayout;
use crate::Route;
use crate::session::Session;
use dioxus::prelude::*;

#[component]
pub fn Dashboard() -> Element {
    let session = use_context::<Session>();
    let greeting = match session.user() {
        Some(user) if !user.name.trim().is_empty() => format!("Welcome back, {}", user.name.trim()),
        _ => "Welcome back".to_string(),
    };

    rsx! {
        DashboardLayout {
            div { id: "dashboard-page", class: "page",
                div { class: "page-header",
                    h1 { "{greeting}" }
                }
                div { class: "card-grid",
                    QuickLink {
                        to: Route::Transactions {},
                        title: "Transactions",
                        description: "Review incoming and outgoing transfers.",
                    }
                    QuickLink {
                        to: Route::Accounts {},
                        title: "Accounts",
                        description: "See the accounts attached to your profile.",
                    }
                    QuickLink {
                        to: Route::Settings {},
                        title: "Settings",
                        description: "Adjust your preferences.",
                    }
                }
            }
        }
    }
}

#[component]
fn QuickLink(to: Route, title: &'static str, description: &'static str) -> Element {
    rsx! {
        Link { to, class: "card card-link",
            h2 { "{title}" }
            p { class: "muted", "{description}" }
        }
    }
}
