use super::DashboardLayout;
use crate::Route;
use crate::model::UserProfile;
use crate::profile::FormField;
use crate::session::Session;
use dioxus::prelude::*;

#[component]
fn Placeholder(id: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        DashboardLayout {
            div { id, class: "page",
                div { class: "page-header",
                    h1 { "{title}" }
                }
                div { class: "card",
                    p { class: "muted", "{description}" }
                }
            }
        }
    }
}

#[component]
pub fn Accounts() -> Element {
    rsx! {
        Placeholder {
            id: "accounts-page",
            title: "Accounts",
            description: "Your accounts will be listed here.",
        }
    }
}

#[component]
pub fn NewTransaction() -> Element {
    rsx! {
        Placeholder {
            id: "new-transaction-page",
            title: "New Transaction",
            description: "Sending money is not available yet.",
        }
    }
}

#[component]
pub fn Investments() -> Element {
    rsx! {
        Placeholder {
            id: "investments-page",
            title: "Investments",
            description: "No investments to show.",
        }
    }
}

#[component]
pub fn Notifications() -> Element {
    rsx! {
        Placeholder {
            id: "notifications-page",
            title: "Notifications",
            description: "You are all caught up.",
        }
    }
}

#[component]
pub fn Settings() -> Element {
    rsx! {
        Placeholder {
            id: "settings-page",
            title: "Settings",
            description: "Preferences will be editable here.",
        }
    }
}

/// Read-only view of the cached profile
#[component]
pub fn Profile() -> Element {
    let session = use_context::<Session>();
    let details = profile_details(session.user().as_ref());

    rsx! {
        DashboardLayout {
            div { id: "profile-details-page", class: "page",
                div { class: "page-header",
                    h1 { "Profile" }
                }
                div { class: "card",
                    if details.is_empty() {
                        p { class: "muted", "Your profile has not been completed yet." }
                        Link { to: Route::CompleteProfile {}, class: "button button-primary button-small",
                            "Complete profile"
                        }
                    }
                    for (label , value) in details {
                        div { key: "{label}", class: "detail-row",
                            span { class: "muted", "{label}" }
                            span { "{value}" }
                        }
                    }
                }
            }
        }
    }
}

fn profile_details(user: Option<&UserProfile>) -> Vec<(&'static str, String)> {
    match user {
        Some(user) => vec![
            (FormField::Name.label(), user.name.clone()),
            (FormField::Phone.label(), user.phone.clone()),
            (FormField::Address.label(), user.address.clone()),
        ],
        None => Vec::new(),
    }
}

/// Sign-in stand-in: accepts a token issued by the backend and moves on to
/// profile completion
#[component]
pub fn Login() -> Element {
    let session = use_context::<Session>();
    let nav = navigator();
    let mut token = use_signal(String::new);

    let sign_in = move |event: FormEvent| {
        event.prevent_default();
        let value = token();
        if value.trim().is_empty() {
            return;
        }
        session.set_token(&value);
        log::info!("Token stored, continuing to profile completion");
        nav.push(Route::CompleteProfile {});
    };

    rsx! {
        div { id: "login-page", class: "centered-page",
            div { class: "card",
                div { class: "card-header",
                    h1 { "Sign in" }
                    p { class: "muted", "Paste the access token issued by the VaultX API." }
                }
                form { onsubmit: sign_in,
                    div { class: "field",
                        label { r#for: "token", "Access token" }
                        input {
                            id: "token",
                            name: "token",
                            r#type: "password",
                            class: "input",
                            value: "{token}",
                            oninput: move |event| token.set(event.value()),
                        }
                    }
                    div { class: "card-footer",
                        button {
                            class: "button button-primary button-wide",
                            r#type: "submit",
                            disabled: token.read().trim().is_empty(),
                            "Continue"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div { id: "not-found-page", class: "centered-page",
            h1 { "Page not found" }
            p { class: "muted", "Nothing lives at /{path}." }
            Link { to: Route::Dashboard {}, class: "button button-primary", "Back to dashboard" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_details_from_cached_user() {
        let user = UserProfile {
            name: "Ada Lovelace".to_string(),
            phone: "+441234567890".to_string(),
            address: "London".to_string(),
            ..Default::default()
        };
        let details = profile_details(Some(&user));
        assert_eq!(details[0], ("Full Name", "Ada Lovelace".to_string()));
        assert_eq!(details.len(), 3);
        assert!(profile_details(None).is_empty());
    }
}
