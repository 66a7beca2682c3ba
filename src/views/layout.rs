//! Dashboard chrome: header, side navigation and the mobile drawer

use super::navbar::{SideNav, SideNavSkeleton, navigation};
use crate::Route;
use crate::config::AppConfig;
use crate::session::{Session, Theme};
use crate::utils::sleep;
use dioxus::prelude::*;
use std::time::Duration;

const BRAND: &str = "VaultX";

/// Navigation is revealed at once when no minimum skeleton time is set
fn starts_ready(skeleton_min: Duration) -> bool {
    skeleton_min.is_zero()
}

/// Keeps the skeleton up for its minimum duration
async fn hold_skeleton(skeleton_min: Duration) {
    if !skeleton_min.is_zero() {
        sleep(skeleton_min).await;
    }
}

/// Entries of the avatar dropdown above the log out action
fn account_menu_links() -> [(&'static str, Route); 2] {
    [
        ("👤 Profile", Route::Profile {}),
        ("⚙️ Settings", Route::Settings {}),
    ]
}

#[component]
pub fn DashboardLayout(children: Element) -> Element {
    let config = use_context::<AppConfig>();
    let session = use_context::<Session>();
    let mut drawer_open = use_signal(|| false);
    // not wired to any backend signal
    let unread = use_signal(|| config.initial_unread_notifications);
    let skeleton_min = config.skeleton_min();
    let mut ready = use_signal(|| starts_ready(skeleton_min));

    use_future(move || async move {
        if !starts_ready(skeleton_min) {
            hold_skeleton(skeleton_min).await;
            ready.set(true);
        }
    });

    let items = navigation(unread());
    let initials = session
        .user()
        .map(|user| user.initials())
        .unwrap_or_else(|| "?".to_string());

    if !ready() {
        return rsx! {
            div { class: "layout",
                header { class: "app-header",
                    div { class: "header-left",
                        button { class: "icon-button mobile-only", disabled: true, "☰" }
                        div { class: "brand",
                            span { class: "brand-icon", "🛡" }
                            span { "{BRAND}" }
                        }
                    }
                    div { class: "header-right",
                        ThemeToggle {}
                        button { class: "icon-button", disabled: true, "🔔" }
                        button { class: "avatar", disabled: true, "{initials}" }
                    }
                }
                div { class: "layout-body",
                    aside { class: "sidebar", SideNavSkeleton { items } }
                    main { class: "layout-main",
                        div { class: "spinner-container",
                            div { class: "spinner" }
                        }
                    }
                }
            }
        };
    }

    let unread_count = unread();
    let drawer_items = items.clone();

    rsx! {
        div { class: "layout",
            header { class: "app-header",
                div { class: "header-left",
                    button {
                        class: "icon-button mobile-only",
                        title: "Toggle menu",
                        onclick: move |_| drawer_open.set(!drawer_open()),
                        "☰"
                    }
                    Link { to: Route::Dashboard {}, class: "brand",
                        span { class: "brand-icon", "🛡" }
                        span { "{BRAND}" }
                    }
                }
                div { class: "header-right",
                    ThemeToggle {}
                    Link {
                        to: Route::Notifications {},
                        class: "icon-button notification-bell",
                        "🔔"
                        if unread_count > 0 {
                            span { class: "bell-count", "{unread_count}" }
                        }
                    }
                    AccountMenu { initials }
                }
            }
            if drawer_open() {
                div {
                    class: "drawer-backdrop",
                    onclick: move |_| drawer_open.set(false),
                }
                aside { class: "drawer",
                    div { class: "brand drawer-brand",
                        span { class: "brand-icon", "🛡" }
                        span { "{BRAND}" }
                    }
                    SideNav {
                        items: drawer_items,
                        on_navigate: move |_| drawer_open.set(false),
                    }
                }
            }
            div { class: "layout-body",
                aside { class: "sidebar", SideNav { items } }
                main { class: "layout-main", {children} }
            }
        }
    }
}

#[component]
fn ThemeToggle() -> Element {
    let session = use_context::<Session>();
    let mut theme = use_context::<Signal<Theme>>();
    let icon = theme().toggle_icon();

    rsx! {
        button {
            class: "icon-button",
            title: "Toggle theme",
            onclick: move |_| {
                let next = theme().toggled();
                session.set_theme(next);
                theme.set(next);
            },
            "{icon}"
        }
    }
}

#[component]
fn AccountMenu(initials: String) -> Element {
    let session = use_context::<Session>();
    let nav = navigator();
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "account-menu",
            button {
                class: "avatar",
                title: "My Account",
                onclick: move |_| open.set(!open()),
                "{initials}"
            }
            if open() {
                div { class: "dropdown",
                    div { class: "dropdown-label", "My Account" }
                    hr {}
                    for (label , route) in account_menu_links() {
                        Link {
                            key: "{label}",
                            to: route,
                            class: "dropdown-item",
                            onclick: move |_| open.set(false),
                            "{label}"
                        }
                    }
                    hr {}
                    button {
                        class: "dropdown-item",
                        onclick: move |_| {
                            session.clear();
                            log::info!("Signed out");
                            open.set(false);
                            nav.push(Route::Login {});
                        },
                        "↪ Log out"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::time::Instant;

    #[test]
    fn test_skeleton_disabled_by_zero() {
        assert!(starts_ready(Duration::ZERO));
        assert!(!starts_ready(Duration::from_millis(1)));
        assert!(!starts_ready(AppConfig::default().skeleton_min()));
    }

    #[tokio::test]
    async fn test_skeleton_held_for_minimum() {
        let started = Instant::now();
        hold_skeleton(Duration::from_millis(40)).await;
        assert!(started.elapsed() >= Duration::from_millis(40));
    }

    #[tokio::test]
    async fn test_zero_minimum_does_not_wait() {
        let started = Instant::now();
        hold_skeleton(Duration::ZERO).await;
        assert!(started.elapsed() < Duration::from_millis(40));
    }

    #[test]
    fn test_account_menu_never_reopens_profile_form() {
        let routes: Vec<Route> = account_menu_links().into_iter().map(|(_, r)| r).collect();
        assert_eq!(routes, vec![Route::Profile {}, Route::Settings {}]);
        assert!(!routes.contains(&Route::CompleteProfile {}));
    }
}
