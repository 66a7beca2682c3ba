use crate::Route;
use crate::utils::classes;
use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItem {
    pub name: &'static str,
    pub route: Route,
    pub icon: &'static str,
    pub badge: Option<u32>,
}

/// Side navigation entries. The notifications entry carries the unread
/// count, hidden when there is nothing unread.
pub fn navigation(unread: u32) -> Vec<NavigationItem> {
    let item = |name: &'static str, route: Route, icon: &'static str| NavigationItem {
        name,
        route,
        icon,
        badge: None,
    };
    vec![
        item("Dashboard", Route::Dashboard {}, "🏠"),
        item("Accounts", Route::Accounts {}, "💳"),
        item("Transactions", Route::Transactions {}, "📊"),
        item("Investments", Route::Investments {}, "🐷"),
        NavigationItem {
            badge: (unread > 0).then_some(unread),
            ..item("Notifications", Route::Notifications {}, "🔔")
        },
        item("Settings", Route::Settings {}, "⚙️"),
    ]
}

/// Highlighting uses exact route equality, a child route does not light up
/// its parent
pub fn is_active(item: &NavigationItem, current: &Route) -> bool {
    item.route == *current
}

#[component]
pub fn SideNav(items: Vec<NavigationItem>, on_navigate: Option<EventHandler<()>>) -> Element {
    let current = use_route::<Route>();

    rsx! {
        nav { class: "side-nav",
            for item in items {
                Link {
                    key: "{item.name}",
                    to: item.route.clone(),
                    class: classes(&["nav-item", if is_active(&item, &current) { "active" } else { "" }]),
                    onclick: move |_| {
                        if let Some(handler) = on_navigate {
                            handler.call(());
                        }
                    },
                    span { class: "nav-icon", "{item.icon}" }
                    span { "{item.name}" }
                    if let Some(count) = item.badge {
                        span { class: "badge", "{count}" }
                    }
                }
            }
        }
    }
}

/// Navigation labels shown while the layout skeleton is up
#[component]
pub fn SideNavSkeleton(items: Vec<NavigationItem>) -> Element {
    rsx! {
        nav { class: "side-nav",
            for item in items {
                div { key: "{item.name}", class: "nav-item muted",
                    span { class: "nav-icon", "{item.icon}" }
                    span { "{item.name}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_entries() {
        let items = navigation(3);
        let names: Vec<&str> = items.iter().map(|i| i.name).collect();
        assert_eq!(
            names,
            vec![
                "Dashboard",
                "Accounts",
                "Transactions",
                "Investments",
                "Notifications",
                "Settings"
            ]
        );
        assert_eq!(items[4].badge, Some(3));
        assert!(items.iter().filter(|i| i.badge.is_some()).count() == 1);
    }

    #[test]
    fn test_badge_hidden_when_nothing_unread() {
        assert!(navigation(0).iter().all(|i| i.badge.is_none()));
    }

    #[test]
    fn test_exact_match_highlighting() {
        let items = navigation(0);
        let transactions = &items[2];
        assert!(is_active(transactions, &Route::Transactions {}));
        assert!(!is_active(transactions, &Route::NewTransaction {}));
        assert!(!is_active(&items[0], &Route::Transactions {}));
    }
}
