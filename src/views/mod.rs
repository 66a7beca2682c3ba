//! Web interface components for the VaultX client
//!
//! This module contains the Dioxus pages mounted by the router, the dashboard
//! chrome shared by the signed-in pages and the notification viewport.

/// Side navigation entries and links
mod navbar;

/// Header, drawer and sidebar wrapping dashboard pages
mod layout;
use layout::DashboardLayout;

/// Dashboard overview
mod home;
pub use home::Dashboard;

/// Profile completion and first account creation
mod profile;
pub use profile::CompleteProfile;

/// Transaction history
mod transactions;
pub use transactions::Transactions;

/// Routes without a dedicated screen yet
mod pages;
pub use pages::{
    Accounts, Investments, Login, NewTransaction, NotFound, Notifications, Profile, Settings,
};

mod toasts;
pub use toasts::ToastViewport;
