use crate::toast::{Toast, Toaster, Variant};
use crate::utils::sleep;
use dioxus::prelude::*;

/// Stacks the queued notifications in a corner of the window
#[component]
pub fn ToastViewport() -> Element {
    let toaster = use_context::<Toaster>();
    let toasts = toaster.toasts();

    rsx! {
        div { class: "toast-viewport", role: "status",
            for toast in toasts {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let toaster = use_context::<Toaster>();
    let id = toast.id;

    use_future(move || async move {
        sleep(toaster.lifetime()).await;
        toaster.dismiss(id);
    });

    let class = match toast.variant {
        Variant::Default => "toast",
        Variant::Destructive => "toast toast-destructive",
    };

    rsx! {
        div { class,
            div { class: "toast-body",
                div { class: "toast-title", "{toast.title}" }
                if !toast.description.is_empty() {
                    div { class: "toast-description", "{toast.description}" }
                }
            }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| toaster.dismiss(id),
                "✕"
            }
        }
    }
}
