//! Notification host

use leptos::prelude::*;

use crate::styles;
use crate::toast::{use_toasts, Toast, ToastKind, Toasts};

/// Overlay rendering every visible toast; click a toast to dismiss it
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();
    let class = format!(
        "pointer-events-none fixed z-50 flex gap-2 {}",
        toasts.position().class()
    );

    view! {
        <div data-region="notifications" class=class aria-live="polite">
            <For
                each=move || toasts.visible()
                key=|toast| (toast.id, toast.revision)
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts /> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: Toasts) -> impl IntoView {
    let id = toast.id;
    let icon_class = match toast.kind {
        ToastKind::Success => "text-green-400",
        ToastKind::Error => "text-red-400",
        ToastKind::Loading => "text-gray-400 animate-pulse",
        ToastKind::Blank => "hidden",
    };

    view! {
        <div
            id=id.to_string()
            class=styles::TOAST
            role=toast.kind.role()
            on:click=move |_| toasts.dismiss(id)
        >
            <span class=icon_class>{toast.kind.icon()}</span>
            <span>{toast.message}</span>
        </div>
    }
}
