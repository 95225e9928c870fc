//! Layout shell for dashboard routes

use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::{Sidebar, Toaster};
use crate::styles;

/// Sidebar, routed content, and the notification host overlaying both
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class=styles::SHELL>
            <Sidebar />
            <main data-region="content" class=styles::CONTENT>
                <Outlet />
            </main>
            <Toaster />
        </div>
    }
}
