//! Sidebar navigation component

use leptos::prelude::*;
use leptos_router::components::A;

use crate::{routes, styles};

/// Sidebar with navigation links
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside data-region="sidebar" class=styles::SIDEBAR>
            // Product mark
            <div class=styles::SIDEBAR_HEADER>
                <h1 class="text-lg font-bold text-white">"MeltCD"</h1>
                <p class="text-xs text-gray-400">"Continuous delivery"</p>
            </div>

            // Navigation
            <nav class="flex-1 p-3 space-y-1">
                <NavLink href=routes::DASHBOARD icon="▦">"Dashboard"</NavLink>
            </nav>

            <div class="p-3 border-t border-sidebarLite">
                <NavLink href=routes::LOGIN icon="⎋">"Sign out"</NavLink>
            </div>
        </aside>
    }
}

/// Navigation link component
#[component]
fn NavLink(href: &'static str, icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <A href=href attr:class=styles::NAV_LINK>
            <span class="w-5 text-center">{icon}</span>
            <span>{children()}</span>
        </A>
    }
}
