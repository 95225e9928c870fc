//! 404 Not Found page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::{routes, styles};

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class=styles::SPLASH>
            <div class="flex flex-col items-center text-gray-100">
                <h1 class="text-4xl font-bold mb-2">"404"</h1>
                <p class="text-gray-400 mb-8">"Page not found"</p>
                <A href=routes::DASHBOARD attr:class=styles::CTA_BUTTON>
                    "Go to Dashboard"
                </A>
            </div>
        </div>
    }
}

/// Unknown path below the dashboard, rendered inside the layout shell
#[component]
pub fn SectionNotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center h-full text-gray-400">
            <p class="mb-4">"Nothing here"</p>
            <A href=routes::DASHBOARD attr:class="text-white underline">
                "Back to Dashboard"
            </A>
        </div>
    }
}
