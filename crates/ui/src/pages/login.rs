//! Login splash

use leptos::prelude::*;
use leptos_router::components::A;

use crate::{routes, styles};

/// Single centered button leading to the dashboard
#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class=styles::SPLASH>
            <div class="flex flex-col justify-center items-center">
                <A href=routes::DASHBOARD>
                    <button
                        class=styles::CTA_BUTTON
                        on:click=|_| tracing::debug!(to = routes::DASHBOARD, "Opening dashboard")
                    >
                        "Open Dashboard"
                    </button>
                </A>
            </div>
        </div>
    }
}
