//! Dashboard landing page

use leptos::prelude::*;

/// Dashboard placeholder
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="p-6">
            <h1 class="text-2xl font-bold text-white mb-6">"Dashboard"</h1>
            <div class="flex flex-col items-center justify-center py-16 rounded-lg bg-sidebar text-gray-400">
                <span class="text-4xl mb-4">"▦"</span>
                <p>"No applications yet"</p>
            </div>
        </div>
    }
}
