//! # MeltCD Console
//!
//! Web console for MeltCD, built with Leptos 0.8 and compiled to WebAssembly.
//!
//! ## Routes
//!
//! - `/` - Login splash with a single "Open Dashboard" button
//! - `/dash` - Dashboard, rendered inside the layout shell
//! - `/dash/*` - Unknown dashboard sections, also inside the shell
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ Layout                                       │
//! │  ┌──────────┐  ┌───────────────────────────┐ │
//! │  │ Sidebar  │  │ Outlet (active route)     │ │
//! │  │          │  │                           │ │
//! │  └──────────┘  └───────────────────────────┘ │
//! │                 Toaster (overlay)            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Colors come from the `meltcd-theme` palette through Tailwind classes
//! (`bg-rootBg`, `bg-sidebar`, `bg-sidebarLite`).

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::path;
use tracing_wasm::WASMLayerConfigBuilder;

pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod styles;
pub mod toast;

pub use config::{LogLevel, ToastConfig, ToastPosition, UiConfig};
pub use error::{Result, UiError};
pub use toast::{provide_toasts, use_toasts, Toast, ToastId, ToastKind, ToastQueue, Toasts};

/// Boot the console: panic hook, logging, then mount onto `<body>`
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, load_error) = match UiConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (UiConfig::default(), Some(e)),
    };

    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level.into())
            .build(),
    );

    if let Some(e) = load_error {
        tracing::warn!("Using default console config: {}", e);
    }
    tracing::info!(level = ?config.log_level, "Starting MeltCD console");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}

/// Root component
#[component]
pub fn App(
    /// Runtime settings; defaults when omitted
    #[prop(optional)]
    config: UiConfig,
) -> impl IntoView {
    provide_toasts(&config.toast);

    view! {
        <Router>
            <Routes fallback=|| view! { <pages::NotFound /> }>
                <Route path=path!("/") view=pages::LoginPage />
                <ParentRoute path=path!("/dash") view=components::Layout>
                    <Route path=path!("") view=pages::DashboardPage />
                    <Route path=path!("*rest") view=pages::SectionNotFound />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
