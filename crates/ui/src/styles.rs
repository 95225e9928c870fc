//! Tailwind class strings shared across components
//!
//! Classes must appear as literals in `src/` so the Tailwind content scan
//! picks them up; never assemble palette classes at runtime.

/// Fixed-viewport frame around every dashboard route
pub const SHELL: &str = "flex flex-row h-screen w-screen overflow-hidden bg-rootBg text-gray-100";

/// Routed content region
pub const CONTENT: &str = "flex-1 relative overflow-auto";

pub const SIDEBAR: &str = "w-60 shrink-0 flex flex-col bg-sidebar border-r border-sidebarLite";

pub const SIDEBAR_HEADER: &str = "px-5 py-4 border-b border-sidebarLite";

pub const NAV_LINK: &str = "flex items-center gap-3 px-3 py-2 rounded text-gray-300 hover:bg-sidebarLite hover:text-white transition-colors";

/// Full-screen centered splash
pub const SPLASH: &str = "h-screen w-screen flex justify-center items-center bg-rootBg";

/// Dashed call-to-action that inverts on hover
pub const CTA_BUTTON: &str = "bg-white text-black py-2 px-4 rounded font-bold border-dashed hover:bg-inherit hover:text-white border-2 border-white transition ease-in-out delay-50 hover:-translate-y-1 duration-100";

pub const TOAST: &str = "pointer-events-auto flex items-center gap-3 min-w-64 max-w-md px-4 py-3 rounded shadow-lg bg-sidebar border border-sidebarLite text-sm text-gray-100 cursor-pointer";
