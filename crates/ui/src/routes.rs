//! Route paths used by links
//!
//! These must match the `path!` literals in [`crate::App`].

/// Login splash
pub const LOGIN: &str = "/";

/// Dashboard, rendered inside the layout shell
pub const DASHBOARD: &str = "/dash";
