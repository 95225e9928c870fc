//! # MeltCD Theme
//!
//! Color palette and Tailwind CSS configuration for the MeltCD console.
//!
//! The palette is fixed at compile time and read once by the style build
//! step. The console never touches these values at runtime; it only
//! references them through Tailwind class names such as `bg-sidebar`.
//!
//! ## Example
//!
//! ```rust
//! use meltcd_theme::{TailwindConfig, ThemeColor};
//!
//! assert_eq!(ThemeColor::Sidebar.hex(), "#22272E");
//!
//! let module = TailwindConfig::default().to_module().unwrap();
//! assert!(module.contains("sidebarLite"));
//! ```

mod color;
mod error;
mod palette;
mod tailwind;

pub use color::*;
pub use error::*;
pub use palette::*;
pub use tailwind::*;
