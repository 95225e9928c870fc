//! Reusable UI components

mod layout;
mod sidebar;
mod toaster;

pub use layout::*;
pub use sidebar::*;
pub use toaster::*;
