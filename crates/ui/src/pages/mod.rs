//! Page components

mod dashboard;
mod login;
mod not_found;

pub use dashboard::*;
pub use login::*;
pub use not_found::*;
