//! The console palette

use std::fmt;
use std::str::FromStr;

use crate::{Rgb, ThemeError};

/// Named colors exposed to Tailwind under `theme.extend.colors`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ThemeColor {
    /// Page background behind every route
    RootBg,
    /// Sidebar surface
    Sidebar,
    /// Lighter sidebar variant for borders and hovered links
    SidebarLite,
}

impl ThemeColor {
    /// Every palette entry, in declaration order
    pub const ALL: [ThemeColor; 3] = [
        ThemeColor::RootBg,
        ThemeColor::Sidebar,
        ThemeColor::SidebarLite,
    ];

    /// Token used in class names, e.g. `bg-sidebarLite`
    pub const fn token(self) -> &'static str {
        match self {
            ThemeColor::RootBg => "rootBg",
            ThemeColor::Sidebar => "sidebar",
            ThemeColor::SidebarLite => "sidebarLite",
        }
    }

    /// Hex literal written into the Tailwind config, kept exactly as declared
    pub const fn hex(self) -> &'static str {
        match self {
            ThemeColor::RootBg => "#14171c",
            ThemeColor::Sidebar => "#22272E",
            ThemeColor::SidebarLite => "#363e49",
        }
    }

    pub const fn rgb(self) -> Rgb {
        match self {
            ThemeColor::RootBg => Rgb::new(0x14, 0x17, 0x1c),
            ThemeColor::Sidebar => Rgb::new(0x22, 0x27, 0x2e),
            ThemeColor::SidebarLite => Rgb::new(0x36, 0x3e, 0x49),
        }
    }

    pub fn from_token(token: &str) -> Result<Self, ThemeError> {
        Self::ALL
            .into_iter()
            .find(|color| color.token() == token)
            .ok_or_else(|| ThemeError::UnknownToken(token.to_string()))
    }
}

impl FromStr for ThemeColor {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl fmt::Display for ThemeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
