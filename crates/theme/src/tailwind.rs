//! Tailwind CSS configuration
//!
//! Renders the `tailwind.config.js` module the style build consumes:
//!
//! ```text
//! /** @type {import('tailwindcss').Config} */
//! module.exports = {
//!   "content": [...],
//!   "theme": { "extend": { "colors": { "rootBg": "#14171c", ... } } },
//!   "plugins": []
//! };
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Result, Rgb, ThemeColor, ThemeError};

/// Files Tailwind scans for class names, relative to the console crate
pub const CONTENT_GLOBS: [&str; 2] = ["./index.html", "./src/**/*.rs"];

const MODULE_HEADER: &str = "/** @type {import('tailwindcss').Config} */\nmodule.exports = ";
const MODULE_FOOTER: &str = ";\n";

/// Contents of `tailwind.config.js`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailwindConfig {
    pub content: Vec<String>,
    pub theme: ThemeSection,
    #[serde(default)]
    pub plugins: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeSection {
    pub extend: ThemeExtend,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeExtend {
    /// Token to hex literal
    pub colors: BTreeMap<String, String>,
}

impl Default for TailwindConfig {
    fn default() -> Self {
        Self::with_content(CONTENT_GLOBS)
    }
}

impl TailwindConfig {
    /// Palette config scanning the given globs
    pub fn with_content<I, S>(content: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors = ThemeColor::ALL
            .into_iter()
            .map(|color| (color.token().to_string(), color.hex().to_string()))
            .collect();

        Self {
            content: content.into_iter().map(Into::into).collect(),
            theme: ThemeSection {
                extend: ThemeExtend { colors },
            },
            plugins: Vec::new(),
        }
    }

    /// Look up a color by token, validating it against the palette
    pub fn color(&self, token: &str) -> Result<&str> {
        ThemeColor::from_token(token)?;
        self.theme
            .extend
            .colors
            .get(token)
            .map(String::as_str)
            .ok_or_else(|| ThemeError::UnknownToken(token.to_string()))
    }

    /// Every color must be a palette token whose literal parses to the
    /// palette's RGB value
    pub fn validate(&self) -> Result<()> {
        for (token, hex) in &self.theme.extend.colors {
            let color = ThemeColor::from_token(token)?;
            let found = Rgb::parse_hex(hex)?;
            if found != color.rgb() {
                return Err(ThemeError::ColorMismatch {
                    token: token.clone(),
                    expected: color.rgb(),
                    found,
                });
            }
        }
        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        self.validate()?;
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render as a CommonJS module
    pub fn to_module(&self) -> Result<String> {
        let json = self.to_json()?;
        tracing::debug!(
            colors = self.theme.extend.colors.len(),
            globs = self.content.len(),
            "Rendered tailwind config"
        );
        Ok(format!("{MODULE_HEADER}{json}{MODULE_FOOTER}"))
    }

    /// Parse a module produced by [`TailwindConfig::to_module`]
    pub fn from_module(source: &str) -> Result<Self> {
        let body = source
            .trim()
            .strip_prefix(MODULE_HEADER.trim_end())
            .ok_or_else(|| ThemeError::MalformedModule("missing module.exports header".into()))?
            .trim()
            .strip_suffix(';')
            .ok_or_else(|| ThemeError::MalformedModule("missing trailing semicolon".into()))?;

        let config: Self = serde_json::from_str(body)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_contents() {
        let config = TailwindConfig::default();

        assert_eq!(config.content, vec!["./index.html", "./src/**/*.rs"]);
        assert!(config.plugins.is_empty());
        assert_eq!(config.theme.extend.colors.len(), 3);
        assert_eq!(config.color("rootBg").unwrap(), "#14171c");
        assert_eq!(config.color("sidebar").unwrap(), "#22272E");
        assert_eq!(config.color("sidebarLite").unwrap(), "#363e49");
    }

    #[test]
    fn test_color_rejects_unknown_token() {
        let config = TailwindConfig::default();
        assert!(matches!(
            config.color("primary"),
            Err(ThemeError::UnknownToken(_))
        ));
    }

    #[test]
    fn test_render_validates_colors() {
        let mut config = TailwindConfig::default();
        config
            .theme
            .extend
            .colors
            .insert("sidebar".into(), "#22272e".into());
        assert!(config.to_json().is_ok());

        config
            .theme
            .extend
            .colors
            .insert("sidebar".into(), "#22272".into());
        assert!(matches!(config.to_json(), Err(ThemeError::InvalidHex(_))));

        config
            .theme
            .extend
            .colors
            .insert("sidebar".into(), "#000000".into());
        assert!(matches!(
            config.to_module(),
            Err(ThemeError::ColorMismatch { ref token, found, .. })
                if token == "sidebar" && found == Rgb::new(0, 0, 0)
        ));
    }

    #[test]
    fn test_render_rejects_foreign_token() {
        let mut config = TailwindConfig::default();
        config
            .theme
            .extend
            .colors
            .insert("primary".into(), "#ffffff".into());

        assert!(matches!(config.to_json(), Err(ThemeError::UnknownToken(_))));
    }

    #[test]
    fn test_json_layout() {
        let json = TailwindConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["content"][1], "./src/**/*.rs");
        assert_eq!(value["theme"]["extend"]["colors"]["sidebarLite"], "#363e49");
        assert_eq!(value["plugins"], serde_json::json!([]));
    }

    #[test]
    fn test_module_round_trip() {
        let config = TailwindConfig::with_content(["./index.html", "./components/**/*.rs"]);
        let module = config.to_module().unwrap();

        assert!(module.starts_with("/** @type {import('tailwindcss').Config} */\n"));
        assert!(module.ends_with("};\n"));
        assert_eq!(TailwindConfig::from_module(&module).unwrap(), config);
    }

    #[test]
    fn test_from_module_rejects_foreign_source() {
        let err = TailwindConfig::from_module("export default { content: [] };").unwrap_err();
        assert!(matches!(err, ThemeError::MalformedModule(_)));

        let err = TailwindConfig::from_module(
            "/** @type {import('tailwindcss').Config} */\nmodule.exports = {}",
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::MalformedModule(_)));
    }

    #[test]
    fn test_from_module_rejects_bad_json() {
        let err = TailwindConfig::from_module(
            "/** @type {import('tailwindcss').Config} */\nmodule.exports = { content: [] };",
        )
        .unwrap_err();
        assert!(matches!(err, ThemeError::Serialize(_)));
    }
}
