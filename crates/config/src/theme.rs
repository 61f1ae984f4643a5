//! Built-in style-token bundles.
//!
//! Themes are opaque to the client core: the token strings are handed to
//! the rendering layer unmodified and never interpreted here.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A named bundle of opaque style tokens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub background: String,
    pub gradient_from: String,
    pub gradient_to: String,
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub card_bg: String,
    pub button_text: String,
}

static BUILTIN: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme {
            name: "Navy Emerald".to_string(),
            background: "bg-slate-900".to_string(),
            gradient_from: "from-slate-900".to_string(),
            gradient_to: "to-emerald-900/30".to_string(),
            primary: "bg-emerald-600".to_string(),
            secondary: "bg-slate-800".to_string(),
            accent: "bg-emerald-500".to_string(),
            text_primary: "text-slate-100".to_string(),
            text_secondary: "text-slate-400".to_string(),
            card_bg: "bg-slate-800/60 backdrop-blur-sm".to_string(),
            button_text: "text-white".to_string(),
        },
        Theme {
            name: "Spectrum".to_string(),
            background: "bg-gray-900".to_string(),
            gradient_from: "from-gray-900".to_string(),
            gradient_to: "to-indigo-900/40".to_string(),
            primary: "bg-indigo-600".to_string(),
            secondary: "bg-gray-800".to_string(),
            accent: "bg-pink-500".to_string(),
            text_primary: "text-gray-100".to_string(),
            text_secondary: "text-gray-400".to_string(),
            card_bg: "bg-gray-800/50 backdrop-blur-sm".to_string(),
            button_text: "text-white".to_string(),
        },
        Theme {
            name: "Ivy".to_string(),
            background: "bg-green-50".to_string(),
            gradient_from: "from-green-50".to_string(),
            gradient_to: "to-yellow-100/50".to_string(),
            primary: "bg-green-800".to_string(),
            secondary: "bg-green-100".to_string(),
            accent: "bg-yellow-500".to_string(),
            text_primary: "text-gray-800".to_string(),
            text_secondary: "text-gray-600".to_string(),
            card_bg: "bg-white/70 backdrop-blur-sm".to_string(),
            button_text: "text-white".to_string(),
        },
        Theme {
            name: "Midnight".to_string(),
            background: "bg-slate-900".to_string(),
            gradient_from: "from-slate-900".to_string(),
            gradient_to: "to-sky-900/40".to_string(),
            primary: "bg-sky-500".to_string(),
            secondary: "bg-slate-800".to_string(),
            accent: "bg-emerald-400".to_string(),
            text_primary: "text-slate-200".to_string(),
            text_secondary: "text-slate-400".to_string(),
            card_bg: "bg-slate-800/60 backdrop-blur-sm".to_string(),
            button_text: "text-white".to_string(),
        },
        Theme {
            name: "Sunrise".to_string(),
            background: "bg-orange-50".to_string(),
            gradient_from: "from-orange-50".to_string(),
            gradient_to: "to-teal-100/50".to_string(),
            primary: "bg-orange-500".to_string(),
            secondary: "bg-orange-100".to_string(),
            accent: "bg-teal-400".to_string(),
            text_primary: "text-gray-900".to_string(),
            text_secondary: "text-gray-700".to_string(),
            card_bg: "bg-white/80 backdrop-blur-sm".to_string(),
            button_text: "text-white".to_string(),
        },
    ]
});

impl Theme {
    /// All built-in themes, in presentation order
    pub fn builtin() -> &'static [Theme] {
        &BUILTIN
    }

    /// Case-insensitive lookup. Unknown names fall back to the first
    /// built-in theme so a session always has a usable token bundle.
    pub fn by_name(name: &str) -> &'static Theme {
        BUILTIN
            .iter()
            .find(|theme| theme.name.eq_ignore_ascii_case(name))
            .unwrap_or(&BUILTIN[0])
    }

    /// Whether a name matches a built-in theme
    pub fn is_known(name: &str) -> bool {
        BUILTIN
            .iter()
            .any(|theme| theme.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        assert_eq!(Theme::builtin().len(), 5);
        assert_eq!(Theme::builtin()[0].name, "Navy Emerald");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Theme::by_name("midnight").name, "Midnight");
        assert!(Theme::is_known("SUNRISE"));
    }

    #[test]
    fn test_unknown_names_fall_back_to_the_first_theme() {
        assert_eq!(Theme::by_name("Vantablack").name, "Navy Emerald");
        assert!(!Theme::is_known("Vantablack"));
    }
}
