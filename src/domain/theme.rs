// Theme domain model - static style token bundles
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeKey {
    Light,
    #[default]
    Dark,
    HighContrast,
}

impl ThemeKey {
    pub const ALL: [ThemeKey; 3] = [ThemeKey::Light, ThemeKey::Dark, ThemeKey::HighContrast];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKey::Light => "light",
            ThemeKey::Dark => "dark",
            ThemeKey::HighContrast => "highContrast",
        }
    }

    pub fn tokens(self) -> &'static Theme {
        match self {
            ThemeKey::Light => &LIGHT,
            ThemeKey::Dark => &DARK,
            ThemeKey::HighContrast => &HIGH_CONTRAST,
        }
    }
}

impl FromStr for ThemeKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown theme: {}", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub name: &'static str,
    pub bg: &'static str,
    pub card_bg: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub button: &'static str,
    pub topbar: &'static str,
}

static LIGHT: Theme = Theme {
    name: "Claro",
    bg: "from-slate-100 to-blue-50",
    card_bg: "bg-white/90 backdrop-blur-xl border-white/30 shadow-2xl shadow-blue-500/10",
    text: "text-gray-900",
    text_secondary: "text-gray-600",
    border: "border-gray-200/50",
    accent: "text-blue-600",
    button: "bg-white/90 hover:bg-white text-gray-700 hover:text-gray-900 shadow-lg",
    topbar: "bg-white/80 backdrop-blur-2xl border-gray-200/30 shadow-xl",
};

static DARK: Theme = Theme {
    name: "Escuro",
    bg: "from-gray-900 via-slate-900 to-black",
    card_bg: "bg-gray-900/80 backdrop-blur-xl border-gray-700/30 shadow-2xl shadow-purple-500/20",
    text: "text-white",
    text_secondary: "text-gray-300",
    border: "border-gray-700/50",
    accent: "text-cyan-400",
    button: "bg-gray-800/90 hover:bg-gray-700/90 text-gray-200 hover:text-white shadow-lg",
    topbar: "bg-gray-900/80 backdrop-blur-2xl border-gray-800/30 shadow-2xl",
};

static HIGH_CONTRAST: Theme = Theme {
    name: "Alto Contraste",
    bg: "from-black to-gray-900",
    card_bg: "bg-white/95 border-4 border-black shadow-2xl",
    text: "text-black",
    text_secondary: "text-gray-800",
    border: "border-black",
    accent: "text-yellow-600",
    button: "bg-yellow-400 hover:bg-yellow-500 text-black font-bold shadow-xl",
    topbar: "bg-white/95 border-4 border-b-black shadow-2xl",
};
