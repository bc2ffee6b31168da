use serde::{Deserialize, Serialize};

/// Well-known path of the assistant logo served by the host application.
pub const DEFAULT_LOGO_SRC: &str = "/Ai_Icon.png";

/// Alt text of the assistant logo.
pub const DEFAULT_LOGO_ALT: &str = "AI Logo";

/// Where the assistant badge loads its logo from.
///
/// Provided to the component tree as context by the host. Every field
/// has a default so that a missing or partial `[chat]` table still
/// renders the stock logo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatAvatarConfig {
    #[serde(default = "default_logo_src")]
    pub logo_src: String,
    #[serde(default = "default_logo_alt")]
    pub logo_alt: String,
}

fn default_logo_src() -> String {
    DEFAULT_LOGO_SRC.to_string()
}

fn default_logo_alt() -> String {
    DEFAULT_LOGO_ALT.to_string()
}

impl Default for ChatAvatarConfig {
    fn default() -> Self {
        Self {
            logo_src: default_logo_src(),
            logo_alt: default_logo_alt(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub chat: ChatAvatarConfig,
}
