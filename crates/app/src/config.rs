use shared_types::{AppConfig, AppError, ChatAvatarConfig};
use std::path::Path;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Default config path, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides [`CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "CHAT_AVATAR_CONFIG";

/// Parse the contents of a config file.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    Ok(toml::from_str(contents)?)
}

/// Read and parse the config file at `path`.
pub fn read_config(path: impl AsRef<Path>) -> Result<AppConfig, AppError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    parse_config(&contents)
}

/// Resolve the config path from the environment, falling back to `config.toml`.
pub fn config_path() -> String {
    std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_PATH.to_string())
}

/// Read the config at `path`, falling back to the defaults when the file
/// is missing or unparseable so the stock logo is always available.
pub fn resolve_config(path: &str) -> AppConfig {
    match read_config(path) {
        Ok(config) => {
            tracing::info!(path = %path, logo_src = %config.chat.logo_src, "loaded chat avatar config");
            config
        }
        Err(err) => {
            tracing::warn!(path = %path, error = %err, "using default chat avatar config");
            AppConfig::default()
        }
    }
}

/// Load the config file into the global `OnceLock`. Only the first call
/// has effect.
pub fn load_config() {
    CONFIG.get_or_init(|| resolve_config(&config_path()));
}

/// Get the loaded avatar config. Returns the defaults if [`load_config`]
/// hasn't been called yet.
pub fn chat_avatar_config() -> ChatAvatarConfig {
    CONFIG
        .get()
        .map(|config| config.chat.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn parse_empty_config_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
    }

    #[test]
    fn parse_overrides_logo() {
        let config = parse_config(
            r#"
            [chat]
            logo_src = "/brand/assistant.png"
            "#,
        )
        .unwrap();
        assert_eq!(config.chat.logo_src, "/brand/assistant.png");
        assert_eq!(config.chat.logo_alt, "AI Logo");
    }

    #[test]
    fn parse_rejects_malformed_toml() {
        let err = parse_config("[chat\nlogo_src = ").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidConfig);
    }

    #[test]
    fn parse_rejects_wrong_types() {
        let err = parse_config("[chat]\nlogo_src = 42").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::InvalidConfig);
    }

    #[test]
    fn read_missing_file_is_not_found() {
        let err = read_config("/definitely/not/here/config.toml").unwrap_err();
        assert_eq!(err.kind, AppErrorKind::NotFound);
    }

    #[test]
    fn read_config_from_disk() {
        let dir = std::env::temp_dir().join(format!("chat-avatar-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "[chat]\nlogo_alt = \"Bot\"\n").unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.chat.logo_alt, "Bot");
        assert_eq!(config.chat.logo_src, "/Ai_Icon.png");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("chat-avatar-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn resolve_missing_file_falls_back_to_defaults() {
        let config = resolve_config("/definitely/not/here/config.toml");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn resolve_malformed_file_falls_back_to_defaults() {
        let dir = temp_dir("malformed");
        let path = dir.join("config.toml");
        std::fs::write(&path, "[chat\nlogo_src = ").unwrap();

        let config = resolve_config(path.to_str().unwrap());
        assert_eq!(config, AppConfig::default());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn resolve_valid_file_keeps_overrides() {
        let dir = temp_dir("valid");
        let path = dir.join("config.toml");
        std::fs::write(&path, "[chat]\nlogo_src = \"/brand/bot.png\"\n").unwrap();

        let config = resolve_config(path.to_str().unwrap());
        assert_eq!(config.chat.logo_src, "/brand/bot.png");
        assert_eq!(config.chat.logo_alt, "AI Logo");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    // Sole test that touches CHAT_AVATAR_CONFIG.
    #[test]
    fn config_path_honours_env_override() {
        std::env::set_var(CONFIG_PATH_ENV, "/etc/chat/avatar.toml");
        assert_eq!(config_path(), "/etc/chat/avatar.toml");

        std::env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(config_path(), "config.toml");
    }
}
