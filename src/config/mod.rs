//! Configuration management

use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// Public origin of the deployed site, used for sitemap and robots
    /// URLs. No trailing slash.
    #[serde(default = "default_site_base")]
    pub site_base: String,
}

fn default_port() -> u16 {
    8080
}

fn default_site_base() -> String {
    "https://pavitinfotech.com".to_string()
}

/// Get config directory (PAVIT_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("PAVIT_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join("Library/Application Support/pavit-web");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join("pavit-web");
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home).join(".config/pavit-web");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join("pavit-web");
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", 8080)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (PAVIT_PORT, PAVIT_SITE_BASE, etc.)
        .add_source(
            ::config::Environment::with_prefix("PAVIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: PAVIT_PORT > PORT > config file > default. PORT is
    // what Docker images and most PaaS runners inject.
    if let Ok(port) = std::env::var("PAVIT_PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    } else if let Ok(port) = std::env::var("PORT") {
        if let Ok(port_num) = port.parse::<u16>() {
            builder = builder.set_override("port", port_num as i64)?;
        }
    }

    let config = builder.build()?;
    let mut config: Config = config.try_deserialize()?;
    config.site_base = config.site_base.trim_end_matches('/').to_string();

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env() {
        env::remove_var("PAVIT_PORT");
        env::remove_var("PORT");
        env::remove_var("PAVIT_SITE_BASE");
        env::set_var("PAVIT_CONFIG_DIR", "/tmp/pavit-test-nonexistent");
    }

    #[test]
    #[serial]
    fn defaults_without_any_environment() {
        clear_env();

        let config = load_config().expect("config should load");

        env::remove_var("PAVIT_CONFIG_DIR");

        assert_eq!(config.port, 8080);
        assert_eq!(config.site_base, "https://pavitinfotech.com");
    }

    #[test]
    #[serial]
    fn port_env_fallback() {
        clear_env();
        env::set_var("PORT", "3000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("PAVIT_CONFIG_DIR");

        assert_eq!(config.port, 3000, "PORT env var should set config.port");
    }

    #[test]
    #[serial]
    fn pavit_port_takes_precedence_over_port() {
        clear_env();
        env::set_var("PORT", "3000");
        env::set_var("PAVIT_PORT", "4000");

        let config = load_config().expect("config should load");

        env::remove_var("PORT");
        env::remove_var("PAVIT_PORT");
        env::remove_var("PAVIT_CONFIG_DIR");

        assert_eq!(config.port, 4000, "PAVIT_PORT should win over PORT");
    }

    #[test]
    #[serial]
    fn site_base_trailing_slash_is_trimmed() {
        clear_env();
        env::set_var("PAVIT_SITE_BASE", "https://staging.pavitinfotech.com/");

        let config = load_config().expect("config should load");

        env::remove_var("PAVIT_SITE_BASE");
        env::remove_var("PAVIT_CONFIG_DIR");

        assert_eq!(config.site_base, "https://staging.pavitinfotech.com");
    }

    #[test]
    #[serial]
    fn config_file_is_read_and_env_wins() {
        clear_env();

        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("config.toml"), "port = 9090\n").expect("write config");
        env::set_var("PAVIT_CONFIG_DIR", dir.path());

        let config = load_config().expect("config should load");
        assert_eq!(config.port, 9090, "file value should apply");

        env::set_var("PORT", "9191");
        let config = load_config().expect("config should load");
        assert_eq!(config.port, 9191, "env should beat the file");

        env::remove_var("PORT");
        env::remove_var("PAVIT_CONFIG_DIR");
    }
}
