use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server_uri: String,
    pub base_path: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_uri: "http://localhost:3000".to_string(),
            base_path: String::new(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            server_uri: option_env!("SERVER_URI")
                .unwrap_or("http://localhost:3000").to_string(),
            base_path: option_env!("BASE_PATH")
                .unwrap_or("").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_uri, "http://localhost:3000");
        assert!(config.base_path.is_empty());
        assert!(config.enable_logging);
    }

    #[test]
    fn test_config_is_loaded() {
        // from_env siempre produce un server_uri usable
        let config = AppConfig::from_env();
        assert!(!config.server_uri.is_empty());
    }
}
