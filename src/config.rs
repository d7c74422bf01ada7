use std::str::FromStr;

use crate::error::ConfigError;

pub const DEFAULT_LESSONS_PATH: &str = "/api/lessons";
pub const DEFAULT_IMAGE_HOST: &str = "https://stackverse-server.onrender.com";
pub const DEFAULT_STORE_NAME: &str = "Stackverse";
pub const DEFAULT_TAGLINE: &str = "Lessons";

/// Where the catalog is loaded from at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DataSource {
    /// The dataset embedded in the binary
    Bundled,
    /// A single GET against the lessons endpoint
    #[default]
    Remote,
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bundled" | "static" => Ok(Self::Bundled),
            "remote" => Ok(Self::Remote),
            other => Err(format!("expected `bundled` or `remote`, got `{}`", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_source: DataSource,
    pub api_base_url: String,
    pub lessons_path: String,
    pub image_host: String,
    /// Shown in the navbar and page titles
    pub store_name: String,
    pub tagline: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_source: DataSource::default(),
            api_base_url: String::new(),
            lessons_path: DEFAULT_LESSONS_PATH.to_string(),
            image_host: DEFAULT_IMAGE_HOST.to_string(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
        }
    }
}

impl Config {
    /// Reads configuration captured at build time.
    ///
    /// The browser has no process environment, so values are baked in with `option_env!`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            let value = match var {
                "STOREFRONT_DATA_SOURCE" => option_env!("STOREFRONT_DATA_SOURCE"),
                "STOREFRONT_API_URL" => option_env!("STOREFRONT_API_URL"),
                "STOREFRONT_LESSONS_PATH" => option_env!("STOREFRONT_LESSONS_PATH"),
                "STOREFRONT_IMAGE_HOST" => option_env!("STOREFRONT_IMAGE_HOST"),
                "STOREFRONT_NAME" => option_env!("STOREFRONT_NAME"),
                "STOREFRONT_TAGLINE" => option_env!("STOREFRONT_TAGLINE"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Builds configuration from an arbitrary variable lookup, unset variables use defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let data_source = match lookup("STOREFRONT_DATA_SOURCE") {
            Some(value) => {
                value
                    .parse::<DataSource>()
                    .map_err(|reason| ConfigError::InvalidEnvValue {
                        var: "STOREFRONT_DATA_SOURCE".to_string(),
                        reason,
                    })?
            }
            None => defaults.data_source,
        };

        let api_base_url = lookup("STOREFRONT_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let lessons_path = match lookup("STOREFRONT_LESSONS_PATH") {
            Some(path) if !path.starts_with('/') => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "STOREFRONT_LESSONS_PATH".to_string(),
                    reason: format!("path must start with `/`, got `{}`", path),
                })
            }
            Some(path) => path,
            None => defaults.lessons_path,
        };

        let image_host = lookup("STOREFRONT_IMAGE_HOST")
            .map(|host| host.trim_end_matches('/').to_string())
            .unwrap_or(defaults.image_host);

        let store_name = lookup("STOREFRONT_NAME")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(defaults.store_name);
        let tagline = lookup("STOREFRONT_TAGLINE").unwrap_or(defaults.tagline);

        Ok(Self {
            data_source,
            api_base_url,
            lessons_path,
            image_host,
            store_name,
            tagline,
        })
    }

    /// Browser tab title for a page of the storefront
    pub fn page_title(&self, page: &str) -> String {
        format!("{} | {}", page, self.store_name)
    }

    /// Full URL of the lessons endpoint, relative to the page origin when no base URL is set
    pub fn lessons_url(&self) -> String {
        format!("{}{}", self.api_base_url, self.lessons_path)
    }
}
