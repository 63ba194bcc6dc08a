//! On-disk configuration.
//!
//! The configuration is a small TOML file. Every key is optional; missing keys take their
//! defaults, so an empty file is a valid configuration:
//!
//! ```toml
//! base_url = "http://127.0.0.1:5000"
//! default_city = "London"
//! default_category = "general"
//! default_country = "us"
//! output_path = "/home/me/.local/share/almanac/dashboard.html"
//! ```
//!
//! Category and country are checked against the supported sets while loading, so a typo in the
//! file is reported up front rather than forwarded to the backend.

use super::*;

/// Base URL of a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// City queried on startup unless configured otherwise.
pub const DEFAULT_CITY: &str = "London";

/// Dashboard configuration.
///
/// # Examples
///
/// ```
/// use almanac::{config::Config, models::Country};
///
/// let config = Config::default().with_default_city("Lisbon").with_default_country(Country::Gb);
/// assert_eq!(config.default_city, "Lisbon");
/// assert_eq!(config.base_url, almanac::config::DEFAULT_BASE_URL);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Root URL of the backend proxy
  pub base_url:         String,
  /// City for the startup weather query
  pub default_city:     String,
  /// Category for the startup news query
  pub default_category: Category,
  /// Country for the startup news query
  pub default_country:  Country,
  /// Where the rendered dashboard page is written
  pub output_path:      PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      base_url:         DEFAULT_BASE_URL.to_string(),
      default_city:     DEFAULT_CITY.to_string(),
      default_category: Category::default(),
      default_country:  Country::default(),
      output_path:      Self::default_output_path(),
    }
  }
}

impl Config {
  /// Returns the default path of the configuration file.
  ///
  /// - On Unix: `~/.config/almanac/config.toml`
  /// - On macOS: `~/Library/Application Support/almanac/config.toml`
  /// - On Windows: `%APPDATA%\almanac\config.toml`
  /// - Fallback: `./almanac/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("almanac").join("config.toml")
  }

  /// Returns the default location of the rendered dashboard page.
  pub fn default_output_path() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join("almanac").join("dashboard.html")
  }

  /// Reads a configuration from a TOML file.
  ///
  /// # Errors
  ///
  /// - [`AlmanacError::Path`] if the file cannot be read
  /// - [`AlmanacError::TomlDe`] if it is not valid TOML or names an unsupported category/country
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Like [`Config::load`], but a missing file yields [`Config::default`].
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No configuration at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    Self::load(path)
  }

  /// Writes the configuration to `path`, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    debug!("Saved configuration to {}", path.display());
    Ok(())
  }

  /// Sets the backend root URL.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Sets the startup city.
  pub fn with_default_city(mut self, city: impl Into<String>) -> Self {
    self.default_city = city.into();
    self
  }

  /// Sets the startup news category.
  pub fn with_default_category(mut self, category: Category) -> Self {
    self.default_category = category;
    self
  }

  /// Sets the startup news country.
  pub fn with_default_country(mut self, country: Country) -> Self {
    self.default_country = country;
    self
  }

  /// Sets where the rendered page is written.
  pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.output_path = path.into();
    self
  }

  /// Builds an HTTP collaborator for the configured backend.
  pub fn collaborator(&self) -> Result<HttpCollaborator> { HttpCollaborator::new(&self.base_url) }
}
