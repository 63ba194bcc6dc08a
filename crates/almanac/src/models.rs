//! View models decoded from the backend, and the closed enumerations used to query it.
//!
//! The backend speaks plain strings for categories, countries, and search types. Here they are
//! closed enums: parsing happens once at the boundary (CLI arguments, config files, decoded
//! history entries) and anything outside the supported set is rejected with
//! [`AlmanacError::UnsupportedValue`] instead of being forwarded.
//!
//! # Examples
//!
//! ```
//! use almanac::models::{Category, Country};
//!
//! let category: Category = "technology".parse().unwrap();
//! assert_eq!(category.as_str(), "technology");
//!
//! let err = "atlantis".parse::<Country>().unwrap_err();
//! assert_eq!(err.to_string(), "Unsupported country value 'atlantis'");
//! ```

use super::*;

/// Current conditions for one city, as returned by the weather endpoint.
///
/// Every field is required: a response missing any of them fails to decode and is handled as a
/// transport/parse failure, so a partial reading never reaches the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
  /// Resolved city name
  pub city:        String,
  /// ISO country code of the city
  pub country:     String,
  /// Temperature in °C
  pub temperature: f64,
  /// Perceived temperature in °C
  pub feels_like:  f64,
  /// Relative humidity in %
  pub humidity:    f64,
  /// Wind speed in m/s
  pub wind_speed:  f64,
  /// Atmospheric pressure in hPa
  pub pressure:    f64,
  /// Human readable conditions, e.g. "Light Rain"
  pub description: String,
  /// Icon identifier understood by the icon host, e.g. "10d"
  pub icon:        String,
  /// Observation time as formatted by the backend, shown verbatim
  pub timestamp:   String,
}

/// A single headline from the news endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
  /// Headline
  pub title:        String,
  /// Short summary, if the source provided one
  #[serde(default)]
  pub description:  Option<String>,
  /// Publisher name; the backend sends `null` when the feed has none
  #[serde(default, deserialize_with = "deserialize_non_empty")]
  pub source:       Option<String>,
  /// Canonical link to the full article
  pub url:          String,
  /// Lead image; empty strings are treated as absent
  #[serde(default, rename = "urlToImage", deserialize_with = "deserialize_non_empty")]
  pub image_url:    Option<String>,
  /// Publication time
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub published_at: DateTime<Utc>,
}

impl NewsArticle {
  /// Text shown when an article comes without a description.
  pub const NO_DESCRIPTION: &'static str = "No description available";

  /// The article's description, or [`NewsArticle::NO_DESCRIPTION`].
  pub fn description_or_default(&self) -> &str {
    self.description.as_deref().filter(|d| !d.is_empty()).unwrap_or(Self::NO_DESCRIPTION)
  }

  /// The publisher name, or an empty string when the feed did not name one.
  pub fn source_or_default(&self) -> &str { self.source.as_deref().unwrap_or_default() }

  /// The article's image, or the shared placeholder when it has none.
  pub fn image_or_placeholder(&self) -> &str {
    self.image_url.as_deref().unwrap_or(crate::format::PLACEHOLDER_IMAGE)
  }
}

/// One past successful search, as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
  /// Which panel the search was made from
  pub search_type:  SearchType,
  /// The query as the backend logged it (a city, or "category - country")
  pub search_query: String,
  /// When the search happened
  #[serde(deserialize_with = "deserialize_timestamp")]
  pub timestamp:    DateTime<Utc>,
}

/// The kind of search a [`HistoryEntry`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
  /// A weather lookup
  Weather,
  /// A news lookup
  News,
}

impl SearchType {
  /// Wire name of the search type.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Weather => "weather",
      Self::News => "news",
    }
  }

  /// Font Awesome class of the glyph shown next to history entries of this type.
  pub fn icon_class(&self) -> &'static str {
    match self {
      Self::Weather => "fas fa-cloud-sun",
      Self::News => "fas fa-newspaper",
    }
  }
}

impl Display for SearchType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for SearchType {
  type Err = AlmanacError;

  fn from_str(s: &str) -> Result<Self> {
    match s {
      "weather" => Ok(Self::Weather),
      "news" => Ok(Self::News),
      other => Err(AlmanacError::unsupported("search type", other)),
    }
  }
}

/// News categories offered by the category selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  /// Business
  Business,
  /// Entertainment
  Entertainment,
  /// General headlines
  #[default]
  General,
  /// Health
  Health,
  /// Science
  Science,
  /// Sports
  Sports,
  /// Technology
  Technology,
}

impl Category {
  /// Every category, in selector order.
  pub const ALL: [Category; 7] = [
    Self::Business,
    Self::Entertainment,
    Self::General,
    Self::Health,
    Self::Science,
    Self::Sports,
    Self::Technology,
  ];

  /// Wire name forwarded to the news endpoint.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Business => "business",
      Self::Entertainment => "entertainment",
      Self::General => "general",
      Self::Health => "health",
      Self::Science => "science",
      Self::Sports => "sports",
      Self::Technology => "technology",
    }
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Category {
  type Err = AlmanacError;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|category| category.as_str() == s)
      .ok_or_else(|| AlmanacError::unsupported("category", s))
  }
}

/// Countries offered by the country selector.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
  /// United States
  #[default]
  Us,
  /// United Kingdom
  Gb,
  /// Canada
  Ca,
  /// Australia
  Au,
  /// India
  In,
  /// Germany
  De,
  /// France
  Fr,
}

impl Country {
  /// Every country, in selector order.
  pub const ALL: [Country; 7] =
    [Self::Us, Self::Gb, Self::Ca, Self::Au, Self::In, Self::De, Self::Fr];

  /// Wire code forwarded to the news endpoint.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Us => "us",
      Self::Gb => "gb",
      Self::Ca => "ca",
      Self::Au => "au",
      Self::In => "in",
      Self::De => "de",
      Self::Fr => "fr",
    }
  }

  /// Display name used by selectors.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Us => "United States",
      Self::Gb => "United Kingdom",
      Self::Ca => "Canada",
      Self::Au => "Australia",
      Self::In => "India",
      Self::De => "Germany",
      Self::Fr => "France",
    }
  }
}

impl Display for Country {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Country {
  type Err = AlmanacError;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|country| country.as_str() == s)
      .ok_or_else(|| AlmanacError::unsupported("country", s))
  }
}

/// Parses the timestamp formats the backend is known to emit.
///
/// Accepts, in order:
/// - RFC 3339 (`2024-10-15T10:30:00Z`)
/// - RFC 2822 / RFC 1123 (`Tue, 15 Oct 2024 10:30:00 GMT`)
/// - Naive `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DDTHH:MM:SS`, read as UTC
///
/// # Examples
///
/// ```
/// use almanac::models::parse_timestamp;
///
/// let a = parse_timestamp("Tue, 15 Oct 2024 10:30:00 GMT").unwrap();
/// let b = parse_timestamp("2024-10-15 10:30:00").unwrap();
/// assert_eq!(a, b);
/// ```
pub fn parse_timestamp(input: &str) -> Option<DateTime<Utc>> {
  let input = input.trim();
  DateTime::parse_from_rfc3339(input)
    .or_else(|_| DateTime::parse_from_rfc2822(input))
    .map(|dt| dt.with_timezone(&Utc))
    .ok()
    .or_else(|| {
      ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"]
        .into_iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .map(|naive| naive.and_utc())
    })
}

/// Custom deserializer for timestamps in any format [`parse_timestamp`] understands.
fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where D: serde::Deserializer<'de> {
  let s: String = String::deserialize(deserializer)?;
  parse_timestamp(&s)
    .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp '{s}'")))
}

/// Custom deserializer mapping `null` and `""` to `None`.
fn deserialize_non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where D: serde::Deserializer<'de> {
  let s: Option<String> = Option::deserialize(deserializer)?;
  Ok(s.filter(|s| !s.trim().is_empty()))
}
