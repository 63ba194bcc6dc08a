use reqwest::{header, Url};

use super::*;

/// [`Collaborator`] backed by the dashboard's HTTP backend.
///
/// Issues one `GET` per call against `base_url`, percent-encoding every query value, and decodes
/// the body with [`decode_envelope`] whatever the status code. No retries, timeouts or caching are
/// applied.
///
/// # Examples
///
/// ```no_run
/// # use almanac::{collaborator::HttpCollaborator, prelude::*};
/// # async fn example() -> Result<()> {
/// let backend = HttpCollaborator::new("http://127.0.0.1:5000")?;
/// let reading = backend.weather("São Paulo").await?;
/// println!("{} °C", reading.temperature);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpCollaborator {
  /// Backend root the endpoint paths are joined onto
  base_url: Url,
  /// Shared connection pool
  client:   reqwest::Client,
}

impl HttpCollaborator {
  /// Creates a collaborator for the backend at `base_url`.
  ///
  /// # Errors
  ///
  /// Returns [`AlmanacError::Config`] if `base_url` is not an absolute `http`/`https` URL.
  pub fn new(base_url: &str) -> Result<Self> {
    let base_url = Url::parse(base_url)
      .map_err(|e| AlmanacError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
    if !matches!(base_url.scheme(), "http" | "https") {
      return Err(AlmanacError::Config(format!(
        "Base URL must use http or https, got '{}'",
        base_url.scheme()
      )));
    }
    Ok(Self { base_url, client: reqwest::Client::new() })
  }

  /// Builds the full URL for `endpoint` with `query` appended, percent-encoded.
  ///
  /// ```
  /// # use almanac::collaborator::{Endpoint, HttpCollaborator};
  /// let backend = HttpCollaborator::new("http://localhost:5000").unwrap();
  /// let url = backend.endpoint_url(Endpoint::Weather, &[("city", "New York & Co")]).unwrap();
  /// assert_eq!(url.as_str(), "http://localhost:5000/api/weather?city=New+York+%26+Co");
  /// ```
  pub fn endpoint_url(&self, endpoint: Endpoint, query: &[(&str, &str)]) -> Result<Url> {
    let mut url = self
      .base_url
      .join(endpoint.path())
      .map_err(|e| AlmanacError::Config(format!("Invalid endpoint '{endpoint}': {e}")))?;
    if !query.is_empty() {
      url.query_pairs_mut().extend_pairs(query);
    }
    Ok(url)
  }

  /// Sends one GET and decodes the envelope.
  async fn fetch<T: DeserializeOwned>(
    &self,
    endpoint: Endpoint,
    query: &[(&str, &str)],
  ) -> Result<T> {
    let url = self.endpoint_url(endpoint, query)?;
    debug!("Fetching {} via: {}", endpoint, url);

    let response = self.client.get(url).header(header::ACCEPT, "application/json").send().await?;
    let status = response.status();
    let data = response.bytes().await?;

    trace!("{} response ({}): {}", endpoint, status, String::from_utf8_lossy(&data));

    decode_envelope(&data)
  }
}

#[async_trait]
impl Collaborator for HttpCollaborator {
  async fn weather(&self, city: &str) -> Result<WeatherReading> {
    self.fetch(Endpoint::Weather, &[("city", city)]).await
  }

  async fn news(&self, category: Category, country: Country) -> Result<Vec<NewsArticle>> {
    self
      .fetch(Endpoint::News, &[("category", category.as_str()), ("country", country.as_str())])
      .await
  }

  async fn search_history(&self) -> Result<Vec<HistoryEntry>> {
    self.fetch(Endpoint::SearchHistory, &[]).await
  }
}
