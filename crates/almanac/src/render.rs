//! HTML rendering of the dashboard.
//!
//! Every panel renders all three of its regions and marks the invisible ones with the `hidden`
//! class, so the markup always reflects exactly one visible region per panel. All text coming
//! from the backend is escaped: element content with [`escape_html`], attribute values (URLs,
//! `alt` text) with [`escape_attribute`]. Article links other than `http`/`https` become `#`.

use crate::{
  dashboard::Snapshot,
  format::{
    escape_attribute, escape_html, publish_date, safe_href, time_ago, weather_icon_url,
    ERROR_PREFIX, PLACEHOLDER_IMAGE,
  },
  history::HistoryLog,
};

use super::*;

/// Text shown in the news panel when the backend returned no articles.
pub const NO_ARTICLES: &str = "No articles found.";

/// Text shown in the weather panel before the first query.
pub const WEATHER_PROMPT: &str = "Search for a city to see current conditions.";

/// Stylesheet for glyphs used by history entries and article links.
const FONT_AWESOME: &str =
  "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css";

/// Minimal page styling.
const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;background:#f5f7fa;color:#1f2933}
main{display:grid;grid-template-columns:repeat(auto-fit,minmax(320px,1fr));gap:1.5rem;padding:1.5rem}
section{background:#fff;border-radius:12px;padding:1.25rem;box-shadow:0 2px 8px rgba(0,0,0,.06)}
.hidden{display:none}
.loading{color:#52606d}
.error-message{background:#fde8e8;color:#9b1c1c;padding:.75rem;border-radius:8px}
.empty{text-align:center;color:#52606d}
.news-article{display:flex;gap:1rem;margin-bottom:1rem}
.news-image{width:160px;height:90px;object-fit:cover;border-radius:8px}
.history-item{display:flex;gap:.75rem;padding:.5rem 0;border-bottom:1px solid #e4e7eb}
.history-time{color:#7b8794;font-size:.85rem}";

/// Class attribute for a region, adding `hidden` unless `region` is the visible one.
fn region_class<T>(panel: &Panel<T>, region: Region, class: &str) -> String {
  if panel.is_visible(region) {
    class.to_string()
  } else {
    format!("{class} hidden")
  }
}

/// The loading indicator and error banner shared by both panels.
fn status_regions<T>(out: &mut String, panel: &Panel<T>, id_prefix: &str) {
  out.push_str(&format!(
    "<div id=\"{id_prefix}Loading\" class=\"{}\"><i class=\"fas fa-spinner fa-spin\"></i> \
     Loading...</div>\n",
    region_class(panel, Region::LoadingIndicator, "loading"),
  ));
  out.push_str(&format!(
    "<div id=\"{id_prefix}Error\" class=\"{}\">{}</div>\n",
    region_class(panel, Region::ErrorBanner, "error-message"),
    panel.error_message().map(|m| format!("{ERROR_PREFIX}{}", escape_html(m))).unwrap_or_default(),
  ));
}

/// Renders the weather panel's three regions.
///
/// # Examples
///
/// ```
/// use almanac::{panel::{Panel, PanelKind}, render::weather_panel};
///
/// let mut panel = Panel::new(PanelKind::Weather);
/// panel.set_error(Some("City <Atlantis> not found".into()));
/// let html = weather_panel(&panel);
/// assert!(html.contains("⚠️ City &lt;Atlantis&gt; not found"));
/// assert!(html.contains("id=\"weatherData\" class=\"weather-data hidden\""));
/// ```
pub fn weather_panel(panel: &Panel<WeatherReading>) -> String {
  let mut out = String::new();
  status_regions(&mut out, panel, "weather");

  let class = region_class(panel, Region::DataView, "weather-data");
  let Some(reading) = panel.data() else {
    out.push_str(&format!(
      "<div id=\"weatherData\" class=\"{class}\"><p class=\"empty\">{WEATHER_PROMPT}</p></div>\n"
    ));
    return out;
  };

  out.push_str(&format!(
    "<div id=\"weatherData\" class=\"{class}\">
  <div class=\"weather-main\">
    <img id=\"weatherIcon\" src=\"{icon}\" alt=\"{alt}\">
    <div class=\"weather-info\">
      <h3 id=\"cityName\">{city}, {country}</h3>
      <div id=\"temperature\" class=\"temperature\">{temperature}°C</div>
      <p id=\"description\">{description}</p>
    </div>
  </div>
  <div class=\"weather-details\">
    <div class=\"detail\"><span>Feels like</span> <strong id=\"feelsLike\">{feels_like}°C</strong></div>
    <div class=\"detail\"><span>Humidity</span> <strong id=\"humidity\">{humidity}%</strong></div>
    <div class=\"detail\"><span>Wind</span> <strong id=\"windSpeed\">{wind_speed} m/s</strong></div>
    <div class=\"detail\"><span>Pressure</span> <strong id=\"pressure\">{pressure} hPa</strong></div>
  </div>
  <p id=\"weatherTimestamp\" class=\"timestamp\">Updated: {timestamp}</p>
</div>
",
    icon = escape_attribute(&weather_icon_url(&reading.icon)),
    alt = escape_attribute(&reading.description),
    city = escape_html(&reading.city),
    country = escape_html(&reading.country),
    temperature = format::number(reading.temperature),
    description = escape_html(&reading.description),
    feels_like = format::number(reading.feels_like),
    humidity = format::number(reading.humidity),
    wind_speed = format::number(reading.wind_speed),
    pressure = format::number(reading.pressure),
    timestamp = escape_html(&reading.timestamp),
  ));
  out
}

/// Renders the news panel's three regions. Articles keep the order they were received in.
pub fn news_panel(panel: &Panel<Vec<NewsArticle>>) -> String {
  let mut out = String::new();
  status_regions(&mut out, panel, "news");

  out.push_str(&format!(
    "<div id=\"newsContainer\" class=\"{}\">\n",
    region_class(panel, Region::DataView, "news-container")
  ));
  match panel.data() {
    Some(articles) if articles.is_empty() => {
      out.push_str(&format!("<p class=\"empty\">{NO_ARTICLES}</p>\n"));
    },
    Some(articles) => articles.iter().for_each(|a| out.push_str(&article(a))),
    None => {},
  }
  out.push_str("</div>\n");
  out
}

/// Renders a single news article card.
///
/// Missing images use the placeholder, and an `onerror` handler swaps in the same placeholder
/// when the image fails to load.
pub fn article(article: &NewsArticle) -> String {
  format!(
    "<div class=\"news-article\">
  <img src=\"{image}\" alt=\"{alt}\" class=\"news-image\" onerror=\"this.src='{PLACEHOLDER_IMAGE}'\">
  <div class=\"news-content\">
    <h3 class=\"news-title\">{title}</h3>
    <p class=\"news-description\">{description}</p>
    <div class=\"news-meta\">
      <span class=\"news-source\"><i class=\"fas fa-bookmark\"></i> {source}</span>
      <span>{date}</span>
    </div>
    <a href=\"{url}\" target=\"_blank\" rel=\"noopener\" class=\"news-link\">Read Full Article <i class=\"fas fa-external-link-alt\"></i></a>
  </div>
</div>
",
    image = escape_attribute(article.image_or_placeholder()),
    alt = escape_attribute(&article.title),
    title = escape_html(&article.title),
    description = escape_html(article.description_or_default()),
    source = escape_html(article.source_or_default()),
    date = publish_date(article.published_at),
    url = escape_attribute(safe_href(&article.url)),
  )
}

/// Renders the history list, with relative times computed against `now`.
pub fn history_panel(log: &HistoryLog, now: DateTime<Utc>) -> String {
  let mut out = String::from("<div id=\"searchHistory\" class=\"search-history\">\n");
  if log.is_empty() {
    out.push_str(&format!("<p class=\"empty\">{}</p>\n", HistoryLog::EMPTY_MESSAGE));
  } else {
    log.entries().iter().for_each(|entry| out.push_str(&history_item(entry, now)));
  }
  out.push_str("</div>\n");
  out
}

/// Renders one history entry.
///
/// ```
/// use almanac::{models::{HistoryEntry, SearchType}, render::history_item};
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// let entry = HistoryEntry {
///   search_type:  SearchType::News,
///   search_query: "science - gb".into(),
///   timestamp:    now - Duration::hours(2),
/// };
/// let html = history_item(&entry, now);
/// assert!(html.contains("fa-newspaper"));
/// assert!(html.contains("2 hours ago"));
/// ```
pub fn history_item(entry: &HistoryEntry, now: DateTime<Utc>) -> String {
  format!(
    "<div class=\"history-item\">
  <div class=\"history-icon\"><i class=\"{icon}\"></i></div>
  <div class=\"history-details\">
    <div class=\"history-type\">{search_type}</div>
    <div class=\"history-query\">{query}</div>
    <div class=\"history-time\">{ago}</div>
  </div>
</div>
",
    icon = entry.search_type.icon_class(),
    search_type = escape_html(entry.search_type.as_str()),
    query = escape_html(&entry.search_query),
    ago = time_ago(entry.timestamp, now),
  )
}

/// Renders the complete dashboard page.
pub fn page(snapshot: &Snapshot, now: DateTime<Utc>) -> String {
  trace!("Rendering dashboard page at {}", now);
  format!(
    "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>API Integration Dashboard</title>
<link rel=\"stylesheet\" href=\"{FONT_AWESOME}\">
<style>
{STYLE}
</style>
</head>
<body>
<main>
<section class=\"card weather-card\">
<h2><i class=\"fas fa-cloud-sun\"></i> Weather</h2>
{weather}</section>
<section class=\"card news-card\">
<h2><i class=\"fas fa-newspaper\"></i> News</h2>
{news}</section>
<section class=\"card history-card\">
<h2><i class=\"fas fa-history\"></i> Search History</h2>
{history}</section>
</main>
<footer><p>Rendered {rendered}</p></footer>
</body>
</html>
",
    weather = weather_panel(&snapshot.weather),
    news = news_panel(&snapshot.news),
    history = history_panel(&snapshot.history, now),
    rendered = now.format("%Y-%m-%d %H:%M:%S UTC"),
  )
}
