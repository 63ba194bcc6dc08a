//! Presentation helpers shared by the HTML renderer and the terminal front end.

use std::borrow::Cow;

use super::*;

/// Image shown for articles without art, and substituted when an image fails to load.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x200?text=No+Image";

/// Prefix of every error banner.
pub const ERROR_PREFIX: &str = "⚠️ ";

/// Label returned by [`time_ago`] for very recent (or future) timestamps.
pub const JUST_NOW: &str = "Just now";

/// Elapsed times below this many seconds read as [`JUST_NOW`].
pub const JUST_NOW_WINDOW: i64 = 10;

/// Unit thresholds walked by [`time_ago`], largest first. Order matters.
const INTERVALS: [(&str, i64); 7] = [
  ("year", 31_536_000),
  ("month", 2_592_000),
  ("week", 604_800),
  ("day", 86_400),
  ("hour", 3_600),
  ("minute", 60),
  ("second", 1),
];

/// Formats the time elapsed between `timestamp` and `now` as a relative label.
///
/// Elapsed time is floored to whole seconds and matched against year (365 days), month (30
/// days), week, day, hour, minute and second, in that order; the first unit with a quotient of at
/// least one wins and is pluralized when the quotient exceeds one.
///
/// # Examples
///
/// ```
/// use almanac::format::time_ago;
/// use chrono::{Duration, Utc};
///
/// let now = Utc::now();
/// assert_eq!(time_ago(now - Duration::seconds(90), now), "1 minute ago");
/// assert_eq!(time_ago(now - Duration::seconds(7200), now), "2 hours ago");
/// assert_eq!(time_ago(now - Duration::seconds(3), now), "Just now");
/// ```
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
  let seconds = (now - timestamp).num_seconds();
  if seconds < JUST_NOW_WINDOW {
    return JUST_NOW.to_string();
  }

  for (unit, seconds_in_unit) in INTERVALS {
    let interval = seconds / seconds_in_unit;
    if interval >= 1 {
      let plural = if interval > 1 { "s" } else { "" };
      return format!("{interval} {unit}{plural} ago");
    }
  }

  JUST_NOW.to_string()
}

/// Escapes text for use as element content.
///
/// Produces the same markup a browser serializes for a text node: `&`, `<`, `>` and the
/// no-break space become entities, everything else is left alone. Quotes are not touched; use
/// [`escape_attribute`] for attribute values.
///
/// ```
/// assert_eq!(almanac::format::escape_html("<b>\"Tom\" & Jerry</b>"), "&lt;b&gt;\"Tom\" &amp; Jerry&lt;/b&gt;");
/// ```
pub fn escape_html(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  escape_html_into(&mut out, text);
  out
}

/// Appends the escaped form of `text` to `out`. See [`escape_html`].
pub fn escape_html_into(out: &mut String, text: &str) {
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '\u{a0}' => out.push_str("&nbsp;"),
      _ => out.push(ch),
    }
  }
}

/// Escapes text for use inside a double-quoted attribute value.
pub fn escape_attribute(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for ch in text.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '"' => out.push_str("&quot;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '\u{a0}' => out.push_str("&nbsp;"),
      _ => out.push(ch),
    }
  }
  out
}

/// Link target for an untrusted URL: the URL itself if it is `http`/`https`, `#` otherwise.
///
/// ```
/// use almanac::format::safe_href;
///
/// assert_eq!(safe_href(" https://news.example/a "), "https://news.example/a");
/// assert_eq!(safe_href("javascript:alert(1)"), "#");
/// ```
pub fn safe_href(url: &str) -> &str {
  let url = url.trim();
  let scheme = url.split_once(':').map(|(scheme, _)| scheme.to_ascii_lowercase());
  match scheme.as_deref() {
    Some("http" | "https") => url,
    _ => "#",
  }
}

/// Drops control characters (including the ESC that starts terminal escape sequences) from text
/// bound for a terminal.
pub fn strip_control(text: &str) -> Cow<'_, str> {
  if text.chars().any(char::is_control) {
    Cow::Owned(text.chars().filter(|c| !c.is_control()).collect())
  } else {
    Cow::Borrowed(text)
  }
}

/// URL of the hosted icon for a weather icon identifier.
pub fn weather_icon_url(icon: &str) -> String {
  format!("https://openweathermap.org/img/wn/{icon}@4x.png")
}

/// Short date label for an article's publication time, e.g. `Oct 5, 2024`.
pub fn publish_date(timestamp: DateTime<Utc>) -> String { timestamp.format("%b %-d, %Y").to_string() }

/// Formats a reading value without trailing zeros (`12.0` → `12`, `12.5` → `12.5`).
pub fn number(value: f64) -> String { format!("{value}") }
