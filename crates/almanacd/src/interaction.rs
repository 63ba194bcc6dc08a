//! Terminal input and output.
//!
//! Commands talk to the user only through [`UserInteraction`], so their logic does not depend on
//! how prompts are answered. [`Cli`] implements it with `dialoguer` prompts and `console` styling,
//! and answers every prompt with its default under `--accept-defaults`.

use almanac::format::{self, strip_control, time_ago};
use console::{style, Emoji};
use dialoguer::{Confirm, Input, Select};

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Continuation line for tree structure
pub static CONTINUE_PREFIX: &str = "│  ";
/// Branch character for tree structure
pub static ITEM_PREFIX: &str = "├─";
/// Leaf character for tree structure
pub static LAST_ITEM_PREFIX: &str = "└─";

/// Glyph for weather history entries
static WEATHER_GLYPH: Emoji<'static, 'static> = Emoji("🌤  ", "* ");
/// Glyph for news history entries
static NEWS_GLYPH: Emoji<'static, 'static> = Emoji("📰 ", "# ");

/// Something to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// A loaded weather panel
  Weather(&'a WeatherReading),
  /// A loaded news panel
  Articles(&'a [NewsArticle]),
  /// The history log, with relative times computed against the given instant
  History(&'a HistoryLog, DateTime<Utc>),
  /// A panel's error banner
  Banner(&'a str),
  /// A completed action
  Success(&'a str),
  /// Neutral information
  Info(&'a str),
}

/// How commands prompt for input and report results.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Asks for a line of text, offering `default`.
  fn prompt(&self, message: &str, default: &str) -> Result<String>;
  /// Asks to pick one of `items`, returning its index.
  fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize>;
  /// Shows `content`.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

impl UserInteraction for Cli {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{}{}", style(PROMPT_PREFIX).cyan(), message))
        .default(true)
        .interact()?,
    )
  }

  fn prompt(&self, message: &str, default: &str) -> Result<String> {
    if self.accept_defaults {
      return Ok(default.to_string());
    }
    Ok(
      Input::<String>::new()
        .with_prompt(format!("{}{}", style(PROMPT_PREFIX).cyan(), message))
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()?,
    )
  }

  fn select(&self, message: &str, items: &[&str], default: usize) -> Result<usize> {
    if self.accept_defaults {
      return Ok(default);
    }
    Ok(
      Select::new()
        .with_prompt(format!("{}{}", style(PROMPT_PREFIX).cyan(), message))
        .items(items)
        .default(default)
        .interact()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Weather(reading) => print_weather(reading),
      ResponseContent::Articles(articles) => print_articles(articles),
      ResponseContent::History(log, now) => print_history(log, now),
      ResponseContent::Banner(message) => {
        let message = strip_control(message);
        println!("{}", style(format!("{}{message}", format::ERROR_PREFIX)).yellow());
      },
      ResponseContent::Success(message) => {
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(message).green());
      },
      ResponseContent::Info(message) => {
        println!("{} {}", style(INFO_PREFIX).blue(), style(message).blue());
      },
    }
    Ok(())
  }
}

/// Prints a weather reading as a small tree.
fn print_weather(reading: &WeatherReading) {
  println!(
    "{} {}",
    style(SUCCESS_PREFIX).green(),
    style(strip_control(&format!("{}, {}", reading.city, reading.country))).bold()
  );
  println!("{CONTINUE_PREFIX}{}", style(strip_control(&reading.description)).italic());
  let rows = [
    ("Temperature", format!("{}°C", format::number(reading.temperature))),
    ("Feels like", format!("{}°C", format::number(reading.feels_like))),
    ("Humidity", format!("{}%", format::number(reading.humidity))),
    ("Wind", format!("{} m/s", format::number(reading.wind_speed))),
    ("Pressure", format!("{} hPa", format::number(reading.pressure))),
  ];
  for (label, value) in rows {
    println!("{ITEM_PREFIX} {:<12} {}", style(label).dim(), value);
  }
  println!(
    "{LAST_ITEM_PREFIX} {}",
    style(format!("Updated: {}", strip_control(&reading.timestamp))).dim()
  );
}

/// Prints articles in the order received.
fn print_articles(articles: &[NewsArticle]) {
  if articles.is_empty() {
    println!("{} {}", style(INFO_PREFIX).blue(), almanac::render::NO_ARTICLES);
    return;
  }

  println!("{} Found {} articles", style(SUCCESS_PREFIX).green(), articles.len());
  for (i, article) in articles.iter().enumerate() {
    let (branch, cont) = if i + 1 == articles.len() {
      (LAST_ITEM_PREFIX, "   ")
    } else {
      (ITEM_PREFIX, CONTINUE_PREFIX)
    };
    println!("{branch} {}", style(strip_control(&article.title)).bold());
    println!(
      "{cont}{} · {}",
      style(strip_control(article.source_or_default())).cyan(),
      style(format::publish_date(article.published_at)).dim()
    );
    println!("{cont}{}", strip_control(article.description_or_default()));
    println!("{cont}{}", style(strip_control(&article.url)).underlined());
  }
}

/// Prints history entries with relative times.
fn print_history(log: &HistoryLog, now: DateTime<Utc>) {
  if log.is_empty() {
    println!("{} {}", style(INFO_PREFIX).blue(), HistoryLog::EMPTY_MESSAGE);
    return;
  }

  for (i, entry) in log.entries().iter().enumerate() {
    let branch = if i + 1 == log.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
    let glyph = match entry.search_type {
      SearchType::Weather => WEATHER_GLYPH,
      SearchType::News => NEWS_GLYPH,
    };
    println!(
      "{branch} {glyph}{:<8} {:<28} {}",
      style(entry.search_type).dim(),
      strip_control(&entry.search_query),
      style(time_ago(entry.timestamp, now)).dim()
    );
  }
}
