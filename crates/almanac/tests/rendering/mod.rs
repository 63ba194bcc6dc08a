use almanac::{
  format::PLACEHOLDER_IMAGE,
  history::HistoryLog,
  render::{self, NO_ARTICLES},
};

use super::*;

fn article_count(html: &str) -> usize { html.matches("class=\"news-article\"").count() }

#[traced_test]
#[tokio::test]
async fn test_script_title_renders_as_text() -> TestResult<()> {
  let mut hostile = article("<script>alert('x')</script>");
  hostile.source = Some("Evil & Sons".into());
  hostile.url = "https://news.example/?a=1&b=\"2\"".into();
  let (dashboard, _script) =
    dashboard_with(ScriptedCollaborator::default().with_news(Reply::Data(vec![hostile])));

  dashboard.search_news(Category::General, Country::Us).await;
  let html = render::news_panel(&dashboard.news().await);

  assert!(!html.contains("<script>"));
  assert!(html.contains("&lt;script&gt;alert('x')&lt;/script&gt;"));
  assert!(html.contains("Evil &amp; Sons"));
  assert!(html.contains("href=\"https://news.example/?a=1&amp;b=&quot;2&quot;\""));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_script_links_are_neutralized() -> TestResult<()> {
  let mut hostile = article("Click me");
  hostile.url = "javascript:alert(document.cookie)".into();
  let (dashboard, _script) =
    dashboard_with(ScriptedCollaborator::default().with_news(Reply::Data(vec![hostile])));

  dashboard.search_news(Category::General, Country::Us).await;
  let html = render::news_panel(&dashboard.news().await);

  assert!(!html.contains("javascript:"));
  assert!(html.contains("href=\"#\""));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_article_without_source_renders_with_the_rest() -> TestResult<()> {
  let mut anonymous = article("Unattributed");
  anonymous.source = None;
  let (dashboard, _script) = dashboard_with(
    ScriptedCollaborator::default()
      .with_news(Reply::Data(vec![article("Attributed"), anonymous])),
  );

  assert_eq!(dashboard.search_news(Category::General, Country::Us).await, QueryOutcome::Loaded);
  let html = render::news_panel(&dashboard.news().await);

  assert_eq!(article_count(&html), 2);
  assert!(html.contains("Unattributed"));
  assert!(html.contains("<i class=\"fas fa-bookmark\"></i> </span>"));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_empty_news_renders_message_and_no_articles() -> TestResult<()> {
  let (dashboard, _script) =
    dashboard_with(ScriptedCollaborator::default().with_news(Reply::Data(Vec::new())));

  dashboard.search_news(Category::General, Country::Us).await;
  let html = render::news_panel(&dashboard.news().await);

  assert!(html.contains(NO_ARTICLES));
  assert_eq!(article_count(&html), 0);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_articles_render_in_order_with_image_fallback() -> TestResult<()> {
  let mut with_image = article("Second");
  with_image.image_url = Some("https://img.example/2.jpg".into());
  let (dashboard, _script) = dashboard_with(
    ScriptedCollaborator::default()
      .with_news(Reply::Data(vec![article("First"), with_image, article("Third")])),
  );

  dashboard.search_news(Category::General, Country::Us).await;
  let html = render::news_panel(&dashboard.news().await);

  assert_eq!(article_count(&html), 3);
  let first = html.find("First").unwrap();
  let second = html.find("Second").unwrap();
  let third = html.find("Third").unwrap();
  assert!(first < second && second < third);

  assert!(html.contains("src=\"https://img.example/2.jpg\""));
  assert_eq!(html.matches(&format!("src=\"{PLACEHOLDER_IMAGE}\"")).count(), 2);
  assert_eq!(html.matches("onerror=").count(), 3);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_error_banner_is_prefixed_and_escaped() -> TestResult<()> {
  let message = "No <city> named \"x\"".to_string();
  let (dashboard, _script) =
    dashboard_with(ScriptedCollaborator::default().with_weather(Reply::Rejected(Some(message))));

  dashboard.search_weather("x").await;
  let html = render::weather_panel(&dashboard.weather().await);

  assert!(html.contains("⚠️ No &lt;city&gt; named \"x\""));
  assert!(html.contains("id=\"weatherError\" class=\"error-message\""));
  assert!(html.contains("id=\"weatherData\" class=\"weather-data hidden\""));
  Ok(())
}

#[test]
fn test_history_items_use_type_icons_and_relative_time() {
  let now = Utc::now();
  let mut log = HistoryLog::new();
  log.replace(vec![
    entry(SearchType::Weather, "<b>Oslo</b>", 0),
    entry(SearchType::News, "general - us", 150),
  ]);

  let html = render::history_panel(&log, now);

  assert_eq!(html.matches("class=\"history-item\"").count(), 2);
  assert!(html.contains("fas fa-cloud-sun"));
  assert!(html.contains("fas fa-newspaper"));
  assert!(html.contains("&lt;b&gt;Oslo&lt;/b&gt;"));
  assert!(html.contains("Just now"));
  assert!(html.contains("2 hours ago"));
  assert!(!html.contains(HistoryLog::EMPTY_MESSAGE));
}

#[traced_test]
#[tokio::test]
async fn test_page_contains_every_panel() -> TestResult<()> {
  let (dashboard, _script) = dashboard_with(ScriptedCollaborator::default());
  dashboard.start(&almanac::config::Config::default()).await;
  dashboard.settle().await;

  let html = render::page(&dashboard.snapshot().await, Utc::now());

  assert!(html.starts_with("<!DOCTYPE html>"));
  assert!(html.contains("London, GB"));
  assert!(html.contains("Markets rally"));
  assert!(html.contains("history-item"));
  assert_eq!(html.matches("class=\"loading hidden\"").count(), 2);
  Ok(())
}
