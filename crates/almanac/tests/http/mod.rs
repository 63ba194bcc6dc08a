use std::collections::HashMap;

use almanac::collaborator::HttpCollaborator;
use axum::{
  extract::Query,
  http::StatusCode,
  response::{IntoResponse, Response},
  routing::get,
  Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

use super::*;

/// Serves `router` on an ephemeral local port and returns its base URL.
async fn spawn_backend(router: Router) -> anyhow::Result<String> {
  let listener = TcpListener::bind("127.0.0.1:0").await?;
  let addr = listener.local_addr()?;
  tokio::spawn(async move {
    let _ = axum::serve(listener, router).await;
  });
  Ok(format!("http://{addr}"))
}

/// Echoes the requested city back, except for "Atlantis" which is unknown.
async fn weather(Query(params): Query<HashMap<String, String>>) -> Response {
  let city = params.get("city").cloned().unwrap_or_default();
  if city == "Atlantis" {
    return (StatusCode::NOT_FOUND, Json(json!({ "success": false, "error": "City not found" })))
      .into_response();
  }
  Json(json!({
    "success": true,
    "data": {
      "city": city,
      "country": "GB",
      "temperature": 9.5,
      "feels_like": 7.0,
      "humidity": 87,
      "wind_speed": 5.1,
      "pressure": 1009,
      "description": "Light Rain",
      "icon": "10d",
      "timestamp": "2024-10-15 10:30:00",
    }
  }))
  .into_response()
}

/// Reports the selector values back through the article source.
async fn news(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
  let source = format!(
    "{}/{}",
    params.get("category").map_or("-", String::as_str),
    params.get("country").map_or("-", String::as_str)
  );
  Json(json!({
    "success": true,
    "data": [{
      "title": "Chip exports climb",
      "description": null,
      "url": "https://news.example/chips",
      "urlToImage": null,
      "source": source,
      "publishedAt": "2024-10-05T08:00:00Z",
      "author": null,
    }]
  }))
}

/// Answers like the real backend does, with RFC 1123 timestamps.
async fn history() -> Json<Value> {
  Json(json!({
    "success": true,
    "data": [
      { "search_type": "news", "search_query": "technology - gb", "timestamp": "Tue, 15 Oct 2024 10:31:00 GMT" },
      { "search_type": "weather", "search_query": "London", "timestamp": "Tue, 15 Oct 2024 10:30:00 GMT" },
    ]
  }))
}

fn backend() -> Router {
  Router::new()
    .route("/api/weather", get(weather))
    .route("/api/news", get(news))
    .route("/api/search-history", get(history))
}

#[traced_test]
#[tokio::test]
async fn test_weather_city_is_percent_encoded() -> anyhow::Result<()> {
  let collaborator = HttpCollaborator::new(&spawn_backend(backend()).await?)?;

  let reading = collaborator.weather("São Paulo & Co?").await?;

  assert_eq!(reading.city, "São Paulo & Co?");
  assert_eq!(reading.humidity, 87.0);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_failure_envelope_on_404_is_decoded() -> anyhow::Result<()> {
  let collaborator = HttpCollaborator::new(&spawn_backend(backend()).await?)?;

  let err = collaborator.weather("Atlantis").await.unwrap_err();

  assert!(!err.is_transport());
  assert_eq!(err.collaborator_message(), Some("City not found"));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_news_forwards_wire_names() -> anyhow::Result<()> {
  let collaborator = HttpCollaborator::new(&spawn_backend(backend()).await?)?;

  let articles = collaborator.news(Category::Technology, Country::Gb).await?;

  assert_eq!(articles.len(), 1);
  assert_eq!(articles[0].source_or_default(), "technology/gb");
  assert_eq!(articles[0].description_or_default(), NewsArticle::NO_DESCRIPTION);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_history_decodes_backend_timestamps() -> anyhow::Result<()> {
  let collaborator = HttpCollaborator::new(&spawn_backend(backend()).await?)?;

  let entries = collaborator.search_history().await?;

  assert_eq!(entries.len(), 2);
  assert_eq!(entries[0].search_type, SearchType::News);
  assert_eq!(Some(entries[1].timestamp), parse_timestamp("2024-10-15T10:30:00Z"));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_non_json_body_is_network_error_in_panel() -> anyhow::Result<()> {
  let router = Router::new().route(
    "/api/weather",
    get(|| async { (StatusCode::BAD_GATEWAY, "<html>502 Bad Gateway</html>") }),
  );
  let dashboard = Dashboard::new(HttpCollaborator::new(&spawn_backend(router).await?)?);

  let outcome = dashboard.search_weather("London").await;

  assert_eq!(outcome, QueryOutcome::Failed(NETWORK_ERROR_MESSAGE.into()));
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_unreachable_backend_is_network_error() -> anyhow::Result<()> {
  let listener = TcpListener::bind("127.0.0.1:0").await?;
  let addr = listener.local_addr()?;
  drop(listener);
  let dashboard = Dashboard::new(HttpCollaborator::new(&format!("http://{addr}"))?);

  let outcome = dashboard.search_news(Category::General, Country::Us).await;

  assert_eq!(outcome, QueryOutcome::Failed(NETWORK_ERROR_MESSAGE.into()));
  assert_eq!(dashboard.news().await.visible_region(), Region::ErrorBanner);
  Ok(())
}

#[traced_test]
#[tokio::test]
async fn test_full_flow_against_backend() -> anyhow::Result<()> {
  let dashboard = Dashboard::new(HttpCollaborator::new(&spawn_backend(backend()).await?)?);

  assert_eq!(dashboard.search_weather("Leeds").await, QueryOutcome::Loaded);
  dashboard.settle().await;

  let snapshot = dashboard.snapshot().await;
  assert_eq!(snapshot.weather.data().map(|r| r.city.as_str()), Some("Leeds"));
  assert_eq!(snapshot.history.len(), 2);
  Ok(())
}
