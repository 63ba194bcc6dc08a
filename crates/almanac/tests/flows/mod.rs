use almanac::config::Config;

use super::*;

/// Weather query flow
mod weather {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_success_loads_and_refreshes_history_once() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::default());

    let outcome = dashboard.search_weather("London").await;
    dashboard.settle().await;

    assert_eq!(outcome, QueryOutcome::Loaded);
    let panel = dashboard.weather().await;
    assert_eq!(panel.visible_region(), Region::DataView);
    assert_eq!(panel.data().map(|r| r.city.as_str()), Some("London"));

    assert_eq!(script.weather_calls(), 1);
    assert_eq!(script.history_calls(), 1);
    assert!(dashboard.history().await.is_loaded());
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_city_is_trimmed_before_request() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::default());

    dashboard.search_weather("  Paris \t").await;

    assert_eq!(*script.cities.lock().unwrap(), ["Paris"]);
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_blank_city_is_a_no_op() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::default());
    dashboard.search_weather("Oslo").await;
    dashboard.settle().await;
    let before = dashboard.weather().await;

    for blank in ["", "   ", "\t\n"] {
      assert_eq!(dashboard.search_weather(blank).await, QueryOutcome::Skipped);
    }
    dashboard.settle().await;

    assert_eq!(dashboard.weather().await, before);
    assert_eq!(script.weather_calls(), 1);
    assert_eq!(script.history_calls(), 1);
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_panel_is_loading_while_request_is_outstanding() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::gated());
    let gate = script.gate.as_ref().unwrap();

    let flow = tokio::spawn({
      let dashboard = dashboard.clone();
      async move { dashboard.search_weather("Berlin").await }
    });

    gate.entered.notified().await;
    let panel = dashboard.weather().await;
    assert!(panel.is_loading());
    assert_eq!(panel.visible_region(), Region::LoadingIndicator);
    assert_eq!(panel.error_message(), None);

    gate.release.notify_one();
    assert_eq!(flow.await?, QueryOutcome::Loaded);
    assert!(!dashboard.weather().await.is_loading());
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_rejection_shows_collaborator_message() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(
      ScriptedCollaborator::default().with_weather(Reply::Rejected(Some("City not found".into()))),
    );

    let outcome = dashboard.search_weather("Atlantis").await;
    dashboard.settle().await;

    assert_eq!(outcome, QueryOutcome::Failed("City not found".into()));
    let panel = dashboard.weather().await;
    assert_eq!(panel.visible_region(), Region::ErrorBanner);
    assert_eq!(panel.error_message(), Some("City not found"));
    assert_eq!(script.history_calls(), 0);
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_rejection_without_message_uses_fallback() -> TestResult<()> {
    let (dashboard, _script) =
      dashboard_with(ScriptedCollaborator::default().with_weather(Reply::Rejected(None)));

    let outcome = dashboard.search_weather("Atlantis").await;

    assert_eq!(outcome, QueryOutcome::Failed("Failed to fetch weather data".into()));
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_transport_failure_is_reported_generically_and_logged() -> TestResult<()> {
    let (dashboard, script) =
      dashboard_with(ScriptedCollaborator::default().with_weather(Reply::Broken));

    let outcome = dashboard.search_weather("Madrid").await;
    dashboard.settle().await;

    assert_eq!(outcome, QueryOutcome::Failed(NETWORK_ERROR_MESSAGE.into()));
    assert_eq!(dashboard.weather().await.error_message(), Some(NETWORK_ERROR_MESSAGE));
    assert_eq!(script.history_calls(), 0);
    assert!(logs_contain("connection reset"));
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_new_query_replaces_previous_error() -> TestResult<()> {
    let (dashboard, script) =
      dashboard_with(ScriptedCollaborator::default().with_weather(Reply::Broken));
    dashboard.search_weather("Madrid").await;

    script.set_weather(Reply::Data(reading("Madrid")));
    dashboard.search_weather("Madrid").await;

    let panel = dashboard.weather().await;
    assert_eq!(panel.error_message(), None);
    assert!(matches!(panel.state(), PanelState::Loaded(r) if r.city == "Madrid"));
    Ok(())
  }
}

/// News query flow
mod news {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_success_keeps_article_order() -> TestResult<()> {
    let articles = vec![article("First"), article("Second"), article("Third")];
    let (dashboard, script) =
      dashboard_with(ScriptedCollaborator::default().with_news(Reply::Data(articles)));

    let outcome = dashboard.search_news(Category::Science, Country::Gb).await;
    dashboard.settle().await;

    assert_eq!(outcome, QueryOutcome::Loaded);
    let titles: Vec<_> = dashboard
      .news()
      .await
      .data()
      .unwrap()
      .iter()
      .map(|a| a.title.clone())
      .collect();
    assert_eq!(titles, ["First", "Second", "Third"]);
    assert_eq!(*script.news_queries.lock().unwrap(), [(Category::Science, Country::Gb)]);
    assert_eq!(script.history_calls(), 1);
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_empty_list_is_loaded() -> TestResult<()> {
    let (dashboard, _script) =
      dashboard_with(ScriptedCollaborator::default().with_news(Reply::Data(Vec::new())));

    assert_eq!(dashboard.search_news(Category::General, Country::Us).await, QueryOutcome::Loaded);
    assert_eq!(dashboard.news().await.data().map(Vec::len), Some(0));
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_failures_use_news_fallback() -> TestResult<()> {
    let (dashboard, script) =
      dashboard_with(ScriptedCollaborator::default().with_news(Reply::Rejected(None)));

    let outcome = dashboard.search_news(Category::Health, Country::In).await;
    dashboard.settle().await;

    assert_eq!(outcome, QueryOutcome::Failed("Failed to fetch news data".into()));
    assert_eq!(script.history_calls(), 0);
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_unsupported_selector_values_never_reach_collaborator() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::default());

    let err = dashboard.search_news_raw("weather", "us").await.unwrap_err();
    assert!(matches!(err, AlmanacError::UnsupportedValue { kind: "category", .. }));

    let err = dashboard.search_news_raw("sports", "xx").await.unwrap_err();
    assert!(matches!(err, AlmanacError::UnsupportedValue { kind: "country", .. }));

    assert_eq!(script.news_calls(), 0);
    assert_eq!(*dashboard.news().await.state(), PanelState::Idle);

    let outcome = dashboard.search_news_raw("sports", "au").await?;
    assert_eq!(outcome, QueryOutcome::Loaded);
    assert_eq!(*script.news_queries.lock().unwrap(), [(Category::Sports, Country::Au)]);
    Ok(())
  }
}

/// History refreshes
mod history {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_refresh_replaces_entries() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::default());
    assert!(dashboard.refresh_history().await);

    script.set_history(Reply::Data(vec![
      entry(SearchType::News, "technology - gb", 1),
      entry(SearchType::Weather, "Lima", 5),
    ]));
    assert!(dashboard.refresh_history().await);

    let log = dashboard.history().await;
    let queries: Vec<_> = log.entries().iter().map(|e| e.search_query.as_str()).collect();
    assert_eq!(queries, ["technology - gb", "Lima"]);
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_failed_refresh_keeps_previous_entries() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::default());
    dashboard.refresh_history().await;
    let before = dashboard.history().await;

    script.set_history(Reply::Rejected(Some("database locked".into())));
    assert!(!dashboard.refresh_history().await);
    script.set_history(Reply::Broken);
    assert!(!dashboard.refresh_history().await);

    assert_eq!(dashboard.history().await, before);
    assert!(logs_contain("database locked"));
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_history_failure_does_not_touch_panels() -> TestResult<()> {
    let (dashboard, _script) =
      dashboard_with(ScriptedCollaborator::default().with_history(Reply::Broken));

    assert_eq!(dashboard.search_weather("Rome").await, QueryOutcome::Loaded);
    dashboard.settle().await;

    let snapshot = dashboard.snapshot().await;
    assert_eq!(snapshot.weather.visible_region(), Region::DataView);
    assert!(snapshot.weather.data().is_some());
    assert!(!snapshot.history.is_loaded());
    Ok(())
  }
}

/// Startup sequence
mod startup {
  use super::*;

  #[traced_test]
  #[tokio::test]
  async fn test_start_uses_configured_defaults() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::default());
    let config = Config::default()
      .with_default_city("Toronto")
      .with_default_category(Category::Business)
      .with_default_country(Country::Ca);

    let outcome = dashboard.start(&config).await;
    dashboard.settle().await;

    assert_eq!(outcome.weather, QueryOutcome::Loaded);
    assert_eq!(outcome.news, QueryOutcome::Loaded);
    assert!(outcome.history);
    assert_eq!(*script.cities.lock().unwrap(), ["Toronto"]);
    assert_eq!(*script.news_queries.lock().unwrap(), [(Category::Business, Country::Ca)]);
    // one direct fetch plus one per successful query
    assert_eq!(script.history_calls(), 3);
    Ok(())
  }

  #[traced_test]
  #[tokio::test]
  async fn test_start_defaults_to_london_general_us() -> TestResult<()> {
    let (dashboard, script) = dashboard_with(ScriptedCollaborator::default());

    dashboard.start(&Config::default()).await;
    dashboard.settle().await;

    assert_eq!(*script.cities.lock().unwrap(), ["London"]);
    assert_eq!(*script.news_queries.lock().unwrap(), [(Category::General, Country::Us)]);
    Ok(())
  }
}
