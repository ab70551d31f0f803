//! End-to-end tests of the directory and detail stores against the
//! in-memory source.

use country_core::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

fn country(name: &str, code: &str, region: &str, borders: &[&str]) -> CountryDetail {
    let mut summary = CountrySummary::named(name, format!("Official {name}"));
    summary.region = Some(region.to_string());
    CountryDetail {
        summary,
        native_names: Default::default(),
        currencies: Default::default(),
        languages: Vec::new(),
        top_level_domains: Vec::new(),
        border_codes: borders.iter().map(|b| b.to_string()).collect(),
        country_code: code.to_string(),
    }
}

fn world() -> Vec<CountryDetail> {
    vec![
        country("Canada", "CAN", "Americas", &["USA"]),
        country("United States", "USA", "Americas", &["CAN", "MEX"]),
        country("Mexico", "MEX", "Americas", &["BLZ", "GTM", "USA"]),
        country("Peru", "PER", "Americas", &["BOL", "BRA", "CHL", "COL", "ECU"]),
        country("France", "FRA", "Europe", &["AND", "BEL", "DEU", "ESP"]),
        country("Germany", "DEU", "Europe", &["FRA", "AUT", "CHE"]),
        country("Iceland", "ISL", "Europe", &[]),
        country("Japan", "JPN", "Asia", &[]),
    ]
}

fn config() -> ClientConfig {
    ClientConfig::new("http://localhost", Duration::from_secs(10)).unwrap()
}

fn names(v: &[&CountrySummary]) -> Vec<String> {
    v.iter().map(|c| c.common_name.clone()).collect()
}

#[tokio::test]
async fn load_all_then_filter() {
    let source = Arc::new(InMemorySource::new(world()));
    let mut dir = Directory::new(source.clone(), config());

    let loaded = dir.load_all().await.unwrap().len();
    assert_eq!(loaded, 8);
    assert_eq!(dir.state().status(), LoadStatus::Loaded);

    dir.set_search_text("an");
    assert_eq!(
        names(&dir.visible()),
        vec!["Canada", "France", "Germany", "Iceland", "Japan"]
    );
    dir.clear_search();
    assert_eq!(dir.visible().len(), 8);
    assert_eq!(source.calls(Capability::All), 1);
}

#[tokio::test]
async fn region_failure_keeps_displayed_collection() {
    let source = Arc::new(InMemorySource::new(world()).failing_region(Region::Asia));
    let mut dir = Directory::new(source, config());
    dir.load_all().await.unwrap();
    let before: Vec<CountrySummary> = dir.state().countries().to_vec();
    let shown = names(&dir.visible());
    assert!(matches!(dir.view(), ListView::Countries(_)));

    let err = dir.load_by_region("asia".parse().unwrap()).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LookupFailed);
    assert_eq!(dir.state().status(), LoadStatus::Error(ErrorKind::LookupFailed));
    assert_eq!(dir.state().countries(), before.as_slice());
    assert_eq!(dir.state().filter().selected_region, None);
    assert_eq!(names(&dir.visible()), shown);
    match dir.view() {
        ListView::Countries(v) => assert_eq!(names(&v), shown),
        other => panic!("unexpected view {other:?}"),
    }
}

#[tokio::test]
async fn failed_region_switch_keeps_previous_region_on_display() {
    let source = Arc::new(InMemorySource::new(world()).failing_region(Region::Asia));
    let mut dir = Directory::new(source, config());
    dir.load_by_region(Region::Europe).await.unwrap();
    let shown = names(&dir.visible());

    let err = dir.load_by_region(Region::Asia).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::LookupFailed);
    assert_eq!(dir.state().filter().selected_region, Some(Region::Europe));
    assert_eq!(names(&dir.visible()), vec!["France", "Germany", "Iceland"]);
    assert_eq!(names(&dir.visible()), shown);
    assert_ne!(dir.view(), ListView::NoMatches);
}

#[tokio::test]
async fn region_load_scopes_later_searches_until_reset() {
    let source = Arc::new(InMemorySource::new(world()));
    let mut dir = Directory::new(source.clone(), config());
    dir.load_all().await.unwrap();

    dir.load_by_region(Region::Europe).await.unwrap();
    dir.set_search_text("a");
    assert_eq!(names(&dir.visible()), vec!["France", "Germany", "Iceland"]);

    dir.reset_region().await.unwrap();
    assert_eq!(dir.state().filter().selected_region, None);
    assert_eq!(dir.state().scope(), Some(LoadScope::All));
    assert_eq!(source.calls(Capability::All), 2);
    assert_eq!(
        names(&dir.visible()),
        vec![
            "Canada",
            "United States",
            "France",
            "Germany",
            "Iceland",
            "Japan"
        ]
    );
}

#[tokio::test]
async fn empty_filter_result_is_not_an_error() {
    let mut dir = Directory::new(Arc::new(InMemorySource::new(world())), config());
    dir.load_all().await.unwrap();
    dir.set_search_text("narnia");

    assert_eq!(dir.view(), ListView::NoMatches);
    assert!(!dir.state().status().is_error());
}

#[tokio::test]
async fn ambiguous_name_picks_first_every_time() {
    let mut records = world();
    records.insert(1, country("Canada", "CAX", "Europe", &[]));
    let source = Arc::new(InMemorySource::new(records));
    let mut resolver = DetailResolver::new(source, config());

    for _ in 0..3 {
        let focal = resolver.load_detail("Canada").await.unwrap();
        assert_eq!(focal.country_code(), "CAN");
        assert_eq!(resolver.state().match_count(), 2);
    }
}

#[tokio::test]
async fn borders_are_one_batched_lookup() {
    let source = Arc::new(InMemorySource::new(world()));
    let mut resolver = DetailResolver::new(source.clone(), config());

    resolver.load_detail("United States").await.unwrap();

    assert_eq!(source.calls(Capability::Codes), 1);
    assert_eq!(
        source.code_batches(),
        vec![vec!["CAN".to_string(), "MEX".to_string()]]
    );
    let mut borders: Vec<&str> = resolver
        .state()
        .border_countries()
        .iter()
        .map(|c| c.common_name())
        .collect();
    borders.sort();
    assert_eq!(borders, vec!["Canada", "Mexico"]);
}

#[tokio::test]
async fn no_border_codes_means_no_request() {
    let source = Arc::new(InMemorySource::new(world()));
    let mut resolver = DetailResolver::new(source.clone(), config());

    resolver.load_detail("Japan").await.unwrap();
    assert_eq!(resolver.state().borders(), &BorderStatus::None);

    let iceland = source.records()[6].clone();
    let borders = resolve_borders(source.as_ref(), &iceland, Duration::from_secs(1))
        .await
        .unwrap();
    assert!(borders.is_empty());
    assert_eq!(source.calls(Capability::Codes), 0);
}

#[tokio::test]
async fn unresolvable_codes_are_skipped() {
    let source = Arc::new(InMemorySource::new(world()));
    let peru = source.records()[3].clone();

    let borders = resolve_borders(source.as_ref(), &peru, Duration::from_secs(1))
        .await
        .unwrap();
    assert!(borders.is_empty());
    assert_eq!(source.calls(Capability::Codes), 1);
}

#[tokio::test]
async fn unknown_name_is_not_found() {
    let source = Arc::new(InMemorySource::new(world()));
    let mut resolver = DetailResolver::new(source.clone(), config());

    let err = resolver.load_detail("Atlantis").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(resolver.state().status(), LoadStatus::Error(ErrorKind::NotFound));
    assert_eq!(source.calls(Capability::Codes), 0);
}

#[tokio::test]
async fn name_lookup_failure_skips_borders() {
    let source = Arc::new(InMemorySource::new(world()).failing(Capability::Name));
    let mut resolver = DetailResolver::new(source.clone(), config());

    let err = resolver.load_detail("France").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LookupFailed);
    assert!(resolver.state().focal().is_none());
    assert_eq!(resolver.state().borders(), &BorderStatus::Idle);
    assert_eq!(source.calls(Capability::Codes), 0);
}

#[tokio::test]
async fn border_failure_keeps_focal_detail() {
    let source = Arc::new(InMemorySource::new(world()).failing(Capability::Codes));
    let mut resolver = DetailResolver::new(source, config());

    let focal = resolver.load_detail("France").await.unwrap();
    assert_eq!(focal.common_name(), "France");
    assert_eq!(resolver.state().status(), LoadStatus::Loaded);
    assert_eq!(resolver.state().borders(), &BorderStatus::Failed);
    assert!(resolver.state().border_countries().is_empty());
}

#[tokio::test(start_paused = true)]
async fn slow_lookup_times_out() {
    let source = Arc::new(InMemorySource::new(world()).delay_name("Germany", Duration::from_secs(30)));
    let mut resolver = DetailResolver::new(source, config());

    let err = resolver.load_detail("Germany").await.unwrap_err();
    assert!(matches!(err, CountryError::Timeout(_)));
    assert_eq!(
        resolver.state().status(),
        LoadStatus::Error(ErrorKind::LookupFailed)
    );
}

#[tokio::test(start_paused = true)]
async fn newer_navigation_wins_regardless_of_completion_order() {
    let source = Arc::new(InMemorySource::new(world()).delay_name("Germany", Duration::from_secs(3)));
    let mut state = DetailState::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    for name in ["Germany", "France"] {
        let ticket = state.begin(name);
        let source = source.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = ticket.fetch(source.as_ref(), true, Duration::from_secs(10)).await;
            let _ = tx.send((ticket, result));
        });
    }
    drop(tx);

    let mut order = Vec::new();
    while let Some((ticket, result)) = rx.recv().await {
        order.push(ticket.name().to_string());
        let _ = state.complete_detail(&ticket, result);
    }

    assert_eq!(order, vec!["France", "Germany"]);
    assert_eq!(state.focal().unwrap().common_name(), "France");
    assert_eq!(state.name(), Some("France"));
}
