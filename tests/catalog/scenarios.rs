use card_catalog::{FetchError, FetchState, PageOutcome, PageRequest, SinkEvent, Trigger};

use crate::support::{catalog_with_pages, first_page, sorted_ids};

#[tokio::test]
async fn first_page_is_appended_and_rendered() {
    let mut catalog = catalog_with_pages(vec![first_page()], 4);

    let outcome = catalog.start().await.unwrap();

    assert_eq!(outcome, PageOutcome::Appended { page: 1, count: 4, skipped: vec![] });
    assert_eq!(catalog.store().len(), 4);
    assert_eq!(catalog.store().cursor(), 2);
    assert_eq!(catalog.sink().appended_pages(), vec![first_page()]);
    assert_eq!(catalog.fetcher().requests(), vec![PageRequest::new(1, 4)]);
    assert_eq!(
        catalog.sink().events(),
        vec![
            SinkEvent::BusyChanged(true),
            SinkEvent::BusyChanged(false),
            SinkEvent::PageAppended(first_page()),
        ]
    );
}

#[tokio::test]
async fn query_hides_names_without_substring() {
    let mut catalog = catalog_with_pages(vec![first_page()], 4);
    catalog.start().await.unwrap();

    let visibility = catalog.query_changed("ra");

    assert_eq!(
        sorted_ids(&visibility.hidden),
        ["base1-2", "base1-3", "base1-4"]
    );
    assert!(!visibility.all_hidden);
    assert_eq!(catalog.sink().last_visibility(), Some(visibility));
}

#[tokio::test]
async fn query_without_match_hides_everything() {
    let mut catalog = catalog_with_pages(vec![first_page()], 4);
    catalog.start().await.unwrap();

    let visibility = catalog.query_changed("zzz");

    assert_eq!(visibility.hidden_count(), 4);
    assert!(visibility.all_hidden);
}

#[tokio::test]
async fn empty_second_page_still_advances() {
    let mut catalog = catalog_with_pages(vec![first_page(), vec![]], 4);
    catalog.start().await.unwrap();

    let outcome = catalog.handle(Trigger::PageRequested).await.unwrap();

    assert_eq!(
        outcome,
        card_catalog::TriggerOutcome::Page(PageOutcome::Appended { page: 2, count: 0, skipped: vec![] })
    );
    assert_eq!(catalog.store().cursor(), 3);
    assert_eq!(catalog.store().len(), 4);
    assert_eq!(catalog.sink().appended_pages(), vec![first_page(), vec![]]);
    assert!(catalog.is_exhausted());
}

#[tokio::test]
async fn failed_fetch_leaves_store_untouched() {
    let mut catalog = catalog_with_pages(vec![first_page()], 4);
    catalog.start().await.unwrap();
    catalog.fetcher().fail_next(FetchError::Status(502));

    let err = catalog.page_requested().await.unwrap_err();

    assert!(err.is_fetch());
    assert_eq!(catalog.store().cursor(), 2);
    assert_eq!(catalog.store().len(), 4);
    assert_eq!(catalog.state(), FetchState::Idle);
    assert_eq!(
        catalog.sink().events().last(),
        Some(&SinkEvent::BusyChanged(false))
    );
}

#[tokio::test]
async fn filter_during_pending_fetch_sees_committed_records_only() {
    let mut catalog = catalog_with_pages(vec![first_page()], 2);
    catalog.start().await.unwrap();

    let request = catalog.begin_page_request().unwrap();
    let visibility = catalog.query_changed("");
    assert!(visibility.hidden.is_empty());
    assert_eq!(catalog.store().len(), 4);

    catalog
        .complete_page_request(request, Ok(vec![crate::support::card("base1-5", "Eevee")]))
        .unwrap();
    let visibility = catalog.query_changed("eevee");
    assert_eq!(visibility.hidden_count(), 4);
    assert!(!visibility.all_hidden);
}
