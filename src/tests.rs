use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;

use crate::domain::entities::page::{PageEnvelope, PageState};
use crate::ensure_webview_data_dir;
use crate::ui::table::{normalize_params, QueryState, QueryValue, TableState};
use crate::usecase::ports::data_source::{JsonRow, PageSource, ParamMap};

fn row(id: u64) -> JsonRow {
    let mut row = JsonRow::new();
    row.insert("id".to_string(), serde_json::json!(id));
    row
}

fn request_params(query: &QueryState, initial: &ParamMap, page: u64, page_size: u64) -> ParamMap {
    let mut params = normalize_params(initial, query);
    params.insert("page".to_string(), page.into());
    params.insert("pageSize".to_string(), page_size.into());
    params
}

#[tokio::test]
async fn load_cycle_applies_the_envelope_to_rows_and_pagination() {
    let source = PageSource::new(|_params| async move {
        Ok(PageEnvelope {
            list: Some(vec![row(1)]),
            total: Some(1),
            page: Some(1),
            page_size: Some(10),
        })
    });

    let mut state = TableState::<JsonRow>::new();
    let generation = state.begin_load();
    let outcome = source.fetch(ParamMap::new()).await;
    state.apply(generation, outcome);

    assert_eq!(state.rows, vec![row(1)]);
    assert_eq!(
        state.page,
        PageState {
            current_page: 1,
            page_size: 10,
            total: 1,
        }
    );
    assert!(!state.loading);
}

#[tokio::test]
async fn rejecting_source_leaves_rows_and_pagination_untouched() {
    let seed = PageSource::new(|_params| async move {
        Ok(PageEnvelope {
            list: Some(vec![row(7)]),
            total: Some(21),
            page: Some(2),
            page_size: Some(10),
        })
    });
    let failing: PageSource<JsonRow> =
        PageSource::new(|_params| async move { anyhow::bail!("connection refused") });

    let mut state = TableState::<JsonRow>::new();
    let generation = state.begin_load();
    let outcome = seed.fetch(ParamMap::new()).await;
    state.apply(generation, outcome);
    let rows_before = state.rows.clone();
    let page_before = state.page;

    let generation = state.begin_load();
    assert!(state.loading, "loading should be set while the call is out");
    let outcome = failing.fetch(ParamMap::new()).await;
    state.apply(generation, outcome);

    assert!(!state.loading, "loading must clear exactly once");
    assert_eq!(state.rows, rows_before);
    assert_eq!(state.page, page_before);
}

#[tokio::test]
async fn request_parameters_merge_pagination_with_normalized_query_values() {
    let seen = Rc::new(RefCell::new(None::<ParamMap>));
    let seen_in_source = seen.clone();
    let source = PageSource::new(move |params| {
        let seen = seen_in_source.clone();
        async move {
            *seen.borrow_mut() = Some(params);
            Ok(PageEnvelope::<JsonRow>::empty())
        }
    });

    let mut initial = ParamMap::new();
    initial.insert("categoryId".to_string(), serde_json::json!("c-9"));
    initial.insert("isActive".to_string(), serde_json::json!(1));

    let mut query = QueryState::new();
    query.insert("name".to_string(), QueryValue::Text("引出棒".to_string()));
    query.insert("isActive".to_string(), QueryValue::Choice("0".to_string()));
    let issued_at = NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid timestamp");
    query.insert("issuedAt".to_string(), QueryValue::DateTime(issued_at));

    let params = request_params(&query, &initial, 1, 10);
    let _ = source.fetch(params).await;

    let sent = seen.borrow().clone().expect("source should receive params");
    assert_eq!(sent.get("page"), Some(&serde_json::json!(1)));
    assert_eq!(sent.get("pageSize"), Some(&serde_json::json!(10)));
    assert_eq!(sent.get("categoryId"), Some(&serde_json::json!("c-9")));
    assert_eq!(
        sent.get("isActive"),
        Some(&serde_json::json!("0")),
        "live query values override initial values"
    );
    assert_eq!(sent.get("name"), Some(&serde_json::json!("引出棒")));
    assert_eq!(
        sent.get("issuedAt"),
        Some(&serde_json::json!("2024-01-01 00:00:00"))
    );
}

#[tokio::test]
async fn late_response_of_an_older_load_is_discarded() {
    let first_source = PageSource::new(|_params| async move {
        Ok(PageEnvelope {
            list: Some(vec![row(1)]),
            total: Some(30),
            page: Some(1),
            page_size: Some(10),
        })
    });
    let second_source = PageSource::new(|_params| async move {
        Ok(PageEnvelope {
            list: Some(vec![row(2)]),
            total: Some(30),
            page: Some(2),
            page_size: Some(10),
        })
    });

    let mut state = TableState::<JsonRow>::new();
    // Two loads leave in order; the first one resolves last.
    let first = state.begin_load();
    let second = state.begin_load();
    let second_outcome = second_source.fetch(ParamMap::new()).await;
    let first_outcome = first_source.fetch(ParamMap::new()).await;

    state.apply(second, second_outcome);
    assert_eq!(state.page.current_page, 2);
    assert!(!state.loading);

    state.apply(first, first_outcome);
    assert_eq!(state.rows, vec![row(2)], "stale rows must not win");
    assert_eq!(state.page.current_page, 2);
}

#[test]
fn webview_data_dir_is_created_under_the_app_dir() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let temp_dir: PathBuf = std::env::temp_dir().join(format!("wms-webview-{nanos}"));
    std::fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let webview_dir = ensure_webview_data_dir(&temp_dir).expect("webview dir should be created");

    assert_eq!(webview_dir, temp_dir.join("webview2"));
    assert!(webview_dir.is_dir(), "webview2 directory should exist");

    std::fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
