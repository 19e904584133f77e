use super::*;
use crate::kernel::sample::SAMPLE_PARAGRAPHS;
use crate::kernel::services::adapters::memory::MemoryDocument;
use crate::kernel::services::adapters::testing::{create_runtime, CountingDocument};
use crate::kernel::services::ports::{DocumentError, SearchError};
use crate::kernel::{NoticeLevel, SessionPhase};
use std::time::Duration;

fn sample_doc() -> Arc<CountingDocument> {
    Arc::new(CountingDocument::from_paragraphs(SAMPLE_PARAGRAPHS.iter().copied()))
}

fn controller(doc: &Arc<CountingDocument>) -> SearchController {
    SearchController::new(Handle::current(), doc.clone(), SearchSettings::default())
}

async fn let_tasks_run() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}

#[test]
fn test_rapid_edits_run_one_search() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = sample_doc();
        let mut c = controller(&doc);

        for text in ["e", "em", "emp", "employee"] {
            c.set_query(text);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        assert!(doc.searches().is_empty());

        c.process_next().await;
        c.settle().await;

        assert_eq!(doc.searched_queries(), vec!["employee".to_string()]);
        let snapshot = c.snapshot();
        assert_eq!(snapshot.phase, SessionPhase::Displaying);
        assert_eq!(snapshot.entries.len(), 3);
        let expected = [SAMPLE_PARAGRAPHS[1], SAMPLE_PARAGRAPHS[2], SAMPLE_PARAGRAPHS[4]];
        for (entry, paragraph) in snapshot.entries.iter().zip(expected) {
            assert_eq!(entry.item.paragraph_text, paragraph);
        }
        assert!(doc.inner().highlights().is_empty());
        assert!(c.take_notices().is_empty());
    });
}

#[test]
fn test_search_now_highlights_and_click_selects_one() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = sample_doc();
        let mut c = controller(&doc);

        c.set_query("employee");
        c.search_now();
        c.settle().await;

        let total = c.state().results.len();
        assert_eq!(total, 5);
        assert_eq!(doc.inner().highlights().len(), 5);

        c.click_result(1);
        let_tasks_run().await;
        let spans = doc.inner().highlights();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].paragraph, 2);
        assert_eq!(doc.inner().selection().map(|h| h.paragraph()), Some(2));

        assert!(c.next_page());
        c.click_result(1);
        let_tasks_run().await;
        let spans = doc.inner().highlights();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].paragraph, 6);

        assert!(!c.next_page());
        assert_eq!(c.state().page, 1);
    });
}

#[test]
fn test_late_response_does_not_overwrite_newer_results() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = Arc::new(CountingDocument::from_paragraphs([
            "the foo paragraph",
            "the bar paragraph",
        ]));
        doc.delay_query("foo", Duration::from_millis(300));
        doc.delay_query("bar", Duration::from_millis(10));
        let mut c = controller(&doc);

        c.set_query("foo");
        c.search_now();
        c.set_query("bar");
        c.search_now();

        c.settle().await;
        assert_eq!(c.state().results[0].match_text, "bar");

        tokio::time::sleep(Duration::from_millis(400)).await;
        c.tick();

        assert_eq!(c.state().phase, SessionPhase::Displaying);
        assert_eq!(c.state().results.len(), 1);
        assert_eq!(c.state().results[0].match_text, "bar");
        let spans = doc.inner().highlights();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].paragraph, 1);
    });
}

#[test]
fn test_service_failure_returns_to_idle_with_notice() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = sample_doc();
        doc.fail_searches(true);
        let mut c = controller(&doc);

        c.set_query("employee");
        c.search_now();
        c.settle().await;

        assert_eq!(c.state().phase, SessionPhase::Idle);
        assert!(c.state().results.is_empty());
        let notices = c.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].title, "Search failed");
    });
}

#[test]
fn test_hung_host_call_times_out() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = sample_doc();
        doc.delay_query("employee", Duration::from_secs(60));
        let settings = SearchSettings {
            search_timeout_ms: 1_000,
            ..SearchSettings::default()
        };
        let mut c = SearchController::new(Handle::current(), doc.clone(), settings);

        c.set_query("employee");
        c.search_now();
        c.settle().await;

        assert_eq!(
            c.state().last_error,
            Some(SearchError::ServiceCallFailed(DocumentError::Timeout(
                Duration::from_millis(1_000)
            )))
        );
        assert!(!c.state().loading());
    });
}

#[test]
fn test_missing_host_is_silent_for_typing_but_reported_for_search() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = sample_doc();
        doc.inner().set_available(false);
        let mut c = controller(&doc);
        assert!(!c.state().host_available);

        c.set_query("employee");
        c.process_next().await;
        c.settle().await;
        assert!(c.state().results.is_empty());
        assert!(c.take_notices().is_empty());
        assert!(doc.searches().is_empty());

        c.search_now();
        c.settle().await;
        let notices = c.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Connect to the document host");
    });
}

#[test]
fn test_clearing_input_clears_highlights() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = sample_doc();
        let mut c = controller(&doc);

        c.set_query("company");
        c.search_now();
        c.settle().await;
        assert!(!doc.inner().highlights().is_empty());

        c.set_query("");
        let_tasks_run().await;

        assert_eq!(c.state().phase, SessionPhase::Idle);
        assert!(c.snapshot().entries.is_empty());
        assert!(doc.inner().highlights().is_empty());
    });
}

#[test]
fn test_match_case_toggle_reruns_query() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = sample_doc();
        let mut c = controller(&doc);

        c.set_query("employee");
        c.set_match_case(true);
        c.process_next().await;
        c.settle().await;

        let results = &c.state().results;
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.match_text == "employee"));
        assert_eq!(doc.searches().len(), 1);
        assert!(doc.searches()[0].1.match_case);
    });
}

#[test]
fn test_insert_sample_then_search() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = Arc::new(CountingDocument::new(MemoryDocument::new()));
        let mut c = controller(&doc);

        c.insert_sample();
        c.process_next().await;
        let notices = c.take_notices();
        assert_eq!(notices[0].level, NoticeLevel::Success);
        assert_eq!(doc.inner().paragraphs().len(), SAMPLE_PARAGRAPHS.len());

        c.set_query("Word");
        c.search_now();
        c.settle().await;
        assert_eq!(c.state().results.len(), 1);
        assert_eq!(c.snapshot().entries[0].window.matched, "Word");
    });
}

#[test]
fn test_insert_sample_without_host() {
    let rt = create_runtime();
    rt.block_on(async {
        let doc = sample_doc();
        doc.inner().set_available(false);
        let mut c = controller(&doc);

        c.insert_sample();
        c.process_next().await;
        let notices = c.take_notices();
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(doc.inner().paragraphs().len(), SAMPLE_PARAGRAPHS.len());
    });
}
