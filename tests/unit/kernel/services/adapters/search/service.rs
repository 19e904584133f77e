use super::*;
use crate::kernel::sample::SAMPLE_PARAGRAPHS;
use crate::kernel::services::adapters::testing::{create_runtime, CountingDocument};
use crate::kernel::services::ports::SearchError;

fn setup() -> (Arc<CountingDocument>, SearchService) {
    let doc = Arc::new(CountingDocument::from_paragraphs(SAMPLE_PARAGRAPHS.iter().copied()));
    let highlighter = Arc::new(HighlightManager::new(doc.clone(), "yellow"));
    let service = SearchService::new(doc.clone(), highlighter, 3);
    (doc, service)
}

#[test]
fn test_preview_returns_first_three_paragraphs_with_employee() {
    let rt = create_runtime();
    let (_doc, service) = setup();

    let items = rt
        .block_on(service.preview(&SearchRequest::new("employee", false, true)))
        .unwrap();

    let expected: Vec<&str> = SAMPLE_PARAGRAPHS
        .iter()
        .copied()
        .filter(|p| p.to_lowercase().contains("employee"))
        .take(3)
        .collect();
    assert_eq!(items.len(), 3);
    for (item, paragraph) in items.iter().zip(expected) {
        assert_eq!(item.paragraph_text, paragraph);
        assert_eq!(item.match_text.to_lowercase(), "employee");
    }
}

#[test]
fn test_preview_without_host_is_empty() {
    let rt = create_runtime();
    let (doc, service) = setup();
    doc.inner().set_available(false);

    let items = rt
        .block_on(service.preview(&SearchRequest::new("employee", false, true)))
        .unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_run_clears_before_highlighting() {
    let rt = create_runtime();
    let (doc, service) = setup();
    let never = AtomicBool::new(false);

    rt.block_on(service.run(&SearchRequest::new("company", false, true), 10, true, &never))
        .unwrap();
    let company_spans = doc.inner().highlights().len();
    assert!(company_spans > 0);

    let items = rt
        .block_on(service.run(&SearchRequest::new("duties", false, true), 10, true, &never))
        .unwrap()
        .unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(doc.inner().highlights().len(), 1);
    assert_eq!(doc.body_clears(), 2);
}

#[test]
fn test_run_without_highlight_leaves_document_unmarked() {
    let rt = create_runtime();
    let (doc, service) = setup();
    let never = AtomicBool::new(false);

    let items = rt
        .block_on(service.run(&SearchRequest::new("employee", false, true), 10, false, &never))
        .unwrap()
        .unwrap();

    assert!(items.len() > 3);
    assert!(doc.inner().highlights().is_empty());
}

#[test]
fn test_cancelled_run_does_not_highlight() {
    let rt = create_runtime();
    let (doc, service) = setup();
    let task = SearchTask::new(7);
    task.cancel();

    let outcome = rt
        .block_on(service.run(
            &SearchRequest::new("employee", false, true),
            10,
            true,
            &task.cancelled_flag(),
        ))
        .unwrap();

    assert_eq!(outcome, None);
    assert!(doc.inner().highlights().is_empty());
}

#[test]
fn test_highlight_result_marks_only_that_match() {
    let rt = create_runtime();
    let (doc, service) = setup();
    let request = SearchRequest::new("employee", false, true);
    let never = AtomicBool::new(false);

    rt.block_on(service.highlight_result(&request, 1, &never)).unwrap();

    let spans = doc.inner().highlights();
    assert_eq!(spans.len(), 1);
    assert_eq!(doc.inner().selection().map(|h| h.paragraph()), Some(spans[0].paragraph));

    let err = rt.block_on(service.highlight_result(&request, 99, &never)).unwrap_err();
    assert!(matches!(err, SearchError::InvalidIndex { index: 99, .. }));
}
