use super::*;

fn item(paragraph: &str, matched: &str) -> SearchResultItem {
    SearchResultItem::new(paragraph, matched)
}

#[test]
fn test_two_words_each_side() {
    let w = window(&item("a b c MATCH d e f", "MATCH"), 0, 2, 2);
    assert_eq!(w.before, "b c");
    assert_eq!(w.matched, "MATCH");
    assert_eq!(w.after, "d e");
}

#[test]
fn test_missing_occurrence_falls_back_to_paragraph() {
    let paragraph = "x MATCH y MATCH z";
    let w = window(&item(paragraph, "MATCH"), 2, 2, 2);
    assert_eq!(
        w,
        SnippetWindow {
            before: paragraph.to_string(),
            matched: String::new(),
            after: String::new(),
        }
    );
}

#[test]
fn test_blank_match_text_falls_back() {
    let w = window(&item("some paragraph", "  "), 0, 3, 3);
    assert_eq!(w.before, "some paragraph");
    assert!(w.matched.is_empty());
    assert!(w.after.is_empty());
}

#[test]
fn test_second_occurrence_gets_its_own_window() {
    let paragraph = "one Term two three term four five";
    let first = window(&item(paragraph, "term"), 0, 1, 1);
    let second = window(&item(paragraph, "term"), 1, 1, 1);

    assert_eq!((first.before.as_str(), first.matched.as_str()), ("one", "Term"));
    assert_eq!(first.after, "two");
    assert_eq!(second.before, "three");
    assert_eq!(second.matched, "term");
    assert_eq!(second.after, "four");
}

#[test]
fn test_preserves_document_casing_and_collapses_whitespace() {
    let w = window(&item("  Intro   text\tbefore EMPLOYEE   after  it ", "employee"), 0, 5, 5);
    assert_eq!(w.before, "Intro text before");
    assert_eq!(w.matched, "EMPLOYEE");
    assert_eq!(w.after, "after it");
}

#[test]
fn test_match_at_paragraph_edges() {
    let w = window(&item("match", "match"), 0, 3, 3);
    assert_eq!(w.before, "");
    assert_eq!(w.matched, "match");
    assert_eq!(w.after, "");
}

#[test]
fn test_non_ascii_offsets() {
    let w = window(&item("Über straße STRASSE Ünd", "ünd"), 0, 1, 1);
    assert_eq!(w.before, "STRASSE");
    assert_eq!(w.matched, "Ünd");
    assert_eq!(w.after, "");
}

#[test]
fn test_occurrence_indices_count_per_paragraph() {
    let items = vec![
        item("p1", "a"),
        item("p2", "a"),
        item("p1", "a"),
        item("p1", "a"),
        item("p2", "a"),
    ];
    assert_eq!(occurrence_indices(&items), vec![0, 0, 1, 2, 1]);
}

#[test]
fn test_find_occurrence_is_non_overlapping() {
    assert_eq!(find_occurrence("aaaa", "aa", 0), Some((0, 2)));
    assert_eq!(find_occurrence("aaaa", "aa", 1), Some((2, 4)));
    assert_eq!(find_occurrence("aaaa", "aa", 2), None);
}
