use proptest::prelude::*;

use super::*;
use crate::host::NoticeLevel;
use crate::test_utils::test_helpers::{FakeHost, HighlightEvent, TEST_SOURCE};

fn controller() -> SuggestionController {
    SuggestionController::new(true, true)
}

/// Show a swap of the function body: "a + b" -> "b + a"
fn show_body_swap(controller: &mut SuggestionController, host: &mut FakeHost) -> ByteRange {
    let start = TEST_SOURCE.find("a + b").unwrap();
    let range = ByteRange::new(start, start + 5);
    let doc = host.doc_uri();
    controller.show(host, &doc, range, "b + a", "addition commutes");
    range
}

#[test]
fn test_show_activates_flag() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    assert!(!controller.is_active());
    show_body_swap(&mut controller, &mut host);
    assert!(controller.is_active());
    assert_eq!(
        controller.active_suggestion().unwrap().replacement,
        "b + a"
    );
}

#[test]
fn test_show_opens_comparison_view() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);

    let view = host.open_diff.as_ref().unwrap();
    assert!(view.title.contains("test.rs"));
    assert_eq!(controller.presenter.provider_count(), 2);
}

#[test]
fn test_show_notifies_with_explanation_action() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);

    let notice = host
        .notices
        .iter()
        .find(|n| n.message.contains("addition commutes"))
        .unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert!(notice.action.is_some());
}

#[test]
fn test_show_unreadable_range_stays_idle() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();
    let doc = host.doc_uri();

    controller.show(&mut host, &doc, ByteRange::new(0, 9999), "x", "bad range");

    assert!(!controller.is_active());
    assert!(host.open_diff.is_none());
    assert_eq!(host.last_notice().unwrap().level, NoticeLevel::Error);
}

#[test]
fn test_second_show_supersedes_first() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();
    let doc = host.doc_uri();

    show_body_swap(&mut controller, &mut host);
    controller.show(&mut host, &doc, ByteRange::new(0, 2), "pub fn", "visibility");

    assert_eq!(
        controller.active_suggestion().unwrap().replacement,
        "pub fn"
    );
    // superseded session's registrations were force-disposed, not leaked
    assert_eq!(controller.presenter.provider_count(), 2);
    let view = host.open_diff.as_ref().unwrap();
    assert!(view.rows.iter().any(|r| {
        r.right
            .as_ref()
            .is_some_and(|(_, text)| text.contains("pub fn"))
    }));
}

#[test]
fn test_highlight_waits_for_view_opened_event() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    let range = show_body_swap(&mut controller, &mut host);
    assert!(host.highlight_events.is_empty());

    controller.on_diff_view_opened(&mut host);
    assert_eq!(
        host.highlight_events,
        vec![HighlightEvent::Set(host.doc_uri(), range)]
    );

    // the event is consumed; a duplicate report changes nothing
    controller.on_diff_view_opened(&mut host);
    assert_eq!(host.highlight_events.len(), 1);
}

#[test]
fn test_highlight_immediate_on_fallback() {
    let mut host = FakeHost::new(TEST_SOURCE);
    host.fail_diff_view = true;
    let mut controller = controller();

    let range = show_body_swap(&mut controller, &mut host);

    // still under review even though the view could not open
    assert!(controller.is_active());
    assert!(host.log_lines.iter().any(|l| l == "b + a"));
    assert_eq!(
        host.highlight_events,
        vec![HighlightEvent::Set(host.doc_uri(), range)]
    );
}

#[test]
fn test_highlight_disabled_by_config() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = SuggestionController::new(false, true);

    show_body_swap(&mut controller, &mut host);
    controller.on_diff_view_opened(&mut host);

    assert!(host.highlight_events.is_empty());
}

#[test]
fn test_highlight_exclusive_across_supersede() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();
    let doc = host.doc_uri();

    let first = show_body_swap(&mut controller, &mut host);
    controller.on_diff_view_opened(&mut host);

    let second = ByteRange::new(0, 2);
    controller.show(&mut host, &doc, second, "pub fn", "visibility");
    controller.on_diff_view_opened(&mut host);

    assert_eq!(
        host.highlight_events,
        vec![
            HighlightEvent::Set(doc.clone(), first),
            HighlightEvent::Cleared,
            HighlightEvent::Set(doc, second),
        ]
    );
}

#[test]
fn test_accept_applies_replacement_byte_exact() {
    let mut host = FakeHost::new("foo(1,2)");
    let mut controller = controller();
    let doc = host.doc_uri();

    controller.show(&mut host, &doc, ByteRange::new(0, 8), "foo(a, b)", "rename args");
    controller.accept(&mut host);

    assert_eq!(host.document.text(), "foo(a, b)");
    assert!(!controller.is_active());
}

#[test]
fn test_accept_saves_when_auto_save_enabled() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.accept(&mut host);

    assert_eq!(host.saved_documents.len(), 1);
    assert!(!host.document.is_dirty());
    assert!(
        host.last_notice()
            .unwrap()
            .message
            .contains("applied and saved")
    );
}

#[test]
fn test_accept_skips_save_when_auto_save_disabled() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = SuggestionController::new(true, false);

    show_body_swap(&mut controller, &mut host);
    controller.accept(&mut host);

    assert!(host.saved_documents.is_empty());
    assert!(host.document.is_dirty());
    assert_eq!(host.last_notice().unwrap().message, "Suggestion applied");
}

#[test]
fn test_accept_when_idle_warns_and_noops() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    controller.accept(&mut host);

    assert_eq!(host.last_notice().unwrap().level, NoticeLevel::Warning);
    assert!(host.saved_documents.is_empty());
    assert_eq!(host.document.text(), TEST_SOURCE);
}

#[test]
fn test_reject_when_idle_is_silent() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    controller.reject(&mut host);

    assert!(host.notices.is_empty());
}

#[test]
fn test_reject_leaves_document_unchanged() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.reject(&mut host);

    assert_eq!(host.document.text(), TEST_SOURCE);
    assert!(!controller.is_active());
    assert!(host.saved_documents.is_empty());
    assert!(
        host.last_notice()
            .unwrap()
            .message
            .contains("rejected")
    );
}

#[test]
fn test_accept_closes_diff_session() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.accept(&mut host);

    assert!(host.open_diff.is_none());
    assert_eq!(host.diff_closes, 1);
    assert_eq!(controller.presenter.provider_count(), 0);
}

#[test]
fn test_accept_edit_failure_surfaces_error_and_cleans_up() {
    let mut host = FakeHost::new(TEST_SOURCE);
    host.fail_edit = true;
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.on_diff_view_opened(&mut host);
    controller.accept(&mut host);

    assert_eq!(host.last_notice().unwrap().level, NoticeLevel::Error);
    assert_eq!(host.document.text(), TEST_SOURCE);
    assert!(!controller.is_active());
    // highlight removed even on the failure path
    assert_eq!(host.highlight_events.last(), Some(&HighlightEvent::Cleared));
    // the failed edit is never saved
    assert!(host.saved_documents.is_empty());
}

#[test]
fn test_accept_save_failure_keeps_edit_and_cleans_up() {
    let mut host = FakeHost::new(TEST_SOURCE);
    host.fail_save = true;
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.accept(&mut host);

    let notice = host.last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("save failed"));
    assert!(host.document.text().contains("b + a"));
    assert!(!controller.is_active());
}

#[test]
fn test_accept_reopen_failure_does_not_block_edit() {
    let mut host = FakeHost::new(TEST_SOURCE);
    host.fail_open_document = true;
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.accept(&mut host);

    assert!(host.document.text().contains("b + a"));
    assert!(!controller.is_active());
}

#[test]
fn test_user_closing_view_releases_providers_but_keeps_suggestion() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.on_diff_view_closed();

    assert_eq!(controller.presenter.provider_count(), 0);
    assert!(controller.is_active());
}

#[test]
fn test_show_explanation_opens_side_view() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.show_explanation(&mut host);

    let (title, body) = host.explanation.as_ref().unwrap();
    assert!(title.contains("test.rs"));
    assert_eq!(body, "addition commutes");
}

#[test]
fn test_show_explanation_when_idle_is_noop() {
    let mut host = FakeHost::new(TEST_SOURCE);
    let mut controller = controller();

    controller.show_explanation(&mut host);

    assert!(host.explanation.is_none());
    assert!(host.notices.is_empty());
}

#[test]
fn test_show_explanation_failure_warns() {
    let mut host = FakeHost::new(TEST_SOURCE);
    host.fail_explanation_view = true;
    let mut controller = controller();

    show_body_swap(&mut controller, &mut host);
    controller.show_explanation(&mut host);

    assert_eq!(host.last_notice().unwrap().level, NoticeLevel::Warning);
}

// Property: accepting a suggestion splices exactly the replacement between
// the untouched prefix and suffix, for any printable replacement text.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_accept_splices_replacement_exactly(replacement in "[ -~]{0,32}") {
        let mut host = FakeHost::new("0123456789");
        let mut controller = SuggestionController::new(true, true);
        let doc = host.doc_uri();

        controller.show(&mut host, &doc, ByteRange::new(2, 5), &replacement, "why");
        controller.accept(&mut host);

        let expected = format!("01{replacement}56789");
        prop_assert_eq!(host.document.text(), expected.as_str());
        prop_assert!(!controller.is_active());
    }
}
