use vimquill::editor::marks::{MarkRegistry, MarkSet, MarkTracking};
use vimquill::host::{DocumentChange, EditorId};

#[test]
fn test_markset_creation() {
    let marks = MarkSet::new();
    assert_eq!(marks.get_mark('a'), None);
}

#[test]
fn test_set_and_get_mark() {
    let mut marks = MarkSet::new();
    marks.set_mark('a', 12);

    assert_eq!(marks.get_mark('a'), Some(12));
    assert_eq!(marks.get_mark('b'), None);
}

#[test]
fn test_overwrite_mark() {
    let mut marks = MarkSet::new();
    marks.set_mark('a', 0);
    marks.set_mark('a', 1);

    assert_eq!(marks.get_mark('a'), Some(1));
}

#[test]
fn test_list_marks() {
    let mut marks = MarkSet::new();
    marks.set_mark('c', 2);
    marks.set_mark('a', 0);

    assert_eq!(marks.list(), vec![('a', 0), ('c', 2)]);
}

#[test]
fn test_clear_marks() {
    let mut marks = MarkSet::new();
    marks.set_mark('a', 0);
    marks.set_mark('b', 1);
    marks.clear();

    assert_eq!(marks.get_mark('a'), None);
    assert_eq!(marks.get_mark('b'), None);
}

#[test]
fn test_replace_shrinking_text() {
    let mut marks = MarkSet::new();
    marks.set_mark('a', 2);
    marks.set_mark('b', 8);
    marks.set_mark('c', 30);

    // "hello world" -> "hi" over offsets 5..16
    marks.apply_change(&DocumentChange::replace(5, 11, 2));

    assert_eq!(marks.list(), vec![('a', 2), ('c', 21)]);
}

#[test]
fn test_registry_routes_changes_per_editor() {
    let mut registry = MarkRegistry::new();
    registry.marks_mut(EditorId(1)).set_mark('a', 10);
    registry.marks_mut(EditorId(2)).set_mark('a', 10);

    registry.on_document_changed(EditorId(1), &DocumentChange::insert(0, 4));

    assert_eq!(registry.marks(EditorId(1)).and_then(|m| m.get_mark('a')), Some(14));
    assert_eq!(registry.marks(EditorId(2)).and_then(|m| m.get_mark('a')), Some(10));
}

#[test]
fn test_forget_drops_editor_marks() {
    let mut registry = MarkRegistry::new();
    registry.marks_mut(EditorId(1)).set_mark('z', 3);
    registry.forget(EditorId(1));
    assert!(registry.marks(EditorId(1)).is_none());
}
