use pretty_assertions::assert_eq;
use vimquill::config::Config;
use vimquill::editor::data::EditorData;
use vimquill::editor::resolver::ResolvePolicy;
use vimquill::editor::visual::{SelectionType, VisualChange, VisualRange};
use vimquill::host::memory::MemoryHost;
use vimquill::host::{EditorId, HostError};

fn data() -> EditorData {
    EditorData::new(&Config::default())
}

#[test]
fn test_last_column_falls_back_to_visual_column() {
    let host = MemoryHost::new();
    let project = host.open_project();
    let file = host.open_file(project);
    let editor = host.open_editor(project, file);
    host.set_visual_column(editor, 17).unwrap();

    let data = data();
    assert_eq!(data.last_column(&host, editor), Ok(17));

    // Fallback follows the caret until something is stored
    host.set_visual_column(editor, 3).unwrap();
    assert_eq!(data.last_column(&host, editor), Ok(3));
    assert!(data.attributes().is_empty());
}

#[test]
fn test_set_last_column_sticks() {
    let host = MemoryHost::new();
    let project = host.open_project();
    let file = host.open_file(project);
    let editor = host.open_editor(project, file);
    let mut data = data();

    data.set_last_column(editor, 9);
    host.set_visual_column(editor, 2).unwrap();
    data.set_last_visual_range(editor, VisualRange::new(0, 4, SelectionType::Character));
    let _ = data.last_visual_operator_range(editor);
    let _ = data.project(&host, editor);

    assert_eq!(data.last_column(&host, editor), Ok(9));

    data.set_last_column(editor, 0);
    assert_eq!(data.last_column(&host, editor), Ok(0));
}

#[test]
fn test_attributes_are_per_editor() {
    let host = MemoryHost::new();
    let project = host.open_project();
    let file = host.open_file(project);
    let first = host.open_editor(project, file);
    let second = host.open_editor(project, file);
    host.set_visual_column(second, 11).unwrap();
    let mut data = data();

    data.set_last_column(first, 5);

    assert_eq!(data.last_column(&host, first), Ok(5));
    assert_eq!(data.last_column(&host, second), Ok(11));
    assert_eq!(data.last_visual_range(second), None);
}

#[test]
fn test_last_column_of_unknown_editor_is_host_error() {
    let host = MemoryHost::new();
    let data = data();
    assert_eq!(
        data.last_column(&host, EditorId(99)),
        Err(HostError::UnknownEditor(EditorId(99)))
    );
}

#[test]
fn test_project_resolution_scans_once() {
    let host = MemoryHost::new();
    let project = host.open_project();
    let file = host.open_file(project);
    let editor = host.open_editor(project, file);
    let mut data = data();

    assert_eq!(data.project(&host, editor), Some(project));
    assert_eq!(data.project(&host, editor), Some(project));
    assert_eq!(host.scan_count(), 1);
}

#[test]
fn test_project_and_file_scan_independently() {
    let host = MemoryHost::new();
    let project = host.open_project();
    let file = host.open_file(project);
    let editor = host.open_editor(project, file);
    let mut data = data();

    assert_eq!(data.project(&host, editor), Some(project));
    assert_eq!(data.virtual_file(&host, editor), Some(file));
    assert_eq!(data.virtual_file(&host, editor), Some(file));
    assert_eq!(host.scan_count(), 2);
}

#[test]
fn test_cached_project_survives_host_changes() {
    let host = MemoryHost::new();
    let project = host.open_project();
    let file = host.open_file(project);
    let editor = host.open_editor(project, file);
    let mut data = data();

    assert_eq!(data.project(&host, editor), Some(project));
    host.close_project(project);

    assert_eq!(data.project(&host, editor), Some(project));
    assert_eq!(host.scan_count(), 1);
}

#[test]
fn test_resolution_misses_when_editor_not_open_anywhere() {
    let host = MemoryHost::new();
    let project = host.open_project();
    let file = host.open_file(project);
    host.open_editor(project, file);
    host.open_other_editor(project, file);
    let stray = EditorId(1_000);
    let mut data = data();

    assert_eq!(data.project(&host, stray), None);
    assert_eq!(data.virtual_file(&host, stray), None);
}

#[test]
fn test_miss_rescans_on_next_call() {
    let host = MemoryHost::new();
    let project = host.open_project();
    let file = host.open_file(project);
    let editor = host.open_editor(project, file);
    host.close_file(project, file);
    let mut data = data();

    assert_eq!(data.virtual_file(&host, editor), None);
    assert_eq!(data.virtual_file(&host, editor), None);
    assert_eq!(host.scan_count(), 2);

    host.add_open_file(project, file);
    host.attach_editor(project, file, editor);
    assert_eq!(data.virtual_file(&host, editor), Some(file));
    assert_eq!(host.scan_count(), 3);
}

#[test]
fn test_duplicate_membership_last_match_wins() {
    let host = MemoryHost::new();
    let first_project = host.open_project();
    let first_file = host.open_file(first_project);
    let editor = host.open_editor(first_project, first_file);
    let second_project = host.open_project();
    let second_file = host.open_file(second_project);
    host.attach_editor(second_project, second_file, editor);
    let mut data = data();

    assert_eq!(data.resolve_policy(), ResolvePolicy::LastMatch);
    assert_eq!(data.project(&host, editor), Some(second_project));
    assert_eq!(data.virtual_file(&host, editor), Some(second_file));
}

#[test]
fn test_duplicate_membership_first_match_policy() {
    let host = MemoryHost::new();
    let first_project = host.open_project();
    let first_file = host.open_file(first_project);
    let editor = host.open_editor(first_project, first_file);
    let second_file = host.open_file(first_project);
    host.attach_editor(first_project, second_file, editor);
    let config = Config {
        resolve_policy: ResolvePolicy::FirstMatch,
        ..Config::default()
    };
    let mut data = EditorData::new(&config);

    assert_eq!(data.virtual_file(&host, editor), Some(first_file));
}

#[test]
fn test_visual_slots_round_trip() {
    let editor = EditorId(4);
    let mut data = data();
    let range = VisualRange::new(30, 12, SelectionType::Block).with_offset(14);
    let change = VisualChange::new(3, 7, SelectionType::Block);

    data.set_last_visual_range(editor, range);
    assert_eq!(data.last_visual_operator_range(editor), None);
    data.set_last_visual_operator_range(editor, change);
    data.set_last_column(editor, 1);

    assert_eq!(data.last_visual_range(editor), Some(&range));
    assert_eq!(data.last_visual_operator_range(editor), Some(&change));

    let replacement = VisualRange::new(0, 0, SelectionType::Line);
    data.set_last_visual_range(editor, replacement);
    assert_eq!(data.last_visual_range(editor), Some(&replacement));
    assert_eq!(data.last_visual_operator_range(editor), Some(&change));
}
