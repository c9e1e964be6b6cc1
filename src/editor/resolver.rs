//! Reverse lookup of the project and file that own an editor.
//!
//! The host does not tell an editor which project or file it belongs to, so
//! the resolver walks every open project, every open file in it, and every
//! file editor showing that file until it finds the target editor. Results are
//! cached in the [`AttributeStore`]; a miss is not cached and the next call
//! scans again.
//!
//! Project and file resolution are independent: each scan fills only its own
//! slot.

use super::attributes::{AttributeStore, Project, VirtualFile};
use crate::host::{EditorId, FileId, ProjectHost, ProjectId};
use serde::{Deserialize, Serialize};

/// Which match wins when an editor is listed under more than one file.
///
/// Hosts should never list one editor under two files. When they do, the
/// default keeps scanning after a match, so the last match enumerated wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResolvePolicy {
    #[default]
    LastMatch,
    FirstMatch,
}

/// Walks the host for the `(project, file)` pair whose file editors include
/// `editor`.
///
/// Within one file's editor list the walk stops at the first match. Whether
/// it goes on to later files and projects depends on `policy`.
pub fn find_owner<H: ProjectHost + ?Sized>(
    host: &H,
    editor: EditorId,
    policy: ResolvePolicy,
) -> Option<(ProjectId, FileId)> {
    let mut owner = None;
    for project in host.open_projects() {
        for file in host.open_files(project) {
            let shown = host
                .file_editors(project, file)
                .iter()
                .any(|candidate| candidate.text_editor() == Some(editor));
            if !shown {
                continue;
            }
            if let Some((previous_project, previous_file)) = owner {
                log::debug!(
                    "{} listed under {} in {} and {} in {}",
                    editor,
                    previous_file,
                    previous_project,
                    file,
                    project
                );
            }
            owner = Some((project, file));
            if policy == ResolvePolicy::FirstMatch {
                return owner;
            }
        }
    }
    owner
}

/// Resolves and caches the editor's project.
pub fn resolve_project<H: ProjectHost + ?Sized>(
    store: &mut AttributeStore,
    host: &H,
    editor: EditorId,
    policy: ResolvePolicy,
) -> Option<ProjectId> {
    if let Some(project) = store.get::<Project>(editor) {
        log::trace!("{}: project cache hit", editor);
        return Some(*project);
    }

    log::debug!("{}: scanning open projects for owning project", editor);
    let (project, _) = find_owner(host, editor, policy)?;
    store.set::<Project>(editor, project);
    Some(project)
}

/// Resolves and caches the editor's file.
pub fn resolve_virtual_file<H: ProjectHost + ?Sized>(
    store: &mut AttributeStore,
    host: &H,
    editor: EditorId,
    policy: ResolvePolicy,
) -> Option<FileId> {
    if let Some(file) = store.get::<VirtualFile>(editor) {
        log::trace!("{}: virtual file cache hit", editor);
        return Some(*file);
    }

    log::debug!("{}: scanning open projects for owning file", editor);
    let (_, file) = find_owner(host, editor, policy)?;
    store.set::<VirtualFile>(editor, file);
    Some(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::memory::MemoryHost;

    #[test]
    fn test_find_owner_skips_other_editors() {
        let host = MemoryHost::new();
        let project = host.open_project();
        let file = host.open_file(project);
        host.open_other_editor(project, file);
        let editor = host.open_editor(project, file);

        assert_eq!(
            find_owner(&host, editor, ResolvePolicy::LastMatch),
            Some((project, file))
        );
    }

    #[test]
    fn test_find_owner_checks_every_candidate() {
        let host = MemoryHost::new();
        let project = host.open_project();
        let file = host.open_file(project);
        host.open_editor(project, file);
        let second = host.open_editor(project, file);

        assert_eq!(
            find_owner(&host, second, ResolvePolicy::LastMatch),
            Some((project, file))
        );
    }

    #[test]
    fn test_policy_decides_ties() {
        let host = MemoryHost::new();
        let first_project = host.open_project();
        let first_file = host.open_file(first_project);
        let editor = host.open_editor(first_project, first_file);
        let second_project = host.open_project();
        let second_file = host.open_file(second_project);
        host.attach_editor(second_project, second_file, editor);

        assert_eq!(
            find_owner(&host, editor, ResolvePolicy::LastMatch),
            Some((second_project, second_file))
        );
        assert_eq!(
            find_owner(&host, editor, ResolvePolicy::FirstMatch),
            Some((first_project, first_file))
        );
    }

    #[test]
    fn test_miss_is_not_cached() {
        let host = MemoryHost::new();
        let mut store = AttributeStore::new();
        let project = host.open_project();
        let file = host.open_file(project);
        let editor = host.open_editor(project, file);
        host.close_file(project, file);

        assert_eq!(
            resolve_project(&mut store, &host, editor, ResolvePolicy::LastMatch),
            None
        );
        assert!(!store.contains(editor));

        host.add_open_file(project, file);
        host.attach_editor(project, file, editor);
        assert_eq!(
            resolve_project(&mut store, &host, editor, ResolvePolicy::LastMatch),
            Some(project)
        );
        assert_eq!(host.scan_count(), 2);
    }
}
