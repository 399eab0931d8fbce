//! Pure taskbar view model derived from the window store.

use crate::model::{DesktopState, WindowId};

/// One taskbar proxy button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    /// Stable DOM id of the proxy element.
    pub proxy_id: String,
    pub title: String,
    pub icon: String,
    /// Mirrors the window's focus flag; at most one entry is active.
    pub active: bool,
    pub minimized: bool,
}

/// Builds one entry per open window, in open order.
///
/// Every entry's `active` flag is recomputed from the current focus flags on each call, so no
/// proxy ever keeps a stale highlight.
pub fn taskbar_entries(state: &DesktopState) -> Vec<TaskbarEntry> {
    state
        .windows
        .iter()
        .map(|window| TaskbarEntry {
            window_id: window.id,
            proxy_id: window.taskbar_proxy_id(),
            title: window.title().to_string(),
            icon: window.app.icon.clone(),
            active: window.is_focused && !window.minimized,
            minimized: window.minimized,
        })
        .collect()
}

/// Accessible label for a proxy button.
pub fn taskbar_entry_label(entry: &TaskbarEntry) -> String {
    if entry.minimized {
        format!("{} (minimized)", entry.title)
    } else {
        entry.title.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::{ApplicationDescriptor, PlacementSample, WindowRect},
        window_manager::{minimize_window, open_window, raise_window},
    };

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 800,
        h: 600,
    };

    fn open(state: &mut DesktopState, name: &str) -> WindowId {
        let app = Rc::new(ApplicationDescriptor::new(name).with_icon(format!("icons/{name}.png")));
        let id = open_window(state, app, VIEWPORT, PlacementSample::default()).window_id;
        raise_window(state, id);
        id
    }

    #[test]
    fn entries_follow_open_order_not_stacking_order() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "Notepad");
        let second = open(&mut state, "Paint");
        raise_window(&mut state, first);

        let entries = taskbar_entries(&state);
        assert_eq!(
            entries.iter().map(|e| e.window_id).collect::<Vec<_>>(),
            vec![first, second]
        );
        assert_eq!(
            entries[0],
            TaskbarEntry {
                window_id: first,
                proxy_id: "taskbar-window-1".to_string(),
                title: "Notepad".to_string(),
                icon: "icons/Notepad.png".to_string(),
                active: true,
                minimized: false,
            }
        );
        assert!(!entries[1].active);
    }

    #[test]
    fn at_most_one_entry_is_active() {
        let mut state = DesktopState::default();
        let a = open(&mut state, "A");
        let b = open(&mut state, "B");
        open(&mut state, "C");

        for target in [a, b] {
            raise_window(&mut state, target);
            let active: Vec<WindowId> = taskbar_entries(&state)
                .into_iter()
                .filter(|e| e.active)
                .map(|e| e.window_id)
                .collect();
            assert_eq!(active, vec![target]);
        }
    }

    #[test]
    fn minimized_entries_are_inactive_and_labelled() {
        let mut state = DesktopState::default();
        let a = open(&mut state, "Notepad");
        minimize_window(&mut state, a);

        let entries = taskbar_entries(&state);
        assert!(entries[0].minimized);
        assert!(!entries[0].active);
        assert_eq!(taskbar_entry_label(&entries[0]), "Notepad (minimized)");
    }
}
