//! Window instance store, stacking controller, and geometry helpers used by the desktop reducer.

use crate::model::{
    AppHandle, AppName, DesktopState, DragSession, PlacementSample, PointerPosition, ResizeEdge,
    ResizeSession, WindowId, WindowManagerConfig, WindowRecord, WindowRect,
};

/// Result of [`open_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenOutcome {
    pub window_id: WindowId,
    /// `false` when an instance of the application already existed.
    pub created: bool,
}

/// Computes the geometry of a freshly opened window.
///
/// Size is capped by the configured maximum and by the fill ratio of the viewport, and never drops
/// below the configured minimum; the origin is picked from `sample` anywhere the window still fits
/// (or 0 when it does not).
pub fn initial_window_rect(
    viewport: WindowRect,
    config: &WindowManagerConfig,
    sample: PlacementSample,
) -> WindowRect {
    let w = config
        .max_initial_width
        .min((f64::from(viewport.w) * config.initial_fill_ratio) as i32)
        .max(config.min_width);
    let h = config
        .max_initial_height
        .min((f64::from(viewport.h) * config.initial_fill_ratio) as i32)
        .max(config.min_height);
    let max_x = (viewport.w - w).max(0);
    let max_y = (viewport.h - h).max(0);

    WindowRect {
        x: (sample.x * f64::from(max_x)).floor() as i32,
        y: (sample.y * f64::from(max_y)).floor() as i32,
        w,
        h,
    }
}

pub fn find_window_by_name<'a>(state: &'a DesktopState, name: &AppName) -> Option<&'a WindowRecord> {
    state.windows.iter().find(|w| w.app.name == *name)
}

/// Registers a window for `app` unless one is already open for the same application name.
///
/// A new window starts unfocused with no rank; callers raise it.
pub fn open_window(
    state: &mut DesktopState,
    app: AppHandle,
    viewport: WindowRect,
    sample: PlacementSample,
) -> OpenOutcome {
    if let Some(existing) = find_window_by_name(state, &app.name) {
        return OpenOutcome {
            window_id: existing.id,
            created: false,
        };
    }

    let window_id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    let rect = initial_window_rect(viewport, &state.config, sample);
    state.windows.push(WindowRecord {
        id: window_id,
        app,
        rect,
        restore_rect: None,
        z_index: 0,
        is_focused: false,
        minimized: false,
        maximized: false,
    });

    OpenOutcome {
        window_id,
        created: true,
    }
}

/// Removes a window. Returns `false` for unknown ids.
pub fn close_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let before = state.windows.len();
    state.windows.retain(|w| w.id != window_id);
    if state.windows.len() == before {
        return false;
    }
    normalize_window_stack(state);
    true
}

/// Highest rank currently held by an open window, or the base rank when none are open.
pub fn top_z_index(state: &DesktopState) -> u32 {
    state
        .windows
        .iter()
        .map(|w| w.z_index)
        .max()
        .unwrap_or(state.config.base_z_index)
}

/// Rank at which modal overlays render: always above every window.
pub fn overlay_z_index(state: &DesktopState) -> u32 {
    top_z_index(state).saturating_add(state.config.overlay_z_offset)
}

/// Raises `window_id` to a fresh top rank, reveals it, and focuses it.
///
/// Returns `true` when the window exists.
pub fn raise_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let top = top_z_index(state);
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };

    let already_focused_top =
        window.z_index == top && window.z_index != 0 && window.is_focused && !window.minimized;
    if already_focused_top {
        return true;
    }

    state.next_z_index = state.next_z_index.saturating_add(1);
    window.z_index = state.next_z_index;
    window.minimized = false;
    normalize_window_stack(state);
    true
}

/// Hides a window. It keeps its rank and geometry.
pub fn minimize_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };
    window.minimized = true;
    window.is_focused = false;
    normalize_window_stack(state);
    true
}

/// Recomputes the focus flag of every window: exactly the highest-ranked visible window is
/// focused, or none when every window is minimized.
pub fn normalize_window_stack(state: &mut DesktopState) {
    let top_visible = state
        .windows
        .iter()
        .filter(|w| !w.minimized)
        .max_by_key(|w| w.z_index)
        .map(|w| w.id);

    for window in &mut state.windows {
        window.is_focused = Some(window.id) == top_visible;
    }
}

/// Maximizes into `viewport` (no smaller than the minimum size) or restores the saved geometry.
///
/// Minimized windows are left alone. Returns `true` when the window changed.
pub fn toggle_maximize(state: &mut DesktopState, window_id: WindowId, viewport: WindowRect) -> bool {
    let (min_width, min_height) = (state.config.min_width, state.config.min_height);
    let Some(window) = state.windows.iter_mut().find(|w| w.id == window_id) else {
        return false;
    };
    if window.minimized {
        return false;
    }

    if window.maximized {
        if let Some(restore_rect) = window.restore_rect.take() {
            window.rect = restore_rect;
        }
        window.maximized = false;
    } else {
        window.restore_rect = Some(window.rect);
        let filled = viewport.filled();
        window.rect = WindowRect {
            w: filled.w.max(min_width),
            h: filled.h.max(min_height),
            ..filled
        };
        window.maximized = true;
    }
    true
}

/// Starts a drag for a visible, non-maximized window.
pub fn begin_drag(
    state: &DesktopState,
    window_id: WindowId,
    pointer: PointerPosition,
) -> Option<DragSession> {
    let window = state.window(window_id)?;
    if window.maximized || window.minimized {
        return None;
    }
    Some(DragSession {
        window_id,
        offset: PointerPosition {
            x: pointer.x - window.rect.x,
            y: pointer.y - window.rect.y,
        },
    })
}

/// Moves the dragged window so the pointer keeps its grab offset.
pub fn apply_drag(state: &mut DesktopState, session: &DragSession, pointer: PointerPosition) {
    let Some(window) = state.windows.iter_mut().find(|w| w.id == session.window_id) else {
        return;
    };
    if window.maximized {
        return;
    }
    window.rect.x = pointer.x - session.offset.x;
    window.rect.y = pointer.y - session.offset.y;
}

/// Starts a resize for a visible, non-maximized window.
pub fn begin_resize(
    state: &DesktopState,
    window_id: WindowId,
    edge: ResizeEdge,
    pointer: PointerPosition,
) -> Option<ResizeSession> {
    let window = state.window(window_id)?;
    if window.maximized || window.minimized {
        return None;
    }
    Some(ResizeSession {
        window_id,
        edge,
        pointer_start: pointer,
        width_start: window.rect.w,
        height_start: window.rect.h,
    })
}

/// Size produced by dragging `session`'s handle to `pointer`, floored at the configured minimum.
pub fn resized_dimensions(
    session: &ResizeSession,
    pointer: PointerPosition,
    config: &WindowManagerConfig,
) -> (Option<i32>, Option<i32>) {
    let dx = pointer.x - session.pointer_start.x;
    let dy = pointer.y - session.pointer_start.y;
    let w = session
        .edge
        .resizes_width()
        .then(|| (session.width_start + dx).max(config.min_width));
    let h = session
        .edge
        .resizes_height()
        .then(|| (session.height_start + dy).max(config.min_height));
    (w, h)
}

pub fn apply_resize(state: &mut DesktopState, session: &ResizeSession, pointer: PointerPosition) {
    let (w, h) = resized_dimensions(session, pointer, &state.config);
    let Some(window) = state.windows.iter_mut().find(|w| w.id == session.window_id) else {
        return;
    };
    if window.maximized {
        return;
    }
    if let Some(w) = w {
        window.rect.w = w;
    }
    if let Some(h) = h {
        window.rect.h = h;
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ApplicationDescriptor;

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1000,
        h: 700,
    };

    fn app(name: &str) -> AppHandle {
        Rc::new(ApplicationDescriptor::new(name))
    }

    fn open_raised(state: &mut DesktopState, name: &str) -> WindowId {
        let outcome = open_window(state, app(name), VIEWPORT, PlacementSample::new(0.5, 0.5));
        raise_window(state, outcome.window_id);
        outcome.window_id
    }

    #[test]
    fn initial_rect_caps_size_and_places_inside_viewport() {
        let config = WindowManagerConfig::default();

        let rect = initial_window_rect(VIEWPORT, &config, PlacementSample::new(0.5, 0.25));
        assert_eq!(
            rect,
            WindowRect {
                x: 200,
                y: 75,
                w: 600,
                h: 400
            }
        );

        let small = WindowRect {
            x: 0,
            y: 0,
            w: 400,
            h: 300,
        };
        let rect = initial_window_rect(small, &config, PlacementSample::new(0.999, 0.999));
        assert_eq!((rect.w, rect.h), (360, 270));
        assert!(rect.x + rect.w <= small.w);
        assert!(rect.y + rect.h <= small.h);
    }

    #[test]
    fn initial_rect_origin_is_zero_when_window_cannot_fit() {
        let config = WindowManagerConfig {
            initial_fill_ratio: 1.5,
            ..WindowManagerConfig::default()
        };
        let tiny = WindowRect {
            x: 0,
            y: 0,
            w: 100,
            h: 80,
        };

        let rect = initial_window_rect(tiny, &config, PlacementSample::new(0.9, 0.9));
        assert_eq!((rect.x, rect.y), (0, 0));
    }

    #[test]
    fn narrow_viewport_still_gets_minimum_window_size() {
        let config = WindowManagerConfig::default();
        let narrow = WindowRect {
            x: 0,
            y: 0,
            w: 200,
            h: 120,
        };

        let rect = initial_window_rect(narrow, &config, PlacementSample::new(0.7, 0.7));
        assert_eq!(
            rect,
            WindowRect {
                x: 0,
                y: 0,
                w: config.min_width,
                h: config.min_height
            }
        );
    }

    #[test]
    fn maximize_into_tiny_viewport_keeps_minimum_size() {
        let mut state = DesktopState::default();
        let a = open_raised(&mut state, "A");
        let tiny = WindowRect {
            x: 0,
            y: 0,
            w: 150,
            h: 90,
        };

        assert!(toggle_maximize(&mut state, a, tiny));
        let rect = state.window(a).expect("a").rect;
        assert_eq!((rect.x, rect.y), (0, 0));
        assert_eq!((rect.w, rect.h), (state.config.min_width, state.config.min_height));
    }

    #[test]
    fn open_is_idempotent_per_application_name() {
        let mut state = DesktopState::default();
        let first = open_window(&mut state, app("Notepad"), VIEWPORT, PlacementSample::default());
        let second = open_window(&mut state, app("Notepad"), VIEWPORT, PlacementSample::default());

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.window_id, second.window_id);
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn close_unknown_window_is_noop() {
        let mut state = DesktopState::default();
        open_raised(&mut state, "Notepad");
        let before = state.clone();

        assert!(!close_window(&mut state, WindowId(999)));
        assert_eq!(state, before);
    }

    #[test]
    fn ranks_are_unique_and_last_raised_is_strict_maximum() {
        let mut state = DesktopState::default();
        let ids: Vec<WindowId> = ["A", "B", "C", "D"]
            .into_iter()
            .map(|name| open_raised(&mut state, name))
            .collect();

        for step in 0..40 {
            let target = ids[(step * 7 + 3) % ids.len()];
            raise_window(&mut state, target);

            let mut ranks: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
            ranks.sort_unstable();
            ranks.dedup();
            assert_eq!(ranks.len(), ids.len());

            let top = state.window(target).expect("target").z_index;
            assert!(state
                .windows
                .iter()
                .filter(|w| w.id != target)
                .all(|w| w.z_index < top));
        }
    }

    #[test]
    fn ranks_are_never_reused_after_close() {
        let mut state = DesktopState::default();
        let a = open_raised(&mut state, "A");
        let b = open_raised(&mut state, "B");
        let b_rank = state.window(b).expect("b").z_index;

        close_window(&mut state, b);
        let c = open_raised(&mut state, "C");

        assert!(state.window(c).expect("c").z_index > b_rank);
        assert!(state.window(a).expect("a").z_index < b_rank);
    }

    #[test]
    fn focus_is_top_visible_window_or_none() {
        let mut state = DesktopState::default();
        let a = open_raised(&mut state, "A");
        let b = open_raised(&mut state, "B");
        assert_eq!(state.focused_window_id(), Some(b));

        minimize_window(&mut state, b);
        assert_eq!(state.focused_window_id(), Some(a));
        assert!(state.window(b).expect("b").minimized);

        minimize_window(&mut state, a);
        assert_eq!(state.focused_window_id(), None);
        assert_eq!(state.windows.iter().filter(|w| w.is_focused).count(), 0);
    }

    #[test]
    fn minimized_window_keeps_rank_and_geometry() {
        let mut state = DesktopState::default();
        let a = open_raised(&mut state, "A");
        let before = state.window(a).expect("a").clone();

        minimize_window(&mut state, a);
        let after = state.window(a).expect("a");
        assert_eq!(after.z_index, before.z_index);
        assert_eq!(after.rect, before.rect);
    }

    #[test]
    fn overlay_rank_tracks_top_window() {
        let mut state = DesktopState::default();
        assert_eq!(overlay_z_index(&state), 1100);

        let a = open_raised(&mut state, "A");
        open_raised(&mut state, "B");
        let before = overlay_z_index(&state);
        raise_window(&mut state, a);

        assert!(overlay_z_index(&state) > before);
        assert!(state.windows.iter().all(|w| w.z_index < overlay_z_index(&state)));
    }

    #[test]
    fn maximize_round_trip_restores_exact_geometry() {
        let mut state = DesktopState::default();
        let a = open_raised(&mut state, "A");
        let original = state.window(a).expect("a").rect;

        assert!(toggle_maximize(&mut state, a, VIEWPORT));
        let maximized = state.window(a).expect("a");
        assert!(maximized.maximized);
        assert_eq!(maximized.rect, VIEWPORT);
        assert_eq!(maximized.restore_rect, Some(original));

        let resized_viewport = WindowRect {
            x: 0,
            y: 0,
            w: 640,
            h: 480,
        };
        assert!(toggle_maximize(&mut state, a, resized_viewport));
        let restored = state.window(a).expect("a");
        assert!(!restored.maximized);
        assert_eq!(restored.rect, original);
        assert_eq!(restored.restore_rect, None);
    }

    #[test]
    fn maximize_is_ignored_while_minimized() {
        let mut state = DesktopState::default();
        let a = open_raised(&mut state, "A");
        minimize_window(&mut state, a);

        assert!(!toggle_maximize(&mut state, a, VIEWPORT));
        assert!(!state.window(a).expect("a").maximized);
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let mut state = DesktopState::default();
        let a = open_raised(&mut state, "A");
        state.windows[0].rect = WindowRect {
            x: 100,
            y: 50,
            w: 300,
            h: 200,
        };

        let session =
            begin_drag(&state, a, PointerPosition { x: 130, y: 60 }).expect("drag session");
        assert_eq!(session.offset, PointerPosition { x: 30, y: 10 });

        apply_drag(&mut state, &session, PointerPosition { x: 10, y: 500 });
        let rect = state.window(a).expect("a").rect;
        assert_eq!((rect.x, rect.y), (-20, 490));
        assert_eq!((rect.w, rect.h), (300, 200));
    }

    #[test]
    fn drag_and_resize_refuse_maximized_windows() {
        let mut state = DesktopState::default();
        let a = open_raised(&mut state, "A");
        toggle_maximize(&mut state, a, VIEWPORT);

        assert!(begin_drag(&state, a, PointerPosition { x: 5, y: 5 }).is_none());
        assert!(begin_resize(&state, a, ResizeEdge::SouthEast, PointerPosition { x: 5, y: 5 })
            .is_none());
    }

    #[test]
    fn resize_edges_only_touch_their_axes() {
        let config = WindowManagerConfig::default();
        let start = PointerPosition { x: 500, y: 500 };
        let pointer = PointerPosition { x: 540, y: 560 };
        let session = |edge| ResizeSession {
            window_id: WindowId(1),
            edge,
            pointer_start: start,
            width_start: 300,
            height_start: 250,
        };

        assert_eq!(
            resized_dimensions(&session(ResizeEdge::East), pointer, &config),
            (Some(340), None)
        );
        assert_eq!(
            resized_dimensions(&session(ResizeEdge::South), pointer, &config),
            (None, Some(310))
        );
        assert_eq!(
            resized_dimensions(&session(ResizeEdge::SouthEast), pointer, &config),
            (Some(340), Some(310))
        );
    }

    #[test]
    fn resize_never_goes_below_minimum() {
        let config = WindowManagerConfig::default();
        let session = ResizeSession {
            window_id: WindowId(1),
            edge: ResizeEdge::SouthEast,
            pointer_start: PointerPosition { x: 500, y: 500 },
            width_start: 300,
            height_start: 250,
        };

        for (x, y) in [(0, 0), (-5000, 499), (399, -100), (i32::MIN / 2, i32::MIN / 2)] {
            let (w, h) = resized_dimensions(&session, PointerPosition { x, y }, &config);
            assert!(w.expect("width") >= config.min_width);
            assert!(h.expect("height") >= config.min_height);
        }
    }
}
