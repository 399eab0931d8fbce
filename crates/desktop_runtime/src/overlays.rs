//! Modal overlay stack: informational/confirm dialogs and the color palette picker.
//!
//! Overlays carry at most one callback each. Dismissing an overlay removes it and hands back the
//! callback (if the outcome calls for one) so the caller can run it after releasing any borrow of
//! the stack. A callback can be taken only once.

use std::{cell::RefCell, fmt, rc::Rc};

/// Number of swatches offered by the palette picker.
pub const PALETTE_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OverlayId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    /// Single OK button.
    #[default]
    Info,
    /// Yes / No buttons.
    Confirm,
}

impl DialogKind {
    /// Parses the loose kind strings accepted from page scripts. Anything but `confirm` is info.
    pub fn from_script_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("confirm") {
            Self::Confirm
        } else {
            Self::Info
        }
    }
}

/// Button pressed to dismiss a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// OK on an info dialog.
    Acknowledged,
    /// Yes on a confirm dialog.
    Confirmed,
    /// No on a confirm dialog.
    Declined,
}

/// Callback run when a confirm dialog is answered Yes.
pub type ConfirmFn = Box<dyn FnOnce()>;
/// Callback run with the chosen color.
pub type SelectFn = Box<dyn FnOnce(String)>;

/// Shared single-use callback slot.
struct CallbackSlot<F: ?Sized>(Rc<RefCell<Option<Box<F>>>>);

impl<F: ?Sized> CallbackSlot<F> {
    fn new(callback: Option<Box<F>>) -> Self {
        Self(Rc::new(RefCell::new(callback)))
    }

    fn take(&self) -> Option<Box<F>> {
        self.0.borrow_mut().take()
    }

    fn is_armed(&self) -> bool {
        self.0.borrow().is_some()
    }
}

impl<F: ?Sized> Clone for CallbackSlot<F> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<F: ?Sized> fmt::Debug for CallbackSlot<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_armed() { "armed" } else { "empty" })
    }
}

#[derive(Debug, Clone)]
pub struct DialogOverlay {
    pub id: OverlayId,
    pub title: String,
    pub message: String,
    pub kind: DialogKind,
    on_confirm: CallbackSlot<dyn FnOnce()>,
}

#[derive(Debug, Clone)]
pub struct PaletteOverlay {
    pub id: OverlayId,
    pub title: String,
    pub colors: Rc<[String]>,
    on_select: CallbackSlot<dyn FnOnce(String)>,
}

#[derive(Debug, Clone)]
pub enum Overlay {
    Dialog(DialogOverlay),
    Palette(PaletteOverlay),
}

impl Overlay {
    pub fn id(&self) -> OverlayId {
        match self {
            Self::Dialog(dialog) => dialog.id,
            Self::Palette(palette) => palette.id,
        }
    }
}

/// Callback released by a dismissal, ready to run.
pub enum OverlayCallback {
    Confirm(ConfirmFn),
    Select(SelectFn, String),
}

impl OverlayCallback {
    pub fn invoke(self) {
        match self {
            Self::Confirm(callback) => callback(),
            Self::Select(callback, color) => callback(color),
        }
    }
}

impl fmt::Debug for OverlayCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirm(_) => f.write_str("Confirm"),
            Self::Select(_, color) => f.debug_tuple("Select").field(color).finish(),
        }
    }
}

/// Open overlays in the order they were shown (last is frontmost).
#[derive(Debug, Clone, Default)]
pub struct OverlayStack {
    next_id: u64,
    overlays: Vec<Overlay>,
}

impl OverlayStack {
    pub fn is_empty(&self) -> bool {
        self.overlays.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overlays.len()
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }

    pub fn show_dialog(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: DialogKind,
        on_confirm: Option<ConfirmFn>,
    ) -> OverlayId {
        let id = self.allocate_id();
        self.overlays.push(Overlay::Dialog(DialogOverlay {
            id,
            title: title.into(),
            message: message.into(),
            kind,
            on_confirm: CallbackSlot::new(on_confirm),
        }));
        id
    }

    pub fn show_palette(&mut self, title: impl Into<String>, on_select: Option<SelectFn>) -> OverlayId {
        let id = self.allocate_id();
        self.overlays.push(Overlay::Palette(PaletteOverlay {
            id,
            title: title.into(),
            colors: palette_colors().into(),
            on_select: CallbackSlot::new(on_select),
        }));
        id
    }

    /// Removes dialog `id`. Only [`DialogOutcome::Confirmed`] on a confirm dialog releases the
    /// callback. Unknown ids are ignored.
    pub fn dismiss_dialog(&mut self, id: OverlayId, outcome: DialogOutcome) -> Option<OverlayCallback> {
        let index = self
            .overlays
            .iter()
            .position(|overlay| matches!(overlay, Overlay::Dialog(dialog) if dialog.id == id))?;
        let Overlay::Dialog(dialog) = self.overlays.remove(index) else {
            return None;
        };

        match (dialog.kind, outcome) {
            (DialogKind::Confirm, DialogOutcome::Confirmed) => {
                dialog.on_confirm.take().map(OverlayCallback::Confirm)
            }
            _ => None,
        }
    }

    /// Removes palette `id`. A selected color releases the callback; `None` is Cancel.
    pub fn dismiss_palette(&mut self, id: OverlayId, color: Option<String>) -> Option<OverlayCallback> {
        let index = self
            .overlays
            .iter()
            .position(|overlay| matches!(overlay, Overlay::Palette(palette) if palette.id == id))?;
        let Overlay::Palette(palette) = self.overlays.remove(index) else {
            return None;
        };

        let color = color?;
        palette
            .on_select
            .take()
            .map(|callback| OverlayCallback::Select(callback, color))
    }

    fn allocate_id(&mut self) -> OverlayId {
        self.next_id = self.next_id.saturating_add(1);
        OverlayId(self.next_id)
    }
}

/// The picker palette: the 216 web-safe colors followed by a gray ramp, capped at
/// [`PALETTE_SIZE`] entries. Colors are lowercase `#rrggbb`.
pub fn palette_colors() -> Vec<String> {
    const WEB_SAFE_STEP: usize = 51;
    let mut colors: Vec<String> = Vec::with_capacity(PALETTE_SIZE + 1);

    for r in (0..=255).step_by(WEB_SAFE_STEP) {
        for g in (0..=255).step_by(WEB_SAFE_STEP) {
            for b in (0..=255).step_by(WEB_SAFE_STEP) {
                colors.push(format!("#{r:02x}{g:02x}{b:02x}"));
            }
        }
    }

    for v in (10..255).step_by(6) {
        let gray = format!("#{v:02x}{v:02x}{v:02x}");
        if !colors.contains(&gray) {
            colors.push(gray);
        }
    }

    colors.truncate(PALETTE_SIZE);
    colors
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    fn counter() -> (Rc<Cell<u32>>, ConfirmFn) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, Box::new(move || handle.set(handle.get() + 1)))
    }

    #[test]
    fn palette_has_web_safe_block_then_grays() {
        let colors = palette_colors();

        assert_eq!(colors.len(), PALETTE_SIZE);
        assert_eq!(colors[0], "#000000");
        assert_eq!(colors[1], "#000033");
        assert_eq!(colors[215], "#ffffff");
        assert_eq!(colors[216], "#0a0a0a");
        assert_eq!(colors[255], "#f4f4f4");
        assert!(!colors.contains(&"#fafafa".to_string()));
    }

    #[test]
    fn palette_entries_are_unique() {
        let mut colors = palette_colors();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), PALETTE_SIZE);
    }

    #[test]
    fn confirm_yes_runs_callback_exactly_once() {
        let mut stack = OverlayStack::default();
        let (count, callback) = counter();
        let id = stack.show_dialog("Delete", "Really?", DialogKind::Confirm, Some(callback));

        stack
            .dismiss_dialog(id, DialogOutcome::Confirmed)
            .expect("callback")
            .invoke();
        assert!(stack.dismiss_dialog(id, DialogOutcome::Confirmed).is_none());

        assert_eq!(count.get(), 1);
        assert!(stack.is_empty());
    }

    #[test]
    fn confirm_no_and_info_ok_run_nothing() {
        let mut stack = OverlayStack::default();
        let (count, declined) = counter();
        let (_, info_callback) = counter();
        let confirm = stack.show_dialog("Q", "?", DialogKind::Confirm, Some(declined));
        let info = stack.show_dialog("Note", "Hi", DialogKind::Info, Some(info_callback));

        assert!(stack.dismiss_dialog(confirm, DialogOutcome::Declined).is_none());
        assert!(stack.dismiss_dialog(info, DialogOutcome::Acknowledged).is_none());
        assert_eq!(count.get(), 0);
        assert!(stack.is_empty());
    }

    #[test]
    fn cloned_stack_shares_single_use_callbacks() {
        let mut stack = OverlayStack::default();
        let (count, callback) = counter();
        let id = stack.show_dialog("Q", "?", DialogKind::Confirm, Some(callback));
        let mut snapshot = stack.clone();

        stack
            .dismiss_dialog(id, DialogOutcome::Confirmed)
            .expect("callback")
            .invoke();
        assert!(snapshot.dismiss_dialog(id, DialogOutcome::Confirmed).is_none());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn palette_selection_passes_color_and_cancel_does_not() {
        let mut stack = OverlayStack::default();
        let picked = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = Rc::clone(&picked);
        let first = stack.show_palette(
            "Pick",
            Some(Box::new(move |color| sink.borrow_mut().push(color))),
        );
        let sink = Rc::clone(&picked);
        let second = stack.show_palette(
            "Pick again",
            Some(Box::new(move |color| sink.borrow_mut().push(color))),
        );

        stack
            .dismiss_palette(first, Some("#336699".to_string()))
            .expect("callback")
            .invoke();
        assert!(stack.dismiss_palette(second, None).is_none());

        assert_eq!(*picked.borrow(), vec!["#336699".to_string()]);
        assert!(stack.is_empty());
    }

    #[test]
    fn dismissing_unknown_or_mismatched_ids_is_noop() {
        let mut stack = OverlayStack::default();
        let dialog = stack.show_dialog("Note", "Hi", DialogKind::Info, None);

        assert!(stack.dismiss_dialog(OverlayId(99), DialogOutcome::Acknowledged).is_none());
        assert!(stack.dismiss_palette(dialog, Some("#000000".to_string())).is_none());
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn dialog_kind_parses_script_values() {
        assert_eq!(DialogKind::from_script_value("confirm"), DialogKind::Confirm);
        assert_eq!(DialogKind::from_script_value("info"), DialogKind::Info);
        assert_eq!(DialogKind::from_script_value(""), DialogKind::Info);
    }
}
