use system_ui::{Button, ModalDialog, ModalFooter, ModalOverlay, PaletteGrid, PaletteSwatch};

use super::*;
use crate::{
    overlays::{DialogKind, DialogOutcome, DialogOverlay, Overlay, PaletteOverlay},
    window_manager::overlay_z_index,
};

/// Renders every open dialog and palette picker above the window stack.
#[component]
pub(super) fn DesktopOverlays() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let z_index = Signal::derive(move || runtime.state.with(overlay_z_index));

    view! {
        <For
            each=move || runtime.overlays.with(|stack| stack.overlays().to_vec())
            key=|overlay| overlay.id().0
            let:overlay
        >
            {match overlay {
                Overlay::Dialog(dialog) => {
                    view! { <DialogView dialog=dialog z_index=z_index /> }.into_view()
                }
                Overlay::Palette(palette) => {
                    view! { <PaletteView palette=palette z_index=z_index /> }.into_view()
                }
            }}
        </For>
    }
}

#[component]
fn DialogView(dialog: DialogOverlay, z_index: Signal<u32>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = dialog.id;
    let dismiss = move |outcome: DialogOutcome| {
        Callback::new(move |_| runtime.dismiss_dialog(id, outcome))
    };

    let buttons = match dialog.kind {
        DialogKind::Info => view! {
            <Button ui_slot="modal-ok" on_click=dismiss(DialogOutcome::Acknowledged)>"OK"</Button>
        }
        .into_view(),
        DialogKind::Confirm => view! {
            <Button ui_slot="modal-yes" on_click=dismiss(DialogOutcome::Confirmed)>"Yes"</Button>
            <Button ui_slot="modal-no" on_click=dismiss(DialogOutcome::Declined)>"No"</Button>
        }
        .into_view(),
    };

    view! {
        <ModalOverlay z_index=z_index>
            <ModalDialog title=dialog.title.clone()>
                <div class="ui-modal-message" inner_html=dialog.message.clone()></div>
                <ModalFooter>{buttons}</ModalFooter>
            </ModalDialog>
        </ModalOverlay>
    }
}

#[component]
fn PaletteView(palette: PaletteOverlay, z_index: Signal<u32>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let id = palette.id;

    let swatches = palette
        .colors
        .iter()
        .map(|color| {
            let selected = color.clone();
            view! {
                <PaletteSwatch
                    color=color.clone()
                    on_click=Callback::new(move |_| runtime.dismiss_palette(id, Some(selected.clone())))
                />
            }
        })
        .collect_view();

    view! {
        <ModalOverlay z_index=z_index layout_class="ui-palette-overlay">
            <ModalDialog title=palette.title.clone()>
                <PaletteGrid>{swatches}</PaletteGrid>
                <ModalFooter>
                    <Button
                        ui_slot="modal-cancel"
                        on_click=Callback::new(move |_| runtime.dismiss_palette(id, None))
                    >
                        "Cancel"
                    </Button>
                </ModalFooter>
            </ModalDialog>
        </ModalOverlay>
    }
}
