use super::*;

#[component]
/// Popup surface for the start menu.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role="menu"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu entry with an application icon.
pub fn MenuItem(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            aria_label=label.clone()
            ui_slot="menu-item"
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            <AppIcon src=icon alt=label.clone() size=IconSize::Sm />
            <span>{label}</span>
        </Button>
    }
}

#[component]
/// Full-viewport modal backdrop stacked at an explicit z-index.
pub fn ModalOverlay(
    #[prop(into)] z_index: MaybeSignal<u32>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-modal-overlay", layout_class)
            style=move || format!("z-index: {};", z_index.get())
            data-ui-primitive="true"
            data-ui-kind="modal-overlay"
            on:pointerdown=|ev| ev.stop_propagation()
            on:click=|ev| ev.stop_propagation()
        >
            {children()}
        </div>
    }
}

#[component]
/// Modal dialog window with a title bar and content area.
pub fn ModalDialog(
    #[prop(into)] title: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-modal-dialog", layout_class)
            role="dialog"
            aria-modal="true"
            aria-label=title.clone()
            data-ui-primitive="true"
            data-ui-kind="modal-dialog"
        >
            <header class="ui-window-titlebar" data-ui-kind="window-titlebar">
                <span class="ui-window-title">{title}</span>
            </header>
            <div class="ui-modal-content">{children()}</div>
        </div>
    }
}

#[component]
/// Button row at the bottom of a modal dialog.
pub fn ModalFooter(children: Children) -> impl IntoView {
    view! {
        <div class="ui-modal-footer" data-ui-primitive="true" data-ui-kind="modal-footer">
            {children()}
        </div>
    }
}

#[component]
/// Grid of color swatches.
pub fn PaletteGrid(children: Children) -> impl IntoView {
    view! {
        <div class="ui-palette-grid" data-ui-primitive="true" data-ui-kind="palette-grid">
            {children()}
        </div>
    }
}

#[component]
/// One selectable color swatch.
pub fn PaletteSwatch(
    #[prop(into)] color: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-palette-swatch"
            style=format!("background-color: {color};")
            title=color.clone()
            aria-label=color
            data-ui-primitive="true"
            data-ui-kind="palette-swatch"
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        ></button>
    }
}
