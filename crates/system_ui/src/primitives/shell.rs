use super::*;

#[component]
/// Root desktop shell primitive.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
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
/// Desktop wallpaper and shortcut host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// One column of desktop shortcuts.
pub fn DesktopIconGrid(
    #[prop(default = IconColumn::Start)] column: IconColumn,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
            data-ui-slot=column.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop shortcut: icon above a caption.
pub fn DesktopIconButton(
    #[prop(into)] label: String,
    #[prop(into)] icon: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=label.clone()
            aria-label=label.clone()
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-app=label.clone()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            <AppIcon src=icon alt=label.clone() size=IconSize::Lg />
            <span class="ui-desktop-icon-label">{label}</span>
        </button>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            id=id
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Window header; the drag region.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            style=GESTURE_SURFACE_STYLE
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Window title: icon and caption.
pub fn WindowTitle(
    #[prop(into)] title: String,
    #[prop(into)] icon: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-title"
        >
            <AppIcon src=icon alt=title.clone() size=IconSize::Sm />
            <span>{title}</span>
        </div>
    }
}

#[component]
/// Titlebar controls row.
pub fn WindowControls(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-controls", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-controls"
        >
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button (minimize, maximize, close).
pub fn WindowControlButton(
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class="ui-window-control"
            aria_label=aria_label
            ui_slot=ui_slot
            variant=ButtonVariant::Quiet
            on_click=Callback::new(move |ev: MouseEvent| {
                ev.stop_propagation();
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Window content host.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] body_ref: Option<NodeRef<html::Div>>,
) -> impl IntoView {
    let node_ref = body_ref.unwrap_or_default();
    view! {
        <div
            node_ref=node_ref
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        ></div>
    }
}

#[component]
/// Resize handle on one window edge.
pub fn ResizeHandle(
    edge: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-resize-handle", layout_class)
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            style=GESTURE_SURFACE_STYLE
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        ></div>
    }
}

#[component]
/// Taskbar root.
pub fn Taskbar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <footer
            class=merge_layout_class("ui-taskbar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="taskbar"
            role="toolbar"
            aria-label=aria_label
        >
            {children()}
        </footer>
    }
}

#[component]
/// Taskbar section (start, windows, tray).
pub fn TaskbarSection(
    ui_slot: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-taskbar-section", layout_class)
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar button: the start button and per-window proxies.
pub fn TaskbarButton(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <Button
            layout_class=layout_class.unwrap_or("")
            id=id.unwrap_or_default()
            aria_expanded=aria_expanded
            aria_label=aria_label
            title=title
            pressed=pressed
            ui_slot=ui_slot.unwrap_or("taskbar-button")
            on_click=Callback::new(move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            })
        >
            {children()}
        </Button>
    }
}

#[component]
/// Taskbar clock readout.
pub fn ClockDisplay(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <time
            class=merge_layout_class("ui-clock", layout_class)
            data-ui-primitive="true"
            data-ui-kind="clock"
            aria-live="off"
        >
            {move || text.get()}
        </time>
    }
}
