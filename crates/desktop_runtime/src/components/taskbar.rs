use std::time::Duration;

use leptos::ev::MouseEvent;
use platform_host::{format_clock_hh_mm, local_clock_now};
use system_ui::{AppIcon, ClockDisplay, IconSize, Taskbar, TaskbarButton, TaskbarSection};

use super::*;
use crate::{
    model::WindowId,
    taskbar::{taskbar_entries, taskbar_entry_label, TaskbarEntry},
};

fn clock_text_now() -> String {
    format_clock_hh_mm(local_clock_now())
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_text = create_rw_signal(clock_text_now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_text.set(clock_text_now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let entries = create_memo(move |_| state.with(taskbar_entries));
    let start_open = create_memo(move |_| state.with(|desktop| desktop.start_menu_open));

    view! {
        <Taskbar aria_label="Taskbar">
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    id="start-button"
                    ui_slot="start-button"
                    aria_label="Start"
                    aria_expanded=start_open
                    pressed=start_open
                    on_click=Callback::new(move |ev: MouseEvent| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    })
                >
                    "Start"
                </TaskbarButton>
            </TaskbarSection>
            <TaskbarSection ui_slot="windows">
                <For
                    each=move || {
                        entries.with(|list| list.iter().map(|entry| entry.window_id).collect::<Vec<_>>())
                    }
                    key=|window_id| window_id.0
                    let:window_id
                >
                    <TaskbarWindowButton window_id=window_id entries=entries />
                </For>
            </TaskbarSection>
            <TaskbarSection ui_slot="tray">
                <ClockDisplay text=clock_text />
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarWindowButton(window_id: WindowId, entries: Memo<Vec<TaskbarEntry>>) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entry = create_memo(move |_| {
        entries.with(|list| list.iter().find(|entry| entry.window_id == window_id).cloned())
    });
    let Some(initial) = entry.get_untracked() else {
        return ().into_view();
    };

    let active = Signal::derive(move || entry.with(|entry| entry.as_ref().is_some_and(|e| e.active)));
    let label = Signal::derive(move || {
        entry
            .with(|entry| entry.as_ref().map(taskbar_entry_label))
            .unwrap_or_default()
    });

    view! {
        <TaskbarButton
            id=initial.proxy_id.clone()
            ui_slot="taskbar-window"
            aria_label=label
            title=label
            pressed=active
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow { window_id });
            })
        >
            <AppIcon src=initial.icon.clone() alt=initial.title.clone() size=IconSize::Sm />
            <span>{initial.title.clone()}</span>
        </TaskbarButton>
    }
    .into_view()
}
