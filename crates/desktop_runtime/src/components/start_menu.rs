use std::rc::Rc;

use leptos::ev::MouseEvent;
use system_ui::{MenuItem, MenuSurface};

use super::*;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = create_memo(move |_| runtime.state.with(|desktop| desktop.start_menu_open));
    let items = create_memo(move |_| runtime.state.with(|desktop| desktop.registry.menu_items()));

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <MenuSurface
                id="start-menu"
                aria_label="Start menu"
                on_click=Callback::new(|ev: MouseEvent| ev.stop_propagation())
            >
                <For
                    each=move || items.get().into_iter().enumerate()
                    key=|(index, app)| (*index, app.name.as_str().to_string())
                    let:entry
                >
                    {
                        let (_, app) = entry;
                        let label = app.name.as_str().to_string();
                        let icon = app.icon.clone();
                        view! {
                            <MenuItem
                                label=label
                                icon=icon
                                on_click=Callback::new(move |_| runtime.launch_app(Rc::clone(&app)))
                            />
                        }
                    }
                </For>
            </MenuSurface>
        </Show>
    }
}
