//! Application icon rendering.
//!
//! Application icons are configured as image URLs, so the icon primitive is a sized `<img>` with
//! the shared `data-ui-*` contract.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon size.
pub enum IconSize {
    /// 16px, used in title bars, menus, and taskbar proxies.
    #[default]
    Sm,
    /// 32px, used by desktop shortcuts.
    Lg,
}

impl IconSize {
    /// Edge length in CSS pixels.
    pub const fn px(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Lg => 32,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Image icon for a configured application.
pub fn AppIcon(
    #[prop(into)] src: String,
    #[prop(optional, into)] alt: String,
    #[prop(optional)] size: IconSize,
) -> impl IntoView {
    let px = size.px();
    view! {
        <img
            class="ui-icon"
            src=src
            alt=alt
            width=px
            height=px
            draggable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-size=size.token()
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sizes_map_to_pixel_edges() {
        assert_eq!(IconSize::default(), IconSize::Sm);
        assert_eq!(IconSize::Sm.px(), 16);
        assert_eq!(IconSize::Lg.px(), 32);
        assert_eq!(IconSize::Lg.token(), "lg");
    }
}
