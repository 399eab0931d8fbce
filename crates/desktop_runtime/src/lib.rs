pub mod apps;
pub mod components;
pub mod config;
mod effect_executor;
mod host;
pub mod model;
pub mod overlays;
pub mod reducer;
mod runtime_context;
pub mod taskbar;
pub mod window_manager;

pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use config::{parse_desktop_config, resolve_appearance, DesktopConfig};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
