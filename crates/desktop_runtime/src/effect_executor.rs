//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::DesktopRuntimeContext;

/// Installs the executor that drains queued [`crate::reducer::RuntimeEffect`] values in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Take the batch before running it; effects that dispatch again queue a new batch.
    create_effect(move |_| {
        if runtime.effects.with(Vec::is_empty) {
            return;
        }

        let mut batch = Vec::new();
        runtime
            .effects
            .update(|queue| batch = std::mem::take(queue));

        let host = runtime.host.get_value();
        for effect in batch {
            host.run_runtime_effect(runtime, effect);
        }
    });
}
