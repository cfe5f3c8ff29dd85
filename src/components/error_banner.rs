//! Error Banner Component
//!
//! One-line message that clears itself after a few seconds or on click.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const DISMISS_AFTER_MS: u32 = 4_000;

#[component]
pub fn ErrorBanner(message: RwSignal<Option<String>>) -> impl IntoView {
    Effect::new(move |_| {
        if let Some(shown) = message.get() {
            spawn_local(async move {
                TimeoutFuture::new(DISMISS_AFTER_MS).await;
                // A newer message restarts its own timer
                if message.try_get_untracked().flatten().as_deref() == Some(shown.as_str()) {
                    let _ = message.try_set(None);
                }
            });
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner" role="alert" on:click=move |_| message.set(None)>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
