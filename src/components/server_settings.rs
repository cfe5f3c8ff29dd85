//! Server Settings Panel
//!
//! Collapsible form on the login screen to point the app at another API
//! server, plus a view of the most recent backend log lines. The address is
//! persisted by the backend.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;

const LOG_LINES_SHOWN: usize = 50;

#[component]
pub fn ServerSettings() -> impl IntoView {
    let (open, set_open) = signal(false);
    let base_url = RwSignal::new(String::new());
    let timeout_secs = RwSignal::new(None::<u64>);
    let status = RwSignal::new(None::<String>);
    let logs = RwSignal::new(Vec::<String>::new());

    // Load current address when the panel opens
    Effect::new(move |_| {
        if open.get() {
            spawn_local(async move {
                match commands::get_api_config().await {
                    Ok(config) => {
                        base_url.set(config.base_url);
                        timeout_secs.set(Some(config.timeout_secs));
                    }
                    Err(e) => status.set(Some(e.to_string())),
                }
            });
        }
    });

    let save = move |_| {
        let url = base_url.get_untracked();
        spawn_local(async move {
            match commands::set_api_base_url(&url).await {
                Ok(config) => {
                    base_url.set(config.base_url);
                    status.set(Some("Servidor salvo.".to_string()));
                }
                Err(e) => status.set(e.banner()),
            }
        });
    };

    let show_logs = move |_| {
        spawn_local(async move {
            match commands::recent_logs().await {
                Ok(lines) => {
                    let skip = lines.len().saturating_sub(LOG_LINES_SHOWN);
                    logs.set(lines.into_iter().skip(skip).collect());
                }
                Err(e) => status.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="server-settings">
            <button class="link-btn" on:click=move |_| set_open.update(|v| *v = !*v)>
                {move || if open.get() { "Ocultar servidor" } else { "Servidor" }}
            </button>
            <Show when=move || open.get()>
                <div class="server-settings-form">
                    <input
                        type="url"
                        placeholder="http://localhost:3000"
                        prop:value=move || base_url.get()
                        on:input=move |ev| base_url.set(event_target_value(&ev))
                    />
                    <button on:click=save>"Salvar"</button>
                    {move || timeout_secs.get().map(|t| view! {
                        <p class="settings-hint">{format!("Tempo limite: {} s", t)}</p>
                    })}
                    <Show when=move || status.get().is_some()>
                        <p class="settings-status">{move || status.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="link-btn" on:click=show_logs>"Ver logs"</button>
                    <Show when=move || !logs.get().is_empty()>
                        <pre class="log-view">{move || logs.get().join("\n")}</pre>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
