//! Login Screen

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ErrorBanner, ServerSettings};
use crate::commands;
use crate::context::use_app_context;
use crate::models::LoginForm;
use crate::navigation::Route;

#[component]
pub fn LoginScreen() -> impl IntoView {
    let ctx = use_app_context();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        submitting.set(true);
        spawn_local(async move {
            let result = commands::login(&form).await;
            let _ = submitting.try_set(false);
            match result {
                Ok(()) => {
                    web_sys::console::log_1(&"[AUTH] Logged in".into());
                    password.set(String::new());
                    error.set(None);
                    ctx.navigate(Route::Home);
                }
                Err(e) => {
                    let _ = error.try_set(e.banner());
                }
            }
        });
    };

    view! {
        <div class="screen auth-screen">
            <h1 class="auth-title">"Login"</h1>
            <ErrorBanner message=error />
            <form class="auth-form" on:submit=submit>
                <input
                    type="text"
                    placeholder="Username"
                    autocomplete="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="button" class="link-btn" on:click=move |_| ctx.navigate(Route::Register)>
                    "Cadastrar-se"
                </button>
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Entrando..." } else { "Login" }}
                </button>
            </form>
            <ServerSettings />
        </div>
    }
}
