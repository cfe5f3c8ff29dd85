//! Register Screen

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{ErrorBanner, ScreenHeader};
use crate::commands;
use crate::context::use_app_context;
use crate::models::RegisterForm;
use crate::navigation::Route;

#[component]
pub fn RegisterScreen() -> impl IntoView {
    let ctx = use_app_context();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let form = RegisterForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
        };
        submitting.set(true);
        spawn_local(async move {
            let result = commands::register(&form).await;
            let _ = submitting.try_set(false);
            match result {
                // Login is below us on the stack, so this pops back to it
                Ok(()) => ctx.navigate(Route::Login),
                Err(e) => {
                    let _ = error.try_set(e.banner());
                }
            }
        });
    };

    view! {
        <div class="screen auth-screen">
            <ScreenHeader title="Registrar-se" show_back=true />
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
                    autocomplete="new-password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Confirmar Password"
                    autocomplete="new-password"
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn" disabled=move || submitting.get()>
                    "Registrar"
                </button>
            </form>
        </div>
    }
}
