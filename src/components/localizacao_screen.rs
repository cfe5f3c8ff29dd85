//! Location Screen
//!
//! Static map image with a back button.

use leptos::prelude::*;

use super::ScreenHeader;
use crate::context::use_app_context;

const MAP_IMAGE: &str = "public/localizacao.png";

#[component]
pub fn LocalizacaoScreen() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="screen localizacao-screen">
            <ScreenHeader title="Localização" show_back=true />
            <Show when=move || ctx.selected_localizacao.get().is_some()>
                <p class="localizacao-label">
                    {move || ctx.selected_localizacao.get().unwrap_or_default()}
                </p>
            </Show>
            <img class="localizacao-imagem" src=MAP_IMAGE alt="Mapa" />
        </div>
    }
}
