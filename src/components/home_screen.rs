//! Home Screen
//!
//! Service categories in two columns; any of them opens the store list.

use leptos::prelude::*;

use super::ScreenHeader;
use crate::context::use_app_context;
use crate::navigation::Route;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Servico {
    pub nome: &'static str,
    pub imagem: &'static str,
}

pub const SERVICOS: [Servico; 7] = [
    Servico { nome: "Hambúrgueres", imagem: "public/servicos/hamburguer.png" },
    Servico { nome: "Pizzas", imagem: "public/servicos/pizza.png" },
    Servico { nome: "Bebidas", imagem: "public/servicos/bebidas.png" },
    Servico { nome: "Sobremesas", imagem: "public/servicos/sobremesas.png" },
    Servico { nome: "Sushi", imagem: "public/servicos/sushi.png" },
    Servico { nome: "Saladas", imagem: "public/servicos/salada.png" },
    Servico { nome: "Massas", imagem: "public/servicos/massa.png" },
];

/// First column gets the extra entry when the count is odd.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

#[component]
fn ServicoColumn(servicos: &'static [Servico]) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="servico-column">
            {servicos
                .iter()
                .map(|servico| {
                    view! {
                        <div class="servico-card">
                            <img class="servico-imagem" src=servico.imagem alt=servico.nome />
                            <button class="servico-btn" on:click=move |_| ctx.navigate(Route::Lojas)>
                                {servico.nome}
                            </button>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn HomeScreen() -> impl IntoView {
    let (left, right) = split_columns(&SERVICOS);

    view! {
        <div class="screen home-screen">
            <ScreenHeader title="Promoções Disponíveis" show_logout=true />
            <div class="servico-grid">
                <ServicoColumn servicos=left />
                <ServicoColumn servicos=right />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_services_split_four_three() {
        let (left, right) = split_columns(&SERVICOS);
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 3);
        assert_eq!(left[0].nome, "Hambúrgueres");
        assert_eq!(right[0].nome, "Sushi");
    }

    #[test]
    fn test_even_and_empty_splits() {
        let (left, right) = split_columns(&[1, 2, 3, 4]);
        assert_eq!((left.len(), right.len()), (2, 2));

        let empty: [u8; 0] = [];
        let (left, right) = split_columns(&empty);
        assert!(left.is_empty() && right.is_empty());
    }
}
