//! UI Components
//!
//! Screens and the reusable pieces they are built from.

mod delete_confirm_button;
mod error_banner;
mod home_screen;
mod localizacao_screen;
mod login_screen;
mod loja_screen;
mod promocao_card;
mod promocao_form;
mod register_screen;
mod screen_header;
mod server_settings;

pub use delete_confirm_button::DeleteConfirmButton;
pub use error_banner::ErrorBanner;
pub use home_screen::HomeScreen;
pub use localizacao_screen::LocalizacaoScreen;
pub use login_screen::LoginScreen;
pub use loja_screen::LojaScreen;
pub use promocao_card::PromocaoCard;
pub use promocao_form::{FormMode, PromocaoForm};
pub use register_screen::RegisterScreen;
pub use screen_header::ScreenHeader;
pub use server_settings::ServerSettings;
