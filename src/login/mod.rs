use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod handlers;
pub mod services;

pub use dto::Credentials;
pub use services::{Navigation, Navigator};

pub fn router() -> Router<AppState> {
    handlers::login_routes()
}
