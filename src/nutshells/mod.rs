use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod error;
pub mod handlers;
pub mod services;
pub mod source;

pub use dto::Person;
pub use error::{FetchError, LoadError};
pub use services::{reduce, Nutshells, FIRST_PAGE, MAX_PAGE, VIEW_LIMIT};
pub use source::{HttpPeopleSource, PeopleSource};

pub fn router() -> Router<AppState> {
    handlers::nutshells_routes()
}
