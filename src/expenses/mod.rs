use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod error;
pub mod handlers;
pub mod repo;
pub mod services;

pub use dto::Expense;
pub use error::ExpenseError;
pub use repo::{ExpenseStorage, MemExpenseStorage};

pub fn router() -> Router<AppState> {
    handlers::expenses_routes()
}
