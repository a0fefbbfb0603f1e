use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::{error, instrument};

use crate::{
    expenses::{
        dto::{CreateExpenseRequest, Expense, ExpenseQuery},
        error::ExpenseError,
        services::{add_expense, expenses_for_user},
    },
    state::AppState,
};

pub fn expenses_routes() -> Router<AppState> {
    Router::new().route("/expenses", get(list_expenses).post(create_expense))
}

#[instrument(skip(state))]
pub async fn list_expenses(
    State(state): State<AppState>,
    Query(q): Query<ExpenseQuery>,
) -> Result<Json<Vec<Expense>>, (StatusCode, String)> {
    let expenses = expenses_for_user(state.expenses.as_ref(), &q.user)
        .await
        .map_err(reject)?;
    Ok(Json(expenses))
}

#[instrument(skip(state, body))]
pub async fn create_expense(
    State(state): State<AppState>,
    Json(body): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), (StatusCode, String)> {
    let expense = add_expense(state.expenses.as_ref(), body)
        .await
        .map_err(reject)?;
    Ok((StatusCode::CREATED, Json(expense)))
}

fn reject(e: ExpenseError) -> (StatusCode, String) {
    match e {
        ExpenseError::Missing(_) | ExpenseError::InvalidDate { .. } => {
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        ExpenseError::Storage(_) => {
            error!(error = %e, "expense storage failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
