use serde::{Deserialize, Serialize};
use time::Date;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub amount: Option<f64>,
    #[serde(with = "crate::dates::ymd")]
    pub date: Date,
    pub description: String,
    pub user_id: String,
}

/// Body of `POST /expenses`. Everything but `amount` is required.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub amount: Option<f64>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExpenseQuery {
    pub user: String,
}
