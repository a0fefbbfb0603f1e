use tracing::info;

use crate::dates::parse_date;
use crate::expenses::{
    dto::{CreateExpenseRequest, Expense},
    error::ExpenseError,
    repo::{ExpenseStorage, NewExpense},
};

/// Records an expense. `date`, `description` and `userId` must be present;
/// `amount` may be left out.
pub async fn add_expense(
    storage: &dyn ExpenseStorage,
    req: CreateExpenseRequest,
) -> Result<Expense, ExpenseError> {
    let raw_date = req.date.ok_or(ExpenseError::Missing("date"))?;
    let description = req.description.ok_or(ExpenseError::Missing("description"))?;
    let user_id = req.user_id.ok_or(ExpenseError::Missing("userId"))?;
    let date = parse_date(&raw_date).map_err(|source| ExpenseError::InvalidDate {
        raw: raw_date.clone(),
        source,
    })?;

    let expense = storage
        .create_expense(NewExpense {
            amount: req.amount,
            date,
            description,
            user_id,
        })
        .await?;
    info!(expense_id = %expense.id, user_id = %expense.user_id, "expense recorded");
    Ok(expense)
}

pub async fn expenses_for_user(
    storage: &dyn ExpenseStorage,
    user_id: &str,
) -> Result<Vec<Expense>, ExpenseError> {
    Ok(storage.read_expenses_for_user(user_id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::repo::MemExpenseStorage;
    use time::macros::date;

    const USER: &str = "user@mac.com";
    const USER_2: &str = "user@gmail.com";

    fn request(amount: f64, date: &str, description: &str, user_id: &str) -> CreateExpenseRequest {
        CreateExpenseRequest {
            amount: Some(amount),
            date: Some(date.into()),
            description: Some(description.into()),
            user_id: Some(user_id.into()),
        }
    }

    #[tokio::test]
    async fn add_returns_the_recorded_expense() {
        let storage = MemExpenseStorage::default();

        let expense = add_expense(&storage, request(22.22, "2017-02-27", "Parking at airport", USER))
            .await
            .unwrap();

        assert_eq!(expense.amount, Some(22.22));
        assert_eq!(expense.date, date!(2017 - 02 - 27));
        assert_eq!(expense.description, "Parking at airport");
        assert_eq!(expense.user_id, USER);
    }

    #[tokio::test]
    async fn lists_are_per_user() {
        let storage = MemExpenseStorage::default();
        for (amount, day, description) in [
            (23.88, "2017-02-27", "Lunch"),
            (120.0, "2017-02-27", "Airport Parking"),
            (640.95, "2017-02-27", "Airplane Ticket"),
            (30.0, "2017-02-28", "Taxi"),
        ] {
            add_expense(&storage, request(amount, day, description, USER)).await.unwrap();
        }
        for _ in 0..2 {
            add_expense(&storage, request(120.0, "2017-02-27", "Airport Parking", USER_2))
                .await
                .unwrap();
        }

        assert_eq!(expenses_for_user(&storage, USER).await.unwrap().len(), 4);
        assert_eq!(expenses_for_user(&storage, USER_2).await.unwrap().len(), 2);
        assert!(expenses_for_user(&storage, "").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn amount_is_optional() {
        let storage = MemExpenseStorage::default();
        let req = CreateExpenseRequest {
            amount: None,
            ..request(0.0, "2017-3-1", "Coffee", USER)
        };

        let expense = add_expense(&storage, req).await.unwrap();

        assert_eq!(expense.amount, None);
        assert_eq!(expense.date, date!(2017 - 03 - 01));
    }

    #[tokio::test]
    async fn missing_fields_are_rejected_and_nothing_is_stored() {
        let storage = MemExpenseStorage::default();

        let no_date = CreateExpenseRequest {
            date: None,
            ..request(1.0, "2017-02-27", "Lunch", USER)
        };
        let no_user = CreateExpenseRequest {
            user_id: None,
            ..request(1.0, "2017-02-27", "Lunch", USER)
        };

        assert!(matches!(
            add_expense(&storage, no_date).await,
            Err(ExpenseError::Missing("date"))
        ));
        assert!(matches!(
            add_expense(&storage, no_user).await,
            Err(ExpenseError::Missing("userId"))
        ));
        assert!(matches!(
            add_expense(&storage, CreateExpenseRequest::default()).await,
            Err(ExpenseError::Missing(_))
        ));
        assert!(expenses_for_user(&storage, USER).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn bad_date_is_rejected() {
        let storage = MemExpenseStorage::default();

        let err = add_expense(&storage, request(1.0, "27/02/2017", "Lunch", USER))
            .await
            .unwrap_err();

        assert!(matches!(err, ExpenseError::InvalidDate { .. }));
        assert!(err.to_string().contains("27/02/2017"));
    }
}
