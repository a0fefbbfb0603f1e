use async_trait::async_trait;
use time::Date;
use tokio::sync::Mutex;

use crate::expenses::dto::Expense;

#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Option<f64>,
    pub date: Date,
    pub description: String,
    pub user_id: String,
}

#[async_trait]
pub trait ExpenseStorage: Send + Sync {
    async fn create_expense(&self, new: NewExpense) -> anyhow::Result<Expense>;
    async fn read_expenses_for_user(&self, user_id: &str) -> anyhow::Result<Vec<Expense>>;
}

/// In-memory storage. Ids count up from 1; reads come back in creation order.
#[derive(Default)]
pub struct MemExpenseStorage {
    inner: Mutex<MemInner>,
}

#[derive(Default)]
struct MemInner {
    last_id: u64,
    expenses: Vec<Expense>,
}

#[async_trait]
impl ExpenseStorage for MemExpenseStorage {
    async fn create_expense(&self, new: NewExpense) -> anyhow::Result<Expense> {
        let mut inner = self.inner.lock().await;
        inner.last_id += 1;
        let expense = Expense {
            id: inner.last_id.to_string(),
            amount: new.amount,
            date: new.date,
            description: new.description,
            user_id: new.user_id,
        };
        inner.expenses.push(expense.clone());
        Ok(expense)
    }

    async fn read_expenses_for_user(&self, user_id: &str) -> anyhow::Result<Vec<Expense>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .expenses
            .iter()
            .filter(|e| e.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn new_expense(description: &str, user_id: &str) -> NewExpense {
        NewExpense {
            amount: Some(1.5),
            date: date!(2017 - 02 - 27),
            description: description.into(),
            user_id: user_id.into(),
        }
    }

    #[tokio::test]
    async fn ids_count_up_from_one() {
        let storage = MemExpenseStorage::default();
        let first = storage.create_expense(new_expense("Lunch", "u")).await.unwrap();
        let second = storage.create_expense(new_expense("Taxi", "u")).await.unwrap();
        assert_eq!(first.id, "1");
        assert_eq!(second.id, "2");
    }

    #[tokio::test]
    async fn reads_only_the_users_expenses_in_order() {
        let storage = MemExpenseStorage::default();
        storage.create_expense(new_expense("Lunch", "a")).await.unwrap();
        storage.create_expense(new_expense("Parking", "b")).await.unwrap();
        storage.create_expense(new_expense("Taxi", "a")).await.unwrap();

        let mine = storage.read_expenses_for_user("a").await.unwrap();
        let names: Vec<_> = mine.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, vec!["Lunch", "Taxi"]);
        assert!(storage.read_expenses_for_user("").await.unwrap().is_empty());
    }
}
