use crate::db::DbConnection;
use shared::{CreateExpenseRequest, Expense, UpdateExpenseRequest};
use thiserror::Error;
use tracing::info;

/// Failures surfaced by the expense service. The user-facing variants
/// carry the exact message the API returns in its `{error}` body.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Amount must be positive")]
    AmountNotPositive,
    #[error("Expense not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// ExpenseService owns the validation and persistence of expense records
#[derive(Clone)]
pub struct ExpenseService {
    db: DbConnection,
}

impl ExpenseService {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// List all expenses in the order the backend stores them
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, ExpenseError> {
        let expenses = self.db.list_expenses().await?;
        info!("Returning {} expenses", expenses.len());
        Ok(expenses)
    }

    /// Validate and store a new expense
    pub async fn create_expense(
        &self,
        request: CreateExpenseRequest,
    ) -> Result<Expense, ExpenseError> {
        let amount = parse_amount(&request.amount)?;

        let expense = self
            .db
            .insert_expense(amount, &request.date, &request.category, &request.note)
            .await?;

        info!("Created expense {} for {}", expense.id, expense.amount);
        Ok(expense)
    }

    /// Apply the provided fields to an existing expense
    pub async fn update_expense(
        &self,
        id: i64,
        request: UpdateExpenseRequest,
    ) -> Result<Expense, ExpenseError> {
        let mut expense = self.db.get_expense(id).await?.ok_or(ExpenseError::NotFound)?;

        if let Some(amount) = &request.amount {
            expense.amount = parse_amount(amount)?;
        }
        if let Some(date) = request.date {
            expense.date = date;
        }
        if let Some(note) = request.note {
            expense.note = note;
        }
        if let Some(category) = request.category {
            expense.category = category;
        }

        self.db.update_expense(&expense).await?;

        info!("Updated expense {}", expense.id);
        Ok(expense)
    }

    /// Delete an expense by its identifier
    pub async fn delete_expense(&self, id: i64) -> Result<(), ExpenseError> {
        if self.db.delete_expense(id).await? {
            info!("Deleted expense {}", id);
            Ok(())
        } else {
            Err(ExpenseError::NotFound)
        }
    }
}

/// Parse the form's raw amount text. The amount must be a number and
/// must be positive.
fn parse_amount(input: &str) -> Result<f64, ExpenseError> {
    let amount: f64 = input.trim().parse().map_err(|_| ExpenseError::InvalidAmount)?;
    if amount <= 0.0 {
        return Err(ExpenseError::AmountNotPositive);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_service() -> ExpenseService {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        ExpenseService::new(db)
    }

    fn create_request(amount: &str, category: &str) -> CreateExpenseRequest {
        CreateExpenseRequest {
            amount: amount.to_string(),
            date: "2024-01-01".to_string(),
            note: "coffee".to_string(),
            category: category.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_parses_amount_string() {
        let service = setup_service().await;

        let expense = service
            .create_expense(create_request("12.50", "Food"))
            .await
            .expect("Create should succeed");

        assert_eq!(expense.id, 1);
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.category, "Food");
    }

    #[tokio::test]
    async fn test_create_rejects_unparseable_amount() {
        let service = setup_service().await;

        let err = service
            .create_expense(create_request("twelve", "Food"))
            .await
            .expect_err("Create should fail");

        assert!(matches!(err, ExpenseError::InvalidAmount));
        assert_eq!(err.to_string(), "Invalid amount");
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_amount() {
        let service = setup_service().await;

        let zero = service
            .create_expense(create_request("0", "Food"))
            .await
            .expect_err("Zero amount should fail");
        assert!(matches!(zero, ExpenseError::AmountNotPositive));

        let negative = service
            .create_expense(create_request("-3.50", "Food"))
            .await
            .expect_err("Negative amount should fail");
        assert_eq!(negative.to_string(), "Amount must be positive");
    }

    #[tokio::test]
    async fn test_update_applies_only_provided_fields() {
        let service = setup_service().await;

        let created = service
            .create_expense(create_request("10", "Food"))
            .await
            .expect("Create should succeed");

        let updated = service
            .update_expense(
                created.id,
                UpdateExpenseRequest {
                    amount: Some("15.75".to_string()),
                    date: None,
                    note: None,
                    category: None,
                },
            )
            .await
            .expect("Update should succeed");

        assert_eq!(updated.amount, 15.75);
        assert_eq!(updated.date, created.date);
        assert_eq!(updated.note, created.note);
        assert_eq!(updated.category, created.category);
    }

    #[tokio::test]
    async fn test_update_validates_amount() {
        let service = setup_service().await;

        let created = service
            .create_expense(create_request("10", "Food"))
            .await
            .expect("Create should succeed");

        let err = service
            .update_expense(
                created.id,
                UpdateExpenseRequest {
                    amount: Some("-1".to_string()),
                    date: None,
                    note: None,
                    category: None,
                },
            )
            .await
            .expect_err("Update should fail");

        assert!(matches!(err, ExpenseError::AmountNotPositive));

        // The stored record is untouched
        let expenses = service.list_expenses().await.expect("List should succeed");
        assert_eq!(expenses[0].amount, 10.0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let service = setup_service().await;

        let err = service
            .update_expense(
                99,
                UpdateExpenseRequest {
                    amount: None,
                    date: Some("2024-02-02".to_string()),
                    note: None,
                    category: None,
                },
            )
            .await
            .expect_err("Update should fail");

        assert!(matches!(err, ExpenseError::NotFound));
        assert_eq!(err.to_string(), "Expense not found");
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let service = setup_service().await;

        let err = service.delete_expense(7).await.expect_err("Delete should fail");

        assert!(matches!(err, ExpenseError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_removes_expense() {
        let service = setup_service().await;

        let created = service
            .create_expense(create_request("10", "Food"))
            .await
            .expect("Create should succeed");

        service.delete_expense(created.id).await.expect("Delete should succeed");

        let expenses = service.list_expenses().await.expect("List should succeed");
        assert!(expenses.is_empty());
    }
}
