use anyhow::Result;
use shared::Expense;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:expenses.db";

/// DbConnection manages expense storage
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        // Connect to the database
        let pool = SqlitePool::connect(url).await?;

        // Setup database schema
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize a test database with a unique name
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        // Generate a unique database name for tests
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS expenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                date TEXT NOT NULL,
                category TEXT NOT NULL,
                note TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert a new expense and return the stored record with its
    /// backend-assigned identifier.
    pub async fn insert_expense(
        &self,
        amount: f64,
        date: &str,
        category: &str,
        note: &str,
    ) -> Result<Expense> {
        let result =
            sqlx::query("INSERT INTO expenses (amount, date, category, note) VALUES (?, ?, ?, ?)")
                .bind(amount)
                .bind(date)
                .bind(category)
                .bind(note)
                .execute(&*self.pool)
                .await?;

        Ok(Expense {
            id: result.last_insert_rowid(),
            amount,
            date: date.to_string(),
            category: category.to_string(),
            note: note.to_string(),
        })
    }

    /// Retrieve a single expense by its identifier
    pub async fn get_expense(&self, id: i64) -> Result<Option<Expense>> {
        let row = sqlx::query("SELECT id, amount, date, category, note FROM expenses WHERE id = ?")
            .bind(id)
            .fetch_optional(&*self.pool)
            .await?;

        Ok(row.map(|r| row_to_expense(&r)))
    }

    /// List all expenses in insertion order
    pub async fn list_expenses(&self) -> Result<Vec<Expense>> {
        let rows = sqlx::query("SELECT id, amount, date, category, note FROM expenses ORDER BY id")
            .fetch_all(&*self.pool)
            .await?;

        Ok(rows.iter().map(row_to_expense).collect())
    }

    /// Overwrite the stored record matching the expense's identifier
    pub async fn update_expense(&self, expense: &Expense) -> Result<()> {
        sqlx::query("UPDATE expenses SET amount = ?, date = ?, category = ?, note = ? WHERE id = ?")
            .bind(expense.amount)
            .bind(&expense.date)
            .bind(&expense.category)
            .bind(&expense.note)
            .bind(expense.id)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    /// Delete an expense by its identifier, reporting whether a row was
    /// actually removed
    pub async fn delete_expense(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = ?")
            .bind(id)
            .execute(&*self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

fn row_to_expense(row: &sqlx::sqlite::SqliteRow) -> Expense {
    Expense {
        id: row.get("id"),
        amount: row.get("amount"),
        date: row.get("date"),
        category: row.get("category"),
        note: row.get("note"),
    }
}
