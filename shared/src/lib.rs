use serde::{Deserialize, Serialize};

/// A single expense record as stored and returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Backend-assigned identifier, sequential starting at 1
    pub id: i64,
    /// Amount in currency units (always positive)
    pub amount: f64,
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
    /// Free-text category label
    pub category: String,
    /// Free-text note
    pub note: String,
}

/// Request body for POST /api/expenses.
///
/// The amount is the form's raw text; the backend parses and validates
/// it. A missing category key defaults to "Uncategorized".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: String,
    pub date: String,
    pub note: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "Uncategorized".to_string()
}

/// Request body for PUT /api/expenses/:id. Only provided fields are
/// applied to the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Response body for a successful DELETE /api/expenses/:id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteExpenseResponse {
    pub message: String,
}

/// Body shape of every non-2xx API response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expense_deserializes_backend_shape() {
        let body = r#"{"id":3,"amount":12.5,"date":"2024-01-01","category":"Food","note":"coffee"}"#;
        let expense: Expense = serde_json::from_str(body).unwrap();
        assert_eq!(expense.id, 3);
        assert_eq!(expense.amount, 12.5);
        assert_eq!(expense.date, "2024-01-01");
        assert_eq!(expense.category, "Food");
        assert_eq!(expense.note, "coffee");
    }

    #[test]
    fn test_create_request_serializes_amount_as_string() {
        let request = CreateExpenseRequest {
            amount: "12.50".to_string(),
            date: "2024-01-01".to_string(),
            note: "coffee".to_string(),
            category: "Uncategorized".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "amount": "12.50",
                "date": "2024-01-01",
                "note": "coffee",
                "category": "Uncategorized",
            })
        );
    }

    #[test]
    fn test_create_request_defaults_missing_category() {
        let body = r#"{"amount":"5","date":"2024-02-02","note":"bus"}"#;
        let request: CreateExpenseRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.category, "Uncategorized");
    }

    #[test]
    fn test_update_request_skips_absent_fields() {
        let request = UpdateExpenseRequest {
            amount: Some("7.25".to_string()),
            date: None,
            note: None,
            category: None,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({"amount": "7.25"}));

        let partial: UpdateExpenseRequest = serde_json::from_str(r#"{"note":"taxi"}"#).unwrap();
        assert_eq!(partial.note.as_deref(), Some("taxi"));
        assert_eq!(partial.amount, None);
    }

    #[test]
    fn test_error_response_parses() {
        let body = r#"{"error":"Expense not found"}"#;
        let response: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.error, "Expense not found");
    }
}
