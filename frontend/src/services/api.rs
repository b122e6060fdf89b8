use gloo::net::http::{Request, Response};
use shared::{CreateExpenseRequest, ErrorResponse, Expense, UpdateExpenseRequest};

/// API client for communicating with the backend server
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Get all expenses from the backend
    pub async fn list_expenses(&self) -> Result<Vec<Expense>, String> {
        let url = format!("{}/api/expenses", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Vec<Expense>>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse expenses: {}", e)),
                    }
                } else {
                    Err(extract_error(response).await)
                }
            }
            Err(e) => Err(format!("Failed to fetch expenses: {}", e)),
        }
    }

    /// Create a new expense
    pub async fn create_expense(&self, request: CreateExpenseRequest) -> Result<Expense, String> {
        let url = format!("{}/api/expenses", self.base_url);

        match Request::post(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Expense>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    Err(extract_error(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Update an existing expense addressed by its identifier
    pub async fn update_expense(
        &self,
        id: i64,
        request: UpdateExpenseRequest,
    ) -> Result<Expense, String> {
        let url = format!("{}/api/expenses/{}", self.base_url, id);

        match Request::put(&url)
            .json(&request)
            .map_err(|e| format!("Failed to serialize request: {}", e))?
            .send()
            .await
        {
            Ok(response) => {
                if response.ok() {
                    match response.json::<Expense>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse response: {}", e)),
                    }
                } else {
                    Err(extract_error(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }

    /// Delete an expense by its identifier
    pub async fn delete_expense(&self, id: i64) -> Result<(), String> {
        let url = format!("{}/api/expenses/{}", self.base_url, id);

        match Request::delete(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    Ok(())
                } else {
                    Err(extract_error(response).await)
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull the error message out of a non-2xx response body. The API
/// answers failures with an `{error}` JSON body.
async fn extract_error(response: Response) -> String {
    match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => "Unknown error".to_string(),
    }
}
