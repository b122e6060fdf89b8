use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use shared::{CreateExpenseRequest, DeleteExpenseResponse, ErrorResponse, UpdateExpenseRequest};
use tracing::info;

use crate::domain::{ExpenseError, ExpenseService};

/// Application state containing the ExpenseService
#[derive(Clone)]
pub struct AppState {
    pub expense_service: ExpenseService,
}

impl AppState {
    pub fn new(expense_service: ExpenseService) -> Self {
        Self { expense_service }
    }
}

/// Build the API router with all expense routes nested under /api
pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/expenses", get(list_expenses).post(create_expense))
        .route("/expenses/:id", put(update_expense).delete(delete_expense));

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Axum handler function for GET /api/expenses
pub async fn list_expenses(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/expenses");

    match state.expense_service.list_expenses().await {
        Ok(expenses) => (StatusCode::OK, Json(expenses)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for POST /api/expenses
pub async fn create_expense(
    State(state): State<AppState>,
    Json(request): Json<CreateExpenseRequest>,
) -> impl IntoResponse {
    info!("POST /api/expenses - request: {:?}", request);

    match state.expense_service.create_expense(request).await {
        Ok(expense) => (StatusCode::CREATED, Json(expense)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for PUT /api/expenses/:id
pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateExpenseRequest>,
) -> impl IntoResponse {
    info!("PUT /api/expenses/{} - request: {:?}", id, request);

    match state.expense_service.update_expense(id, request).await {
        Ok(expense) => (StatusCode::OK, Json(expense)).into_response(),
        Err(e) => error_response(e),
    }
}

/// Axum handler function for DELETE /api/expenses/:id
pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /api/expenses/{}", id);

    match state.expense_service.delete_expense(id).await {
        Ok(()) => {
            let body = DeleteExpenseResponse {
                message: "Expense deleted".to_string(),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Convert a service failure into a status code plus `{error}` body.
/// Storage failures are logged and answered with a generic message.
fn error_response(err: ExpenseError) -> Response {
    let status = match &err {
        ExpenseError::InvalidAmount | ExpenseError::AmountNotPositive => StatusCode::BAD_REQUEST,
        ExpenseError::NotFound => StatusCode::NOT_FOUND,
        ExpenseError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!("Internal error while handling request: {:?}", err);
        "Internal server error".to_string()
    } else {
        err.to_string()
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}
