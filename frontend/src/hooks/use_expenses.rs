use gloo::timers::future::TimeoutFuture;
use shared::Expense;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::expense_form::{ExpenseForm, SubmitAction};

/// How long a status message stays visible
const MESSAGE_TIMEOUT_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A status message shown in the dedicated message area, tagged for
/// styling and auto-hidden after a fixed timeout.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self.kind {
            MessageKind::Success => "message success",
            MessageKind::Error => "message error",
        }
    }
}

#[derive(Clone)]
pub struct ExpenseState {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub form: ExpenseForm,
    pub message: Option<StatusMessage>,
}

#[derive(Clone)]
pub struct ExpenseActions {
    pub refresh: Callback<()>,
    pub submit: Callback<()>,
    pub prepare_update: Callback<i64>,
    pub cancel_edit: Callback<()>,
    pub delete: Callback<i64>,
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_note_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
}

pub struct UseExpensesResult {
    pub state: ExpenseState,
    pub actions: ExpenseActions,
}

/// Set a status message and schedule its removal. Each message arms its
/// own timer, as the original message area did.
fn show_message(handle: &UseStateHandle<Option<StatusMessage>>, status: StatusMessage) {
    handle.set(Some(status));

    let clear = handle.clone();
    spawn_local(async move {
        TimeoutFuture::new(MESSAGE_TIMEOUT_MS).await;
        clear.set(None);
    });
}

/// Hook bundling the expense list, the form state machine, and the
/// actions that drive them against the backend.
///
/// The callbacks are rebuilt every render so they always read the
/// current field values.
#[hook]
pub fn use_expenses(api_client: &ApiClient) -> UseExpensesResult {
    let expenses = use_state(Vec::<Expense>::new);
    let loading = use_state(|| true);
    let message = use_state(|| None::<StatusMessage>);

    // Form fields; expense_id bound means edit mode
    let expense_id = use_state(|| None::<i64>);
    let amount = use_state(String::new);
    let date = use_state(String::new);
    let note = use_state(String::new);
    let category = use_state(String::new);

    // Re-fetch the full list from the backend
    let refresh = {
        let api_client = api_client.clone();
        let expenses = expenses.clone();
        let loading = loading.clone();
        let message = message.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let expenses = expenses.clone();
            let loading = loading.clone();
            let message = message.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.list_expenses().await {
                    Ok(data) => expenses.set(data),
                    Err(e) => show_message(&message, StatusMessage::error(e)),
                }

                loading.set(false);
            });
        })
    };

    // Submit the form: update when an identifier is bound, create
    // otherwise. Success resets the form to create mode and refreshes.
    let submit = {
        let api_client = api_client.clone();
        let expense_id = expense_id.clone();
        let amount = amount.clone();
        let date = date.clone();
        let note = note.clone();
        let category = category.clone();
        let message = message.clone();
        let refresh = refresh.clone();

        Callback::from(move |_| {
            let api_client = api_client.clone();
            let form = ExpenseForm {
                expense_id: *expense_id,
                amount: (*amount).clone(),
                date: (*date).clone(),
                note: (*note).clone(),
                category: (*category).clone(),
            };
            let expense_id = expense_id.clone();
            let amount = amount.clone();
            let date = date.clone();
            let note = note.clone();
            let category = category.clone();
            let message = message.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                let result = match form.submit_action() {
                    SubmitAction::Create(request) => api_client.create_expense(request).await,
                    SubmitAction::Update(id, request) => {
                        api_client.update_expense(id, request).await
                    }
                };

                match result {
                    Ok(_expense) => {
                        expense_id.set(None);
                        amount.set(String::new());
                        date.set(String::new());
                        note.set(String::new());
                        category.set(String::new());
                        refresh.emit(());
                        show_message(&message, StatusMessage::success("Expense saved successfully!"));
                    }
                    Err(error_message) => {
                        show_message(&message, StatusMessage::error(error_message));
                    }
                }
            });
        })
    };

    // Re-fetch the list, locate the record, and load it into the form
    let prepare_update = {
        let api_client = api_client.clone();
        let expense_id = expense_id.clone();
        let amount = amount.clone();
        let date = date.clone();
        let note = note.clone();
        let category = category.clone();

        Callback::from(move |target_id: i64| {
            let api_client = api_client.clone();
            let expense_id = expense_id.clone();
            let amount = amount.clone();
            let date = date.clone();
            let note = note.clone();
            let category = category.clone();

            spawn_local(async move {
                match api_client.list_expenses().await {
                    Ok(expenses) => {
                        if let Some(expense) = expenses.iter().find(|e| e.id == target_id) {
                            let form = ExpenseForm::from_expense(expense);
                            expense_id.set(form.expense_id);
                            amount.set(form.amount);
                            date.set(form.date);
                            note.set(form.note);
                            category.set(form.category);
                        }
                    }
                    Err(e) => {
                        gloo::console::error!("Failed to load expense for editing:", e);
                    }
                }
            });
        })
    };

    // Drop the identifier binding and clear the fields
    let cancel_edit = {
        let expense_id = expense_id.clone();
        let amount = amount.clone();
        let date = date.clone();
        let note = note.clone();
        let category = category.clone();

        Callback::from(move |_| {
            expense_id.set(None);
            amount.set(String::new());
            date.set(String::new());
            note.set(String::new());
            category.set(String::new());
        })
    };

    // Delete after a blocking confirmation; no confirmation, no request
    let delete = {
        let api_client = api_client.clone();
        let message = message.clone();
        let refresh = refresh.clone();

        Callback::from(move |target_id: i64| {
            if !gloo::dialogs::confirm("Are you sure you want to delete this expense?") {
                return;
            }

            let api_client = api_client.clone();
            let message = message.clone();
            let refresh = refresh.clone();

            spawn_local(async move {
                match api_client.delete_expense(target_id).await {
                    Ok(()) => {
                        refresh.emit(());
                        show_message(
                            &message,
                            StatusMessage::success("Expense deleted successfully!"),
                        );
                    }
                    Err(error_message) => {
                        show_message(&message, StatusMessage::error(error_message));
                    }
                }
            });
        })
    };

    // Form input handlers
    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_date_change = {
        let date = date.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            date.set(input.value());
        })
    };

    let on_note_change = {
        let note = note.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            note.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            category.set(input.value());
        })
    };

    let state = ExpenseState {
        expenses: (*expenses).clone(),
        loading: *loading,
        form: ExpenseForm {
            expense_id: *expense_id,
            amount: (*amount).clone(),
            date: (*date).clone(),
            note: (*note).clone(),
            category: (*category).clone(),
        },
        message: (*message).clone(),
    };

    let actions = ExpenseActions {
        refresh,
        submit,
        prepare_update,
        cancel_edit,
        delete,
        on_amount_change,
        on_date_change,
        on_note_change,
        on_category_change,
    };

    UseExpensesResult { state, actions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_css_classes() {
        assert_eq!(StatusMessage::success("saved").css_class(), "message success");
        assert_eq!(StatusMessage::error("broken").css_class(), "message error");
    }

    #[test]
    fn test_message_constructors_keep_text() {
        let status = StatusMessage::error("Expense not found");
        assert_eq!(status.text, "Expense not found");
        assert_eq!(status.kind, MessageKind::Error);
    }
}
