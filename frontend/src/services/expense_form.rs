use shared::{CreateExpenseRequest, Expense, UpdateExpenseRequest};

/// Category applied when the user leaves the field empty
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// The two states of the form. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// The request a form submission resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    Create(CreateExpenseRequest),
    Update(i64, UpdateExpenseRequest),
}

/// Transient state of the expense form. A bound `expense_id` means edit
/// mode; no identifier means create mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseForm {
    pub expense_id: Option<i64>,
    pub amount: String,
    pub date: String,
    pub note: String,
    pub category: String,
}

impl ExpenseForm {
    /// Populate the form from an existing record, switching to edit mode
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            expense_id: Some(expense.id),
            amount: expense.amount.to_string(),
            date: expense.date.clone(),
            note: expense.note.clone(),
            category: expense.category.clone(),
        }
    }

    pub fn mode(&self) -> FormMode {
        match self.expense_id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.expense_id.is_some()
    }

    /// Resolve the submission this form issues: an update addressed by
    /// the bound identifier, or a create when none is bound. An empty
    /// category is replaced with the default before the payload is built.
    pub fn submit_action(&self) -> SubmitAction {
        let category = self.resolved_category();

        match self.expense_id {
            Some(id) => SubmitAction::Update(
                id,
                UpdateExpenseRequest {
                    amount: Some(self.amount.clone()),
                    date: Some(self.date.clone()),
                    note: Some(self.note.clone()),
                    category: Some(category),
                },
            ),
            None => SubmitAction::Create(CreateExpenseRequest {
                amount: self.amount.clone(),
                date: self.date.clone(),
                note: self.note.clone(),
                category,
            }),
        }
    }

    fn resolved_category(&self) -> String {
        if self.category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            self.category.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled_form() -> ExpenseForm {
        ExpenseForm {
            expense_id: None,
            amount: "12.50".to_string(),
            date: "2024-01-01".to_string(),
            note: "coffee".to_string(),
            category: String::new(),
        }
    }

    #[test]
    fn test_new_form_is_in_create_mode() {
        let form = ExpenseForm::default();
        assert_eq!(form.mode(), FormMode::Create);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_submit_without_identifier_is_a_create() {
        let action = filled_form().submit_action();

        let request = match action {
            SubmitAction::Create(request) => request,
            SubmitAction::Update(..) => panic!("Expected a create"),
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "amount": "12.50",
                "date": "2024-01-01",
                "note": "coffee",
                "category": "Uncategorized",
            })
        );
    }

    #[test]
    fn test_submit_with_identifier_is_an_update() {
        let mut form = filled_form();
        form.expense_id = Some(7);
        form.category = "Food".to_string();

        match form.submit_action() {
            SubmitAction::Update(id, request) => {
                assert_eq!(id, 7);
                assert_eq!(request.amount.as_deref(), Some("12.50"));
                assert_eq!(request.category.as_deref(), Some("Food"));
            }
            SubmitAction::Create(_) => panic!("Expected an update"),
        }
    }

    #[test]
    fn test_empty_category_defaults_in_both_modes() {
        let mut form = filled_form();
        form.expense_id = Some(3);

        match form.submit_action() {
            SubmitAction::Update(_, request) => {
                assert_eq!(request.category.as_deref(), Some(DEFAULT_CATEGORY));
            }
            SubmitAction::Create(_) => panic!("Expected an update"),
        }
    }

    #[test]
    fn test_non_empty_category_is_preserved() {
        let mut form = filled_form();
        form.category = "Travel".to_string();

        match form.submit_action() {
            SubmitAction::Create(request) => assert_eq!(request.category, "Travel"),
            SubmitAction::Update(..) => panic!("Expected a create"),
        }
    }

    #[test]
    fn test_from_expense_binds_identifier_and_fields() {
        let expense = Expense {
            id: 4,
            amount: 12.5,
            date: "2024-01-01".to_string(),
            category: "Food".to_string(),
            note: "coffee".to_string(),
        };

        let form = ExpenseForm::from_expense(&expense);

        assert_eq!(form.mode(), FormMode::Edit(4));
        assert_eq!(form.amount, "12.5");
        assert_eq!(form.date, "2024-01-01");
        assert_eq!(form.category, "Food");
        assert_eq!(form.note, "coffee");
    }

    #[test]
    fn test_clearing_returns_to_create_mode() {
        let expense = Expense {
            id: 4,
            amount: 12.5,
            date: "2024-01-01".to_string(),
            category: "Food".to_string(),
            note: "coffee".to_string(),
        };

        let mut form = ExpenseForm::from_expense(&expense);
        assert!(form.is_editing());

        form = ExpenseForm::default();
        assert_eq!(form.mode(), FormMode::Create);
        assert!(form.amount.is_empty());
    }
}
