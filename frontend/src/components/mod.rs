pub mod expense_form;
pub mod expense_table;
pub mod message_banner;

pub use expense_form::ExpenseFormView;
pub use expense_table::ExpenseTable;
pub use message_banner::MessageBanner;
