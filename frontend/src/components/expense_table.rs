use shared::Expense;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseTableProps {
    pub expenses: Vec<Expense>,
    pub loading: bool,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

/// Format an amount for display, e.g. `$12.50`
fn format_amount(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[function_component(ExpenseTable)]
pub fn expense_table(props: &ExpenseTableProps) -> Html {
    html! {
        <section class="expenses-section">
            <h2>{"Expenses"}</h2>

            {if props.loading {
                html! { <div class="loading">{"Loading expenses..."}</div> }
            } else {
                html! {
                    <div class="table-container">
                        <table class="expenses-table">
                            <thead>
                                <tr>
                                    <th>{"Date"}</th>
                                    <th>{"Amount"}</th>
                                    <th>{"Category"}</th>
                                    <th>{"Note"}</th>
                                    <th>{"Actions"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if props.expenses.is_empty() {
                                    html! {
                                        <tr class="empty-row">
                                            <td colspan="5">{"No expenses recorded yet."}</td>
                                        </tr>
                                    }
                                } else {
                                    props.expenses.iter().map(|expense| {
                                        let on_edit = {
                                            let on_edit = props.on_edit.clone();
                                            let id = expense.id;
                                            Callback::from(move |_: MouseEvent| on_edit.emit(id))
                                        };
                                        let on_delete = {
                                            let on_delete = props.on_delete.clone();
                                            let id = expense.id;
                                            Callback::from(move |_: MouseEvent| on_delete.emit(id))
                                        };

                                        html! {
                                            <tr key={expense.id}>
                                                <td class="date">{&expense.date}</td>
                                                <td class="amount">{format_amount(expense.amount)}</td>
                                                <td class="category">{&expense.category}</td>
                                                <td class="note">{&expense.note}</td>
                                                <td class="actions">
                                                    <button class="update-btn" onclick={on_edit}>{"Update"}</button>
                                                    <button class="delete-btn" onclick={on_delete}>{"Delete"}</button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect::<Html>()
                                }}
                            </tbody>
                        </table>
                    </div>
                }
            }}
        </section>
    }
}
