use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExpenseFormViewProps {
    // Form state
    pub amount: String,
    pub date: String,
    pub note: String,
    pub category: String,
    pub editing: bool,

    // Event handlers
    pub on_amount_change: Callback<Event>,
    pub on_date_change: Callback<Event>,
    pub on_note_change: Callback<Event>,
    pub on_category_change: Callback<Event>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(ExpenseFormView)]
pub fn expense_form_view(props: &ExpenseFormViewProps) -> Html {
    html! {
        <section class="expense-form-section">
            <h2>{"Record an Expense"}</h2>

            <form class="expense-form" onsubmit={
                let on_submit = props.on_submit.clone();
                Callback::from(move |e: SubmitEvent| {
                    e.prevent_default();
                    on_submit.emit(());
                })
            }>
                <div class="form-group">
                    <label for="amount">{"Amount"}</label>
                    <input
                        type="number"
                        id="amount"
                        placeholder="12.50"
                        step="0.01"
                        min="0.01"
                        value={props.amount.clone()}
                        onchange={props.on_amount_change.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="date">{"Date"}</label>
                    <input
                        type="date"
                        id="date"
                        value={props.date.clone()}
                        onchange={props.on_date_change.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="category">{"Category"}</label>
                    <input
                        type="text"
                        id="category"
                        placeholder="Food, travel, bills..."
                        value={props.category.clone()}
                        onchange={props.on_category_change.clone()}
                    />
                </div>

                <div class="form-group">
                    <label for="note">{"Note"}</label>
                    <input
                        type="text"
                        id="note"
                        placeholder="What was this for?"
                        value={props.note.clone()}
                        onchange={props.on_note_change.clone()}
                    />
                </div>

                <button type="submit" class="btn btn-primary submit-btn">
                    {if props.editing { "Update Expense" } else { "Add Expense" }}
                </button>

                {if props.editing {
                    html! {
                        <button
                            type="button"
                            class="btn cancel-btn"
                            onclick={
                                let on_cancel = props.on_cancel.clone();
                                Callback::from(move |_: MouseEvent| on_cancel.emit(()))
                            }
                        >
                            {"Cancel"}
                        </button>
                    }
                } else { html! {} }}
            </form>
        </section>
    }
}
