use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{ExpenseFormView, ExpenseTable, MessageBanner};
use hooks::use_expenses::use_expenses;
use services::api::ApiClient;

#[function_component(App)]
fn app() -> Html {
    let api_client = ApiClient::new();
    let expenses = use_expenses(&api_client);

    // Initial load of the expense list
    {
        let refresh = expenses.actions.refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let state = expenses.state;
    let actions = expenses.actions;

    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Expense Tracker"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <MessageBanner message={state.message.clone()} />

                    <ExpenseFormView
                        amount={state.form.amount.clone()}
                        date={state.form.date.clone()}
                        note={state.form.note.clone()}
                        category={state.form.category.clone()}
                        editing={state.form.is_editing()}
                        on_amount_change={actions.on_amount_change.clone()}
                        on_date_change={actions.on_date_change.clone()}
                        on_note_change={actions.on_note_change.clone()}
                        on_category_change={actions.on_category_change.clone()}
                        on_submit={actions.submit.clone()}
                        on_cancel={actions.cancel_edit.clone()}
                    />

                    <ExpenseTable
                        expenses={state.expenses.clone()}
                        loading={state.loading}
                        on_edit={actions.prepare_update.clone()}
                        on_delete={actions.delete.clone()}
                    />
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
