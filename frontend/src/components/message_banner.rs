use yew::prelude::*;

use crate::hooks::use_expenses::StatusMessage;

#[derive(Properties, PartialEq)]
pub struct MessageBannerProps {
    pub message: Option<StatusMessage>,
}

/// Dedicated status area. Renders nothing while no message is active;
/// the hook clears messages after their timeout.
#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    match props.message.as_ref() {
        Some(status) => html! {
            <div class={status.css_class()}>{&status.text}</div>
        },
        None => html! {},
    }
}
