use yew::prelude::*;

use crate::styles;

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub message: String,
    pub error: String,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    if !props.error.is_empty() {
        return html! {
            <div class="mt-6 text-center">
                <p class={styles::ALERT_ERROR}>{&props.error}</p>
            </div>
        };
    }

    if props.message.is_empty() {
        return html! {};
    }

    html! {
        <div class="mt-8 mb-4 flex flex-col items-center justify-center">
            <div class={classes!(styles::RESULT_BANNER, "animate-bounce")}>
                <span>{&props.message}</span>
            </div>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let (label, state_class) = if props.is_spinning {
        ("Spinning...", styles::SPIN_BUTTON_DISABLED)
    } else {
        ("Spin", styles::SPIN_BUTTON_ACTIVE)
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={props.is_spinning}
            class={classes!(styles::SPIN_BUTTON, state_class)}
        >
            {label}
        </button>
    }
}
