use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: String,
}

/// Inline error panel shown below the form after a failed prediction
#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="alert alert-error mt-6 p-6 bg-red-50 border border-red-200 rounded-xl" role="alert">
            <i class="fas fa-exclamation-circle text-red-600"></i>
            <p class="text-red-600 text-center w-full">{&props.message}</p>
        </div>
    }
}
