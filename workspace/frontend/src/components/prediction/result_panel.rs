use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    /// Formatted prediction, e.g. "72.35 years"
    pub value: String,
}

#[function_component(ResultPanel)]
pub fn result_panel(props: &ResultPanelProps) -> Html {
    html! {
        <div class="mt-6 p-8 bg-gradient-to-r from-green-50 to-emerald-50 border border-green-200 rounded-xl text-center">
            <h3 class="text-xl font-semibold text-green-800 mb-3">{"Prediction Result"}</h3>
            <p class="text-4xl font-bold text-green-600">{&props.value}</p>
            <p class="mt-2 text-green-600 opacity-75">{"Estimated Life Expectancy"}</p>
        </div>
    }
}
