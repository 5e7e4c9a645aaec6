use common::FormField;
use yew::prelude::*;

use super::fields::{CountrySelect, GenderSelect, NumberField};
use super::model_selector::ModelSelector;
use super::result_panel::ResultPanel;
use crate::common::error::ErrorPanel;
use crate::hooks::{PredictionHandle, use_prediction_session};

/// The prediction form with its result and error panels
#[function_component(PredictionView)]
pub fn prediction_view() -> Html {
    let PredictionHandle {
        session,
        on_field,
        on_submit,
    } = use_prediction_session();

    let state = &session.0;
    let form = state.form();
    let is_pending = state.is_pending();

    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
    });

    let number_field = |field: FormField| {
        html! {
            <NumberField
                {field}
                value={form.value(field).to_string()}
                on_change={on_field.clone()}
            />
        }
    };

    html! {
        <>
            <form {onsubmit} class="bg-white shadow-xl rounded-2xl p-8 backdrop-blur-lg bg-opacity-90">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    <div class="space-y-6">
                        {number_field(FormField::Year)}
                        <CountrySelect
                            countries={state.countries().clone()}
                            value={form.country.clone()}
                            on_change={on_field.clone()}
                        />
                        <GenderSelect value={form.gender} on_change={on_field.clone()} />
                        {number_field(FormField::TuberculosisTreatment)}
                    </div>

                    <div class="space-y-6">
                        {number_field(FormField::HospitalBeds)}
                        {number_field(FormField::UrbanPopulation)}
                        {number_field(FormField::RuralPopulation)}
                        {number_field(FormField::Gdp)}
                    </div>
                </div>

                <ModelSelector selected={form.model} on_change={on_field.clone()} />

                <div class="mt-8">
                    <button
                        type="submit"
                        class="btn btn-primary w-full py-3 px-4 rounded-xl font-medium text-lg disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled={is_pending}
                    >
                        {if is_pending {
                            html! { <><span class="loading loading-spinner loading-sm"></span>{" Calculating Prediction..."}</> }
                        } else {
                            html! { "Predict Life Expectancy" }
                        }}
                    </button>
                </div>
            </form>

            {if let Some(message) = state.error_panel() {
                html! { <ErrorPanel message={message.to_string()} /> }
            } else if let Some(value) = state.result_panel() {
                html! { <ResultPanel {value} /> }
            } else {
                html! {}
            }}
        </>
    }
}
