use common::{FormField, PredictionModel};
use yew::prelude::*;

fn model_icon(model: PredictionModel) -> &'static str {
    match model {
        PredictionModel::Linear => "fas fa-chart-line",
        PredictionModel::Gradient => "fas fa-wave-square",
        PredictionModel::RandomForest => "fas fa-brain",
        PredictionModel::Ensemble => "fas fa-code-merge",
    }
}

#[derive(Properties, PartialEq)]
pub struct ModelSelectorProps {
    pub selected: PredictionModel,
    pub on_change: Callback<(FormField, String)>,
}

/// Grid of radio cards, one per prediction model
#[function_component(ModelSelector)]
pub fn model_selector(props: &ModelSelectorProps) -> Html {
    html! {
        <div class="mt-8">
            <label class="block text-sm font-semibold text-gray-700 mb-4">{FormField::Model.label()}</label>
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                { for PredictionModel::ALL.into_iter().map(|model| {
                    let checked = model == props.selected;
                    let onchange = {
                        let on_change = props.on_change.clone();
                        Callback::from(move |_: Event| {
                            on_change.emit((FormField::Model, model.id().to_string()));
                        })
                    };

                    html! {
                        <label
                            key={model.id().to_string()}
                            class={classes!(
                                "flex", "flex-col", "items-center", "p-4", "border", "rounded-xl",
                                "cursor-pointer", "transition-all", "hover:shadow-md",
                                if checked {
                                    "border-blue-500 bg-blue-50 shadow-inner"
                                } else {
                                    "border-gray-200 hover:border-blue-200"
                                }
                            )}
                        >
                            <input
                                type="radio"
                                name={FormField::Model.name()}
                                value={model.id()}
                                {checked}
                                {onchange}
                                class="sr-only"
                            />
                            <i class={classes!(
                                model_icon(model), "text-3xl", "mb-3",
                                if checked { "text-blue-500" } else { "text-gray-400" }
                            )}></i>
                            <span class={classes!(
                                "text-sm", "text-center",
                                if checked { "text-blue-700 font-medium" } else { "text-gray-600" }
                            )}>
                                {model.display_name()}
                            </span>
                        </label>
                    }
                }) }
            </div>
        </div>
    }
}
