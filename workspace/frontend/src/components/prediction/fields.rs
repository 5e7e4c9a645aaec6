use common::{CountryList, FormField, Gender};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const INPUT_CLASS: &str = "input input-bordered w-full focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all";
const SELECT_CLASS: &str = "select select-bordered w-full focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all";

#[derive(Properties, PartialEq)]
struct FieldLabelProps {
    field: FormField,
}

#[function_component(FieldLabel)]
fn field_label(props: &FieldLabelProps) -> Html {
    html! {
        <label class="label" for={props.field.name()}>
            <span class="label-text font-semibold text-gray-700">{props.field.label()}</span>
        </label>
    }
}

fn select_change(field: FormField, on_change: Callback<(FormField, String)>) -> Callback<Event> {
    Callback::from(move |e: Event| {
        if let Some(target) = e.target_dyn_into::<HtmlSelectElement>() {
            on_change.emit((field, target.value()));
        }
    })
}

#[derive(Properties, PartialEq)]
pub struct NumberFieldProps {
    pub field: FormField,
    pub value: String,
    pub on_change: Callback<(FormField, String)>,
}

/// Required numeric input; the browser enforces presence and number format
#[function_component(NumberField)]
pub fn number_field(props: &NumberFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div class="form-control">
            <FieldLabel field={props.field} />
            <input
                type="number"
                step="any"
                id={props.field.name()}
                name={props.field.name()}
                class={INPUT_CLASS}
                value={props.value.clone()}
                {oninput}
                required={true}
            />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CountrySelectProps {
    pub countries: CountryList,
    pub value: String,
    pub on_change: Callback<(FormField, String)>,
}

#[function_component(CountrySelect)]
pub fn country_select(props: &CountrySelectProps) -> Html {
    let onchange = select_change(FormField::Country, props.on_change.clone());

    html! {
        <div class="form-control">
            <FieldLabel field={FormField::Country} />
            <select
                id={FormField::Country.name()}
                name={FormField::Country.name()}
                class={SELECT_CLASS}
                {onchange}
                required={true}
            >
                { for props.countries.options().into_iter().map(|option| html! {
                    <option
                        key={option.value.to_string()}
                        value={option.value.to_string()}
                        selected={option.value == props.value}
                    >
                        {option.label.to_string()}
                    </option>
                }) }
            </select>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GenderSelectProps {
    pub value: Gender,
    pub on_change: Callback<(FormField, String)>,
}

#[function_component(GenderSelect)]
pub fn gender_select(props: &GenderSelectProps) -> Html {
    let onchange = select_change(FormField::Gender, props.on_change.clone());

    html! {
        <div class="form-control">
            <FieldLabel field={FormField::Gender} />
            <select
                id={FormField::Gender.name()}
                name={FormField::Gender.name()}
                class={SELECT_CLASS}
                {onchange}
                required={true}
            >
                { for Gender::ALL.iter().map(|gender| html! {
                    <option
                        key={gender.as_str().to_string()}
                        value={gender.as_str()}
                        selected={*gender == props.value}
                    >
                        {gender.as_str()}
                    </option>
                }) }
            </select>
        </div>
    }
}
