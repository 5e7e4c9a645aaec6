use yew::prelude::*;
use super::hero::Hero;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="min-h-screen bg-gradient-to-b from-blue-50 to-white">
            <Hero title={props.title.clone()} subtitle={props.subtitle.clone()} />
            <main class="max-w-4xl mx-auto px-4 py-12">
                { for props.children.iter() }
            </main>
        </div>
    }
}
