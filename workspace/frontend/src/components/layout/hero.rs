use yew::prelude::*;

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1576091160550-2173dba999ef?auto=format&fit=crop&w=2070&q=80";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub title: String,
    #[prop_or_default]
    pub subtitle: Option<String>,
}

/// Full-width banner with the page title over a darkened background image
#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let style = format!(
        "background-image: url(\"{}\"); background-blend-mode: overlay; background-color: rgba(0, 0, 0, 0.5);",
        HERO_IMAGE
    );

    html! {
        <div class="relative bg-cover bg-center h-[400px]" {style}>
            <div class="absolute inset-0 bg-gradient-to-b from-transparent to-blue-50"></div>
            <div class="absolute inset-0 flex flex-col items-center justify-center text-white p-4">
                <i class="fas fa-heart-pulse text-6xl mb-6 text-blue-400"></i>
                <h1 class="text-4xl md:text-5xl font-bold text-center mb-4">{&props.title}</h1>
                {if let Some(subtitle) = &props.subtitle {
                    html! {
                        <p class="text-xl md:text-2xl text-center max-w-2xl text-blue-100">{subtitle}</p>
                    }
                } else {
                    html! {}
                }}
            </div>
        </div>
    }
}
