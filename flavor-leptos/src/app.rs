use leptos::*;
use leptos_meta::*;

use pages::home::HomePage;

pub mod components;
pub mod hooks;
pub mod pages;
pub mod utils;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <Meta name="keywords" content="flavor,treasure,magic,bridgeworld,guild,discord,community"/>
        <Meta name="twitter:card" content="summary_large_image"/>
        <Stylesheet id="leptos" href="/pkg/flavor.css"/>
        <Body class="bg-black text-flavor-cream"/>
        <HomePage/>
    }
}
