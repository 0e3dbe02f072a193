use leptos::*;

use crate::app::utils::ExternalUrl;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="relative z-10 w-full px-4 sm:px-6 md:px-8 lg:px-10 py-4 flex items-center justify-between">
            <a href="/" class="flex gap-3 items-center font-press-start text-flavor-cream text-[1rem]">
                <img class="h-8 w-8" src="/flavorLogos/flavor.svg" alt="flavor"/>
                "Flavor"
            </a>
            <a
                target="_blank"
                rel="noopener"
                href=ExternalUrl::url_discord()
                class="flex gap-2 items-center text-[0.9rem] font-bold hover:no-underline"
            >
                <img class="h-6" src="/assets/discord.svg" alt="discord"/>
                "Discord"
            </a>
        </header>
    }
}
