use leptos::*;

use crate::app::utils::ExternalUrl;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full px-4 sm:px-6 md:px-8 lg:px-10 py-8 flex flex-col md:flex-row gap-4 items-center justify-between text-[0.8rem] text-flavor-cream/70">
            <p>"Flavor, a Treasure guild"</p>
            <div class="flex gap-6">
                <a target="_blank" rel="noopener" href=ExternalUrl::url_discord()>"Discord"</a>
                <a target="_blank" rel="noopener" href=ExternalUrl::url_stake()>"Stake with us"</a>
            </div>
        </footer>
    }
}
