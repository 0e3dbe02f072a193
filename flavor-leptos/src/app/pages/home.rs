use leptos::*;

use crate::app::components::layout::GuildLayout;
use crate::app::utils::ExternalUrl;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <GuildLayout
            title=String::from("Flavor")
            description=Some(String::from("The Treasure guild serving up the spice."))
            image_url="/flavorLogos/flavor.svg"
            image_bg="#1c1208"
            text_color="#FFF3BF"
            background="#1c1208"
            background_image="/flavorLogos/embers.svg"
        >
            <div class="flex flex-col gap-4 items-center text-center text-[1.1rem] text-flavor-cream">
                <p>"Cooking with $MAGIC since day one."</p>
                <a
                    target="_blank"
                    rel="noopener"
                    href=ExternalUrl::url_discord()
                    class="font-press-start text-[0.9rem] border-b-[0.25rem] border-flavor-cream"
                >
                    "Say hi in the kitchen"
                </a>
            </div>
        </GuildLayout>
    }
}
