use flavor_state::misc::bg_height::Backdrop;
use flavor_state::misc::page_meta::{inline_description, MetaTag, PageMeta};
use leptos::html::Div;
use leptos::*;
use leptos_meta::*;

use crate::app::components::footer::Footer;
use crate::app::components::guild_logo::GuildLogo;
use crate::app::components::header::Header;
use crate::app::hooks::use_bg_height::use_bg_height;
use crate::app::hooks::use_viewport::use_viewport;
use crate::app::utils::ExternalUrl;

const PROMO: [&str; 3] = [
    "Flavor is the Treasure guild serving up the spice - join us to learn about $MAGIC and gaming NFTs, max out your $MAGIC yields, swap alpha, and much more...",
    "$MAGIC started off as writing on tile... just another project in the sea of Loot derivatives. Now, it's a thriving ecosystem of composable metaverses integrating NFT & DeFi elements, built on one of the leading Ethereum layer 2 chains, Arbitrum.",
    "Life moves quickly in Web3. Join our community and you'll be cooking in no time - with only the best recipes in Bridgeworld!",
];

/// Guild branding page: head metadata, header, centred title column, decorative media,
/// promotional copy and footer.
///
/// `title`, `description` and `action` are reactive; a change to any of them re-measures
/// the children container and resizes the decorative background.
#[component]
pub fn GuildLayout(
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(optional, into)] description: MaybeSignal<Option<String>>,
    #[prop(optional, into)] image_url: Option<String>,
    #[prop(optional, into)] image_bg: Option<String>,
    #[prop(optional)] show_layout_description: bool,
    #[prop(optional, into)] text_color: Option<String>,
    #[prop(optional, into)] action: MaybeSignal<Option<ChildrenFn>>,
    #[prop(optional, into)] background: Option<String>,
    #[prop(optional, into)] background_image: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let title = Signal::derive(move || title.get());
    let description = Signal::derive(move || description.get());
    let action = Signal::derive(move || action.get());
    let container = create_node_ref::<Div>();
    let viewport = use_viewport();
    let backdrop = Backdrop::new(background, background_image);

    let bg_height = use_bg_height(
        container,
        title,
        description,
        action,
        backdrop.clone(),
        viewport.size_class,
    );

    let meta = create_memo(move |_| {
        description.with(|description| title.with(|title| PageMeta::new(title, description.as_deref())))
    });

    let meta_tags = move || {
        meta.get()
            .tags
            .into_iter()
            .filter_map(|tag| match tag {
                MetaTag::Title(_) => None,
                MetaTag::Name { name, content } => Some(view! { <Meta name=name content=content/> }.into_view()),
                MetaTag::Property { property, content } => {
                    Some(view! { <Meta property=property content=content/> }.into_view())
                }
            })
            .collect_view()
    };

    let backdrop_view = backdrop.is_configured().then(|| {
        let background_image = backdrop.image.clone().map(|image| format!("url({image})"));
        view! {
            <div
                class="absolute top-0 left-0 w-full bg-cover bg-center bg-no-repeat"
                style:height=move || bg_height.get().to_string()
                style:background-color=backdrop.color.clone()
                style:background-image=background_image
            ></div>
        }
    });

    let logo_view = image_url.map(|image_url| {
        view! {
            <GuildLogo
                image_url=image_url
                size=Signal::derive(move || viewport.logo_size.get().size)
                icon_size=Signal::derive(move || viewport.logo_size.get().icon_size)
                bg_color=image_bg
                class="mt-1 lg:mt-2"
                priority=true
            />
        }
    });

    let description_view = move || {
        description.with(|description| {
            inline_description(show_layout_description, description.as_deref()).map(|description| {
                view! {
                    <p class="w-full font-semibold" style:color=text_color.clone()>
                        {description.to_string()}
                    </p>
                }
            })
        })
    };

    let action_view = move || action.get().map(|action| action());

    view! {
        <Title text=move || title.get()/>
        {meta_tags}
        <div class="relative z-10 w-full bg-black bg-cover flex flex-col justify-center overflow-x-hidden">
            {backdrop_view}
            <Header/>
            <div class="relative z-[1] mx-auto w-full max-w-[64rem] pt-6 md:pt-9 pb-24 px-4 sm:px-6 md:px-8 lg:px-10">
                <div class="flex flex-col items-center w-full gap-7 md:gap-10 pb-9 md:pb-14">
                    <div class="flex justify-center w-full gap-3">
                        <div class="flex flex-col items-center justify-center gap-4 lg:gap-5">
                            {logo_view}
                            <h1 class="mt-12 text-[40px] font-press-start font-bold text-flavor-cream break-words text-center">
                                {move || title.get()}
                            </h1>
                            <div class="flex flex-col md:flex-row items-center gap-4">
                                <FireBreathingFrame/>
                                <a target="_blank" rel="noopener" href=ExternalUrl::url_discord() class="hover:no-underline">
                                    <img alt="join discord" width="363" height="85" src="/assets/joinDiscord.png"/>
                                </a>
                            </div>
                        </div>
                        {action_view}
                    </div>
                    {description_view}
                </div>
                <div node_ref=container>{children.map(|children| children())}</div>
            </div>

            <img alt="fire" width="1800" height="500" src="/flavorLogos/fire.svg" class="-mt-80 w-full"/>
            <h2 class="text-[40px] font-press-start text-flavor-cream break-words text-center">
                "See What We Are About"
            </h2>
            <FireBreathingFrame/>
            <div class="flex justify-center">
                <div class="max-w-[940px] ml-4 text-[24px] font-press-start text-flavor-cream flex flex-col gap-8 pt-6">
                    {PROMO.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
                </div>
            </div>
            <div class="flex justify-center m-8">
                <a target="_blank" rel="noopener" href=ExternalUrl::url_stake() class="hover:no-underline">
                    <img alt="stake with us" width="337" height="68" src="/assets/stakeWithUs.png"/>
                </a>
            </div>
            <Footer/>
        </div>
    }
}

#[component]
fn FireBreathingFrame() -> impl IntoView {
    view! {
        <div class="w-[350px] mx-auto">
            <div class="relative w-full max-w-[350px] h-[343px] aspect-square">
                <iframe
                    title="fire-breathing-gif"
                    src=ExternalUrl::url_fire_embed()
                    class="absolute inset-0 w-full h-full"
                ></iframe>
            </div>
        </div>
    }
}
