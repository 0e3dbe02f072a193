use leptos::*;

/// Round guild logo.
///
/// Bundled guild icons (`/guildLogos/...`) are drawn at `icon_size` inside the circle,
/// uploaded images fill it.
#[component]
pub fn GuildLogo(
    #[prop(into)] image_url: String,
    #[prop(into)] size: MaybeSignal<u32>,
    #[prop(into)] icon_size: MaybeSignal<u32>,
    #[prop(optional_no_strip)] bg_color: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] priority: bool,
) -> impl IntoView {
    let size = Signal::derive(move || size.get());
    let icon_size = Signal::derive(move || icon_size.get());
    let is_icon = image_url.starts_with("/guildLogos/");
    let bg_color = bg_color.unwrap_or_else(|| String::from("#27272a"));
    let loading = if priority { "eager" } else { "lazy" };

    let img_size = move || {
        if is_icon {
            format!("{}px", icon_size.get())
        } else {
            format!("{}px", size.get())
        }
    };

    view! {
        <div
            class=format!("relative shrink-0 grid place-items-center rounded-full overflow-hidden {class}")
            style:width=move || format!("{}px", size.get())
            style:height=move || format!("{}px", size.get())
            style:background-color=bg_color
        >
            <img
                src=image_url
                alt="Guild logo"
                loading=loading
                class=if is_icon { "" } else { "object-cover" }
                style:width=img_size
                style:height=img_size
            />
        </div>
    }
}
