use std::rc::Rc;

use flavor_state::misc::bg_height::{ActionId, Backdrop, BgHeight, BgHeightState, LayoutDeps};
use flavor_state::misc::viewport_size::ViewportSizeClass;
use leptos::html::Div;
use leptos::*;
use tracing::debug;

pub fn action_id(action: &ChildrenFn) -> ActionId {
    Rc::as_ptr(action) as *const () as usize
}

/// Measures `container` after each render that changed title, description or action
/// and returns the height of the decorative background.
///
/// Leptos queues effects as a microtask after the DOM is updated, so the measurement
/// lands before the browser paints. The size class is read untracked.
pub fn use_bg_height(
    container: NodeRef<Div>,
    title: Signal<String>,
    description: Signal<Option<String>>,
    action: Signal<Option<ChildrenFn>>,
    backdrop: Backdrop,
    size_class: Memo<ViewportSizeClass>,
) -> ReadSignal<BgHeight> {
    let (height, set_height) = create_signal(BgHeight::default());
    let state = store_value(BgHeightState::new());

    create_effect(move |_| {
        let deps = LayoutDeps {
            title: title.get(),
            description: description.get(),
            action: action.with(|action| action.as_ref().map(action_id)),
        };
        let container_top = container
            .get()
            .map(|container| container.get_bounding_client_rect().top());
        let size_class = size_class.get_untracked();

        let new_height = state
            .try_update_value(|state| {
                state
                    .on_layout(deps, &backdrop, container_top, size_class)
                    .cloned()
            })
            .flatten();

        if let Some(new_height) = new_height {
            debug!("bg height: {}", new_height);
            set_height.set(new_height);
        }
    });

    height
}
