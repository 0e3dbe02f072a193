use flavor_state::misc::viewport_size::{LogoSize, ViewportSizeClass};
use leptos::*;
use leptos_use::{use_event_listener, use_window};
use tracing::trace;

#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub width: ReadSignal<f64>,
    pub size_class: Memo<ViewportSizeClass>,
    pub logo_size: Memo<LogoSize>,
}

impl Viewport {
    pub fn is_narrow(&self) -> Signal<bool> {
        let size_class = self.size_class;
        Signal::derive(move || size_class.get().is_narrow())
    }
}

/// Tracks `window.innerWidth` and the size class derived from it.
pub fn use_viewport() -> Viewport {
    let (width, set_width) = create_signal(window_width());

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        set_width.set(window_width());
    });

    let size_class = create_memo(move |_| {
        let size_class = ViewportSizeClass::from_width(width.get());
        trace!("viewport: {} -> {:?}", width.get_untracked(), size_class);
        size_class
    });
    let logo_size = create_memo(move |_| size_class.get().logo_size());

    Viewport {
        width,
        size_class,
        logo_size,
    }
}

fn window_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or_default()
}
