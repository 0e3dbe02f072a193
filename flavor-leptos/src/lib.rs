pub mod app;
pub mod logger;

use app::App;
use cfg_if::cfg_if;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    logger::simple_logger_init();

    cfg_if! {
        if #[cfg(feature = "csr")] {
            leptos::mount_to_body(App);
        } else {
            tracing::error!("flavor-leptos was built without the csr feature, nothing to mount");
        }
    }
}
