pub mod components;
#[cfg(target_family = "wasm")]
pub mod mount;
pub mod utils;

/// Entry point of the widget bundle. The static pages only carry mount
/// elements; everything interactive is attached here.
#[cfg(target_family = "wasm")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    mount::mount_all();
}
