// Binary target Trunk loads from index.html. On wasm32 with `web` enabled,
// `wasm_start` mounts the widget as soon as the module is instantiated.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    html_drop_web::start();
}
