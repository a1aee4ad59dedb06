pub mod content;
pub mod nav;
pub mod reveal;

#[cfg(feature = "web")]
mod dom;

#[cfg(feature = "web")]
pub mod app;
#[cfg(feature = "web")]
pub mod components;
#[cfg(feature = "web")]
pub mod pages;
#[cfg(feature = "web")]
pub mod routes;

#[cfg(feature = "web")]
pub use crate::app::App;

#[cfg(feature = "web")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    use leptos::mount::mount_to_body;
    use leptos::view;

    console_error_panic_hook::set_once();
    mount_to_body(|| view! { <App/> });
}
