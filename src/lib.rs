mod api;
mod app;
mod components;
mod config;
mod drafts;
mod logging;
mod models;
mod pages;
mod query;
mod state;
mod util;

use crate::app::App;
use crate::config::{AppConfig, EnvSource};
use leptos::prelude::*;
use tracing::{error, info};

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

/// Read configuration, install logging and resolve the settings the app runs with.
fn bootstrap() -> Result<AppConfig, api::NoteError> {
    let source = EnvSource::detect();
    logging::init(source.log_level());

    match AppConfig::resolve(source) {
        Ok(config) => {
            info!(api_url = %config.api_url, per_page = config.per_page, log_level = %config.log_level, "NoteHub client starting");
            Ok(config)
        }
        Err(e) => {
            error!(error = %e, "configuration is incomplete");
            Err(e)
        }
    }
}


// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    let config = bootstrap();
    mount_to_body(move || view! { <App config=config /> });
}
