use leptos::prelude::*;
use techblog::{App, config};

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    log::info!("techblog starting (api base: {:?})", config::api_base());
    mount_to_body(App);
}
