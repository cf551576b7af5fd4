use std::rc::Rc;

use frontend::config::load_prize_config;
use frontend::{App, AppProps};
use yew::Renderer;

fn main() {
    // Initialize the logger for WebAssembly
    wasm_logger::init(wasm_logger::Config::default());

    let config = match load_prize_config() {
        Ok(config) => Ok(Rc::new(config)),
        Err(e) => {
            log::error!("Failed to load prize configuration: {}", e);
            Err(e.to_string())
        }
    };

    Renderer::<App>::with_props(AppProps { config }).render();
}
