use chapterly_site::{config, App};

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("starting {} site", config::BRAND);
    yew::Renderer::<App>::new().render();
}
