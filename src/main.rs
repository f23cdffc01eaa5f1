mod components;
mod model;
mod settings;
mod state;
mod stats;
mod storage;
mod typing;
mod util;
mod wave;
mod words;

use components::app::App;

fn main() {
    util::init_logging(log::LevelFilter::Info);
    log::info!("Type Strike starting");
    yew::Renderer::<App>::new().render();
}
