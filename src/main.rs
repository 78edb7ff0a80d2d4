//! Policy Form UI Entry Point

use log::LevelFilter;
use policy_form_ui::app;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(LevelFilter::Info);

    app::run_when_ready(|document| {
        let config = app::load_config(&document);
        app::start(&document, &config);
    });
}
