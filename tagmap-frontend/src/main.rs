pub fn main() {
    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    tagmap_frontend::run();
}
