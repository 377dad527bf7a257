fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        dioxus_logger::init(log::LevelFilter::Info).expect("failed to init logger");
        console_error_panic_hook::set_once();

        log::info!("starting label kiosk");
        dioxus_web::launch(label_kiosk::App);
    }
}
