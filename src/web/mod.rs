//! Browser implementations of the [`Platform`] seams.

mod camera;
mod decoder;
pub mod dom;

use std::time::Duration;

use gloo_timers::callback::Timeout;

pub use camera::WebCamera;
pub use decoder::RxingDecoder;

use crate::{
    api::HttpApi,
    config::{ids, KioskConfig},
    platform::Platform,
};

pub struct WebPlatform {
    api: HttpApi,
    camera: WebCamera,
    decoder: RxingDecoder,
}

impl WebPlatform {
    pub fn new(config: &KioskConfig) -> Self {
        Self {
            api: HttpApi::new(config.clone()),
            camera: WebCamera::new(ids::VIDEO),
            decoder: RxingDecoder::new(config.scan_interval),
        }
    }
}

impl Platform for WebPlatform {
    type Api = HttpApi;
    type Camera = WebCamera;
    type Decoder = RxingDecoder;

    fn api(&self) -> &HttpApi {
        &self.api
    }

    fn camera(&self) -> &WebCamera {
        &self.camera
    }

    fn decoder(&self) -> &RxingDecoder {
        &self.decoder
    }

    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    fn focus_input(&self) {
        dom::focus(ids::INPUT);
    }

    fn reveal_results(&self) {
        // the cards only exist after the next render
        Timeout::new(0, || dom::scroll_into_view(ids::INFO_CARD)).forget();
    }

    fn print_preview(&self) {
        dom::print_frame(ids::PDF_VIEWER);
    }
}
