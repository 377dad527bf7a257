use std::time::Duration;

use crate::{
    api::LabelApi,
    camera::{BarcodeDecoder, CameraDevice},
};

/// What the controller needs from the outside world.
#[allow(async_fn_in_trait)]
pub trait Platform {
    type Api: LabelApi;
    type Camera: CameraDevice;
    type Decoder: BarcodeDecoder;

    fn api(&self) -> &Self::Api;
    fn camera(&self) -> &Self::Camera;
    fn decoder(&self) -> &Self::Decoder;

    async fn sleep(&self, duration: Duration);

    fn focus_input(&self);

    /// Brings the freshly rendered result panels into view.
    fn reveal_results(&self);

    /// Opens the print dialog of the embedded document viewer.
    fn print_preview(&self);
}
