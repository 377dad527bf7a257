use std::{cell::RefCell, time::Duration};

use futures::channel::mpsc;
use gloo_timers::callback::Interval;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlVideoElement, OffscreenCanvas, OffscreenCanvasRenderingContext2d};

use super::dom;
use crate::{
    camera::{BarcodeDecoder, DecodeEvent},
    error::DecoderError,
    utils::millis,
};

type Frame = image::ImageBuffer<image::Rgba<u8>, Vec<u8>>;

/// Keeps one canvas around and only rebuilds it when the video size changes.
#[derive(Default)]
struct FrameGrabber {
    canvas: Option<(OffscreenCanvas, OffscreenCanvasRenderingContext2d)>,
}

impl FrameGrabber {
    fn context(
        &mut self,
        width: u32,
        height: u32,
    ) -> Result<&OffscreenCanvasRenderingContext2d, JsValue> {
        let reusable = matches!(
            &self.canvas,
            Some((canvas, _)) if canvas.width() == width && canvas.height() == height
        );
        if !reusable {
            let canvas = OffscreenCanvas::new(width, height)?;
            let ctx = canvas
                .get_context("2d")?
                .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
                .dyn_into::<OffscreenCanvasRenderingContext2d>()
                .map_err(JsValue::from)?;
            self.canvas = Some((canvas, ctx));
        }
        match &self.canvas {
            Some((_, ctx)) => Ok(ctx),
            None => Err(JsValue::from_str("canvas missing")),
        }
    }

    fn grab(&mut self, video: &HtmlVideoElement) -> Result<Option<Frame>, JsValue> {
        let (width, height) = (video.video_width(), video.video_height());
        // no frame yet
        if width == 0 || height == 0 {
            return Ok(None);
        }

        let ctx = self.context(width, height)?;
        ctx.draw_image_with_html_video_element_and_dw_and_dh(
            video,
            0.0,
            0.0,
            width as _,
            height as _,
        )?;
        let data = ctx.get_image_data(0.0, 0.0, width as _, height as _)?;

        Ok(Frame::from_raw(width, height, data.data().0))
    }

    fn scan(&mut self, video: &HtmlVideoElement) -> DecodeEvent {
        match self.grab(video) {
            Ok(Some(frame)) => decode_frame(frame),
            Ok(None) => DecodeEvent::NoMatchThisFrame,
            Err(err) => DecodeEvent::Error(format!("{err:?}")),
        }
    }
}

fn decode_frame(frame: Frame) -> DecodeEvent {
    use rxing::common::HybridBinarizer;
    use rxing::{BinaryBitmap, BufferedImageLuminanceSource, Exceptions, MultiFormatReader, Reader};

    let mut image = BinaryBitmap::new(HybridBinarizer::new(BufferedImageLuminanceSource::new(
        image::DynamicImage::from(frame),
    )));

    let mut reader = MultiFormatReader::default();

    match reader.decode(&mut image) {
        Ok(result) => DecodeEvent::Decoded(result.getText().to_owned()),
        Err(Exceptions::NotFoundException(_)) => DecodeEvent::NoMatchThisFrame,
        Err(err) => DecodeEvent::Error(err.to_string()),
    }
}

/// Samples the video on a fixed interval and decodes each frame with rxing.
pub struct RxingDecoder {
    interval: Duration,
    ticker: RefCell<Option<Interval>>,
}

impl RxingDecoder {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            ticker: RefCell::new(None),
        }
    }
}

impl BarcodeDecoder for RxingDecoder {
    type Events = mpsc::UnboundedReceiver<DecodeEvent>;

    fn start(&self, video_id: &str) -> Result<Self::Events, DecoderError> {
        let video = dom::video_element(video_id)
            .ok_or_else(|| DecoderError::MissingVideo(video_id.to_owned()))?;

        let (events, rx) = mpsc::unbounded();
        let mut grabber = FrameGrabber::default();
        let ticker = Interval::new(millis(self.interval), move || {
            // receiver gone means nobody is scanning anymore
            let _ = events.unbounded_send(grabber.scan(&video));
        });

        if self.ticker.replace(Some(ticker)).is_some() {
            log::warn!("decoder restarted while running");
        }
        Ok(rx)
    }

    fn stop(&self) {
        // dropping the interval closes the event channel
        self.ticker.replace(None);
    }
}
