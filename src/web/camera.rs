use wasm_bindgen::prelude::*;
use web_sys::{MediaStream, MediaStreamConstraints, MediaStreamTrack, MediaTrackConstraints};

use super::dom;
use crate::{
    camera::{CameraDevice, Facing},
    error::CameraError,
};

fn camera_error(value: JsValue) -> CameraError {
    let reason = match value.dyn_ref::<web_sys::DomException>() {
        Some(e) => format!("{}: {}", e.name(), e.message()),
        None => format!("{value:?}"),
    };
    CameraError::Unavailable(reason)
}

async fn get_stream(facing: Facing) -> Result<MediaStream, CameraError> {
    let window = web_sys::window().ok_or(CameraError::Unsupported)?;
    let navigator = window.navigator();

    // insecure origins have no `navigator.mediaDevices` at all
    if !js_sys::Reflect::has(&navigator, &JsValue::from_str("mediaDevices")).unwrap_or(false) {
        return Err(CameraError::Unsupported);
    }
    let media_devices = navigator
        .media_devices()
        .map_err(|_| CameraError::Unsupported)?;

    let constraints = MediaStreamConstraints::new();
    match facing {
        Facing::Rear => {
            let video = MediaTrackConstraints::new();
            video.set_facing_mode(&JsValue::from_str("environment"));
            constraints.set_video(&JsValue::from(video));
        }
        Facing::Any => constraints.set_video(&JsValue::TRUE),
    }

    log::info!("waiting for permission ({facing:?} camera)..");
    let stream = wasm_bindgen_futures::JsFuture::from(
        media_devices
            .get_user_media_with_constraints(&constraints)
            .map_err(camera_error)?,
    )
    .await
    .map_err(camera_error)?;

    stream.dyn_into().map_err(camera_error)
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// `getUserMedia` feeding the kiosk's `<video>` element.
pub struct WebCamera {
    video_id: &'static str,
}

impl WebCamera {
    pub fn new(video_id: &'static str) -> Self {
        Self { video_id }
    }
}

impl CameraDevice for WebCamera {
    type Stream = MediaStream;

    async fn open(&self, facing: Facing) -> Result<MediaStream, CameraError> {
        get_stream(facing).await
    }

    fn attach(&self, stream: MediaStream) -> Result<(), CameraError> {
        let Some(video) = dom::video_element(self.video_id) else {
            stop_tracks(&stream);
            return Err(CameraError::Unavailable(format!(
                "video element `{}` not found",
                self.video_id
            )));
        };
        self.release();
        video.set_src_object(Some(&stream));
        Ok(())
    }

    fn discard(&self, stream: MediaStream) {
        stop_tracks(&stream);
    }

    fn release(&self) {
        let Some(video) = dom::video_element(self.video_id) else {
            return;
        };
        if let Some(stream) = video.src_object() {
            stop_tracks(&stream);
            video.set_src_object(None);
        }
    }
}
