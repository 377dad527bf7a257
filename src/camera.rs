use futures::Stream;

use crate::error::{CameraError, DecoderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraState {
    #[default]
    Idle,
    /// Waiting for the browser to hand over the stream of request `n`.
    Requesting(u64),
    /// Stream attached, video not ready yet.
    Streaming,
    Scanning,
}

impl CameraState {
    pub fn is_active(self) -> bool {
        self != CameraState::Idle
    }

    /// `Idle` → `Requesting(ticket)`. Returns false if the camera was already active.
    pub fn request(&mut self, ticket: u64) -> bool {
        if self.is_active() {
            return false;
        }
        *self = CameraState::Requesting(ticket);
        true
    }

    /// True while request `ticket` is the one the kiosk is waiting on.
    pub fn awaits(self, ticket: u64) -> bool {
        self == CameraState::Requesting(ticket)
    }

    /// `Requesting(ticket)` → `Streaming`. False means request `ticket` was
    /// cancelled or superseded meanwhile, so its stream must not be shown.
    pub fn attach(&mut self, ticket: u64) -> bool {
        if !self.awaits(ticket) {
            return false;
        }
        *self = CameraState::Streaming;
        true
    }

    /// `Requesting(ticket)` → `Idle` after the request failed. False if a
    /// newer request or a stop already replaced it.
    pub fn abandon(&mut self, ticket: u64) -> bool {
        if !self.awaits(ticket) {
            return false;
        }
        self.stop();
        true
    }

    /// `Streaming` → `Scanning`, only once the video has metadata.
    pub fn begin_scanning(&mut self) -> bool {
        if *self != CameraState::Streaming {
            return false;
        }
        *self = CameraState::Scanning;
        true
    }

    pub fn stop(&mut self) {
        *self = CameraState::Idle;
    }

    pub fn on_decode(&mut self, event: DecodeEvent) -> ScanStep {
        if *self != CameraState::Scanning {
            return ScanStep::Stopped;
        }
        match event {
            DecodeEvent::Decoded(text) => {
                self.stop();
                ScanStep::Found(text)
            }
            DecodeEvent::NoMatchThisFrame => ScanStep::Continue,
            DecodeEvent::Error(reason) => ScanStep::Failed(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeEvent {
    Decoded(String),
    NoMatchThisFrame,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanStep {
    Found(String),
    Continue,
    /// Decoder error worth logging; scanning goes on.
    Failed(String),
    /// The camera left `Scanning`, drop the rest of the events.
    Stopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Rear,
    Any,
}

#[allow(async_fn_in_trait)]
pub trait CameraDevice {
    type Stream;

    /// Acquires a stream without showing it.
    async fn open(&self, facing: Facing) -> Result<Self::Stream, CameraError>;

    /// Shows `stream` in the video element, stopping whatever was shown before.
    /// On error the stream is stopped.
    fn attach(&self, stream: Self::Stream) -> Result<(), CameraError>;

    /// Stops a stream that was never attached.
    fn discard(&self, stream: Self::Stream);

    /// Stops the attached stream. Safe to call with nothing open.
    fn release(&self);
}

pub trait BarcodeDecoder {
    type Events: Stream<Item = DecodeEvent> + Unpin;

    fn start(&self, video_id: &str) -> Result<Self::Events, DecoderError>;

    /// Stops decoding; the event stream ends. Safe to call when idle.
    fn stop(&self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut state = CameraState::default();
        assert!(state.request(1));
        assert!(!state.begin_scanning());
        assert!(state.attach(1));
        assert!(state.begin_scanning());
        assert_eq!(
            state.on_decode(DecodeEvent::NoMatchThisFrame),
            ScanStep::Continue
        );
        assert_eq!(
            state.on_decode(DecodeEvent::Error("checksum".into())),
            ScanStep::Failed("checksum".into())
        );
        assert_eq!(state, CameraState::Scanning);
        assert_eq!(
            state.on_decode(DecodeEvent::Decoded("ABC123".into())),
            ScanStep::Found("ABC123".into())
        );
        assert_eq!(state, CameraState::Idle);
    }

    #[test]
    fn request_is_refused_while_active() {
        let mut state = CameraState::Streaming;
        assert!(!state.request(2));
        assert_eq!(state, CameraState::Streaming);
    }

    #[test]
    fn cancelled_request_does_not_attach() {
        let mut state = CameraState::default();
        state.request(1);
        state.stop();
        assert!(!state.attach(1));
        assert_eq!(state, CameraState::Idle);
    }

    #[test]
    fn superseded_request_neither_attaches_nor_abandons() {
        let mut state = CameraState::default();
        state.request(1);
        state.stop();
        state.request(2);

        assert!(!state.attach(1));
        assert!(!state.abandon(1));
        assert_eq!(state, CameraState::Requesting(2));

        assert!(state.abandon(2));
        assert_eq!(state, CameraState::Idle);
    }

    #[test]
    fn events_after_stop_are_dropped() {
        let mut state = CameraState::Idle;
        assert_eq!(
            state.on_decode(DecodeEvent::Decoded("late".into())),
            ScanStep::Stopped
        );
        state.stop();
        state.stop();
        assert_eq!(state, CameraState::Idle);
    }
}
