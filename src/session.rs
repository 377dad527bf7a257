use std::{cell::RefCell, collections::BTreeSet};

use crate::{
    camera::CameraState,
    record::CurrentRecord,
    snackbar::{Severity, Snackbar},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Action {
    Search,
    Print,
    SearchAndPrint,
}

/// Everything the kiosk page shows, owned by the controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub input: String,
    pub record: Option<CurrentRecord>,
    pub camera: CameraState,
    pub preview: Option<String>,
    pub snackbar: Snackbar,
    in_flight: BTreeSet<Action>,
    camera_requests: u64,
}

impl Session {
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.snackbar.show(message, severity)
    }

    /// Info and actions cards are shown exactly while a record is held.
    pub fn results_visible(&self) -> bool {
        self.record.is_some()
    }

    pub fn clear_results(&mut self) {
        self.record = None;
        self.input.clear();
    }

    pub fn is_loading(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub fn is_pending(&self, action: Action) -> bool {
        self.in_flight.contains(&action)
    }

    /// Starts a camera request and hands out its ticket, or `None` if the
    /// camera is already active.
    pub fn request_camera(&mut self) -> Option<u64> {
        let ticket = self.camera_requests + 1;
        self.camera.request(ticket).then(|| {
            self.camera_requests = ticket;
            ticket
        })
    }

    pub fn scroll_locked(&self) -> bool {
        self.is_loading() || self.preview.is_some()
    }
}

/// Shared access to the session. Writers go through `update` so the view can redraw.
pub trait SessionCell {
    fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R;

    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R;
}

impl SessionCell for RefCell<Session> {
    fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Marks an action as pending and shows the loading overlay until dropped.
#[must_use]
pub struct InFlight<'a, S: SessionCell> {
    session: &'a S,
    action: Action,
}

impl<'a, S: SessionCell> InFlight<'a, S> {
    /// `None` if the same action is already pending.
    pub fn begin(session: &'a S, action: Action) -> Option<Self> {
        session
            .update(|s| s.in_flight.insert(action))
            .then(|| Self { session, action })
    }
}

impl<S: SessionCell> Drop for InFlight<'_, S> {
    fn drop(&mut self) {
        let action = self.action;
        self.session.update(|s| s.in_flight.remove(&action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_rejects_duplicate_and_releases_on_drop() {
        let session = RefCell::new(Session::default());
        {
            let _search = InFlight::begin(&session, Action::Search).unwrap();
            assert!(session.read(Session::is_loading));
            assert!(InFlight::begin(&session, Action::Search).is_none());

            let print = InFlight::begin(&session, Action::Print);
            assert!(print.is_some());
            drop(print);
            assert!(session.read(|s| s.is_pending(Action::Search)));
        }
        assert!(!session.read(Session::is_loading));
        assert!(InFlight::begin(&session, Action::Search).is_some());
    }

    #[test]
    fn clear_results_is_repeatable() {
        let mut session = Session {
            input: "PBS12345".into(),
            record: Some(CurrentRecord::default()),
            ..Default::default()
        };
        session.clear_results();
        session.clear_results();
        assert!(!session.results_visible());
        assert!(session.input.is_empty());
    }

    #[test]
    fn every_camera_request_gets_a_fresh_ticket() {
        let mut session = Session::default();
        assert_eq!(session.request_camera(), Some(1));
        assert_eq!(session.request_camera(), None);

        session.camera.stop();
        assert_eq!(session.request_camera(), Some(2));
        assert_eq!(session.camera, CameraState::Requesting(2));
    }

    #[test]
    fn preview_locks_scroll() {
        let mut session = Session::default();
        assert!(!session.scroll_locked());
        session.preview = Some("/label.pdf".into());
        assert!(session.scroll_locked());
    }
}
