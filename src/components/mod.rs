mod app;
mod clock;
mod loading;
mod pdf_modal;
mod results;
mod scanner;
mod snackbar;

pub use app::{with_controller, App, SharedSession, WebController};
pub use clock::Clock;
pub use loading::LoadingOverlay;
pub use pdf_modal::PdfModal;
pub use results::{ActionsCard, InfoCard};
pub use scanner::{CameraButton, CameraPanel};
pub use snackbar::SnackbarView;
