use futures::StreamExt;

use crate::{
    api::{LabelApi, Reply},
    camera::{BarcodeDecoder, CameraDevice, Facing, ScanStep},
    config::{ids, KioskConfig},
    error::CameraError,
    platform::Platform,
    record::CurrentRecord,
    session::{Action, InFlight, SessionCell},
    snackbar::Severity,
    utils::Debounce,
};

mod text {
    pub const EMPTY_CODE: &str = "Digite um código de barras";
    pub const SEARCH_FAILED: &str = "Erro ao buscar dados";
    pub const SEARCH_UNREACHABLE: &str = "Erro ao buscar dados. Verifique a conexão.";
    pub const NO_RECORD: &str = "Nenhum serial selecionado";
    pub const PRINTED: &str = "Etiqueta impressa com sucesso!";
    pub const PRINT_FAILED: &str = "Erro ao imprimir etiqueta";
    pub const PRINT_UNREACHABLE: &str = "Erro ao imprimir etiqueta. Tente novamente.";
    pub const PROCESS_FAILED: &str = "Erro ao processar";
    pub const PROCESS_UNREACHABLE: &str = "Erro ao processar. Verifique a conexão.";
    pub const CAMERA_REAR: &str = "Câmera traseira ativada";
    pub const CAMERA_ANY: &str = "Câmera ativada";
    pub const CAMERA_UNSUPPORTED: &str = "Câmera não disponível neste navegador";
    pub const CAMERA_UNAVAILABLE: &str = "Câmera não disponível. Use digitação manual";
    pub const SCANNER_FAILED: &str = "Erro ao iniciar scanner. Digite manualmente";
}

/// Owns the session and runs every kiosk operation against a [`Platform`].
pub struct Controller<P, S> {
    platform: P,
    session: S,
    config: KioskConfig,
    enter: Debounce,
}

impl<P: Platform, S: SessionCell> Controller<P, S> {
    pub fn new(platform: P, session: S, config: KioskConfig) -> Self {
        Self {
            platform,
            session,
            config,
            enter: Debounce::default(),
        }
    }

    pub fn session(&self) -> &S {
        &self.session
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &KioskConfig {
        &self.config
    }

    pub fn set_input(&self, value: String) {
        self.session.update(|s| s.input = value);
    }

    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> u64 {
        self.session.update(|s| s.notify(message, severity))
    }

    /// Waits out the display time of notice `id`, then takes it down.
    pub async fn expire_notice(&self, id: u64) {
        self.platform.sleep(self.config.snackbar_duration).await;
        self.session.update(|s| s.snackbar.dismiss(id));
    }

    fn take_code(&self) -> Option<String> {
        let code = self.session.read(|s| s.input.trim().to_owned());
        if code.is_empty() {
            self.notify(text::EMPTY_CODE, Severity::Warning);
            self.platform.focus_input();
            return None;
        }
        Some(code)
    }

    fn begin(&self, action: Action) -> Option<InFlight<'_, S>> {
        let guard = InFlight::begin(&self.session, action);
        if guard.is_none() {
            log::debug!("{action:?} already pending, ignoring");
        }
        guard
    }

    pub async fn search(&self) {
        let Some(code) = self.take_code() else {
            return;
        };
        let Some(_loading) = self.begin(Action::Search) else {
            return;
        };

        log::info!("looking up {code}");
        match self
            .platform
            .api()
            .lookup(&code)
            .await
            .and_then(Reply::accepted)
        {
            Ok(response) => {
                let record = CurrentRecord::from_response(&response);
                log::info!("found serial {:?} for {code}", record.serial_number);
                self.session.update(|s| s.record = Some(record));
                self.platform.reveal_results();
            }
            Err(err) => {
                log::warn!("lookup of {code} failed: {err}");
                let message = err.user_message(text::SEARCH_FAILED, text::SEARCH_UNREACHABLE);
                self.session.update(|s| {
                    s.notify(message, Severity::Error);
                    s.clear_results();
                });
                self.platform.focus_input();
            }
        }
    }

    /// Enter on the code input. Searches once the keyboard has been quiet for
    /// `debounce_delay`; earlier presses inside that window are dropped.
    pub async fn submit(&self) {
        let ticket = self.enter.arm();
        self.platform.sleep(self.config.debounce_delay).await;
        if !self.enter.is_latest(ticket) {
            log::debug!("enter {ticket} superseded");
            return;
        }
        self.search().await;
    }

    /// Prints the label of the record on screen.
    pub async fn print_current(&self) {
        let serial = self.session.read(|s| {
            s.record
                .as_ref()
                .and_then(|record| record.serial_number.clone())
        });
        let Some(serial) = serial else {
            self.notify(text::NO_RECORD, Severity::Warning);
            return;
        };
        let Some(_loading) = self.begin(Action::Print) else {
            return;
        };

        log::info!("printing {serial}");
        match self
            .platform
            .api()
            .print(&serial)
            .await
            .and_then(Reply::accepted)
        {
            Ok(_) => {
                self.session.update(|s| {
                    s.notify(text::PRINTED, Severity::Success);
                    s.clear_results();
                });
                self.platform.focus_input();
            }
            Err(err) => {
                log::warn!("printing {serial} failed: {err}");
                let message = err.user_message(text::PRINT_FAILED, text::PRINT_UNREACHABLE);
                self.notify(message, Severity::Error);
            }
        }
    }

    pub async fn search_and_print(&self) {
        let Some(code) = self.take_code() else {
            return;
        };
        let Some(_loading) = self.begin(Action::SearchAndPrint) else {
            return;
        };

        log::info!("looking up and printing {code}");
        match self
            .platform
            .api()
            .lookup_and_print(&code)
            .await
            .and_then(Reply::accepted)
        {
            Ok(response) => {
                let record = CurrentRecord::from_response(&response);
                self.session.update(|s| {
                    s.notify(text::PRINTED, Severity::Success);
                    s.record = Some(record);
                });
                self.platform.reveal_results();
            }
            Err(err) => {
                log::warn!("lookup and print of {code} failed: {err}");
                let message = err.user_message(text::PROCESS_FAILED, text::PROCESS_UNREACHABLE);
                self.session.update(|s| {
                    s.notify(message, Severity::Error);
                    s.clear_results();
                });
                self.platform.focus_input();
            }
        }
    }

    pub fn clear(&self) {
        self.session.update(|s| s.clear_results());
        self.platform.focus_input();
    }

    /// Camera button: opens the camera, or closes it when already open.
    pub async fn toggle_camera(&self) {
        let Some(ticket) = self.session.update(|s| s.request_camera()) else {
            self.stop_camera();
            return;
        };

        let camera = self.platform.camera();
        let opened = match camera.open(Facing::Rear).await {
            Ok(stream) => Ok((stream, Facing::Rear)),
            Err(CameraError::Unsupported) => Err(CameraError::Unsupported),
            Err(err) if self.session.read(|s| s.camera.awaits(ticket)) => {
                log::info!("rear camera unavailable ({err}), trying any camera");
                camera
                    .open(Facing::Any)
                    .await
                    .map(|stream| (stream, Facing::Any))
            }
            Err(err) => Err(err),
        };

        let (stream, facing) = match opened {
            Ok(opened) => opened,
            Err(err) => {
                log::error!("camera request {ticket} failed: {err}");
                let message = match err {
                    CameraError::Unsupported => text::CAMERA_UNSUPPORTED,
                    CameraError::Unavailable(_) => text::CAMERA_UNAVAILABLE,
                };
                self.session.update(|s| {
                    if s.camera.abandon(ticket) {
                        s.notify(message, Severity::Warning);
                    }
                });
                return;
            }
        };

        if !self.session.read(|s| s.camera.awaits(ticket)) {
            log::info!("camera request {ticket} cancelled before the stream arrived");
            camera.discard(stream);
            return;
        }
        if let Err(err) = camera.attach(stream) {
            log::error!("could not show camera stream: {err}");
            self.session.update(|s| {
                s.camera.stop();
                s.notify(text::CAMERA_UNAVAILABLE, Severity::Warning);
            });
            return;
        }

        let notice = match facing {
            Facing::Rear => text::CAMERA_REAR,
            Facing::Any => text::CAMERA_ANY,
        };
        self.session.update(|s| {
            if s.camera.attach(ticket) {
                s.notify(notice, Severity::Success);
            }
        });
    }

    /// Runs once the video element has metadata; decodes until a barcode turns up.
    pub async fn start_scanning(&self) {
        if !self.session.update(|s| s.camera.begin_scanning()) {
            return;
        }

        let mut events = match self.platform.decoder().start(ids::VIDEO) {
            Ok(events) => events,
            Err(err) => {
                log::error!("{err}");
                self.notify(text::SCANNER_FAILED, Severity::Warning);
                return;
            }
        };
        log::info!("scanning started");

        while let Some(event) = events.next().await {
            match self.session.update(|s| s.camera.on_decode(event)) {
                ScanStep::Continue => {}
                ScanStep::Failed(reason) => log::error!("scan error: {reason}"),
                ScanStep::Stopped => break,
                ScanStep::Found(code) => {
                    log::info!("barcode detected: {code}");
                    self.stop_camera();
                    self.session.update(|s| {
                        s.notify(format!("Código detectado: {code}"), Severity::Success);
                        s.input = code;
                    });
                    self.platform.sleep(self.config.settle_delay).await;
                    self.search().await;
                    return;
                }
            }
        }
    }

    pub fn stop_camera(&self) {
        self.platform.decoder().stop();
        self.platform.camera().release();
        self.session.update(|s| s.camera.stop());
    }

    /// Escape key: closes the preview and the camera.
    pub fn cancel(&self) {
        self.hide_preview();
        if self.session.read(|s| s.camera.is_active()) {
            self.stop_camera();
        }
    }

    pub fn show_preview(&self, url: impl Into<String>) {
        let url = url.into();
        log::info!("previewing {url}");
        self.session.update(|s| s.preview = Some(url));
    }

    pub fn hide_preview(&self) {
        if self.session.read(|s| s.preview.is_some()) {
            self.session.update(|s| s.preview = None);
        }
    }

    pub fn print_preview(&self) {
        if self.session.read(|s| s.preview.is_some()) {
            self.platform.print_preview();
        }
    }
}
