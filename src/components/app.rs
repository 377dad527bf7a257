use std::{cell::RefCell, future::Future, rc::Rc, sync::Arc};

use dioxus::html::input_data::keyboard_types::Key;
use dioxus::prelude::*;

use super::{
    ActionsCard, CameraButton, CameraPanel, Clock, InfoCard, LoadingOverlay, PdfModal,
    SnackbarView,
};
use crate::{
    config::{ids, KioskConfig},
    controller::Controller,
    session::{Session, SessionCell},
    web::{dom, WebPlatform},
};

/// Session storage that asks the root component to re-render after each write.
pub struct SharedSession {
    cell: RefCell<Session>,
    redraw: Arc<dyn Fn() + Send + Sync>,
}

impl SharedSession {
    pub fn new(redraw: Arc<dyn Fn() + Send + Sync>) -> Self {
        Self {
            cell: RefCell::new(Session::default()),
            redraw,
        }
    }
}

impl SessionCell for SharedSession {
    fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        f(&self.cell.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let result = f(&mut self.cell.borrow_mut());
        (self.redraw)();
        result
    }
}

pub type WebController = Controller<WebPlatform, SharedSession>;

thread_local! {
    static CONTROLLER: RefCell<Option<Rc<WebController>>> = RefCell::new(None);
}

/// Runs `f` against the mounted kiosk, if there is one.
pub fn with_controller(f: impl FnOnce(&WebController)) {
    match CONTROLLER.with(|slot| slot.borrow().clone()) {
        Some(controller) => f(&controller),
        None => log::warn!("kiosk not mounted yet"),
    }
}

fn spawn_with<F, Fut>(cx: &ScopeState, controller: &Rc<WebController>, task: F)
where
    F: FnOnce(Rc<WebController>) -> Fut,
    Fut: Future<Output = ()> + 'static,
{
    cx.spawn(task(controller.clone()));
}

pub fn App(cx: Scope) -> Element {
    let controller: &Rc<WebController> = cx.use_hook(|| {
        let config = KioskConfig::from_build_env();
        log::info!("backend at {:?}", config.endpoint("/"));
        let session = SharedSession::new(cx.schedule_update());
        let controller = Rc::new(Controller::new(WebPlatform::new(&config), session, config));
        CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller.clone()));
        controller
    });
    cx.use_hook(|| {
        let controller = controller.clone();
        dom::KeyListener::new("Escape", move || controller.cancel())
    });

    let session = controller.session().read(Session::clone);
    let busy = session.is_loading();
    let notice = session.snackbar.current().cloned();
    let notice_id = notice.as_ref().map(|n| n.id);
    let locked = session.scroll_locked();

    use_future(cx, (&notice_id,), |(id,)| {
        let controller = controller.clone();
        async move {
            if let Some(id) = id {
                controller.expire_notice(id).await;
            }
        }
    });
    use_effect(cx, (&locked,), |(locked,)| async move {
        dom::set_scroll_locked(locked);
    });
    use_effect(cx, (), |()| async move {
        dom::focus(ids::INPUT);
    });

    render! {
        div { class: "container",
            header { class: "header",
                div { class: "header-content",
                    div { class: "logo",
                        i { class: "fas fa-tags" }
                        h1 { "Sistema de Etiquetas Montagem" }
                    }
                    Clock { tick: controller.config().clock_tick }
                }
            }

            main { class: "main-content",
                div { class: "card search-card",
                    div { class: "card-header",
                        i { class: "fas fa-barcode" }
                        h2 { "Buscar Serial" }
                    }
                    div { class: "input-group",
                        input {
                            id: ids::INPUT,
                            r#type: "text",
                            class: "form-control",
                            placeholder: "Digite ou escaneie o código de barras",
                            autocomplete: "off",
                            autofocus: true,
                            value: "{session.input}",
                            oninput: move |evt| controller.set_input(evt.value.clone()),
                            onkeydown: move |evt| {
                                if evt.key() == Key::Enter {
                                    spawn_with(cx, controller, |c| async move {
                                        c.submit().await;
                                    });
                                }
                            },
                        }
                        CameraButton {
                            state: session.camera,
                            onclick: move |_| spawn_with(cx, controller, |c| async move {
                                c.toggle_camera().await;
                            }),
                        }
                    }
                    div { class: "button-group",
                        button {
                            id: "btnBuscar",
                            class: "btn btn-primary",
                            disabled: busy,
                            onclick: move |_| spawn_with(cx, controller, |c| async move {
                                c.search().await;
                            }),
                            i { class: "fas fa-search" }
                            span { class: "btn-text", "Buscar" }
                        }
                        button {
                            id: "btnBuscarImprimir",
                            class: "btn btn-success",
                            disabled: busy,
                            onclick: move |_| spawn_with(cx, controller, |c| async move {
                                c.search_and_print().await;
                            }),
                            i { class: "fas fa-print" }
                            span { class: "btn-text", "Buscar e Imprimir" }
                        }
                    }
                    CameraPanel {
                        state: session.camera,
                        onready: move |_| spawn_with(cx, controller, |c| async move {
                            c.start_scanning().await;
                        }),
                    }
                }

                session.record.clone().map(move |record| rsx! {
                    InfoCard { record: record }
                    ActionsCard {
                        busy: busy,
                        onprint: move |_| spawn_with(cx, controller, |c| async move {
                            c.print_current().await;
                        }),
                        onclear: move |_| controller.clear(),
                    }
                })
            }

            SnackbarView { notice: notice }
            LoadingOverlay { visible: busy }
            PdfModal {
                url: session.preview.clone(),
                onclose: move |_| controller.hide_preview(),
                onprint: move |_| controller.print_preview(),
            }
        }
    }
}
