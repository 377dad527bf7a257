use dioxus::prelude::*;

use crate::{camera::CameraState, config::ids};

#[derive(Props)]
pub struct CameraPanelProps<'a> {
    state: CameraState,
    /// Fires once the video knows its dimensions.
    onready: EventHandler<'a, ()>,
}

/// Camera preview. The `<video>` stays mounted so a stream can be attached
/// before the first frame arrives; it is only hidden while the camera is idle.
pub fn CameraPanel<'a>(cx: Scope<'a, CameraPanelProps<'a>>) -> Element<'a> {
    let display = if cx.props.state.is_active() {
        "block"
    } else {
        "none"
    };
    let hint = match cx.props.state {
        CameraState::Requesting(_) => "Aguardando permissão da câmera...",
        CameraState::Scanning => "Aponte para o código de barras",
        _ => "",
    };

    render! {
        div { id: "cameraContainer", class: "camera-container", style: "display: {display}",
            video {
                id: ids::VIDEO,
                autoplay: true,
                "muted": "true",
                "playsinline": "true",
                style: "display: {display}",
                onloadedmetadata: move |_| cx.props.onready.call(()),
            }
            div { class: "scan-overlay",
                div { class: "scan-frame" }
                p { class: "scan-hint", "{hint}" }
            }
        }
    }
}

#[derive(Props)]
pub struct CameraButtonProps<'a> {
    state: CameraState,
    onclick: EventHandler<'a, MouseEvent>,
}

pub fn CameraButton<'a>(cx: Scope<'a, CameraButtonProps<'a>>) -> Element<'a> {
    let active = cx.props.state.is_active();
    let (class, icon, label) = if active {
        ("btn btn-camera active", "fas fa-times", "Fechar")
    } else {
        ("btn btn-camera", "fas fa-camera", "Câmera")
    };

    render! {
        button { id: "btnCamera", class: class, onclick: move |evt| cx.props.onclick.call(evt),
            i { class: icon }
            span { class: "btn-text", "{label}" }
        }
    }
}
