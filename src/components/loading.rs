use dioxus::prelude::*;

#[derive(Props, PartialEq)]
pub struct LoadingOverlayProps {
    visible: bool,
}

pub fn LoadingOverlay(cx: Scope<LoadingOverlayProps>) -> Element {
    let display = if cx.props.visible { "flex" } else { "none" };

    render! {
        div { id: "loading", class: "loading-overlay", style: "display: {display}",
            div { class: "spinner" }
            p { "Processando..." }
        }
    }
}
