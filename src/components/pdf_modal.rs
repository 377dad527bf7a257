use dioxus::prelude::*;

use crate::config::ids;

#[derive(Props)]
pub struct PdfModalProps<'a> {
    #[props(!optional)]
    url: Option<String>,
    onclose: EventHandler<'a, ()>,
    onprint: EventHandler<'a, ()>,
}

/// Label preview. With no url the frame source is emptied so the viewer stops loading.
pub fn PdfModal<'a>(cx: Scope<'a, PdfModalProps<'a>>) -> Element<'a> {
    let (display, src) = match &cx.props.url {
        Some(url) => ("flex", url.as_str()),
        None => ("none", ""),
    };

    render! {
        div {
            id: "pdfModal",
            class: "modal",
            style: "display: {display}",
            onclick: move |_| cx.props.onclose.call(()),
            div { class: "modal-content", onclick: move |evt| evt.stop_propagation(),
                div { class: "modal-header",
                    h3 { "Visualizar Etiqueta" }
                    button { id: "btnFecharModal", class: "btn-close", onclick: move |_| cx.props.onclose.call(()),
                        i { class: "fas fa-times" }
                    }
                }
                div { class: "modal-body",
                    iframe { id: ids::PDF_VIEWER, class: "pdf-viewer", src: "{src}", title: "Etiqueta" }
                }
                div { class: "modal-footer",
                    button { id: "btnFecharModalFooter", class: "btn btn-secondary", onclick: move |_| cx.props.onclose.call(()),
                        "Fechar"
                    }
                    button { id: "btnImprimirModal", class: "btn btn-primary", onclick: move |_| cx.props.onprint.call(()),
                        i { class: "fas fa-print" }
                        span { class: "btn-text", "Imprimir" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_modal_loads_the_label() {
        let url = Some("/etiquetas/SN1.pdf".to_owned());
        let html = dioxus_ssr::render_lazy(rsx! {
            PdfModal { url: url, onclose: move |_| {}, onprint: move |_| {} }
        });

        assert!(html.contains("display: flex"));
        assert!(html.contains("/etiquetas/SN1.pdf"));
    }

    #[test]
    fn closed_modal_is_hidden() {
        let url: Option<String> = None;
        let html = dioxus_ssr::render_lazy(rsx! {
            PdfModal { url: url, onclose: move |_| {}, onprint: move |_| {} }
        });

        assert!(html.contains("display: none"));
        assert!(!html.contains(".pdf"));
    }
}
