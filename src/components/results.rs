use dioxus::prelude::*;

use crate::record::{info_grid_html, CurrentRecord};

#[derive(Props, PartialEq)]
pub struct InfoCardProps {
    record: CurrentRecord,
}

pub fn InfoCard(cx: Scope<InfoCardProps>) -> Element {
    // backend text, escaped by info_grid_html
    let grid = info_grid_html(&cx.props.record.info_items());

    render! {
        div { id: "infoCard", class: "card info-card",
            div { class: "card-header",
                i { class: "fas fa-info-circle" }
                h2 { "Informações do Registro" }
            }
            div { id: "infoGrid", class: "info-grid", dangerous_inner_html: "{grid}" }
        }
    }
}

#[derive(Props)]
pub struct ActionsCardProps<'a> {
    busy: bool,
    onprint: EventHandler<'a, MouseEvent>,
    onclear: EventHandler<'a, MouseEvent>,
}

pub fn ActionsCard<'a>(cx: Scope<'a, ActionsCardProps<'a>>) -> Element<'a> {
    render! {
        div { id: "actionsCard", class: "card actions-card",
            div { class: "button-group",
                button {
                    id: "btnImprimirTodos",
                    class: "btn btn-success",
                    disabled: cx.props.busy,
                    onclick: move |evt| cx.props.onprint.call(evt),
                    i { class: "fas fa-print" }
                    span { class: "btn-text", "Imprimir Etiqueta" }
                }
                button {
                    id: "btnLimpar",
                    class: "btn btn-secondary",
                    onclick: move |evt| cx.props.onclear.call(evt),
                    i { class: "fas fa-eraser" }
                    span { class: "btn-text", "Limpar" }
                }
            }
        }
    }
}
