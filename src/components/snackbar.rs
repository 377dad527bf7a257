use dioxus::prelude::*;

use crate::snackbar::Notice;

#[derive(Props, PartialEq)]
pub struct SnackbarViewProps {
    #[props(!optional)]
    notice: Option<Notice>,
}

pub fn SnackbarView(cx: Scope<SnackbarViewProps>) -> Element {
    let Some(notice) = &cx.props.notice else {
        return render! {
            div { id: "snackbar", class: "snackbar", style: "display: none",
                span { class: "snackbar-message" }
            }
        };
    };

    render! {
        div { id: "snackbar", class: "snackbar {notice.severity} show", style: "display: block",
            span { class: "snackbar-message", "{notice.message}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snackbar::Severity;

    #[test]
    fn shows_current_notice() {
        let notice = Some(Notice {
            id: 1,
            message: "Label printed".into(),
            severity: Severity::Success,
        });
        let html = dioxus_ssr::render_lazy(rsx! { SnackbarView { notice: notice } });

        assert!(html.contains("Label printed"));
        assert!(html.contains("snackbar success show"));
    }

    #[test]
    fn hidden_without_notice() {
        let notice: Option<Notice> = None;
        let html = dioxus_ssr::render_lazy(rsx! { SnackbarView { notice: notice } });

        assert!(html.contains("display: none"));
        assert!(!html.contains("show"));
    }
}
