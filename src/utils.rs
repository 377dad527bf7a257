use std::{cell::Cell, time::Duration};

use chrono::NaiveDateTime;

/// Escapes text for insertion into HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn format_time(at: &NaiveDateTime) -> String {
    at.format("%H:%M:%S").to_string()
}

pub fn format_date(at: &NaiveDateTime) -> String {
    at.format("%d/%m/%Y").to_string()
}

pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

/// Trailing-edge debounce bookkeeping. Each call takes a ticket, waits, and
/// only the ticket that is still the latest gets to run.
#[derive(Debug, Default)]
pub struct Debounce {
    latest: Cell<u64>,
}

impl Debounce {
    pub fn arm(&self) -> u64 {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        ticket
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.get() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_html("<b>X</b>"), "&lt;b&gt;X&lt;/b&gt;");
        assert_eq!(
            escape_html(r#"a & "b" 'c'"#),
            "a &amp; &quot;b&quot; &#39;c&#39;"
        );
        assert_eq!(escape_html("Peça 123"), "Peça 123");
    }

    #[test]
    fn formats_in_brazilian_order() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 2)
            .unwrap();
        assert_eq!(format_time(&at), "09:05:02");
        assert_eq!(format_date(&at), "07/03/2024");
    }

    #[test]
    fn only_the_last_call_fires() {
        let debounce = Debounce::default();
        let first = debounce.arm();
        let second = debounce.arm();
        assert!(!debounce.is_latest(first));
        assert!(debounce.is_latest(second));
    }

    #[test]
    fn millis_saturates() {
        assert_eq!(millis(Duration::from_millis(300)), 300);
        assert_eq!(millis(Duration::from_secs(u64::MAX)), u32::MAX);
    }
}
