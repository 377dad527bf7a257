use std::{collections::VecDeque, fmt};

const MAX_PENDING: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Toast queue. The front notice is the one on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snackbar {
    queue: VecDeque<Notice>,
    next_id: u64,
}

impl Snackbar {
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.queue.push_back(Notice {
            id,
            message: message.into(),
            severity,
        });
        // keep the visible notice, drop the oldest waiting ones
        while self.queue.len() > MAX_PENDING + 1 {
            self.queue.remove(1);
        }
        id
    }

    pub fn current(&self) -> Option<&Notice> {
        self.queue.front()
    }

    /// Removes the visible notice if it is still `id`.
    pub fn dismiss(&mut self, id: u64) -> bool {
        match self.queue.front() {
            Some(notice) if notice.id == id => {
                self.queue.pop_front();
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
