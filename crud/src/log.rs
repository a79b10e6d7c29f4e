use crate::labels::Locale;
use std::collections::VecDeque;

const DEFAULT_CAPACITY: usize = 200;
/// Upper bound on retained lines, whatever the configured capacity.
pub const MAX_CAPACITY: usize = 10_000;

/// Acknowledgment lines received on the channel, oldest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl Default for ChannelLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl ChannelLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.clamp(1, MAX_CAPACITY),
        }
    }

    /// Append one `server_response` payload, prefixed with the locale's label.
    /// The text is stored raw and only ever rendered as a text node.
    pub fn push_received(&mut self, locale: Locale, data: &str) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines
            .push_back(format!("{}{}", locale.received_prefix(), data));
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
