use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn timeout(self) -> Duration {
        match self {
            Self::Success => Duration::from_secs(2),
            Self::Error => Duration::from_secs(3),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Footer status line; a newer message replaces the older one.
#[derive(Debug, Clone, Default)]
pub struct MessageState {
    pub current: Option<StatusMessage>,
    pub expires_at: Option<Instant>,
}

impl MessageState {
    pub fn show(&mut self, kind: MessageKind, text: impl Into<String>, now: Instant) {
        self.current = Some(StatusMessage {
            kind,
            text: text.into(),
        });
        self.expires_at = Some(now + kind.timeout());
    }

    pub fn success(&mut self, text: impl Into<String>, now: Instant) {
        self.show(MessageKind::Success, text, now);
    }

    pub fn error(&mut self, text: impl Into<String>, now: Instant) {
        self.show(MessageKind::Error, text, now);
    }

    pub fn clear_expired(&mut self, now: Instant) {
        if let Some(expires) = self.expires_at
            && expires <= now
        {
            self.current = None;
            self.expires_at = None;
        }
    }
}
