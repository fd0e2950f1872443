#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Error,
    Info,
    Success,
}

/// A transient user-facing message (rendered as a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message_type: MessageType,
    pub message: String,
}

impl Notice {
    pub fn new(message_type: MessageType, message: impl Into<String>) -> Self {
        Self {
            message_type,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(MessageType::Error, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(MessageType::Success, message)
    }
}
