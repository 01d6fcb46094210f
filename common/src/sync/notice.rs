use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient, non-blocking message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Words a failed request as `"<prefix>: <reason>"`.
    ///
    /// Non-2xx responses read as `fallback` unless `surface_detail` is set and
    /// the server sent a `detail` message. Validation errors are shown as-is.
    pub fn failure(prefix: &str, fallback: &str, err: &ClientError, surface_detail: bool) -> Self {
        let reason = match err {
            ClientError::Validation(invalid) => return Self::error(invalid.to_string()),
            ClientError::Status {
                detail: Some(detail),
                ..
            } if surface_detail => detail.clone(),
            ClientError::Status { .. } => fallback.to_string(),
            other => other.to_string(),
        };
        Self::error(format!("{prefix}: {reason}"))
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}
