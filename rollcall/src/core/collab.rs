//! Presentation collaborators: toasts and confirmation dialogs

/// User-facing notice emitted by the dispatcher
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Non-blocking toast
    Success(String),
    /// Generic failure (transport, unreadable response)
    Failure { title: String, message: String },
    /// Blocking alert carrying the server's detail verbatim
    Alert { title: String, message: String },
    /// Emitted once when an authenticated session is rejected
    SessionExpired,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn failure(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn alert(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Alert {
            title: title.into(),
            message: message.into(),
        }
    }
}

pub trait Notifier: Send {
    fn notify(&mut self, notice: Notice);
}

/// Modal confirmation. `true` means the user accepted.
pub trait Confirm: Send {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Answers every prompt the same way
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}
