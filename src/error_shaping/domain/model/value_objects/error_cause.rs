use std::{error::Error, fmt, sync::Arc};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
struct TextCause(String);

/// Underlying error of an `ErrorDescription`. Two causes are equal when
/// their texts are.
#[derive(Clone)]
pub struct ErrorCause(Arc<dyn Error + Send + Sync>);

impl ErrorCause {
    pub fn new<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self(Arc::new(TextCause(text.into())))
    }

    pub fn text(&self) -> String {
        self.0.to_string()
    }

    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.0.as_ref()
    }
}

impl fmt::Debug for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ErrorCause").field(&self.text()).finish()
    }
}

impl fmt::Display for ErrorCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq for ErrorCause {
    fn eq(&self, other: &Self) -> bool {
        self.text() == other.text()
    }
}

impl Eq for ErrorCause {}
