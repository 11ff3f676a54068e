use crate::error_shaping::domain::model::value_objects::error_item::ErrorItem;

/// Ordered list of errors sent to a client. Order is the order in which the
/// errors were found and is never rearranged.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorEnvelope {
    errors: Vec<ErrorItem>,
}

impl ErrorEnvelope {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(item: ErrorItem) -> Self {
        Self { errors: vec![item] }
    }

    pub fn errors(&self) -> &[ErrorItem] {
        &self.errors
    }

    pub fn first(&self) -> Option<&ErrorItem> {
        self.errors.first()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn into_errors(self) -> Vec<ErrorItem> {
        self.errors
    }
}

impl From<Vec<ErrorItem>> for ErrorEnvelope {
    fn from(errors: Vec<ErrorItem>) -> Self {
        Self { errors }
    }
}

impl FromIterator<ErrorItem> for ErrorEnvelope {
    fn from_iter<T: IntoIterator<Item = ErrorItem>>(iter: T) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}
