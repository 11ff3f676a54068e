#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ErrorItem {
    param: String,
    detail: String,
    message: String,
}

impl ErrorItem {
    pub fn new(
        param: impl Into<String>,
        detail: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            param: param.into(),
            detail: detail.into(),
            message: message.into(),
        }
    }

    pub fn param(&self) -> &str {
        &self.param
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
