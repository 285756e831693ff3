use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency category '{value}' (expected one of: none, euro, dollar, pound)")]
pub struct UnknownCurrencyCategory {
    pub value: String,
}

impl UnknownCurrencyCategory {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
