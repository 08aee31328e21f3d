#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SegmentError {
    #[error("invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: &'static str },
}

impl SegmentError {
    pub(crate) fn invalid(input: &str, reason: &'static str) -> Self {
        SegmentError::InvalidAmount {
            input: input.to_string(),
            reason,
        }
    }
}
