/// Remote collection fetch errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("remote returned status {status}")]
    Status { status: u16 },

    #[error("invalid payload: {reason}")]
    InvalidPayload { reason: String },

    #[error("device is offline")]
    Offline,
}
