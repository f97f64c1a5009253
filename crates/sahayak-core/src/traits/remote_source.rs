use crate::errors::FetchError;

/// A remote collection endpoint: "an array of opaque items".
pub trait RemoteSource: Send + Sync {
    fn fetch(&self) -> Result<serde_json::Value, FetchError>;
}
