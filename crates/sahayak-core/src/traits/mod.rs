pub mod cache_store;
pub mod remote_source;
pub mod request_store;

pub use cache_store::ICacheStore;
pub use remote_source::RemoteSource;
pub use request_store::IRequestStore;
