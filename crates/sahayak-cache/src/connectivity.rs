//! Online/offline flag shared between the host and the request cache.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Last known connectivity. Clones share the same flag.
#[derive(Debug, Clone)]
pub struct Connectivity {
    online: Arc<AtomicBool>,
}

impl Connectivity {
    pub fn new(online: bool) -> Self {
        Self {
            online: Arc::new(AtomicBool::new(online)),
        }
    }

    pub fn is_online(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    /// Record a connectivity change reported by the host.
    pub fn set_online(&self, online: bool) {
        let was = self.online.swap(online, Ordering::SeqCst);
        if was != online {
            if online {
                tracing::info!("connectivity: back online");
            } else {
                tracing::warn!("connectivity: offline, serving cached data only");
            }
        }
    }

    pub fn go_offline(&self) {
        self.set_online(false);
    }

    pub fn go_online(&self) {
        self.set_online(true);
    }
}

impl Default for Connectivity {
    fn default() -> Self {
        Self::new(true)
    }
}
