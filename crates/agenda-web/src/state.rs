use agenda_store::Store;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state available to all handlers via `State<AppState>`.
///
/// The store sits behind an async mutex because rusqlite connections are
/// not `Sync`; each handler holds the lock for exactly one model call.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<Store>>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
