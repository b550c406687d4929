use lazy_static::lazy_static;
use std::sync::Arc;

pub const DEFAULT_DB_PATH: &str = "site.db";

#[derive(Debug, Clone)]
pub struct ServerState {
    pub db_path: String,
}

impl ServerState {
    pub fn new(db_path: String) -> Self {
        Self { db_path }
    }

    pub fn get_db_path(&self) -> &str {
        &self.db_path
    }
}

// Singleton
lazy_static! {
    pub static ref LOCAL_SERVER_STATE: Arc<tokio::sync::Mutex<ServerState>> = Arc::new(
        tokio::sync::Mutex::new(ServerState::new(DEFAULT_DB_PATH.to_string()))
    );
}

/// Opens a connection on the configured database.
pub async fn open_db() -> rusqlite::Result<rusqlite::Connection> {
    let path = {
        let state = LOCAL_SERVER_STATE.lock().await;
        state.get_db_path().to_string()
    };
    rusqlite::Connection::open(path)
}
