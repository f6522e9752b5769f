use std::sync::Arc;

use log::info;

use crate::configuration::config::Config;
use crate::error_handling::types::ControllerError;
use crate::photo_store::store::PhotoStore;
use crate::storage::file_storage::FileStorage;
use crate::web_interface::web_server::WebServer;

/// Wires the configuration, storage backend, photo store and web server
/// together and drives the application.
pub struct Controller {
    config: Config,
    store: Arc<PhotoStore>,
}

impl Controller {
    pub fn new(config: Config) -> Result<Self, ControllerError> {
        let backend = Arc::new(FileStorage::new_with_override(&config.storage_path)?);
        let store = Arc::new(PhotoStore::new(backend));
        info!("Photo store ready");
        Ok(Self { config, store })
    }

    /// Runs the web server until the process is stopped.
    pub async fn run(&self) -> Result<(), ControllerError> {
        let addr = self.config.socket_addr()?;
        let server = WebServer::new(self.store.clone());
        server.start(addr).await;
        Ok(())
    }
}
