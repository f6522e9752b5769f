use std::net::SocketAddr;
use std::sync::Arc;

use log::info;
use warp::Filter;

use crate::photo_store::store::PhotoStore;
use crate::web_interface::routes;

/// Web server for the gallery page and the photo API
pub struct WebServer {
    store: Arc<PhotoStore>,
}

impl WebServer {
    /// Create a new WebServer instance over the photo store
    pub fn new(store: Arc<PhotoStore>) -> Self {
        Self { store }
    }

    /// Start the web server on the given address and serve until the process
    /// is stopped.
    pub async fn start(&self, addr: SocketAddr) {
        let routes = routes::gallery_page_route()
            .or(routes::asset_route())
            .or(routes::list_photos_route(self.store.clone()))
            .or(routes::upload_photo_route(self.store.clone()))
            .or(routes::delete_photo_route(self.store.clone()));

        info!("Serving gallery at http://{}", addr);
        warp::serve(routes).run(addr).await;
    }
}
