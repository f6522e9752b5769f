//! Web interface
//!
//! Serves the gallery page and the JSON API the page talks to. The page is
//! compiled into the binary, so the whole gallery is one self-contained
//! executable.
//!
//! Components:
//! - `routes`: warp filter constructors for the page and the photo API.
//! - `web_server`: composes the routes and runs the server.
//! - `types`: request/response payloads.

pub mod routes;
pub mod types;
pub mod web_server;

pub use types::ApiError;
pub use web_server::WebServer;
