pub mod http_server;

pub use http_server::{build_router, start_server, AppState};
