//! # HTTP Server Module
//!
//! REST API over the store, one router per resource.
//!
//! # Endpoints
//!
//! - `/` - landing page
//! - `/health` - health check
//! - `/flavors` - list / create flavors
//! - `/ingredients`, `/ingredients/:id` - list / create / update stock
//! - `/suggestions` - submit / list customer suggestions

pub mod config;
pub mod errors;
pub mod flavor_routes;
pub mod ingredient_routes;
pub mod landing_routes;
pub mod response;
pub mod server;
pub mod state;
pub mod suggestion_routes;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use server::{build_router, HttpServer};
pub use state::ShopState;
