//! JSON HTTP front end over a [`PlannerContext`](crate::context::PlannerContext).

pub mod api;
pub mod models;
pub mod server;

pub use api::{create_router, AppState};
pub use server::{build_app, start_server, ServerConfig};
