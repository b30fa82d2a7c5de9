pub mod error;
pub mod router;
pub mod routes;
pub mod state;
