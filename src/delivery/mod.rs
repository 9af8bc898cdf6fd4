// ============================================================================
// Delivery Layer - HTTP Transport
// ============================================================================
//
// - controller: routes bound to the use-case layer
// - server: builds the actix-web app and runs the listener
//
// ============================================================================

pub mod controller;
pub mod server;

pub use server::start_api_server;
