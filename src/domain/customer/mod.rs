// ============================================================================
// Customer Domain
// ============================================================================
//
// - Customer record (id, name, address)
// - CustomerError, the single error kind propagated from storage to HTTP
//
// ============================================================================

pub mod model;
pub mod errors;

// Re-export for convenience
pub use model::*;
pub use errors::*;
