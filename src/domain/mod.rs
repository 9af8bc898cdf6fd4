// ============================================================================
// Domain Layer
// ============================================================================
//
// Plain domain records and the error kind shared by every layer. Nothing in
// here knows about HTTP or SQL beyond the row-decoding derive on the record.
//
// ============================================================================

pub mod customer;
