use serde::{Deserialize, Serialize};

// ============================================================================
// Customer Record
// ============================================================================

/// A registered customer.
///
/// `id` is assigned by the caller and is the primary key of the `customer`
/// table. The same shape is used for the JSON body and for row decoding, so
/// the column names must be exactly `id`, `name` and `address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub address: String,
}

impl Customer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
        }
    }
}
