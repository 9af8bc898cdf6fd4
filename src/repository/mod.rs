// ============================================================================
// Repository Layer - Persistence Access
// ============================================================================
//
// The use-case layer only sees `CustomerRepository`. The production
// implementation talks SQL through an sqlx pool; tests substitute their own.
//
// ============================================================================

pub mod customer_db_repository;

use async_trait::async_trait;

use crate::domain::customer::{Customer, CustomerError};

pub use customer_db_repository::CustomerDbRepository;

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert one new customer row
    async fn create(&self, customer: &Customer) -> Result<(), CustomerError>;

    /// All customers, in whatever order the store scans them
    async fn retrieve_all(&self) -> Result<Vec<Customer>, CustomerError>;

    /// The one customer with this id
    async fn find_by_id(&self, id: &str) -> Result<Customer, CustomerError>;
}
