// ============================================================================
// Use-Case Layer - Business Operations
// ============================================================================
//
// The seam between transport and persistence. The controller depends on
// `CustomerUseCase`; the implementation depends on `CustomerRepository`. No
// rules live here yet, errors pass through untouched.
//
// ============================================================================

pub mod customer_usecase;

use async_trait::async_trait;

use crate::domain::customer::{Customer, CustomerError};

pub use customer_usecase::CustomerUseCaseImpl;

#[async_trait]
pub trait CustomerUseCase: Send + Sync {
    async fn register_customer(&self, customer: &Customer) -> Result<(), CustomerError>;
    async fn find_customer_by_id(&self, id: &str) -> Result<Customer, CustomerError>;
    async fn get_all_customer(&self) -> Result<Vec<Customer>, CustomerError>;
}
