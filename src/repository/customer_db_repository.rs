use async_trait::async_trait;
use sqlx::AnyPool;

use super::CustomerRepository;
use crate::domain::customer::{Customer, CustomerError};

const INSERT_CUSTOMER: &str = "insert into customer values ($1, $2, $3)";
const SELECT_ALL_CUSTOMERS: &str = "select * from customer";
const SELECT_CUSTOMER_BY_ID: &str = "select * from customer where id = $1";

// ============================================================================
// SQL Customer Repository
// ============================================================================
//
// Rows are decoded by column name into `Customer`. A result set whose columns
// are not (id, name, address) fails the whole call. Nothing is retried; the
// driver's error is handed back as-is.
//
// ============================================================================

pub struct CustomerDbRepository {
    pool: AnyPool,
}

impl CustomerDbRepository {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for CustomerDbRepository {
    async fn create(&self, customer: &Customer) -> Result<(), CustomerError> {
        tracing::debug!(customer_id = %customer.id, "Inserting customer");

        sqlx::query(INSERT_CUSTOMER)
            .bind(customer.id.as_str())
            .bind(customer.name.as_str())
            .bind(customer.address.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(customer_id = %customer.id, error = %e, "Insert failed");
                CustomerError::from(e)
            })?;

        Ok(())
    }

    async fn retrieve_all(&self) -> Result<Vec<Customer>, CustomerError> {
        let customers = sqlx::query_as::<_, Customer>(SELECT_ALL_CUSTOMERS)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Select all customers failed");
                CustomerError::from(e)
            })?;

        tracing::debug!(count = customers.len(), "Loaded customers");
        Ok(customers)
    }

    async fn find_by_id(&self, id: &str) -> Result<Customer, CustomerError> {
        tracing::debug!(customer_id = %id, "Looking up customer");

        sqlx::query_as::<_, Customer>(SELECT_CUSTOMER_BY_ID)
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(customer_id = %id, error = %e, "Select customer failed");
                CustomerError::from(e)
            })
    }
}
