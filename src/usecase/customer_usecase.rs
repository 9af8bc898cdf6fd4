use async_trait::async_trait;
use std::sync::Arc;

use super::CustomerUseCase;
use crate::domain::customer::{Customer, CustomerError};
use crate::repository::CustomerRepository;

pub struct CustomerUseCaseImpl {
    repository: Arc<dyn CustomerRepository>,
}

impl CustomerUseCaseImpl {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CustomerUseCase for CustomerUseCaseImpl {
    async fn register_customer(&self, customer: &Customer) -> Result<(), CustomerError> {
        self.repository.create(customer).await
    }

    async fn find_customer_by_id(&self, id: &str) -> Result<Customer, CustomerError> {
        self.repository.find_by_id(id).await
    }

    async fn get_all_customer(&self) -> Result<Vec<Customer>, CustomerError> {
        self.repository.retrieve_all().await
    }
}
