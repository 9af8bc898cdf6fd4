mod customer_controller;
mod error;

pub use customer_controller::CustomerController;
pub use error::ErrorResponse;
