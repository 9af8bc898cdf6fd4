use actix_web::{web, HttpResponse};
use std::sync::Arc;

use super::error::json_binding_error;
use crate::domain::customer::{Customer, CustomerError};
use crate::usecase::CustomerUseCase;

// ============================================================================
// Customer Controller
// ============================================================================
//
// GET  /customer  -> 200 [customer, ...]   | 500 {"Err": ...}
// POST /customer  -> 200 customer          | 400 / 500 {"Err": ...}
//
// The app itself is built elsewhere; the controller only registers its routes
// into the `ServiceConfig` it is handed.
//
// ============================================================================

pub struct CustomerController {
    use_case: Arc<dyn CustomerUseCase>,
}

impl CustomerController {
    pub fn new(use_case: Arc<dyn CustomerUseCase>) -> Self {
        Self { use_case }
    }

    pub fn configure(self, cfg: &mut web::ServiceConfig) {
        cfg.service(
            web::resource("/customer")
                .app_data(web::Data::from(self.use_case))
                .app_data(
                    web::JsonConfig::default()
                        .content_type_required(false)
                        .error_handler(json_binding_error),
                )
                .route(web::get().to(get_all_customer))
                .route(web::post().to(register_customer)),
        );
    }
}

async fn get_all_customer(
    use_case: web::Data<dyn CustomerUseCase>,
) -> Result<HttpResponse, CustomerError> {
    let customers = use_case.get_all_customer().await.map_err(|e| {
        tracing::warn!(error = %e, "Listing customers failed");
        e
    })?;

    tracing::info!(count = customers.len(), "Listed customers");
    Ok(HttpResponse::Ok().json(customers))
}

async fn register_customer(
    use_case: web::Data<dyn CustomerUseCase>,
    payload: web::Json<Customer>,
) -> Result<HttpResponse, CustomerError> {
    let customer = payload.into_inner();

    use_case.register_customer(&customer).await.map_err(|e| {
        tracing::warn!(customer_id = %customer.id, error = %e, "Registering customer failed");
        e
    })?;

    tracing::info!(customer_id = %customer.id, "✅ Registered customer");
    Ok(HttpResponse::Ok().json(customer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::controller::ErrorResponse;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ========================================================================
    // Use-case test double
    // ========================================================================

    #[derive(Default)]
    struct CustomerUseCaseMock {
        fail_with: Option<String>,
        customers: Vec<Customer>,
        registered: Mutex<Vec<Customer>>,
    }

    impl CustomerUseCaseMock {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Default::default()
            }
        }

        fn outcome(&self) -> Result<(), CustomerError> {
            match &self.fail_with {
                Some(message) => Err(CustomerError::new(message.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl CustomerUseCase for CustomerUseCaseMock {
        async fn register_customer(&self, customer: &Customer) -> Result<(), CustomerError> {
            self.registered.lock().unwrap().push(customer.clone());
            self.outcome()
        }

        async fn find_customer_by_id(&self, id: &str) -> Result<Customer, CustomerError> {
            self.outcome()?;
            self.customers
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or_else(|| CustomerError::new("not found"))
        }

        async fn get_all_customer(&self) -> Result<Vec<Customer>, CustomerError> {
            self.outcome()?;
            Ok(self.customers.clone())
        }
    }

    fn dummy_customer() -> Customer {
        Customer::new("C001", "Dummy Name 1", "Dummy Address 1")
    }

    macro_rules! init_app {
        ($use_case:expr) => {{
            let use_case: Arc<dyn CustomerUseCase> = $use_case;
            test::init_service(
                App::new().configure(move |cfg| CustomerController::new(use_case).configure(cfg)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_get_all_customer_api_success() {
        let use_case = Arc::new(CustomerUseCaseMock {
            customers: vec![dummy_customer()],
            ..Default::default()
        });
        let app = init_app!(use_case);

        let req = test::TestRequest::get().uri("/customer").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let customers: Vec<Customer> = test::read_body_json(resp).await;
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Dummy Name 1");
    }

    #[actix_web::test]
    async fn test_get_all_customer_api_empty_is_array() {
        let app = init_app!(Arc::new(CustomerUseCaseMock::default()));

        let req = test::TestRequest::get().uri("/customer").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"[]");
    }

    #[actix_web::test]
    async fn test_get_all_customer_api_failed() {
        let app = init_app!(Arc::new(CustomerUseCaseMock::failing("failed")));

        let req = test::TestRequest::get().uri("/customer").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body, ErrorResponse::new("failed"));
    }

    #[actix_web::test]
    async fn test_register_customer_api_success() {
        let use_case = Arc::new(CustomerUseCaseMock::default());
        let app = init_app!(use_case.clone());

        let req = test::TestRequest::post()
            .uri("/customer")
            .set_json(dummy_customer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let customer: Customer = test::read_body_json(resp).await;
        assert_eq!(customer, dummy_customer());
        assert_eq!(*use_case.registered.lock().unwrap(), vec![dummy_customer()]);
    }

    #[actix_web::test]
    async fn test_register_customer_api_without_content_type() {
        let use_case = Arc::new(CustomerUseCaseMock::default());
        let app = init_app!(use_case.clone());

        let req = test::TestRequest::post()
            .uri("/customer")
            .set_payload(serde_json::to_vec(&dummy_customer()).unwrap())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(use_case.registered.lock().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_register_customer_api_failed_binding() {
        let use_case = Arc::new(CustomerUseCaseMock::default());
        let app = init_app!(use_case.clone());

        // No body at all
        let req = test::TestRequest::post().uri("/customer").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(!body.err.is_empty());
        assert!(use_case.registered.lock().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_register_customer_api_malformed_json() {
        let app = init_app!(Arc::new(CustomerUseCaseMock::default()));

        let req = test::TestRequest::post()
            .uri("/customer")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"id\": \"C001\",")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(!body.err.is_empty());
    }

    #[actix_web::test]
    async fn test_register_customer_api_failed_use_case() {
        let use_case = Arc::new(CustomerUseCaseMock::failing("failed"));
        let app = init_app!(use_case.clone());

        let req = test::TestRequest::post()
            .uri("/customer")
            .set_json(dummy_customer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], br#"{"Err":"failed"}"#);
        assert_eq!(*use_case.registered.lock().unwrap(), vec![dummy_customer()]);
    }

    #[actix_web::test]
    async fn test_post_then_get_through_real_layers() {
        use crate::config::DatabaseConfig;
        use crate::db;
        use crate::repository::CustomerDbRepository;
        use crate::usecase::CustomerUseCaseImpl;

        let pool = db::connect(&DatabaseConfig::default()).await.unwrap();
        db::ensure_schema(&pool).await.unwrap();
        let repository = Arc::new(CustomerDbRepository::new(pool));
        let app = init_app!(Arc::new(CustomerUseCaseImpl::new(repository)));

        let req = test::TestRequest::post()
            .uri("/customer")
            .set_json(dummy_customer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/customer").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        assert_eq!(
            &body[..],
            br#"[{"id":"C001","name":"Dummy Name 1","address":"Dummy Address 1"}]"#
        );

        // Same id again violates the primary key
        let req = test::TestRequest::post()
            .uri("/customer")
            .set_json(dummy_customer())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(!body.err.is_empty());
    }
}
