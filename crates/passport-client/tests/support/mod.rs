//! Fake passport service for integration tests.
//!
//! A real Actix server on an ephemeral port records every request it sees and
//! answers from a small fixture table. Paths under `/api/` other than
//! `/api/public/` require the valid admin key; public paths require the valid
//! tenant key and reject any admin header.

use std::net::TcpListener;
use std::sync::Mutex;
use std::time::Duration;

use actix_web::dev::ServerHandle;
use actix_web::http::Method;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use passport_client::{ADMIN_KEY_HEADER, DeploymentVariant, PassportClient, TENANT_KEY_HEADER};
use serde_json::{Value, json};

pub(crate) const VALID_ADMIN_KEY: &str = "admin-secret";
pub(crate) const VALID_TENANT_KEY: &str = "tenant-a-key";
/// Answers only after [`SLOW_RESPONSE_DELAY`].
pub(crate) const SLOW_PATH: &str = "/api/slow";
pub(crate) const SLOW_RESPONSE_DELAY: Duration = Duration::from_millis(750);
/// Redirects to `/api/products` on the same service.
pub(crate) const MOVED_PATH: &str = "/api/moved";

/// One request observed by the fake service.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub(crate) method: String,
    pub(crate) path: String,
    pub(crate) admin_keys: Vec<String>,
    pub(crate) tenant_keys: Vec<String>,
    pub(crate) accept: Option<String>,
    pub(crate) body: String,
}

#[derive(Default)]
struct ServiceState {
    requests: Mutex<Vec<RecordedRequest>>,
}

pub(crate) struct FakeService {
    pub(crate) base_url: String,
    handle: ServerHandle,
    state: web::Data<ServiceState>,
}

impl FakeService {
    /// Client bound to this service, multi-tenant so every path is reachable.
    pub(crate) fn client(&self) -> PassportClient {
        PassportClient::new(&self.base_url)
            .expect("client should build")
            .with_variant(DeploymentVariant::MultiTenant)
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().expect("request log").clone()
    }

    pub(crate) fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }

    pub(crate) async fn stop(self) {
        self.handle.stop(true).await;
    }
}

pub(crate) fn spawn_fake_service() -> FakeService {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake service");
    let addr = listener.local_addr().expect("fake service address");
    let state = web::Data::new(ServiceState::default());
    let app_state = state.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .default_service(web::to(handle))
    })
    .disable_signals()
    .workers(1)
    .listen(listener)
    .expect("listen on fake service socket")
    .run();

    let handle = server.handle();
    actix_web::rt::spawn(server);

    FakeService {
        base_url: format!("http://{addr}"),
        handle,
        state,
    }
}

/// Base URL of a port nothing listens on.
pub(crate) fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("reserve port");
    let addr = listener.local_addr().expect("reserved address");
    drop(listener);
    format!("http://{addr}")
}

fn header_values(request: &HttpRequest, name: &str) -> Vec<String> {
    request
        .headers()
        .get_all(name)
        .filter_map(|value| value.to_str().ok())
        .map(str::to_owned)
        .collect()
}

async fn handle(
    request: HttpRequest,
    body: web::Bytes,
    state: web::Data<ServiceState>,
) -> HttpResponse {
    let recorded = RecordedRequest {
        method: request.method().to_string(),
        path: request.path().to_owned(),
        admin_keys: header_values(&request, ADMIN_KEY_HEADER),
        tenant_keys: header_values(&request, TENANT_KEY_HEADER),
        accept: header_values(&request, "Accept").into_iter().next(),
        body: String::from_utf8_lossy(&body).into_owned(),
    };
    state
        .requests
        .lock()
        .expect("request log")
        .push(recorded.clone());

    if recorded.path == SLOW_PATH {
        actix_web::rt::time::sleep(SLOW_RESPONSE_DELAY).await;
    }
    if let Some(rejection) = authorize(&recorded) {
        return rejection;
    }
    respond(request.method(), &recorded)
}

fn authorize(request: &RecordedRequest) -> Option<HttpResponse> {
    let unauthorized = || HttpResponse::Unauthorized().json(json!({ "error": "unauthorized" }));
    if request.path.starts_with("/api/public/") {
        let tenant_ok = request.tenant_keys == [VALID_TENANT_KEY];
        return (!tenant_ok || !request.admin_keys.is_empty()).then(unauthorized);
    }
    if request.path.starts_with("/api/") && request.admin_keys != [VALID_ADMIN_KEY] {
        return Some(unauthorized());
    }
    None
}

fn respond(method: &Method, request: &RecordedRequest) -> HttpResponse {
    match (method.as_str(), request.path.as_str()) {
        ("GET", "/api/admin/stats") => HttpResponse::Ok().json(json!({ "products": 2 })),
        ("GET", "/api/products") => HttpResponse::Ok().json(json!([
            { "id": 1, "product_name": "Field Jacket", "brand": "North Loom" },
            { "id": 2, "product_name": "Rain Shell" }
        ])),
        ("GET", "/api/products/1") => HttpResponse::Ok().json(json!({
            "Id": 1,
            "Product_Name": "Field Jacket",
            "BRAND": "North Loom",
            "unknown_extra": { "nested": true }
        })),
        ("GET", "/api/products/1/circularity") => circularity(json!("50")),
        ("GET", "/api/products/2/circularity") => circularity(json!(50)),
        ("GET", "/api/products/3/circularity") => circularity(json!(true)),
        ("GET", "/api/materials/7") => HttpResponse::Ok().json(json!({
            "id": 7,
            "material_name": "Canvas",
            "compositions": null
        })),
        ("GET", "/api/suppliers/9") => HttpResponse::Ok().json(json!({
            "id": 9,
            "supplier_name": "Porto Stitch",
            "supply_chain": [{ "id": 4, "supplier_name": "Anatolia Spinning" }]
        })),
        ("GET", "/api/empty") => HttpResponse::Ok().finish(),
        ("GET", "/api/garbled") => HttpResponse::Ok()
            .content_type("application/json")
            .body("{\"id\": "),
        ("GET", "/api/public/products/1") => HttpResponse::Ok().json(json!({
            "id": 1,
            "product_name": "Field Jacket",
            "tenant_id": "tenant-a"
        })),
        ("POST" | "PUT", "/api/products") => {
            let received: Value =
                serde_json::from_str(&request.body).unwrap_or(Value::String(request.body.clone()));
            HttpResponse::Ok().json(json!({ "success": true, "received": received }))
        }
        ("GET", MOVED_PATH) => HttpResponse::TemporaryRedirect()
            .insert_header(("Location", "/api/products"))
            .json(json!({ "error": "moved" })),
        ("GET" | "POST", SLOW_PATH) => HttpResponse::Ok().json(json!({ "id": 1 })),
        ("DELETE", "/api/products/1") => HttpResponse::Ok().json(json!({ "success": true })),
        _ => HttpResponse::NotFound().json(json!({ "error": "not found" })),
    }
}

fn circularity(recycled_percentage: Value) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "product_id": 1,
        "recycled": "yes",
        "recycled_percentage": recycled_percentage
    }))
}
