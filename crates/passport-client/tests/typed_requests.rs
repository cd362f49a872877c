//! Read paths against a fake passport service.
//!
//! Typed reads must report status, transport and decode problems as
//! `ApiResult::Failure`; raw reads pass bodies through and only go absent when
//! the exchange never completes.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

#[expect(
    dead_code,
    reason = "Shared fake service exposes helpers used by other integration suites."
)]
mod support;

use passport_client::domain::ports::PassportApi;
use passport_client::domain::resources;
use passport_client::domain::{
    ApiResult, CircularityInfo, MaterialDetail, ProductSummary, RawJsonValue, SupplierDetail,
    TenantKey,
};
use passport_client::{DeploymentVariant, PassportClient};
use rstest::rstest;
use serde_json::json;
use support::{VALID_ADMIN_KEY, VALID_TENANT_KEY, spawn_fake_service, unreachable_base_url};

#[actix_rt::test]
async fn missing_product_yields_failure_with_status() {
    let service = spawn_fake_service();
    let client = service.client();
    assert!(client.authenticate(VALID_ADMIN_KEY).await);

    let result = client.get_typed::<ProductSummary>("/api/products/999").await;

    let message = result.message().expect("404 should be a failure");
    assert!(message.contains("404"), "message was: {message}");
    assert!(message.contains("not found"), "body should be embedded");

    service.stop().await;
}

#[actix_rt::test]
async fn decodes_fields_regardless_of_casing() {
    let service = spawn_fake_service();
    let client = service.client();
    assert!(client.authenticate(VALID_ADMIN_KEY).await);

    let product = client
        .get_typed::<ProductSummary>("/api/products/1")
        .await
        .into_value()
        .expect("product should decode");

    assert_eq!(product.id, 1);
    assert_eq!(product.product_name.as_deref(), Some("Field Jacket"));
    assert_eq!(product.brand.as_deref(), Some("North Loom"));

    service.stop().await;
}

#[rstest]
#[case::string_wire(1, json!("50"))]
#[case::number_wire(2, json!(50))]
#[case::boolean_wire(3, json!(true))]
#[actix_rt::test]
async fn raw_value_fields_accept_any_scalar(
    #[case] product_id: i64,
    #[case] wire: serde_json::Value,
) {
    let service = spawn_fake_service();
    let client = service.client();
    assert!(client.authenticate(VALID_ADMIN_KEY).await);

    let info: CircularityInfo = client
        .circularity_info(product_id)
        .await
        .into_value()
        .expect("circularity should decode");

    assert_eq!(
        serde_json::to_value(&info.recycled_percentage).expect("encode"),
        wire
    );
    assert_eq!(info.recycled, RawJsonValue::Text("yes".to_owned()));
    assert_eq!(info.recycled.as_bool(), Some(true));

    service.stop().await;
}

#[actix_rt::test]
async fn null_and_missing_lists_decode_as_empty() {
    let service = spawn_fake_service();
    let client = service.client();
    assert!(client.authenticate(VALID_ADMIN_KEY).await);

    let material: MaterialDetail = client
        .material(7)
        .await
        .into_value()
        .expect("material should decode");
    let supplier: SupplierDetail = client
        .supplier(9)
        .await
        .into_value()
        .expect("supplier should decode");

    assert!(material.compositions.is_empty());
    assert!(material.certifications.is_empty());
    assert!(supplier.certifications.is_empty());
    assert_eq!(supplier.supply_chain.len(), 1);

    service.stop().await;
}

#[rstest]
#[case::empty_body("/api/empty")]
#[case::truncated_json("/api/garbled")]
#[actix_rt::test]
async fn undecodable_success_bodies_are_failures(#[case] path: &str) {
    let service = spawn_fake_service();
    let client = service.client();
    assert!(client.authenticate(VALID_ADMIN_KEY).await);

    let result = client.get_typed::<ProductSummary>(path).await;

    assert!(
        result
            .message()
            .is_some_and(|message| message.starts_with("response decode failed")),
        "unexpected outcome: {result:?}"
    );

    service.stop().await;
}

#[actix_rt::test]
async fn transport_failures_never_escape() {
    let client = PassportClient::new(&unreachable_base_url()).expect("client should build");

    assert_eq!(client.get_raw("/api/anything").await, None);

    let typed = client.get_typed::<ProductSummary>("/api/products/1").await;
    assert!(
        typed
            .message()
            .is_some_and(|message| message.starts_with("transport failure")),
        "unexpected outcome: {typed:?}"
    );
}

#[actix_rt::test]
async fn raw_reads_pass_error_bodies_through() {
    let service = spawn_fake_service();
    let client = service.client();
    assert!(client.authenticate(VALID_ADMIN_KEY).await);

    let body = client
        .get_raw("/api/products/999")
        .await
        .expect("exchange completes");

    assert_eq!(body, r#"{"error":"not found"}"#);

    service.stop().await;
}

#[actix_rt::test]
async fn tenant_reads_carry_only_the_tenant_key() {
    let service = spawn_fake_service();
    let client = service.client();
    assert!(client.authenticate(VALID_ADMIN_KEY).await);

    let body = client
        .get_with_tenant_key(&resources::public_product(1), &TenantKey::new(VALID_TENANT_KEY))
        .await
        .expect("exchange completes");

    let product: ApiResult<ProductSummary> = passport_client::decode_json(&body);
    assert_eq!(
        product.value().and_then(|p| p.tenant_id.as_deref()),
        Some("tenant-a")
    );

    let reads = service.requests_to("/api/public/products/1");
    assert_eq!(reads[0].tenant_keys, [VALID_TENANT_KEY]);
    assert!(reads[0].admin_keys.is_empty());

    service.stop().await;
}

#[actix_rt::test]
async fn tenant_keys_are_not_cached_between_calls() {
    let service = spawn_fake_service();
    let client = service.client();

    let first = client
        .get_with_tenant_key("/api/public/products/1", &TenantKey::new(VALID_TENANT_KEY))
        .await
        .expect("exchange completes");
    let _ = client.get_raw("/api/products").await;

    assert!(first.contains("Field Jacket"));
    let followup = service.requests_to("/api/products");
    assert!(followup[0].tenant_keys.is_empty());

    service.stop().await;
}

#[actix_rt::test]
async fn admin_only_deployment_refuses_tenant_reads() {
    let service = spawn_fake_service();
    let client = service.client().with_variant(DeploymentVariant::AdminOnly);

    let body = client
        .get_with_tenant_key("/api/public/products/1", &TenantKey::new(VALID_TENANT_KEY))
        .await;

    assert_eq!(body, None);
    assert!(service.requests().is_empty(), "no request should be sent");

    service.stop().await;
}

#[actix_rt::test]
async fn collaborator_contract_is_usable_as_trait_object() {
    let service = spawn_fake_service();
    let api: Box<dyn PassportApi> = Box::new(service.client());

    assert!(api.authenticate(VALID_ADMIN_KEY.into()).await);
    let products = api.products().await;
    let missing = api.product(999).await;

    assert_eq!(products.value().map(Vec::len), Some(2));
    assert!(missing.is_failure());

    api.logout().await;
    assert!(!api.is_authenticated());

    service.stop().await;
}
