//! Integration tests for the clients, items and invoices resources.
//!
//! Tests cover:
//! - Client CRUD round trip (create, get, update, delete)
//! - Finders: exact match, no match, several matches, empty results
//! - Finders following the server's pages
//! - List paging and filter pass-through, and omission of unset parameters
//! - Page envelope decoding
//! - Partial updates sent as PATCH with only the provided fields
//! - Invoice dates and the client field mapping

mod common;

use chrono::NaiveDate;
use common::{juan, widget, TestServer};
use invoice_sdk::{
    ClientChanges, ClientFilters, InvoiceChanges, ItemChanges, ListParams, ResourceError,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

// ============================================================================
// Clients: CRUD round trip
// ============================================================================

#[test]
fn test_create_then_get_returns_equal_record() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path("/api/v1/clients/"))
            .and(body_json(json!({"name": "Juan Pérez", "email": "juan@example.com"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(juan())),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(juan())),
    );

    let sdk = server.client(None);
    let created = sdk
        .clients()
        .create("Juan Pérez", "juan@example.com")
        .unwrap();
    let fetched = sdk.clients().get(created.id).unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Juan Pérez");
    assert_eq!(fetched, created);
}

#[test]
fn test_get_by_email_returns_created_record() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .and(query_param("email", "juan@example.com"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([juan()]))),
    );

    let sdk = server.client(None);
    let found = sdk.clients().get_by_email("juan@example.com").unwrap();

    assert_eq!(found.id, 1);
    assert_eq!(found.email, "juan@example.com");
}

#[test]
fn test_update_preserves_id_and_sends_put() {
    let server = TestServer::start();
    let updated = json!({"id": 1, "name": "Juan P.", "email": "juan@example.com"});
    server.mount(
        Mock::given(method("PUT"))
            .and(path("/api/v1/clients/1/"))
            .and(body_json(json!({"name": "Juan P.", "email": "juan@example.com"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated.clone()))
            .expect(1),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(updated)),
    );

    let sdk = server.client(None);
    let record = sdk
        .clients()
        .update(1, "Juan P.", "juan@example.com")
        .unwrap();

    assert_eq!(record.id, 1);
    assert_eq!(record.name, "Juan P.");
    assert_eq!(sdk.clients().get(1).unwrap(), record);
}

#[test]
fn test_delete_then_get_is_not_found() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("DELETE"))
            .and(path("/api/v1/clients/1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/1/"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})),
            ),
    );

    let sdk = server.client(None);
    sdk.clients().delete(1).unwrap();
    let error = sdk.clients().get(1).unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "client", ref lookup } if lookup == "id 1"
    ));
}

#[test]
fn test_delete_missing_record_is_not_found() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("DELETE"))
            .and(path("/api/v1/items/99/"))
            .respond_with(ResponseTemplate::new(404)),
    );

    let sdk = server.client(None);
    let error = sdk.items().delete(99).unwrap_err();

    assert!(matches!(error, ResourceError::NotFound { resource: "item", .. }));
}

#[test]
fn test_partial_update_sends_patch_with_only_set_fields() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("PATCH"))
            .and(path("/api/v1/clients/1/"))
            .and(body_json(json!({"name": "Juan P."})))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"id": 1, "name": "Juan P.", "email": "juan@example.com"}),
            ))
            .expect(1),
    );

    let sdk = server.client(None);
    let changes = ClientChanges {
        name: Some("Juan P.".to_string()),
        ..Default::default()
    };
    let record = sdk.clients().partial_update(1, &changes).unwrap();

    assert_eq!(record.name, "Juan P.");
    assert_eq!(record.email, "juan@example.com");
}

// ============================================================================
// Finders
// ============================================================================

#[test]
fn test_get_by_email_ignores_inexact_matches() {
    let server = TestServer::start();
    // The backend ignores unknown filters and returns everything.
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 7, "name": "Ana", "email": "ana@example.com"},
                {"id": 8, "name": "Juan", "email": "JUAN@example.com"},
                {"id": 1, "name": "Juan Pérez", "email": "juan@example.com"}
            ]))),
    );

    let sdk = server.client(None);
    let found = sdk.clients().get_by_email("juan@example.com").unwrap();

    assert_eq!(found.id, 1);
}

#[test]
fn test_get_by_email_without_match_is_not_found() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([]))),
    );

    let sdk = server.client(None);
    let error = sdk.clients().get_by_email("nobody@example.com").unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "client", ref lookup }
            if lookup == "email nobody@example.com"
    ));
}

#[test]
fn test_get_by_email_with_duplicates_returns_first() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 3, "name": "Juan A", "email": "juan@example.com"},
                {"id": 1, "name": "Juan B", "email": "juan@example.com"}
            ]))),
    );

    let sdk = server.client(None);
    let found = sdk.clients().get_by_email("juan@example.com").unwrap();

    assert_eq!(found.id, 3);
}

#[test]
fn test_create_item_then_get_by_sku() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path("/api/v1/items/"))
            .and(body_json(json!({"name": "Widget", "sku": "W-1", "price": "9.99"})))
            .respond_with(ResponseTemplate::new(201).set_body_json(widget())),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/items/"))
            .and(query_param("sku", "W-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([widget()]))),
    );

    let sdk = server.client(None);
    let created = sdk.items().create("Widget", "W-1", 9.99).unwrap();
    let found = sdk.items().get_by_sku("W-1").unwrap();

    assert_eq!(created.price, "9.99");
    assert_eq!(found, created);
}

#[test]
fn test_get_by_sku_without_match_is_not_found() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/items/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([widget()]))),
    );

    let sdk = server.client(None);
    let error = sdk.items().get_by_sku("W-2").unwrap_err();

    assert!(matches!(error, ResourceError::NotFound { resource: "item", .. }));
}

#[test]
fn test_get_by_client_returns_all_matches() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/invoices/"))
            .and(query_param("client", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 10, "client": 1, "date": "2024-01-15"},
                {"id": 11, "client": 2, "date": "2024-01-16"},
                {"id": 12, "client": 1, "date": "2024-02-01"}
            ]))),
    );

    let sdk = server.client(None);
    let invoices = sdk.invoices().get_by_client(1).unwrap();

    let ids: Vec<u64> = invoices.iter().map(|invoice| invoice.id).collect();
    assert_eq!(ids, vec![10, 12]);
}

#[test]
fn test_get_by_client_without_invoices_is_empty() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/invoices/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 0,
                "next": null,
                "previous": null,
                "results": []
            }))),
    );

    let sdk = server.client(None);
    let invoices = sdk.invoices().get_by_client(42).unwrap();

    assert!(invoices.is_empty());
}

// ============================================================================
// Finders across pages
// ============================================================================

#[test]
fn test_get_by_sku_follows_next_page_and_stops_at_match() {
    let server = TestServer::start();
    let base = server.base_url();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/items/"))
            .and(query_param("page", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/items/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 3,
                "next": format!("{base}items/?page=3"),
                "previous": format!("{base}items/"),
                "results": [widget()]
            })))
            .expect(1),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/items/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 3,
                "next": format!("{base}items/?page=2"),
                "previous": null,
                "results": [{"id": 4, "name": "Gadget", "sku": "G-1", "price": "1.50"}]
            })))
            .expect(1),
    );

    let sdk = server.client(None);
    let found = sdk.items().get_by_sku("W-1").unwrap();

    assert_eq!(found.id, 5);
    assert_eq!(server.received_requests().len(), 2);
}

#[test]
fn test_get_by_email_reads_every_page_before_not_found() {
    let server = TestServer::start();
    let base = server.base_url();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": null,
                "previous": format!("{base}clients/"),
                "results": [{"id": 2, "name": "Ana", "email": "ana@example.com"}]
            })))
            .expect(1),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 2,
                "next": format!("{base}clients/?page=2"),
                "previous": null,
                "results": [juan()]
            })))
            .expect(1),
    );

    let sdk = server.client(None);
    let error = sdk.clients().get_by_email("nobody@example.com").unwrap_err();

    assert!(matches!(
        error,
        ResourceError::NotFound { resource: "client", ref lookup }
            if lookup == "email nobody@example.com"
    ));
}

#[test]
fn test_get_by_client_collects_matches_from_all_pages() {
    let server = TestServer::start();
    let base = server.base_url();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/invoices/"))
            .and(query_param("client", "1"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 3,
                "next": null,
                "previous": format!("{base}invoices/?client=1"),
                "results": [{"id": 12, "client": 1, "date": "2024-02-01"}]
            })))
            .expect(1),
    );
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/invoices/"))
            .and(query_param("client", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 3,
                "next": format!("{base}invoices/?client=1&page=2"),
                "previous": null,
                "results": [
                    {"id": 10, "client": 1, "date": "2024-01-15"},
                    {"id": 11, "client": 2, "date": "2024-01-16"}
                ]
            })))
            .expect(1),
    );

    let sdk = server.client(None);
    let invoices = sdk.invoices().get_by_client(1).unwrap();

    let ids: Vec<u64> = invoices.iter().map(|invoice| invoice.id).collect();
    assert_eq!(ids, vec![10, 12]);
}

// ============================================================================
// Listing
// ============================================================================

#[test]
fn test_list_passes_page_and_page_size() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/items/"))
            .and(query_param("page", "2"))
            .and(query_param("page_size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([widget()])))
            .expect(1),
    );

    let sdk = server.client(None);
    let items = sdk
        .items()
        .list(&ListParams::new().page(2).page_size(10))
        .unwrap();

    assert_eq!(items.len(), 1);
}

#[test]
fn test_list_without_params_sends_no_query() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([juan()]))),
    );

    let sdk = server.client(None);
    sdk.clients().list(&ListParams::new()).unwrap();

    let requests = server.received_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[test]
fn test_list_passes_typed_and_extra_filters() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .and(query_param("name", "Juan Pérez"))
            .and(query_param("ordering", "-id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([juan()])))
            .expect(1),
    );

    let sdk = server.client(None);
    let params = ListParams::new()
        .filters(ClientFilters {
            name: Some("Juan Pérez".to_string()),
            ..Default::default()
        })
        .filter("ordering", "-id");
    let clients = sdk.clients().list(&params).unwrap();

    assert_eq!(clients[0].name, "Juan Pérez");
}

#[test]
fn test_list_decodes_page_envelope() {
    let server = TestServer::start();
    let next = format!("{}clients/?page=2", server.base_url());
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/clients/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 3,
                "next": next,
                "previous": null,
                "results": [juan(), {"id": 2, "name": "Ana", "email": "ana@example.com"}]
            }))),
    );

    let sdk = server.client(None);
    let page = sdk.clients().list(&ListParams::new()).unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.count(), Some(3));
    assert_eq!(page.next(), Some(next.as_str()));
    assert!(!page.has_prev_page());
}

#[test]
fn test_list_accepts_envelope_with_extra_metadata() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/items/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "next": null,
                "previous": null,
                "total_pages": 1,
                "results": [widget()]
            }))),
    );

    let sdk = server.client(None);
    let page = sdk.items().list(&ListParams::new()).unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].sku, "W-1");
}

// ============================================================================
// Items and invoices
// ============================================================================

#[test]
fn test_item_update_and_partial_update() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("PUT"))
            .and(path("/api/v1/items/5/"))
            .and(body_json(json!({"name": "Widget XL", "sku": "W-1", "price": "12.50"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"id": 5, "name": "Widget XL", "sku": "W-1", "price": "12.50"}),
            )),
    );
    server.mount(
        Mock::given(method("PATCH"))
            .and(path("/api/v1/items/5/"))
            .and(body_json(json!({"price": "15.00"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                json!({"id": 5, "name": "Widget XL", "sku": "W-1", "price": "15.00"}),
            )),
    );

    let sdk = server.client(None);
    let updated = sdk.items().update(5, "Widget XL", "W-1", "12.50").unwrap();
    assert_eq!(updated.price, "12.50");

    let changes = ItemChanges {
        price: Some("15.00".to_string()),
        ..Default::default()
    };
    let patched = sdk.items().partial_update(5, &changes).unwrap();
    assert_eq!(patched.id, 5);
    assert_eq!(patched.price, "15.00");
}

#[test]
fn test_create_invoice_without_date_lets_server_choose() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path("/api/v1/invoices/"))
            .and(body_json(json!({"client": 1})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": 10, "client": 1, "date": "2024-06-01"})),
            )
            .expect(1),
    );

    let sdk = server.client(None);
    let invoice = sdk.invoices().create(1, None).unwrap();

    assert_eq!(invoice.client_id, 1);
    assert_eq!(invoice.date, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
}

#[test]
fn test_create_and_update_invoice_with_date() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("POST"))
            .and(path("/api/v1/invoices/"))
            .and(body_json(json!({"client": 1, "date": "2024-03-31"})))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({"id": 11, "client": 1, "date": "2024-03-31"})),
            ),
    );
    server.mount(
        Mock::given(method("PUT"))
            .and(path("/api/v1/invoices/11/"))
            .and(body_json(json!({"client": 2, "date": "2024-04-01"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 11, "client": 2, "date": "2024-04-01"})),
            ),
    );
    server.mount(
        Mock::given(method("PATCH"))
            .and(path("/api/v1/invoices/11/"))
            .and(body_json(json!({"date": "2024-04-02"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 11, "client": 2, "date": "2024-04-02"})),
            ),
    );

    let sdk = server.client(None);
    let created = sdk
        .invoices()
        .create(1, NaiveDate::from_ymd_opt(2024, 3, 31))
        .unwrap();
    let updated = sdk
        .invoices()
        .update(created.id, 2, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
        .unwrap();
    let patched = sdk
        .invoices()
        .partial_update(
            created.id,
            &InvoiceChanges {
                date: NaiveDate::from_ymd_opt(2024, 4, 2),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.client_id, 2);
    assert_eq!(patched.date, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap());
}

#[test]
fn test_invoice_get_with_nested_lines() {
    let server = TestServer::start();
    server.mount(
        Mock::given(method("GET"))
            .and(path("/api/v1/invoices/10/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 10,
                "client": 1,
                "date": "2024-06-01",
                "items": [
                    {"id": 100, "invoice": 10, "item": 5, "quantity": 3},
                    {"id": 101, "invoice": 10, "item": 6, "quantity": 1}
                ]
            }))),
    );

    let sdk = server.client(None);
    let invoice = sdk.invoices().get(10).unwrap();

    assert_eq!(invoice.items.len(), 2);
    assert_eq!(invoice.items[0].item, 5);
    assert_eq!(invoice.items[0].quantity, 3);
}
