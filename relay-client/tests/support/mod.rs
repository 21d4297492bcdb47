// Shared fixtures for relay-client integration tests
#![allow(dead_code)]

use relay_client::{RelayClient, RelayService};
use relay_api::ReqwestClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn service_for(server: &MockServer) -> RelayService {
    let http = ReqwestClient::new("test-key").unwrap();
    RelayService::new(RelayClient::new(http, &server.uri()))
}

pub fn relay_address(id: i64) -> Value {
    json!({
        "id": id,
        "address": format!("r{}", id),
        "domain": 2,
        "full_address": format!("r{}@mozmail.com", id),
        "enabled": true,
        "description": "",
        "generated_for": "",
        "used_on": "",
        "block_list_emails": false,
        "created_at": "2026-01-01T00:00:00Z",
        "last_used_at": null,
        "num_forwarded": 0,
        "num_blocked": 0,
        "num_replied": 0,
        "num_spam": 0
    })
}

pub fn domain_address(id: i64) -> Value {
    json!({
        "id": id,
        "address": format!("c{}", id),
        "full_address": format!("c{}@me.mozmail.com", id),
        "enabled": true,
        "description": "custom",
        "block_list_emails": false,
        "created_at": "2026-01-01T00:00:00Z",
        "last_used_at": "2026-01-05T12:30:00Z",
        "num_forwarded": 1,
        "num_blocked": 0,
        "num_replied": 0,
        "num_spam": 0
    })
}

pub fn profile(has_premium: bool) -> Value {
    json!({
        "id": 1,
        "server_storage": true,
        "subdomain": if has_premium { json!("me") } else { Value::Null },
        "has_premium": has_premium,
        "has_phone": has_premium,
        "onboarding_state": 3,
        "date_subscribed": null,
        "avatar": "https://avatars.example/1.png",
        "emails_blocked": 0,
        "emails_forwarded": 12,
        "emails_replied": 1,
        "level_one_trackers_blocked": 4,
        "remove_level_one_email_trackers": false,
        "at_mask_limit": false,
        "bounce_status": [false, ""]
    })
}

pub fn relay_number(id: i64) -> Value {
    json!({
        "id": id,
        "number": "+15550001234",
        "enabled": true,
        "location": "Springfield",
        "vendor_id": "PN123",
        "country_code": "US",
        "created_at": null,
        "remaining_texts": 75,
        "remaining_minutes": 50,
        "calls_forwarded": 2,
        "calls_blocked": 0,
        "texts_forwarded": 5,
        "texts_blocked": 1
    })
}

pub fn inbound_contact(id: i64) -> Value {
    json!({
        "id": id,
        "relay_number": 1,
        "inbound_number": "+18001234567",
        "last_inbound_date": "2026-01-01T19:20:37.224184Z",
        "last_inbound_type": "call",
        "num_calls": 1,
        "num_calls_blocked": 0,
        "last_call_date": "2026-01-01T19:20:37.224184Z",
        "num_texts": 0,
        "num_texts_blocked": 0,
        "last_text_date": null,
        "blocked": false
    })
}

pub async fn mount_get(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}
