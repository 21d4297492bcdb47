mod support;

use relay_client::{ExportGroup, RelayError};
use serde_json::json;
use support::*;
use wiremock::MockServer;

async fn mount_all(server: &MockServer) {
    mount_get(server, "/api/v1/relayaddresses/", 200, json!([relay_address(1)])).await;
    mount_get(server, "/api/v1/domainaddresses/", 200, json!([domain_address(2)])).await;
    mount_get(server, "/api/v1/relaynumber/", 200, json!([relay_number(3)])).await;
    mount_get(server, "/api/v1/profiles/", 200, json!([profile(true)])).await;
    let contacts = json!([inbound_contact(4), inbound_contact(5)]);
    mount_get(server, "/api/v1/inboundcontact/", 200, contacts).await;
    mount_get(server, "/api/v1/users/", 200, json!([{"email": "someone@example.com"}])).await;
}

#[tokio::test]
async fn export_collects_every_group() {
    let server = MockServer::start().await;
    mount_all(&server).await;

    let data = service_for(&server).export().await.unwrap();
    assert_eq!(data.masks.len(), 2);
    assert_eq!(data.masks[0].label(), "random");
    assert_eq!(data.masks[1].label(), "custom");
    assert_eq!(data.phones.len(), 1);
    assert_eq!(data.profiles.len(), 1);
    assert_eq!(data.contacts.len(), 2);
    assert_eq!(data.users[0].email, "someone@example.com");
}

#[tokio::test]
async fn export_reports_each_failed_group() {
    let server = MockServer::start().await;
    mount_get(&server, "/api/v1/relayaddresses/", 200, json!([relay_address(1)])).await;
    mount_get(&server, "/api/v1/domainaddresses/", 200, json!([])).await;
    let no_phone = json!({"detail": "Phone subscription required"});
    mount_get(&server, "/api/v1/relaynumber/", 403, no_phone).await;
    mount_get(&server, "/api/v1/profiles/", 200, json!([profile(false)])).await;
    let no_number = json!({"detail": "No RelayNumber matches the given query."});
    mount_get(&server, "/api/v1/inboundcontact/", 404, no_number).await;
    mount_get(&server, "/api/v1/users/", 200, json!([])).await;

    let err = service_for(&server).export().await.unwrap_err();
    assert_eq!(err.failures.len(), 2);
    assert_eq!(err.to_string(), "failed to export data: 2 error(s) occurred");

    let groups: Vec<ExportGroup> = err.failures.iter().map(|f| f.group).collect();
    assert!(groups.contains(&ExportGroup::Phones));
    assert!(groups.contains(&ExportGroup::Contacts));
    assert!(err
        .failures
        .iter()
        .all(|f| matches!(f.source, RelayError::Api { .. })));
}

#[tokio::test]
async fn export_decode_failure_counts_as_group_failure() {
    let server = MockServer::start().await;
    mount_get(&server, "/api/v1/relayaddresses/", 200, json!([])).await;
    mount_get(&server, "/api/v1/domainaddresses/", 200, json!([])).await;
    mount_get(&server, "/api/v1/relaynumber/", 200, json!([])).await;
    mount_get(&server, "/api/v1/inboundcontact/", 200, json!([])).await;
    mount_get(&server, "/api/v1/users/", 200, json!([])).await;
    let mut broken = profile(true);
    broken["bounce_status"] = json!([true]);
    mount_get(&server, "/api/v1/profiles/", 200, json!([broken])).await;

    let err = service_for(&server).export().await.unwrap_err();
    assert_eq!(err.failures.len(), 1);
    assert_eq!(err.failures[0].group, ExportGroup::Profiles);
    assert!(matches!(err.failures[0].source, RelayError::Decode(_)));
}

#[tokio::test]
async fn export_of_empty_account_succeeds() {
    let server = MockServer::start().await;
    for route in [
        "/api/v1/relayaddresses/",
        "/api/v1/domainaddresses/",
        "/api/v1/relaynumber/",
        "/api/v1/profiles/",
        "/api/v1/inboundcontact/",
        "/api/v1/users/",
    ] {
        mount_get(&server, route, 200, json!([])).await;
    }

    let data = service_for(&server).export().await.unwrap();
    assert!(data.masks.is_empty());
    assert!(data.users.is_empty());
}
