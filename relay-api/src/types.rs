// relay-api/src/types.rs
use chrono::{DateTime, Utc};
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Random email mask (`relayaddresses/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayAddress {
    pub id: i64,
    pub address: String,
    pub domain: i64,
    pub full_address: String,
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub generated_for: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub used_on: String,
    pub block_list_emails: bool,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub num_forwarded: u64,
    pub num_blocked: u64,
    pub num_replied: u64,
    pub num_spam: u64,
}

/// Custom-domain email mask (`domainaddresses/`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainAddress {
    pub id: i64,
    pub address: String,
    pub full_address: String,
    pub enabled: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub block_list_emails: bool,
    pub created_at: DateTime<Utc>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub num_forwarded: u64,
    pub num_blocked: u64,
    pub num_replied: u64,
    pub num_spam: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateRelayAddressRequest {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_for: Option<String>,
    pub block_list_emails: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_on: Option<String>,
}

/// PATCH payload: absent fields are left untouched server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateRelayAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_list_emails: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_on: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateDomainAddressRequest {
    /// Local part; the user's subdomain supplies the rest
    pub address: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub block_list_emails: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateDomainAddressRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_list_emails: Option<bool>,
}

/// Phone mask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayNumber {
    pub id: i64,
    pub number: String,
    pub enabled: bool,
    pub location: String,
    pub vendor_id: String,
    pub country_code: String,
    pub created_at: Option<DateTime<Utc>>,
    pub remaining_texts: i64,
    pub remaining_minutes: i64,
    pub calls_forwarded: u64,
    pub calls_blocked: u64,
    pub texts_forwarded: u64,
    pub texts_blocked: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateRelayNumberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// A number offered for a new phone mask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneNumberOption {
    pub phone_number: String,
    pub locality: Option<String>,
    pub region: String,
    pub iso_country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelayNumberSuggestions {
    #[serde(default)]
    pub real_num: Option<String>,
    #[serde(default)]
    pub same_prefix_options: Vec<PhoneNumberOption>,
    #[serde(default)]
    pub other_areas_options: Vec<PhoneNumberOption>,
    #[serde(default)]
    pub same_area_options: Vec<PhoneNumberOption>,
    #[serde(default)]
    pub random_options: Vec<PhoneNumberOption>,
}

impl RelayNumberSuggestions {
    pub fn is_empty(&self) -> bool {
        self.same_prefix_options.is_empty()
            && self.other_areas_options.is_empty()
            && self.same_area_options.is_empty()
            && self.random_options.is_empty()
    }
}

/// Forwarding number: the user's own phone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealPhone {
    pub id: i64,
    pub number: String,
    pub verification_sent_date: Option<DateTime<Utc>>,
    pub verified: bool,
    pub verified_date: Option<DateTime<Utc>>,
    pub country_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRealPhoneRequest {
    /// E.164, e.g. `+15551234567`
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifyRealPhoneRequest {
    pub number: String,
    pub verification_code: String,
}

/// Someone who called or texted a phone mask
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InboundContact {
    pub id: i64,
    pub relay_number: i64,
    pub inbound_number: String,
    pub last_inbound_date: DateTime<Utc>,
    pub last_inbound_type: String,
    pub num_calls: u64,
    pub num_calls_blocked: u64,
    pub last_call_date: Option<DateTime<Utc>>,
    pub num_texts: u64,
    pub num_texts_blocked: u64,
    pub last_text_date: Option<DateTime<Utc>>,
    pub blocked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateInboundContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub server_storage: bool,
    pub subdomain: Option<String>,
    pub has_premium: bool,
    pub has_phone: bool,
    pub onboarding_state: u32,
    pub date_subscribed: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub avatar: String,
    pub emails_blocked: u64,
    pub emails_forwarded: u64,
    pub emails_replied: u64,
    pub level_one_trackers_blocked: u64,
    pub remove_level_one_email_trackers: bool,
    pub at_mask_limit: bool,
    pub bounce_status: BounceStatus,
}

/// Forwarding suspension after bounces. On the wire this is the pair
/// `[paused, type]`, never an object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BounceStatus {
    pub paused: bool,
    pub kind: String,
}

impl Serialize for BounceStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.paused, &self.kind).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BounceStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<serde_json::Value>::deserialize(deserializer)?;
        if raw.len() != 2 {
            return Err(D::Error::custom(format!(
                "bounce_status: expected array of length 2, got {}",
                raw.len()
            )));
        }
        let paused = raw[0].as_bool().ok_or_else(|| {
            D::Error::custom(format!("bounce_status[0]: expected bool, got {}", raw[0]))
        })?;
        let kind = raw[1].as_str().ok_or_else(|| {
            D::Error::custom(format!("bounce_status[1]: expected string, got {}", raw[1]))
        })?;
        Ok(Self {
            paused,
            kind: kind.to_string(),
        })
    }
}

/// Older records carry `null` where newer ones have an empty string
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn relay_address_json() -> serde_json::Value {
        json!({
            "id": 101,
            "address": "abc123",
            "domain": 2,
            "full_address": "abc123@mozmail.com",
            "enabled": true,
            "description": "Shopping",
            "generated_for": "shop.example",
            "used_on": "",
            "block_list_emails": false,
            "created_at": "2026-01-01T19:20:37.224184Z",
            "last_used_at": null,
            "num_forwarded": 4,
            "num_blocked": 1,
            "num_replied": 0,
            "num_spam": 0
        })
    }

    #[test]
    fn test_bounce_status_serializes_as_pair() {
        let status = BounceStatus {
            paused: true,
            kind: "soft".to_string(),
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value, json!([true, "soft"]));

        let back: BounceStatus = serde_json::from_value(value).unwrap();
        assert_eq!(back, status);
    }

    #[test]
    fn test_bounce_status_rejects_wrong_length() {
        assert!(serde_json::from_value::<BounceStatus>(json!([false])).is_err());
        assert!(serde_json::from_value::<BounceStatus>(json!([false, "", "x"])).is_err());
        assert!(serde_json::from_value::<BounceStatus>(json!([])).is_err());
    }

    #[test]
    fn test_bounce_status_rejects_wrong_types() {
        assert!(serde_json::from_value::<BounceStatus>(json!(["soft", true])).is_err());
        assert!(serde_json::from_value::<BounceStatus>(json!([1, "soft"])).is_err());
        assert!(
            serde_json::from_value::<BounceStatus>(json!({"paused": true, "type": "soft"})).is_err()
        );
    }

    #[test]
    fn test_null_timestamp_round_trips() {
        let address: RelayAddress = serde_json::from_value(relay_address_json()).unwrap();
        assert_eq!(address.last_used_at, None);

        let encoded = serde_json::to_value(&address).unwrap();
        assert_eq!(encoded["last_used_at"], serde_json::Value::Null);
        assert_eq!(encoded, relay_address_json());
    }

    #[test]
    fn test_present_timestamp_round_trips() {
        let mut raw = relay_address_json();
        raw["last_used_at"] = json!("2026-01-03T08:00:00Z");
        let address: RelayAddress = serde_json::from_value(raw).unwrap();
        assert!(address.last_used_at.is_some());

        let encoded = serde_json::to_string(&address).unwrap();
        let back: RelayAddress = serde_json::from_str(&encoded).unwrap();
        assert_eq!(back, address);
    }

    #[test]
    fn test_contact_nullable_dates() {
        let contact: InboundContact = serde_json::from_value(json!({
            "id": 1,
            "relay_number": 1,
            "inbound_number": "+18001234560",
            "last_inbound_date": "2026-01-07T19:20:37.224184Z",
            "last_inbound_type": "call",
            "num_calls": 1,
            "num_calls_blocked": 0,
            "last_call_date": null,
            "num_texts": 0,
            "num_texts_blocked": 0,
            "last_text_date": null,
            "blocked": false
        }))
        .unwrap();
        assert!(contact.last_call_date.is_none());
        assert!(contact.last_text_date.is_none());

        let encoded = serde_json::to_value(&contact).unwrap();
        assert!(encoded["last_call_date"].is_null());
        assert!(encoded["last_text_date"].is_null());

        let back: InboundContact = serde_json::from_value(encoded).unwrap();
        assert_eq!(back, contact);
    }

    #[test]
    fn test_null_text_fields_decode_as_empty() {
        let mut raw = relay_address_json();
        raw["used_on"] = serde_json::Value::Null;
        raw["generated_for"] = serde_json::Value::Null;
        raw["description"] = serde_json::Value::Null;
        let address: RelayAddress = serde_json::from_value(raw).unwrap();
        assert_eq!(address.used_on, "");
        assert_eq!(address.generated_for, "");
        assert_eq!(address.description, "");

        let mut raw = relay_address_json();
        raw.as_object_mut().unwrap().remove("used_on");
        let address: RelayAddress = serde_json::from_value(raw).unwrap();
        assert_eq!(address.used_on, "");
    }

    #[test]
    fn test_custom_mask_null_description() {
        let mask: DomainAddress = serde_json::from_value(json!({
            "id": 3,
            "address": "shop",
            "full_address": "shop@me.mozmail.com",
            "enabled": true,
            "description": null,
            "block_list_emails": false,
            "created_at": "2026-01-01T00:00:00Z",
            "last_used_at": null,
            "num_forwarded": 0,
            "num_blocked": 0,
            "num_replied": 0,
            "num_spam": 0
        }))
        .unwrap();
        assert_eq!(mask.description, "");
    }

    #[test]
    fn test_profile_with_malformed_bounce_status_fails() {
        let raw = json!({
            "id": 1,
            "server_storage": true,
            "subdomain": null,
            "has_premium": false,
            "has_phone": false,
            "onboarding_state": 0,
            "date_subscribed": null,
            "avatar": "",
            "emails_blocked": 0,
            "emails_forwarded": 0,
            "emails_replied": 0,
            "level_one_trackers_blocked": 0,
            "remove_level_one_email_trackers": false,
            "at_mask_limit": false,
            "bounce_status": [false]
        });
        assert!(serde_json::from_value::<Profile>(raw).is_err());
    }

    #[test]
    fn test_update_request_omits_unset_fields() {
        let req = UpdateRelayAddressRequest {
            enabled: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(req).unwrap(), json!({"enabled": false}));

        let empty = UpdateDomainAddressRequest::default();
        assert_eq!(serde_json::to_value(empty).unwrap(), json!({}));
    }

    #[test]
    fn test_suggestions_missing_lists_default_to_empty() {
        let suggestions: RelayNumberSuggestions =
            serde_json::from_value(json!({"real_num": "+15550001111"})).unwrap();
        assert_eq!(suggestions.real_num.as_deref(), Some("+15550001111"));
        assert!(suggestions.is_empty());
    }
}
