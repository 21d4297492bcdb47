// relay-api/src/client.rs
use crate::error::RelayError;
use crate::http::{HttpClient, HttpRequest, HttpResponse, Method};
use crate::types::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://relay.firefox.com";
pub const API_BASE_PATH: &str = "/api/v1/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const RELAY_ADDRESSES: &str = "relayaddresses/";
const DOMAIN_ADDRESSES: &str = "domainaddresses/";
const RELAY_NUMBERS: &str = "relaynumber/";
const REAL_PHONE: &str = "realphone/";
const INBOUND_CONTACTS: &str = "inboundcontact/";
const PROFILES: &str = "profiles/";
const USERS: &str = "users/";

/// Typed client for the relay REST API.
///
/// One request per call, no retries. Every request races the cancellation
/// token; a fired token surfaces as [`RelayError::Cancelled`].
pub struct RelayClient<C: HttpClient> {
    http: C,
    base_url: String,
    cancel: CancellationToken,
}

impl<C: HttpClient> RelayClient<C> {
    pub fn new(http: C, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            cancel: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, API_BASE_PATH, path)
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, RelayError> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            body,
        };

        let started = Instant::now();
        let response = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return Err(RelayError::Cancelled),
            result = self.http.execute(request) => result?,
        };

        debug!(
            method = method.as_str(),
            path,
            status = response.status,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "relay request completed"
        );
        Ok(response)
    }

    /// Send and map any status >= 400 to [`RelayError::Api`]
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse, RelayError> {
        let response = self.send(method, path, body).await?;
        if response.status >= 400 {
            return Err(api_error(&response));
        }
        Ok(response)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RelayError> {
        let response = self.call(Method::Get, path, None).await?;
        decode(&response)
    }

    async fn write<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, RelayError> {
        let body = serde_json::to_vec(body)?;
        let response = self.call(method, path, Some(body)).await?;
        decode(&response)
    }

    async fn delete(&self, path: &str) -> Result<(), RelayError> {
        self.call(Method::Delete, path, None).await?;
        Ok(())
    }

    // Random masks

    pub async fn list_relay_addresses(&self) -> Result<Vec<RelayAddress>, RelayError> {
        self.get(RELAY_ADDRESSES).await
    }

    pub async fn get_relay_address(&self, id: i64) -> Result<RelayAddress, RelayError> {
        self.get(&item(RELAY_ADDRESSES, id)).await
    }

    pub async fn create_relay_address(
        &self,
        req: &CreateRelayAddressRequest,
    ) -> Result<RelayAddress, RelayError> {
        self.write(Method::Post, RELAY_ADDRESSES, req).await
    }

    pub async fn update_relay_address(
        &self,
        id: i64,
        req: &UpdateRelayAddressRequest,
    ) -> Result<RelayAddress, RelayError> {
        self.write(Method::Patch, &item(RELAY_ADDRESSES, id), req).await
    }

    pub async fn delete_relay_address(&self, id: i64) -> Result<(), RelayError> {
        self.delete(&item(RELAY_ADDRESSES, id)).await
    }

    // Custom-domain masks

    pub async fn list_domain_addresses(&self) -> Result<Vec<DomainAddress>, RelayError> {
        self.get(DOMAIN_ADDRESSES).await
    }

    pub async fn get_domain_address(&self, id: i64) -> Result<DomainAddress, RelayError> {
        self.get(&item(DOMAIN_ADDRESSES, id)).await
    }

    pub async fn create_domain_address(
        &self,
        req: &CreateDomainAddressRequest,
    ) -> Result<DomainAddress, RelayError> {
        self.write(Method::Post, DOMAIN_ADDRESSES, req).await
    }

    pub async fn update_domain_address(
        &self,
        id: i64,
        req: &UpdateDomainAddressRequest,
    ) -> Result<DomainAddress, RelayError> {
        self.write(Method::Patch, &item(DOMAIN_ADDRESSES, id), req).await
    }

    pub async fn delete_domain_address(&self, id: i64) -> Result<(), RelayError> {
        self.delete(&item(DOMAIN_ADDRESSES, id)).await
    }

    // Phone masks

    pub async fn list_relay_numbers(&self) -> Result<Vec<RelayNumber>, RelayError> {
        self.get(RELAY_NUMBERS).await
    }

    pub async fn update_relay_number(
        &self,
        id: i64,
        req: &UpdateRelayNumberRequest,
    ) -> Result<RelayNumber, RelayError> {
        self.write(Method::Patch, &item(RELAY_NUMBERS, id), req).await
    }

    /// Available numbers for a new phone mask.
    ///
    /// The service answers 400 when nothing is available, which is reported
    /// here as empty categories.
    pub async fn relay_number_suggestions(&self) -> Result<RelayNumberSuggestions, RelayError> {
        let path = format!("{}suggestions/", RELAY_NUMBERS);
        let response = self.send(Method::Get, &path, None).await?;
        if response.status == 400 {
            return Ok(RelayNumberSuggestions::default());
        }
        if response.status > 400 {
            return Err(api_error(&response));
        }
        decode(&response)
    }

    /// Available numbers in an area code. 400 means none, as above.
    pub async fn search_relay_numbers(
        &self,
        area_code: &str,
    ) -> Result<Vec<PhoneNumberOption>, RelayError> {
        let path = format!("{}search/?area_code={}", RELAY_NUMBERS, area_code);
        let response = self.send(Method::Get, &path, None).await?;
        if response.status == 400 {
            return Ok(Vec::new());
        }
        if response.status > 400 {
            return Err(api_error(&response));
        }
        decode(&response)
    }

    // Forwarding numbers

    pub async fn list_real_phones(&self) -> Result<Vec<RealPhone>, RelayError> {
        self.get(REAL_PHONE).await
    }

    pub async fn register_real_phone(
        &self,
        req: &RegisterRealPhoneRequest,
    ) -> Result<RealPhone, RelayError> {
        self.write(Method::Post, REAL_PHONE, req).await
    }

    pub async fn verify_real_phone(
        &self,
        id: i64,
        req: &VerifyRealPhoneRequest,
    ) -> Result<RealPhone, RelayError> {
        self.write(Method::Patch, &item(REAL_PHONE, id), req).await
    }

    pub async fn delete_real_phone(&self, id: i64) -> Result<(), RelayError> {
        self.delete(&item(REAL_PHONE, id)).await
    }

    // Inbound contacts

    pub async fn list_inbound_contacts(&self) -> Result<Vec<InboundContact>, RelayError> {
        self.get(INBOUND_CONTACTS).await
    }

    pub async fn update_inbound_contact(
        &self,
        id: i64,
        req: &UpdateInboundContactRequest,
    ) -> Result<InboundContact, RelayError> {
        self.write(Method::Patch, &item(INBOUND_CONTACTS, id), req).await
    }

    // Account

    pub async fn list_profiles(&self) -> Result<Vec<Profile>, RelayError> {
        self.get(PROFILES).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, RelayError> {
        self.get(USERS).await
    }
}

fn item(collection: &str, id: i64) -> String {
    format!("{}{}/", collection, id)
}

fn api_error(response: &HttpResponse) -> RelayError {
    RelayError::Api {
        status: response.status,
        body: response.text(),
    }
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, RelayError> {
    Ok(serde_json::from_slice(&response.body)?)
}
