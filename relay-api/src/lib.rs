// relay-api/src/lib.rs
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{RelayClient, API_BASE_PATH, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::RelayError;
pub use http::{HttpClient, HttpError, HttpRequest, HttpResponse, Method};
pub use types::{
    BounceStatus, CreateDomainAddressRequest, CreateRelayAddressRequest, DomainAddress,
    InboundContact, PhoneNumberOption, Profile, RealPhone, RegisterRealPhoneRequest,
    RelayAddress, RelayNumber, RelayNumberSuggestions, UpdateDomainAddressRequest,
    UpdateInboundContactRequest, UpdateRelayAddressRequest, UpdateRelayNumberRequest, User,
    VerifyRealPhoneRequest,
};

// Re-export reqwest client when feature is enabled
#[cfg(feature = "reqwest")]
pub use http::reqwest::ReqwestClientBuilder;
#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;

pub use tokio_util::sync::CancellationToken;
