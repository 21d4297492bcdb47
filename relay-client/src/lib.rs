pub mod client;
pub mod config;
pub mod export;
pub mod masks;

pub use client::RelayService;
pub use config::{Config, ConfigError, Overrides, Settings};
pub use export::{ExportData, ExportError, ExportFailure, ExportGroup};
pub use masks::{merge_masks, MaskChanges, MaskDraft, MaskError, MaskKind, MaskList, TaggedMask};

// Re-export API types for convenience
pub use relay_api::{
    CancellationToken, DomainAddress, InboundContact, PhoneNumberOption, Profile, RealPhone,
    RegisterRealPhoneRequest, RelayAddress, RelayClient, RelayError, RelayNumber,
    RelayNumberSuggestions, UpdateInboundContactRequest, UpdateRelayNumberRequest, User,
    VerifyRealPhoneRequest,
};
