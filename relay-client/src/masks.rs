// relay-client/src/masks.rs
use crate::client::RelayService;
use relay_api::{
    CreateDomainAddressRequest, CreateRelayAddressRequest, DomainAddress, HttpClient,
    RelayAddress, RelayError, UpdateDomainAddressRequest, UpdateRelayAddressRequest,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Which mask resource an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskKind {
    /// No preference given: list both, look up both, write random.
    #[default]
    Unspecified,
    Random,
    Custom,
}

impl MaskKind {
    /// Mutations need exactly one target; an unspecified kind means random.
    pub fn for_write(self) -> MaskKind {
        match self {
            MaskKind::Custom => MaskKind::Custom,
            MaskKind::Random | MaskKind::Unspecified => MaskKind::Random,
        }
    }
}

/// `--random true|false|<absent>`
impl From<Option<bool>> for MaskKind {
    fn from(random: Option<bool>) -> Self {
        match random {
            None => MaskKind::Unspecified,
            Some(true) => MaskKind::Random,
            Some(false) => MaskKind::Custom,
        }
    }
}

/// A mask together with the resource it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "mask", rename_all = "lowercase")]
pub enum TaggedMask {
    Random(RelayAddress),
    Custom(DomainAddress),
}

impl TaggedMask {
    pub fn kind(&self) -> MaskKind {
        match self {
            TaggedMask::Random(_) => MaskKind::Random,
            TaggedMask::Custom(_) => MaskKind::Custom,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaggedMask::Random(_) => "random",
            TaggedMask::Custom(_) => "custom",
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            TaggedMask::Random(m) => m.id,
            TaggedMask::Custom(m) => m.id,
        }
    }

    pub fn full_address(&self) -> &str {
        match self {
            TaggedMask::Random(m) => &m.full_address,
            TaggedMask::Custom(m) => &m.full_address,
        }
    }

    pub fn enabled(&self) -> bool {
        match self {
            TaggedMask::Random(m) => m.enabled,
            TaggedMask::Custom(m) => m.enabled,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            TaggedMask::Random(m) => &m.description,
            TaggedMask::Custom(m) => &m.description,
        }
    }

    pub fn num_forwarded(&self) -> u64 {
        match self {
            TaggedMask::Random(m) => m.num_forwarded,
            TaggedMask::Custom(m) => m.num_forwarded,
        }
    }

    pub fn num_blocked(&self) -> u64 {
        match self {
            TaggedMask::Random(m) => m.num_blocked,
            TaggedMask::Custom(m) => m.num_blocked,
        }
    }
}

/// Random masks first, then custom, each in server order
pub fn merge_masks(random: Vec<RelayAddress>, custom: Vec<DomainAddress>) -> Vec<TaggedMask> {
    let mut merged = Vec::with_capacity(random.len() + custom.len());
    merged.extend(random.into_iter().map(TaggedMask::Random));
    merged.extend(custom.into_iter().map(TaggedMask::Custom));
    merged
}

#[derive(Debug, Clone, PartialEq)]
pub enum MaskList {
    Tagged(Vec<TaggedMask>),
    Random(Vec<RelayAddress>),
    Custom(Vec<DomainAddress>),
}

impl MaskList {
    pub fn len(&self) -> usize {
        match self {
            MaskList::Tagged(m) => m.len(),
            MaskList::Random(m) => m.len(),
            MaskList::Custom(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fields for a new mask. Which of them apply depends on the target kind.
#[derive(Debug, Clone, PartialEq)]
pub struct MaskDraft {
    pub enabled: bool,
    pub description: Option<String>,
    pub block_list_emails: bool,
    /// Random only
    pub generated_for: Option<String>,
    /// Random only
    pub used_on: Option<String>,
    /// Custom only, required there
    pub address: Option<String>,
}

impl Default for MaskDraft {
    fn default() -> Self {
        Self {
            enabled: true,
            description: None,
            block_list_emails: false,
            generated_for: None,
            used_on: None,
            address: None,
        }
    }
}

/// Partial update; `None` leaves the field as it is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaskChanges {
    pub enabled: Option<bool>,
    pub description: Option<String>,
    pub block_list_emails: Option<bool>,
    /// Random only
    pub used_on: Option<String>,
}

#[derive(Debug, Error)]
pub enum MaskError {
    #[error("an address is required for custom domain masks")]
    AddressRequired,
    #[error("{0} only applies to random masks")]
    RandomOnly(&'static str),
    #[error("{0} only applies to custom domain masks")]
    CustomOnly(&'static str),
    #[error(transparent)]
    Relay(#[from] RelayError),
}

impl<C: HttpClient> RelayService<C> {
    /// List masks. With no kind given both resources are fetched and merged.
    pub async fn list_masks(&self, kind: MaskKind) -> Result<MaskList, RelayError> {
        match kind {
            MaskKind::Unspecified => Ok(MaskList::Tagged(self.list_all_masks().await?)),
            MaskKind::Random => Ok(MaskList::Random(self.api().list_relay_addresses().await?)),
            MaskKind::Custom => Ok(MaskList::Custom(self.api().list_domain_addresses().await?)),
        }
    }

    pub(crate) async fn list_all_masks(&self) -> Result<Vec<TaggedMask>, RelayError> {
        let random = self.api().list_relay_addresses().await?;
        let custom = self.api().list_domain_addresses().await?;
        Ok(merge_masks(random, custom))
    }

    /// Look up one mask.
    ///
    /// With no kind given the random lookup goes first. If it fails and the
    /// account's first profile has premium, the custom lookup is tried once.
    /// Any failure along that path yields the random lookup's error.
    pub async fn get_mask(&self, id: i64, kind: MaskKind) -> Result<TaggedMask, RelayError> {
        match kind {
            MaskKind::Random => Ok(TaggedMask::Random(self.api().get_relay_address(id).await?)),
            MaskKind::Custom => Ok(TaggedMask::Custom(self.api().get_domain_address(id).await?)),
            MaskKind::Unspecified => {
                let original = match self.api().get_relay_address(id).await {
                    Ok(mask) => return Ok(TaggedMask::Random(mask)),
                    Err(err) => err,
                };

                let profiles = match self.api().list_profiles().await {
                    Ok(profiles) => profiles,
                    Err(err) => {
                        debug!(id, error = %err, "profile check failed, skipping custom lookup");
                        return Err(original);
                    }
                };

                if !profiles.first().is_some_and(|p| p.has_premium) {
                    return Err(original);
                }

                match self.api().get_domain_address(id).await {
                    Ok(mask) => Ok(TaggedMask::Custom(mask)),
                    Err(err) => {
                        debug!(id, error = %err, "custom lookup failed");
                        Err(original)
                    }
                }
            }
        }
    }

    pub async fn create_mask(
        &self,
        kind: MaskKind,
        draft: MaskDraft,
    ) -> Result<TaggedMask, MaskError> {
        match kind.for_write() {
            MaskKind::Custom => {
                if draft.generated_for.is_some() {
                    return Err(MaskError::RandomOnly("generated_for"));
                }
                if draft.used_on.is_some() {
                    return Err(MaskError::RandomOnly("used_on"));
                }
                let address = draft
                    .address
                    .filter(|a| !a.trim().is_empty())
                    .ok_or(MaskError::AddressRequired)?;

                let req = CreateDomainAddressRequest {
                    address,
                    enabled: draft.enabled,
                    description: draft.description,
                    block_list_emails: draft.block_list_emails,
                };
                Ok(TaggedMask::Custom(self.api().create_domain_address(&req).await?))
            }
            _ => {
                if draft.address.is_some() {
                    return Err(MaskError::CustomOnly("address"));
                }
                let req = CreateRelayAddressRequest {
                    enabled: draft.enabled,
                    description: draft.description,
                    generated_for: draft.generated_for,
                    block_list_emails: draft.block_list_emails,
                    used_on: draft.used_on,
                };
                Ok(TaggedMask::Random(self.api().create_relay_address(&req).await?))
            }
        }
    }

    pub async fn update_mask(
        &self,
        id: i64,
        kind: MaskKind,
        changes: MaskChanges,
    ) -> Result<TaggedMask, MaskError> {
        match kind.for_write() {
            MaskKind::Custom => {
                if changes.used_on.is_some() {
                    return Err(MaskError::RandomOnly("used_on"));
                }
                let req = UpdateDomainAddressRequest {
                    enabled: changes.enabled,
                    description: changes.description,
                    block_list_emails: changes.block_list_emails,
                };
                Ok(TaggedMask::Custom(self.api().update_domain_address(id, &req).await?))
            }
            _ => {
                let req = UpdateRelayAddressRequest {
                    enabled: changes.enabled,
                    description: changes.description,
                    block_list_emails: changes.block_list_emails,
                    used_on: changes.used_on,
                };
                Ok(TaggedMask::Random(self.api().update_relay_address(id, &req).await?))
            }
        }
    }

    /// Returns the kind that was actually deleted
    pub async fn delete_mask(&self, id: i64, kind: MaskKind) -> Result<MaskKind, RelayError> {
        let target = kind.for_write();
        match target {
            MaskKind::Custom => self.api().delete_domain_address(id).await?,
            _ => self.api().delete_relay_address(id).await?,
        }
        Ok(target)
    }
}
