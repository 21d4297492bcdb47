// relay-client/src/export.rs
use crate::client::RelayService;
use crate::masks::TaggedMask;
use relay_api::{HttpClient, InboundContact, Profile, RelayError, RelayNumber, User};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};

/// Everything the account holds, as one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportData {
    pub masks: Vec<TaggedMask>,
    pub phones: Vec<RelayNumber>,
    pub profiles: Vec<Profile>,
    pub contacts: Vec<InboundContact>,
    pub users: Vec<User>,
}

/// One independently fetched part of the export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportGroup {
    Masks,
    Phones,
    Profiles,
    Contacts,
    Users,
}

impl fmt::Display for ExportGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportGroup::Masks => "masks",
            ExportGroup::Phones => "phone masks",
            ExportGroup::Profiles => "profiles",
            ExportGroup::Contacts => "inbound contacts",
            ExportGroup::Users => "users",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
#[error("failed to fetch {group}: {source}")]
pub struct ExportFailure {
    pub group: ExportGroup,
    pub source: RelayError,
}

/// At least one group failed; the partial document is dropped
#[derive(Debug, Error)]
#[error("failed to export data: {} error(s) occurred", .failures.len())]
pub struct ExportError {
    pub failures: Vec<ExportFailure>,
}

fn collect<T>(
    group: ExportGroup,
    outcome: Result<T, RelayError>,
    failures: &mut Vec<ExportFailure>,
) -> Option<T> {
    match outcome {
        Ok(value) => Some(value),
        Err(source) => {
            debug!(%group, error = %source, "export group failed");
            failures.push(ExportFailure { group, source });
            None
        }
    }
}

impl<C: HttpClient> RelayService<C> {
    /// Fetch all five groups concurrently.
    ///
    /// Every group runs to completion regardless of its siblings; the
    /// document is returned only when none of them failed.
    pub async fn export(&self) -> Result<ExportData, ExportError> {
        let (masks, phones, profiles, contacts, users) = tokio::join!(
            self.list_all_masks(),
            self.api().list_relay_numbers(),
            self.api().list_profiles(),
            self.api().list_inbound_contacts(),
            self.api().list_users(),
        );

        let mut failures = Vec::new();
        let masks = collect(ExportGroup::Masks, masks, &mut failures);
        let phones = collect(ExportGroup::Phones, phones, &mut failures);
        let profiles = collect(ExportGroup::Profiles, profiles, &mut failures);
        let contacts = collect(ExportGroup::Contacts, contacts, &mut failures);
        let users = collect(ExportGroup::Users, users, &mut failures);

        match (masks, phones, profiles, contacts, users) {
            (Some(masks), Some(phones), Some(profiles), Some(contacts), Some(users))
                if failures.is_empty() =>
            {
                info!(
                    masks = masks.len(),
                    phones = phones.len(),
                    contacts = contacts.len(),
                    "export complete"
                );
                Ok(ExportData {
                    masks,
                    phones,
                    profiles,
                    contacts,
                    users,
                })
            }
            _ => Err(ExportError { failures }),
        }
    }
}
