// relay-cli/src/commands/mod.rs
pub mod contacts;
pub mod export;
pub mod masks;
pub mod phones;
pub mod profiles;
pub mod users;

pub use contacts::{handle_contacts, ContactsCommands};
pub use export::handle_export;
pub use masks::{handle_masks, MasksArgs};
pub use phones::{handle_phones, PhonesCommands};
pub use profiles::{handle_profiles, ProfilesCommands};
pub use users::{handle_users, UsersCommands};
