//! Provider-agnostic user profile types for identity integrations.
//!
//! Producers normalize a provider's response into a [`Profile`]; consumers
//! read it without caring which provider it came from. The types only carry
//! data: fetching, provider-specific mapping and validation live elsewhere.

pub mod account;
pub mod address;
pub mod codec;
pub mod date;
pub mod error;
pub mod export;
pub mod item;
pub mod name;
pub mod organization;
pub mod profile;

pub use account::ProfileAccount;
pub use address::ProfileAddress;
pub use date::ProfileDate;
pub use error::ProfileError;
pub use item::ProfileItem;
pub use name::ProfileName;
pub use organization::{OrganizationLocation, ProfileOrganization};
pub use profile::Profile;
