pub mod runner;
pub mod samples;

pub use crate::domain::model::{
    CreateDomainOutput, DomainMetadata, DomainSummary, Item, ListDomainsOutput, ReplaceableItem,
    ResponseMetadata, SelectOutput,
};
pub use crate::domain::ports::{AttributeStore, ConfigProvider};
pub use crate::utils::error::Result;
