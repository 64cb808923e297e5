//! Service layer
//!
//! - `credentials`: authorization state and save-time credential validation
//! - `resolver`: shortlink resolution, cache revalidation and click statistics

mod credentials;
mod resolver;

pub use credentials::{CredentialState, CredentialValidator};
pub use resolver::ShortlinkResolver;
