//! In-memory implementation of the `contract-core` service traits.
//!
//! This backend keeps everything in process memory: a seedable directory of
//! properties, units, quotas and organisations, plus a contract/draft store.
//! It exists for integration tests and local development; production
//! deployments register a real transport behind the same traits.
//!
//! Tests can inject one-shot failures per collaborator call to exercise the
//! wizard's degraded paths.

mod backend;
mod factory;

pub use backend::MemBackend;
pub use factory::MemFactory;
