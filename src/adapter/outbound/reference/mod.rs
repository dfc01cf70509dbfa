//! Reference ("sharp") book provider backed by a JSON snapshot.

pub mod settings;
pub mod snapshot;

pub use settings::ReferenceConfig;
pub use snapshot::SnapshotReferenceProvider;
