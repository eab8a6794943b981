//! Local staging of files that are about to be attached to a message.

pub mod staging_cache;

pub use staging_cache::DiskStagingCache;
