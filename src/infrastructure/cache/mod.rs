//! Cache client construction.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`RedisCache`] - Redis connection, pinged at startup
//! - [`NullCache`] - No-op implementation when Redis is not configured

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
