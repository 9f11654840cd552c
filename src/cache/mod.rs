// Cache module for memoizing Steam Web API responses.
// Entries live in memory for the lifetime of the owning client.

pub mod store;

pub use store::{CacheStats, CachedData, Outcome, ResponseCache};
