//! Async client for the Steam Web API.
//!
//! Each supported operation maps to one fixed endpoint and one JSON field
//! path. Calls return the extracted JSON fragment, or the raw body for XML
//! and VDF, and are memoized per client unless the call opts out.
//!
//! ```no_run
//! use steam_webapi::{NewsForApp, SteamClient};
//!
//! # async fn run() -> steam_webapi::Result<()> {
//! let client = SteamClient::from_env()?;
//! let news = client.get_news_for_app(&NewsForApp::new(440).count(5)).await?;
//! println!("{:?}", news.as_json());
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod steam;

pub use cache::CacheStats;
pub use config::{ApiKey, CacheConfig, ClientConfig};
pub use error::{ErrorKind, Result, SteamError};
pub use steam::*;
