// Steam Web API module.
// Provides the client, operation table, request building, and response types.

pub mod client;
pub mod endpoints;
pub mod format;
pub mod operation;
pub mod params;
pub mod payload;
pub mod request;
pub mod types;

pub use client::SteamClient;
pub use format::Format;
pub use operation::Operation;
pub use params::*;
pub use payload::{Payload, extract};
pub use request::{CallOptions, Endpoint, Request};
pub use types::{
    AchievementPercentage, Friend, GameStat, NewsItem, OwnedGame, PlayerAchievement, PlayerStats,
    PlayerSummary, RecentlyPlayedGame,
};
