// Steam Web API response types.
// Typed views of the fragments extracted by each operation.

use serde::{Deserialize, Deserializer, Serialize};

/// News item from `GetNewsForApp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub gid: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub is_external_url: bool,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub contents: String,
    #[serde(default)]
    pub feedlabel: String,
    pub date: i64,
    #[serde(default)]
    pub feedname: String,
    #[serde(default)]
    pub feed_type: i64,
    pub appid: u32,
}

/// Global unlock rate of one achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementPercentage {
    pub name: String,
    /// Percentage of players, 0.0 to 100.0. Sent as a number or a string.
    #[serde(deserialize_with = "number_or_string")]
    pub percent: f64,
}

/// Public profile summary from `GetPlayerSummaries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub steamid: String,
    pub personaname: String,
    pub profileurl: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub avatarmedium: String,
    #[serde(default)]
    pub avatarfull: String,
    #[serde(default)]
    pub personastate: u8,
    #[serde(default)]
    pub communityvisibilitystate: u8,
    pub profilestate: Option<u8>,
    pub lastlogoff: Option<i64>,
    pub realname: Option<String>,
    pub timecreated: Option<i64>,
    pub loccountrycode: Option<String>,
    pub gameid: Option<String>,
    pub gameextrainfo: Option<String>,
}

/// Entry of a friend list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub steamid: String,
    pub relationship: String,
    #[serde(default)]
    pub friend_since: i64,
}

/// Per-player statistics from `GetPlayerAchievements` and `GetUserStatsForGame`.
///
/// Steam reports an app without stats as `success: false` plus an `error`
/// message, with no player fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    #[serde(rename = "steamID", default)]
    pub steam_id: String,
    #[serde(rename = "gameName", default)]
    pub game_name: String,
    #[serde(default)]
    pub achievements: Vec<PlayerAchievement>,
    #[serde(default)]
    pub stats: Vec<GameStat>,
    pub success: Option<bool>,
    pub error: Option<String>,
}

impl PlayerStats {
    /// False only when Steam explicitly reported a failure.
    pub fn is_success(&self) -> bool {
        self.success != Some(false)
    }
}

/// Achievement state for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerAchievement {
    pub apiname: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub achieved: u8,
    pub unlocktime: Option<i64>,
}

impl PlayerAchievement {
    pub fn is_achieved(&self) -> bool {
        self.achieved != 0
    }
}

/// Named numeric game statistic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStat {
    pub name: String,
    pub value: f64,
}

/// Game from `GetOwnedGames`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedGame {
    pub appid: u32,
    /// Present only when app info was requested.
    pub name: Option<String>,
    #[serde(default)]
    pub playtime_forever: u64,
    pub playtime_2weeks: Option<u64>,
    pub img_icon_url: Option<String>,
    pub has_community_visible_stats: Option<bool>,
    pub rtime_last_played: Option<i64>,
}

/// Body of `GetRecentlyPlayedGames`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentlyPlayedGames {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub games: Vec<RecentlyPlayedGame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentlyPlayedGame {
    pub appid: u32,
    pub name: Option<String>,
    #[serde(default)]
    pub playtime_2weeks: u64,
    #[serde(default)]
    pub playtime_forever: u64,
    pub img_icon_url: Option<String>,
}

fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}
