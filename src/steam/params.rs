// Per-operation call parameters.
// Each struct carries the endpoint's own fields plus the shared call options.

use super::format::Format;
use super::operation::Operation;
use super::request::{CallOptions, Endpoint, encode};

/// Shared option setters for every parameter struct.
macro_rules! call_options {
    ($name:ident, $op:expr) => {
        impl $name {
            pub fn format(mut self, format: Format) -> Self {
                self.options = self.options.format(format);
                self
            }

            pub fn raw_format(mut self, tag: impl Into<String>) -> Self {
                self.options = self.options.raw_format(tag);
                self
            }

            pub fn specific_data(mut self, path: impl Into<String>) -> Self {
                self.options = self.options.specific_data(path);
                self
            }

            pub fn use_cache(mut self, use_cache: bool) -> Self {
                self.options = self.options.use_cache(use_cache);
                self
            }

            pub fn with_options(mut self, options: CallOptions) -> Self {
                self.options = options;
                self
            }
        }

        impl Endpoint for $name {
            const OPERATION: Operation = $op;

            fn query(&self, key: &str) -> Vec<(&'static str, String)> {
                self.query_pairs(key)
            }

            fn cache_params(&self) -> Vec<String> {
                self.significant()
            }

            fn options(&self) -> &CallOptions {
                &self.options
            }
        }
    };
}

/// `ISteamNews/GetNewsForApp`: latest news for an app. No key required.
#[derive(Debug, Clone)]
pub struct NewsForApp {
    pub appid: u32,
    /// Number of items, default 3.
    pub count: u32,
    /// Truncation length of item contents, default 300.
    pub maxlength: u32,
    pub options: CallOptions,
}

impl NewsForApp {
    pub fn new(appid: u32) -> Self {
        Self {
            appid,
            count: 3,
            maxlength: 300,
            options: CallOptions::default(),
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn maxlength(mut self, maxlength: u32) -> Self {
        self.maxlength = maxlength;
        self
    }

    fn query_pairs(&self, _key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("appid", self.appid.to_string()),
            ("count", self.count.to_string()),
            ("maxlength", self.maxlength.to_string()),
        ]
    }

    fn significant(&self) -> Vec<String> {
        vec![
            self.appid.to_string(),
            self.count.to_string(),
            self.maxlength.to_string(),
        ]
    }
}

call_options!(NewsForApp, Operation::NewsForApp);

/// `ISteamUserStats/GetGlobalAchievementPercentagesForApp`. No key required.
#[derive(Debug, Clone)]
pub struct GlobalAchievementPercentagesForApp {
    pub gameid: u32,
    pub options: CallOptions,
}

impl GlobalAchievementPercentagesForApp {
    pub fn new(gameid: u32) -> Self {
        Self {
            gameid,
            options: CallOptions::default(),
        }
    }

    fn query_pairs(&self, _key: &str) -> Vec<(&'static str, String)> {
        vec![("gameid", self.gameid.to_string())]
    }

    fn significant(&self) -> Vec<String> {
        vec![self.gameid.to_string()]
    }
}

call_options!(
    GlobalAchievementPercentagesForApp,
    Operation::GlobalAchievementPercentagesForApp
);

/// `ISteamUser/GetPlayerSummaries` for one or more 64-bit Steam IDs.
#[derive(Debug, Clone)]
pub struct PlayerSummaries {
    pub steamids: Vec<String>,
    pub options: CallOptions,
}

impl PlayerSummaries {
    pub fn new<I, S>(steamids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            steamids: steamids.into_iter().map(Into::into).collect(),
            options: CallOptions::default(),
        }
    }

    fn joined(&self) -> String {
        self.steamids
            .iter()
            .map(|id| encode(id))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn query_pairs(&self, key: &str) -> Vec<(&'static str, String)> {
        vec![("key", key.to_string()), ("steamids", self.joined())]
    }

    fn significant(&self) -> Vec<String> {
        vec![self.steamids.join(",")]
    }
}

call_options!(PlayerSummaries, Operation::PlayerSummaries);

/// `ISteamUser/GetFriendList`.
#[derive(Debug, Clone)]
pub struct FriendList {
    pub steamid: String,
    /// Relationship filter, default `friend`.
    pub relationship: String,
    pub options: CallOptions,
}

impl FriendList {
    pub fn new(steamid: impl Into<String>) -> Self {
        Self {
            steamid: steamid.into(),
            relationship: "friend".to_string(),
            options: CallOptions::default(),
        }
    }

    pub fn relationship(mut self, relationship: impl Into<String>) -> Self {
        self.relationship = relationship.into();
        self
    }

    fn query_pairs(&self, key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("key", key.to_string()),
            ("steamid", encode(&self.steamid)),
            ("relationship", encode(&self.relationship)),
        ]
    }

    fn significant(&self) -> Vec<String> {
        vec![self.steamid.clone(), self.relationship.clone()]
    }
}

call_options!(FriendList, Operation::FriendList);

/// `ISteamUserStats/GetPlayerAchievements`.
#[derive(Debug, Clone)]
pub struct PlayerAchievements {
    pub steamid: String,
    pub appid: u32,
    pub options: CallOptions,
}

impl PlayerAchievements {
    pub fn new(steamid: impl Into<String>, appid: u32) -> Self {
        Self {
            steamid: steamid.into(),
            appid,
            options: CallOptions::default(),
        }
    }

    fn query_pairs(&self, key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("appid", self.appid.to_string()),
            ("key", key.to_string()),
            ("steamid", encode(&self.steamid)),
        ]
    }

    fn significant(&self) -> Vec<String> {
        vec![self.steamid.clone(), self.appid.to_string()]
    }
}

call_options!(PlayerAchievements, Operation::PlayerAchievements);

/// `ISteamUserStats/GetUserStatsForGame`.
#[derive(Debug, Clone)]
pub struct UserStatsForGame {
    pub steamid: String,
    pub appid: u32,
    pub options: CallOptions,
}

impl UserStatsForGame {
    pub fn new(steamid: impl Into<String>, appid: u32) -> Self {
        Self {
            steamid: steamid.into(),
            appid,
            options: CallOptions::default(),
        }
    }

    fn query_pairs(&self, key: &str) -> Vec<(&'static str, String)> {
        vec![
            ("appid", self.appid.to_string()),
            ("key", key.to_string()),
            ("steamid", encode(&self.steamid)),
        ]
    }

    fn significant(&self) -> Vec<String> {
        vec![self.steamid.clone(), self.appid.to_string()]
    }
}

call_options!(UserStatsForGame, Operation::UserStatsForGame);

/// `IPlayerService/GetOwnedGames`.
#[derive(Debug, Clone)]
pub struct OwnedGames {
    pub steamid: String,
    /// Include game names and icons, default true.
    pub include_appinfo: bool,
    /// Include free games that have been played, default true.
    pub include_played_free_games: bool,
    pub options: CallOptions,
}

impl OwnedGames {
    pub fn new(steamid: impl Into<String>) -> Self {
        Self {
            steamid: steamid.into(),
            include_appinfo: true,
            include_played_free_games: true,
            options: CallOptions::default(),
        }
    }

    pub fn include_appinfo(mut self, include: bool) -> Self {
        self.include_appinfo = include;
        self
    }

    pub fn include_played_free_games(mut self, include: bool) -> Self {
        self.include_played_free_games = include;
        self
    }

    fn query_pairs(&self, key: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("key", key.to_string()), ("steamid", encode(&self.steamid))];
        if self.include_appinfo {
            pairs.push(("include_appinfo", "true".to_string()));
        }
        if self.include_played_free_games {
            pairs.push(("include_played_free_games", "true".to_string()));
        }
        pairs
    }

    fn significant(&self) -> Vec<String> {
        vec![
            self.steamid.clone(),
            self.include_appinfo.to_string(),
            self.include_played_free_games.to_string(),
        ]
    }
}

call_options!(OwnedGames, Operation::OwnedGames);

/// `IPlayerService/GetRecentlyPlayedGames`.
#[derive(Debug, Clone)]
pub struct RecentlyPlayedGames {
    pub steamid: String,
    /// Maximum number of games; omitted from the query when unset or zero.
    pub count: Option<u32>,
    pub options: CallOptions,
}

impl RecentlyPlayedGames {
    pub fn new(steamid: impl Into<String>) -> Self {
        Self {
            steamid: steamid.into(),
            count: None,
            options: CallOptions::default(),
        }
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    fn effective_count(&self) -> Option<u32> {
        self.count.filter(|&n| n > 0)
    }

    fn query_pairs(&self, key: &str) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("key", key.to_string()), ("steamid", encode(&self.steamid))];
        if let Some(count) = self.effective_count() {
            pairs.push(("count", count.to_string()));
        }
        pairs
    }

    fn significant(&self) -> Vec<String> {
        let count = self
            .effective_count()
            .map(|n| n.to_string())
            .unwrap_or_else(|| "all".to_string());
        vec![self.steamid.clone(), count]
    }
}

call_options!(RecentlyPlayedGames, Operation::RecentlyPlayedGames);
