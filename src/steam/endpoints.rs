// Steam Web API endpoint functions.
// One method per supported operation, plus typed variants of the JSON calls.

use serde::de::DeserializeOwned;

use crate::error::Result;

use super::client::SteamClient;
use super::format::Format;
use super::params::{
    FriendList, GlobalAchievementPercentagesForApp, NewsForApp, OwnedGames, PlayerAchievements,
    PlayerSummaries, RecentlyPlayedGames, UserStatsForGame,
};
use super::payload::Payload;
use super::request::{CallOptions, Endpoint};
use super::types::{
    AchievementPercentage, Friend, NewsItem, OwnedGame, PlayerStats, PlayerSummary,
    RecentlyPlayedGames as RecentlyPlayed,
};

impl SteamClient {
    /// Get news items for an app.
    pub async fn get_news_for_app(&self, params: &NewsForApp) -> Result<Payload> {
        self.call(params).await
    }

    /// Get global achievement unlock percentages for a game.
    pub async fn get_global_achievement_percentages_for_app(
        &self,
        params: &GlobalAchievementPercentagesForApp,
    ) -> Result<Payload> {
        self.call(params).await
    }

    /// Get profile summaries for one or more players.
    pub async fn get_player_summaries(&self, params: &PlayerSummaries) -> Result<Payload> {
        self.call(params).await
    }

    /// Get a player's friend list (profile must be public).
    pub async fn get_friend_list(&self, params: &FriendList) -> Result<Payload> {
        self.call(params).await
    }

    /// Get a player's achievements for a game.
    pub async fn get_player_achievements(&self, params: &PlayerAchievements) -> Result<Payload> {
        self.call(params).await
    }

    /// Get a player's stats and achievements for a game.
    pub async fn get_user_stats_for_game(&self, params: &UserStatsForGame) -> Result<Payload> {
        self.call(params).await
    }

    /// Get the games a player owns.
    pub async fn get_owned_games(&self, params: &OwnedGames) -> Result<Payload> {
        self.call(params).await
    }

    /// Get games played in the last two weeks.
    pub async fn get_recently_played_games(
        &self,
        params: &RecentlyPlayedGames,
    ) -> Result<Payload> {
        self.call(params).await
    }

    pub async fn news_items(&self, params: &NewsForApp) -> Result<Vec<NewsItem>> {
        self.call_typed(params.clone().with_options(json_options(params))).await
    }

    pub async fn global_achievement_percentages(
        &self,
        params: &GlobalAchievementPercentagesForApp,
    ) -> Result<Vec<AchievementPercentage>> {
        self.call_typed(params.clone().with_options(json_options(params))).await
    }

    pub async fn player_summaries(&self, params: &PlayerSummaries) -> Result<Vec<PlayerSummary>> {
        self.call_typed(params.clone().with_options(json_options(params))).await
    }

    pub async fn friends(&self, params: &FriendList) -> Result<Vec<Friend>> {
        self.call_typed(params.clone().with_options(json_options(params))).await
    }

    pub async fn player_achievements(&self, params: &PlayerAchievements) -> Result<PlayerStats> {
        self.call_typed(params.clone().with_options(json_options(params))).await
    }

    pub async fn user_stats_for_game(&self, params: &UserStatsForGame) -> Result<PlayerStats> {
        self.call_typed(params.clone().with_options(json_options(params))).await
    }

    pub async fn owned_games(&self, params: &OwnedGames) -> Result<Vec<OwnedGame>> {
        self.call_typed(params.clone().with_options(json_options(params))).await
    }

    pub async fn recently_played_games(
        &self,
        params: &RecentlyPlayedGames,
    ) -> Result<RecentlyPlayed> {
        self.call_typed(params.clone().with_options(json_options(params))).await
    }

    async fn call_typed<E: Endpoint, T: DeserializeOwned>(&self, params: E) -> Result<T> {
        self.call(&params).await?.deserialize()
    }
}

/// JSON at the operation's own field path, keeping the caller's cache choice.
fn json_options<E: Endpoint>(params: &E) -> CallOptions {
    CallOptions::new()
        .format(Format::Json)
        .use_cache(params.options().uses_cache())
}
