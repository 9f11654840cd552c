// Steam Web API operation table.
// Maps each supported operation to its path, extracted field, and key requirement.

use std::fmt;
use std::str::FromStr;

use crate::error::SteamError;

/// One of the fixed Steam Web API endpoints this client speaks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    NewsForApp,
    GlobalAchievementPercentagesForApp,
    PlayerSummaries,
    FriendList,
    PlayerAchievements,
    UserStatsForGame,
    OwnedGames,
    RecentlyPlayedGames,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::NewsForApp,
        Operation::GlobalAchievementPercentagesForApp,
        Operation::PlayerSummaries,
        Operation::FriendList,
        Operation::PlayerAchievements,
        Operation::UserStatsForGame,
        Operation::OwnedGames,
        Operation::RecentlyPlayedGames,
    ];

    /// Method tag, as used in logs and cache fingerprints.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::NewsForApp => "getNewsForApp",
            Operation::GlobalAchievementPercentagesForApp => {
                "getGlobalAchievementPercentagesForApp"
            }
            Operation::PlayerSummaries => "getPlayerSummaries",
            Operation::FriendList => "getFriendList",
            Operation::PlayerAchievements => "getPlayerAchievements",
            Operation::UserStatsForGame => "getUserStatsForGame",
            Operation::OwnedGames => "getOwnedGames",
            Operation::RecentlyPlayedGames => "getRecentlyPlayedGames",
        }
    }

    /// Endpoint path relative to the API base.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::NewsForApp => "/ISteamNews/GetNewsForApp/v0002/",
            Operation::GlobalAchievementPercentagesForApp => {
                "/ISteamUserStats/GetGlobalAchievementPercentagesForApp/v002/"
            }
            Operation::PlayerSummaries => "/ISteamUser/GetPlayerSummaries/v0002/",
            Operation::FriendList => "/ISteamUser/GetFriendList/v0001/",
            Operation::PlayerAchievements => "/ISteamUserStats/GetPlayerAchievements/v0001/",
            Operation::UserStatsForGame => "/ISteamUserStats/GetUserStatsForGame/v0002/",
            Operation::OwnedGames => "/IPlayerService/GetOwnedGames/v0001/",
            Operation::RecentlyPlayedGames => "/IPlayerService/GetRecentlyPlayedGames/v0001/",
        }
    }

    /// Top-level JSON field of the response body.
    pub fn root_field(&self) -> &'static str {
        match self {
            Operation::NewsForApp => "appnews",
            Operation::GlobalAchievementPercentagesForApp => "achievementpercentages",
            Operation::PlayerSummaries => "response",
            Operation::FriendList => "friendslist",
            Operation::PlayerAchievements | Operation::UserStatsForGame => "playerstats",
            Operation::OwnedGames | Operation::RecentlyPlayedGames => "response",
        }
    }

    /// Dotted path of the JSON field returned when no sub-path is requested.
    pub fn field_path(&self) -> &'static str {
        match self {
            Operation::NewsForApp => "appnews.newsitems",
            Operation::GlobalAchievementPercentagesForApp => "achievementpercentages.achievements",
            Operation::PlayerSummaries => "response.players",
            Operation::FriendList => "friendslist.friends",
            Operation::PlayerAchievements | Operation::UserStatsForGame => "playerstats",
            Operation::OwnedGames => "response.games",
            Operation::RecentlyPlayedGames => "response",
        }
    }

    /// Public endpoints (news, global achievement percentages) take no key.
    pub fn requires_key(&self) -> bool {
        !matches!(
            self,
            Operation::NewsForApp | Operation::GlobalAchievementPercentagesForApp
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = SteamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| SteamError::InvalidOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_every_tag() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_tag_is_invalid_operation() {
        let err = "getWeather".parse::<Operation>().unwrap_err();
        assert!(matches!(err, SteamError::InvalidOperation(tag) if tag == "getWeather"));
    }

    #[test]
    fn test_key_requirements() {
        let public: Vec<_> = Operation::ALL
            .into_iter()
            .filter(|op| !op.requires_key())
            .collect();
        assert_eq!(
            public,
            vec![
                Operation::NewsForApp,
                Operation::GlobalAchievementPercentagesForApp
            ]
        );
    }

    #[test]
    fn test_descriptors_are_well_formed() {
        for op in Operation::ALL {
            assert!(op.path().starts_with("/I"));
            assert!(op.path().ends_with('/'));
            assert!(op.field_path().starts_with(op.root_field()));
        }
    }
}
