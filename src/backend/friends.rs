//! Community roster shown on the friends page.

use chrono::Utc;
use serde::{Deserialize, Serialize};

const BUNDLED_ROSTER: &str = include_str!("../../assets/config/friends.json");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FriendInfo {
    pub username: String,
    pub role: String,
    /// Unix timestamp of the last connection, 0 if never seen.
    pub last_seen: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FriendRoster {
    pub friends: Vec<FriendInfo>,
}

impl FriendRoster {
    pub fn bundled() -> Self {
        match serde_json::from_str(BUNDLED_ROSTER) {
            Ok(roster) => roster,
            Err(e) => {
                log::error!("Failed to parse bundled friend roster: {e}");
                Self::default()
            }
        }
    }

    /// Roster ordered for display: recently seen members first, members
    /// never seen last, alphabetical within each group.
    pub fn sorted(&self) -> Vec<FriendInfo> {
        let mut friends = self.friends.clone();
        friends.sort_by(|a, b| match (a.last_seen > 0, b.last_seen > 0) {
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            (true, true) => b.last_seen.cmp(&a.last_seen),
            (false, false) => a.username.cmp(&b.username),
        });
        friends
    }

    pub fn format_last_seen(timestamp: u64) -> String {
        if timestamp == 0 {
            return "Not seen yet".to_string();
        }

        let now = Utc::now().timestamp().max(0) as u64;
        describe_gap(now.saturating_sub(timestamp))
    }
}

fn describe_gap(diff: u64) -> String {
    match diff {
        0..=59 => "Seen just now".to_string(),
        60..=119 => "Seen 1 minute ago".to_string(),
        120..=3599 => format!("Seen {} minutes ago", diff / 60),
        3600..=7199 => "Seen 1 hour ago".to_string(),
        7200..=86399 => format!("Seen {} hours ago", diff / 3600),
        86400..=172799 => "Seen 1 day ago".to_string(),
        172800..=2591999 => format!("Seen {} days ago", diff / 86400),
        2592000..=5183999 => "Seen 1 month ago".to_string(),
        _ => format!("Seen {} months ago", diff / 2592000),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend(username: &str, role: &str, last_seen: u64) -> FriendInfo {
        FriendInfo {
            username: username.to_string(),
            role: role.to_string(),
            last_seen,
        }
    }

    #[test]
    fn test_bundled_roster_parses() {
        assert!(!FriendRoster::bundled().friends.is_empty());
    }

    #[test]
    fn test_sorted_puts_recent_members_first() {
        let roster = FriendRoster {
            friends: vec![
                friend("zoe", "ami", 0),
                friend("alex", "streamer", 1_700_000_000),
                friend("marc", "ami", 1_700_500_000),
                friend("bea", "ami", 0),
            ],
        };

        let names: Vec<String> = roster.sorted().into_iter().map(|f| f.username).collect();
        assert_eq!(names, ["marc", "alex", "bea", "zoe"]);
    }

    #[test]
    fn test_gap_formatting() {
        assert_eq!(describe_gap(30), "Seen just now");
        assert_eq!(describe_gap(90), "Seen 1 minute ago");
        assert_eq!(describe_gap(600), "Seen 10 minutes ago");
        assert_eq!(describe_gap(5400), "Seen 1 hour ago");
        assert_eq!(describe_gap(200_000), "Seen 2 days ago");
    }

    #[test]
    fn test_never_seen_label() {
        assert_eq!(FriendRoster::format_last_seen(0), "Not seen yet");
    }
}
