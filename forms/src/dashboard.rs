//! Dashboard screen data. Hard-coded; nothing is fetched.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub join_date: NaiveDate,
    pub last_login: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub profile_views: u32,
    pub tasks_completed: u32,
    pub notifications: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub icon: String,
    pub text: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub profile: UserProfile,
    pub stats: DashboardStats,
    pub recent_activity: Vec<Activity>,
    pub quick_actions: Vec<String>,
}

impl DashboardData {
    /// The fixed demo data, stamped with the current time as last login.
    pub fn load() -> Self {
        let data = Self::at(Utc::now());
        tracing::debug!("Dashboard data loaded");
        data
    }

    pub fn at(last_login: DateTime<Utc>) -> Self {
        let activity = |icon: &str, text: &str, time: &str| Activity {
            icon: icon.to_string(),
            text: text.to_string(),
            time: time.to_string(),
        };

        Self {
            profile: UserProfile {
                name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                join_date: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap_or_default(),
                last_login,
            },
            stats: DashboardStats {
                profile_views: 245,
                tasks_completed: 12,
                notifications: 3,
            },
            recent_activity: vec![
                activity("📝", "Updated profile information", "2 hours ago"),
                activity("🔐", "Changed password", "3 days ago"),
                activity("📧", "Verified email address", "1 week ago"),
            ],
            quick_actions: ["Edit Profile", "Change Password", "View Settings"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    pub fn greeting(&self) -> String {
        format!("Welcome, {}!", self.profile.name)
    }
}
