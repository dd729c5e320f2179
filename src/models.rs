//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Authenticated admin identity returned by the auth endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub role: String,
}

/// Document data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(rename = "subCategory")]
    pub sub_category: String,
    #[serde(rename = "fileUrl")]
    pub file_url: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "fileSize")]
    pub file_size: String,
    #[serde(rename = "uploadDate")]
    pub upload_date: String,
    pub downloads: u32,
}

/// Event data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    /// "upcoming", "ongoing" or "past"
    pub status: String,
    pub image: String,
    #[serde(rename = "maxParticipants")]
    pub max_participants: u32,
    #[serde(rename = "currentParticipants")]
    pub current_participants: u32,
    pub organizer: String,
    #[serde(rename = "googleFormUrl")]
    pub google_form_url: String,
    #[serde(default)]
    pub registered_ips: Vec<String>,
}

impl Event {
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }

    pub fn has_registered(&self, ip: &str) -> bool {
        !ip.is_empty() && self.registered_ips.iter().any(|r| r == ip)
    }
}

/// Social links attached to a member
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MemberLinks {
    pub facebook: String,
    pub github: String,
    pub email: String,
}

/// Member data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    pub name: String,
    pub role: String,
    pub avatar: String,
    /// Team key: "lead", "academic", "event" or "media"
    pub team: String,
    pub department: String,
    pub year: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub links: MemberLinks,
}

/// Team key carrying the highest ordering weight
pub const LEAD_TEAM: &str = "lead";
/// Role carrying the mentor ordering weight
pub const MENTOR_ROLE: &str = "Technical Mentor";
/// Role of the club leader, rendered as the hero card
pub const LEADER_ROLE: &str = "Leader CLB HCMUTEDSC";
/// Tenure of the current leadership term
pub const CURRENT_TERM: &str = "2024-2025";

impl Member {
    /// Ordering weight for the members page: lead team and mentor role
    /// outrank everyone, newer tenures outrank older ones.
    ///
    /// Malformed or missing tenure strings contribute 0 rather than erroring.
    pub fn priority_score(&self) -> i64 {
        let mut score = 0;
        if self.team == LEAD_TEAM {
            score += 100;
        }
        if self.role == MENTOR_ROLE {
            score += 50;
        }
        score += self
            .year
            .as_deref()
            .and_then(|y| y.split('-').next())
            .and_then(|start| start.trim().parse::<i64>().ok())
            .unwrap_or(0);
        score
    }

    /// The current leader is pulled out of the general list and rendered
    /// as a hero card.
    pub fn is_current_leader(&self) -> bool {
        self.role == LEADER_ROLE && self.year.as_deref() == Some(CURRENT_TERM)
    }
}

/// A member shown on a project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMember {
    pub name: String,
    pub role: String,
    pub avatar: String,
}

/// Project links; demo is optional
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProjectLinks {
    pub github: String,
    #[serde(default)]
    pub demo: Option<String>,
}

/// Project data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Category key: "web", "mobile" or "ai"
    pub category: String,
    pub image: String,
    pub progress: u32,
    #[serde(rename = "teamSize")]
    pub team_size: u32,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    #[serde(default)]
    pub details: String,
    #[serde(rename = "teamMembers", default)]
    pub team_members: Vec<ProjectMember>,
}

/// Home page banner (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub order: u32,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_member(team: &str, role: &str, year: Option<&str>) -> Member {
        Member {
            id: 1,
            name: "Test".to_string(),
            role: role.to_string(),
            avatar: String::new(),
            team: team.to_string(),
            department: String::new(),
            year: year.map(str::to_string),
            skills: vec![],
            links: MemberLinks::default(),
        }
    }

    #[test]
    fn test_priority_score_lead_mentor_with_tenure() {
        let m = make_member("lead", "Technical Mentor", Some("2023-2024"));
        assert_eq!(m.priority_score(), 100 + 50 + 2023);
    }

    #[test]
    fn test_priority_score_without_tenure() {
        let m = make_member("academic", "X", None);
        assert_eq!(m.priority_score(), 0);
    }

    #[test]
    fn test_priority_score_malformed_tenure() {
        let m = make_member("media", "Member", Some("next year"));
        assert_eq!(m.priority_score(), 0);
    }

    #[test]
    fn test_current_leader_needs_role_and_term() {
        let leader = make_member("lead", LEADER_ROLE, Some(CURRENT_TERM));
        assert!(leader.is_current_leader());

        let past_leader = make_member("lead", LEADER_ROLE, Some("2023-2024"));
        assert!(!past_leader.is_current_leader());
    }

    #[test]
    fn test_event_registration_state() {
        let event = Event {
            id: 1,
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            status: "upcoming".to_string(),
            image: String::new(),
            max_participants: 2,
            current_participants: 2,
            organizer: String::new(),
            google_form_url: String::new(),
            registered_ips: vec!["1.2.3.4".to_string()],
        };
        assert!(event.is_full());
        assert!(event.has_registered("1.2.3.4"));
        assert!(!event.has_registered("5.6.7.8"));
        // An unknown visitor IP must not match the empty string
        assert!(!event.has_registered(""));
    }
}
