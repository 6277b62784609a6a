use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub category: String,
    pub likes: u64,
    pub comments: u64,
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumCategory {
    pub id: u64,
    pub name: String,
    pub members: u64,
    pub posts: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorResult {
    pub id: u64,
    pub name: String,
    pub specialization: String,
    pub rating: f64,
    pub review_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub title: String,
    pub posts: u64,
}

/// Shared view of the fields the curation engine reads. Variants expose
/// only what they carry; everything else stays `None` and ranks lowest.
pub trait Record {
    fn haystacks(&self) -> Vec<&str>;

    fn category(&self) -> Option<&str> {
        None
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn likes(&self) -> Option<u64> {
        None
    }

    fn comments(&self) -> Option<u64> {
        None
    }

    fn members(&self) -> Option<u64> {
        None
    }

    fn post_count(&self) -> Option<u64> {
        None
    }
}

impl Record for ForumPost {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.title, &self.author, &self.content]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    fn likes(&self) -> Option<u64> {
        Some(self.likes)
    }

    fn comments(&self) -> Option<u64> {
        Some(self.comments)
    }
}

impl Record for ForumCategory {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name]
    }

    fn members(&self) -> Option<u64> {
        Some(self.members)
    }

    fn post_count(&self) -> Option<u64> {
        Some(self.posts)
    }
}

impl Record for DoctorResult {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.specialization]
    }
}
