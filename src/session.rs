use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::models::ForumPost;

/// Bookmark and solved marks for the current session, keyed by post id.
/// They live and die with the view that renders them.
#[derive(Debug, Default)]
pub struct EngagementState {
    bookmarks: HashSet<u64>,
    solved: HashSet<u64>,
}

impl EngagementState {
    pub fn toggle_bookmark(&mut self, post_id: u64) -> bool {
        toggle(&mut self.bookmarks, post_id)
    }

    pub fn toggle_solved(&mut self, post_id: u64) -> bool {
        toggle(&mut self.solved, post_id)
    }

    pub fn is_bookmarked(&self, post_id: u64) -> bool {
        self.bookmarks.contains(&post_id)
    }

    pub fn is_solved(&self, post_id: u64) -> bool {
        self.solved.contains(&post_id)
    }
}

fn toggle(set: &mut HashSet<u64>, post_id: u64) -> bool {
    if !set.insert(post_id) {
        set.remove(&post_id);
    }
    set.contains(&post_id)
}

/// Replace the liked post wholesale; everything else is untouched.
pub fn like_post(posts: &[ForumPost], post_id: u64) -> Vec<ForumPost> {
    posts
        .iter()
        .map(|post| {
            if post.id == post_id {
                let mut liked = post.clone();
                liked.likes += 1;
                liked
            } else {
                post.clone()
            }
        })
        .collect()
}

/// Prepend a new post with the next insertion id. Posts missing a title or
/// body are dropped and the list comes back unchanged.
pub fn add_post(
    posts: &[ForumPost],
    title: &str,
    content: &str,
    category: &str,
    timestamp: DateTime<Utc>,
) -> Vec<ForumPost> {
    if title.is_empty() || content.is_empty() {
        return posts.to_vec();
    }

    let mut updated = Vec::with_capacity(posts.len() + 1);
    updated.push(ForumPost {
        id: posts.len() as u64 + 1,
        title: title.to_string(),
        content: content.to_string(),
        author: "You".to_string(),
        category: category.to_string(),
        likes: 0,
        comments: 0,
        timestamp: Some(timestamp),
    });
    updated.extend(posts.iter().cloned());
    updated
}

/// Injected storage for presentation preferences (dark mode, sidebar).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// Preferences persisted as a flat JSON object on disk. A missing file is
/// an empty store; every set rewrites the file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let values = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("invalid preference file {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(JsonFileStore {
            path: path.to_path_buf(),
            values,
        })
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
