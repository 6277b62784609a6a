use std::cmp::Ordering;

use clap::ValueEnum;

use crate::models::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortMode {
    #[default]
    Newest,
    Likes,
    Comments,
    Members,
    Posts,
    /// Keep the original insertion order
    Unsorted,
}

/// Descending comparator on the mode's key. Missing keys are `None` and
/// rank last; ties keep their input order because the caller sorts stably.
pub fn comparator<R: Record>(mode: SortMode) -> impl Fn(&R, &R) -> Ordering {
    move |a, b| match mode {
        SortMode::Newest => b.timestamp().cmp(&a.timestamp()),
        SortMode::Likes => b.likes().cmp(&a.likes()),
        SortMode::Comments => b.comments().cmp(&a.comments()),
        SortMode::Members => b.members().cmp(&a.members()),
        SortMode::Posts => b.post_count().cmp(&a.post_count()),
        SortMode::Unsorted => Ordering::Equal,
    }
}

pub fn apply<R: Record + Clone>(records: &[R], mode: SortMode) -> Vec<R> {
    let mut sorted = records.to_vec();
    sorted.sort_by(comparator(mode));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForumPost;
    use chrono::{DateTime, Utc};

    fn post(id: u64, likes: u64, comments: u64, timestamp: Option<&str>) -> ForumPost {
        ForumPost {
            id,
            title: format!("post {id}"),
            content: String::new(),
            author: String::new(),
            category: "Women's Health".to_string(),
            likes,
            comments,
            timestamp: timestamp.map(|value| {
                DateTime::parse_from_rfc3339(value)
                    .unwrap()
                    .with_timezone(&Utc)
            }),
        }
    }

    fn ids(posts: &[ForumPost]) -> Vec<u64> {
        posts.iter().map(|post| post.id).collect()
    }

    #[test]
    fn newest_sorts_by_timestamp_descending() {
        let posts = vec![
            post(1, 0, 0, Some("2024-03-08T16:45:00Z")),
            post(2, 0, 0, Some("2024-03-10T14:30:00Z")),
            post(3, 0, 0, Some("2024-03-09T09:15:00Z")),
        ];
        assert_eq!(ids(&apply(&posts, SortMode::Newest)), vec![2, 3, 1]);
    }

    #[test]
    fn undated_posts_keep_insertion_order_at_the_end() {
        let posts = vec![
            post(1, 0, 0, None),
            post(2, 0, 0, Some("2024-03-10T14:30:00Z")),
            post(3, 0, 0, None),
        ];
        assert_eq!(ids(&apply(&posts, SortMode::Newest)), vec![2, 1, 3]);
    }

    #[test]
    fn likes_sorts_descending_with_stable_ties() {
        let posts = vec![
            post(1, 38, 0, None),
            post(2, 52, 0, None),
            post(3, 38, 0, None),
            post(4, 45, 0, None),
        ];
        assert_eq!(ids(&apply(&posts, SortMode::Likes)), vec![2, 4, 1, 3]);
    }

    #[test]
    fn resorting_sorted_input_is_identical() {
        let posts = vec![
            post(1, 10, 3, None),
            post(2, 10, 9, None),
            post(3, 10, 1, None),
        ];
        let once = apply(&posts, SortMode::Likes);
        let twice = apply(&once, SortMode::Likes);
        assert_eq!(ids(&once), ids(&twice));
        assert_eq!(ids(&once), vec![1, 2, 3]);
    }

    #[test]
    fn unsorted_is_the_identity() {
        let posts = vec![post(3, 1, 0, None), post(1, 5, 0, None), post(2, 3, 0, None)];
        assert_eq!(ids(&apply(&posts, SortMode::Unsorted)), vec![3, 1, 2]);
    }
}
