use std::fmt::Write;

use crate::models::{ForumCategory, ForumPost, TrendingTopic};
use crate::sort::{self, SortMode};

#[derive(Debug, Clone)]
pub struct CategoryMix {
    pub category: String,
    pub post_count: usize,
    pub total_likes: u64,
}

pub fn summarize_by_category(posts: &[ForumPost]) -> Vec<CategoryMix> {
    let mut map: std::collections::HashMap<String, (usize, u64)> =
        std::collections::HashMap::new();

    for post in posts {
        let entry = map.entry(post.category.clone()).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += post.likes;
    }

    let mut summaries: Vec<CategoryMix> = map
        .into_iter()
        .map(|(category, (post_count, total_likes))| CategoryMix {
            category,
            post_count,
            total_likes,
        })
        .collect();

    summaries.sort_by(|a, b| {
        b.post_count
            .cmp(&a.post_count)
            .then_with(|| a.category.cmp(&b.category))
    });
    summaries
}

pub fn build_report(
    posts: &[ForumPost],
    categories: &[ForumCategory],
    topics: &[TrendingTopic],
) -> String {
    let summaries = summarize_by_category(posts);
    let most_liked = sort::apply(posts, SortMode::Likes);
    let recent = sort::apply(posts, SortMode::Newest);

    let mut output = String::new();

    let _ = writeln!(output, "# SheSync Community Digest");
    let _ = writeln!(output);
    let _ = writeln!(output, "## Category Mix");

    if summaries.is_empty() {
        let _ = writeln!(output, "No posts yet.");
    } else {
        for summary in summaries.iter() {
            let _ = writeln!(
                output,
                "- {}: {} posts ({} likes)",
                summary.category, summary.post_count, summary.total_likes
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Most Liked Posts");

    if most_liked.is_empty() {
        let _ = writeln!(output, "No posts yet.");
    } else {
        for post in most_liked.iter().take(5) {
            let _ = writeln!(
                output,
                "- {} by {} ({} likes, {} comments)",
                post.title, post.author, post.likes, post.comments
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recent Posts");

    if recent.is_empty() {
        let _ = writeln!(output, "No posts yet.");
    } else {
        for post in recent.iter().take(5) {
            let date = post
                .timestamp
                .map(|value| value.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "undated".to_string());
            let _ = writeln!(output, "- {} by {} on {}", post.title, post.author, date);
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Communities");

    for category in categories.iter() {
        let _ = writeln!(
            output,
            "- {}: {} members, {} posts",
            category.name, category.members, category.posts
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Trending Topics");

    for topic in topics.iter() {
        let _ = writeln!(output, "- {} ({} posts)", topic.title, topic.posts);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn summaries_count_posts_and_likes_per_category() {
        let posts = data::sample_posts().unwrap();
        let summaries = summarize_by_category(&posts);
        assert_eq!(summaries.len(), 3);
        // one post each, so ties break alphabetically
        assert_eq!(summaries[0].category, "Fitness & Nutrition");
        assert_eq!(summaries[0].post_count, 1);
        assert_eq!(summaries[0].total_likes, 38);
    }

    #[test]
    fn report_includes_every_section() {
        let report = build_report(
            &data::sample_posts().unwrap(),
            &data::sample_categories(),
            &data::trending_topics(),
        );

        assert!(report.starts_with("# SheSync Community Digest"));
        assert!(report.contains("## Category Mix"));
        assert!(report.contains("## Most Liked Posts"));
        assert!(report.contains("- Coping with Endometriosis by Ishita Roy (52 likes, 17 comments)"));
        assert!(report.contains("## Recent Posts"));
        assert!(report.contains("- My PCOS Journey by Ariza Khan on 2024-03-10"));
        assert!(report.contains("- Women's Health: 1200 members, 5600 posts"));
        assert!(report.contains("- Menstrual Cup Usage (234 posts)"));
    }

    #[test]
    fn empty_community_still_renders() {
        let report = build_report(&[], &[], &[]);
        assert!(report.contains("No posts yet."));
    }
}
