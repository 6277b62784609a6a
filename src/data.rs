use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};

use crate::models::{ForumCategory, ForumPost, TrendingTopic};

pub fn sample_categories() -> Vec<ForumCategory> {
    let rows = [
        (1, "Women's Health", 1200, 5600),
        (2, "Fitness & Nutrition", 980, 4200),
        (3, "Mental Wellness", 850, 3800),
        (4, "Reproductive Health", 720, 3100),
        (5, "Sexual Health", 650, 2800),
        (6, "Menopause Support", 590, 2400),
    ];

    rows.into_iter()
        .map(|(id, name, members, posts)| ForumCategory {
            id,
            name: name.to_string(),
            members,
            posts,
        })
        .collect()
}

pub fn sample_posts() -> anyhow::Result<Vec<ForumPost>> {
    Ok(vec![
        ForumPost {
            id: 1,
            title: "My PCOS Journey".to_string(),
            content: "Sharing my experience with PCOS diagnosis and management...".to_string(),
            author: "Ariza Khan".to_string(),
            category: "Women's Health".to_string(),
            likes: 45,
            comments: 12,
            timestamp: Some(parse_timestamp("2024-03-10T14:30:00Z")?),
        },
        ForumPost {
            id: 2,
            title: "Best Foods for Hormonal Balance".to_string(),
            content: "Here are my top 10 nutrition tips for hormonal health...".to_string(),
            author: "Riya Patel".to_string(),
            category: "Fitness & Nutrition".to_string(),
            likes: 38,
            comments: 9,
            timestamp: Some(parse_timestamp("2024-03-09T09:15:00Z")?),
        },
        ForumPost {
            id: 3,
            title: "Coping with Endometriosis".to_string(),
            content: "Looking for support and sharing my pain management strategies..."
                .to_string(),
            author: "Ishita Roy".to_string(),
            category: "Reproductive Health".to_string(),
            likes: 52,
            comments: 17,
            timestamp: Some(parse_timestamp("2024-03-08T16:45:00Z")?),
        },
    ])
}

pub fn trending_topics() -> Vec<TrendingTopic> {
    let rows = [
        ("Menstrual Cup Usage", 234),
        ("Hormone Balancing Foods", 189),
        ("Endometriosis Awareness", 156),
        ("Fertility Tracking Apps", 142),
        ("Menopause Symptoms", 128),
    ];

    rows.into_iter()
        .map(|(title, posts)| TrendingTopic {
            title: title.to_string(),
            posts,
        })
        .collect()
}

/// Sample posts plus, optionally, rows imported from a CSV file. Imported
/// posts continue the insertion id sequence.
pub fn load_posts(csv_path: Option<&Path>) -> anyhow::Result<Vec<ForumPost>> {
    let mut posts = sample_posts()?;
    if let Some(path) = csv_path {
        import_csv(path, &mut posts)?;
    }
    Ok(posts)
}

fn import_csv(csv_path: &Path, posts: &mut Vec<ForumPost>) -> anyhow::Result<()> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        title: String,
        content: String,
        author: String,
        category: String,
        likes: u64,
        comments: u64,
        timestamp: Option<String>,
    }

    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path.display()))?;

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let timestamp = match row.timestamp.as_deref() {
            Some(value) if !value.is_empty() => Some(parse_timestamp(value)?),
            _ => None,
        };
        posts.push(ForumPost {
            id: posts.len() as u64 + 1,
            title: row.title,
            content: row.content,
            author: row.author,
            category: row.category,
            likes: row.likes,
            comments: row.comments,
            timestamp,
        });
    }

    Ok(())
}

pub fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("invalid timestamp {value:?}"))?;
    Ok(parsed.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn sample_data_matches_the_seeded_community() {
        let categories = sample_categories();
        assert_eq!(categories.len(), 6);
        assert_eq!(categories[0].name, "Women's Health");
        assert_eq!(categories[0].members, 1200);

        let posts = sample_posts().unwrap();
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|post| post.timestamp.is_some()));

        assert_eq!(trending_topics().len(), 5);
    }

    #[test]
    fn csv_rows_continue_the_id_sequence() {
        let file = tempfile_with(
            "title,content,author,category,likes,comments,timestamp\n\
             Cycle syncing workouts,Matching training to my cycle...,Neha Gupta,Fitness & Nutrition,7,2,2024-03-11T08:00:00Z\n\
             Ask me anything,Five years post-menopause...,Sara Ali,Menopause Support,3,1,\n",
        );
        let posts = load_posts(Some(file.path())).unwrap();
        assert_eq!(posts.len(), 5);
        assert_eq!(posts[3].id, 4);
        assert_eq!(posts[3].author, "Neha Gupta");
        assert!(posts[3].timestamp.is_some());
        assert_eq!(posts[4].id, 5);
        assert!(posts[4].timestamp.is_none());
        file.close().unwrap();
    }

    #[test]
    fn malformed_timestamps_are_reported() {
        let file = tempfile_with(
            "title,content,author,category,likes,comments,timestamp\n\
             Broken,row,Anon,Women's Health,0,0,yesterday\n",
        );
        assert!(load_posts(Some(file.path())).is_err());
    }

    fn tempfile_with(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }
}
