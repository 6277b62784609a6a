use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};

mod curate;
mod data;
mod directory;
mod filter;
mod models;
mod paginate;
mod report;
mod session;
mod sort;
mod tips;

use curate::curate;
use directory::{DoctorDirectory, SampleDirectory};
use filter::{Criteria, FilterMode};
use paginate::PageRequest;
use session::{EngagementState, JsonFileStore, PreferenceStore};
use sort::SortMode;
use tips::TrackedInputs;

#[derive(Parser)]
#[command(name = "community-insights")]
#[command(about = "Community curation and wellness tips for SheSync", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse curated forum posts
    Posts {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_enum, default_value_t = SortMode::Newest)]
        sort_by: SortMode,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long, default_value_t = 5)]
        page_size: usize,
        /// Import additional posts from a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Like this post before listing
        #[arg(long)]
        like: Option<u64>,
        /// Bookmark these posts for this session
        #[arg(long)]
        bookmark: Vec<u64>,
        /// Mark these posts solved for this session
        #[arg(long)]
        solved: Vec<u64>,
        /// Title of a new post to add before listing
        #[arg(long, requires = "add_content")]
        add_title: Option<String>,
        /// Body of the new post
        #[arg(long, requires = "add_title")]
        add_content: Option<String>,
        #[arg(long, default_value = "Women's Health")]
        add_category: String,
    },
    /// Browse the community grid
    Forums {
        #[arg(long, value_enum, default_value_t = FilterMode::All)]
        filter_by: FilterMode,
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long, value_enum, default_value_t = SortMode::Unsorted)]
        sort_by: SortMode,
    },
    /// Look up doctors near a location
    Doctors {
        #[arg(long)]
        query: String,
    },
    /// Generate wellness tips from tracked health inputs
    Tips {
        #[arg(long)]
        cycle_duration: Option<u32>,
        #[arg(long)]
        last_period_duration: Option<u32>,
        #[arg(long)]
        sleep_duration: Option<f64>,
        #[arg(long)]
        sleep_quality: Option<String>,
        #[arg(long = "mood")]
        moods: Vec<String>,
        #[arg(long = "symptom")]
        symptoms: Vec<String>,
    },
    /// Write the markdown community digest
    Report {
        #[arg(long, default_value = "digest.md")]
        out: PathBuf,
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Get or set a stored presentation preference
    Prefs {
        key: String,
        value: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Posts {
            search,
            category,
            sort_by,
            page,
            page_size,
            csv,
            like,
            bookmark,
            solved,
            add_title,
            add_content,
            add_category,
        } => {
            let mut posts = data::load_posts(csv.as_deref())?;
            if let (Some(title), Some(content)) = (&add_title, &add_content) {
                posts = session::add_post(&posts, title, content, &add_category, Utc::now());
            }
            if let Some(post_id) = like {
                posts = session::like_post(&posts, post_id);
            }

            let mut engagement = EngagementState::default();
            for post_id in bookmark {
                engagement.toggle_bookmark(post_id);
            }
            for post_id in solved {
                engagement.toggle_solved(post_id);
            }

            let criteria = Criteria {
                search_text: search,
                category,
                mode: FilterMode::All,
            };
            let list = curate(
                &posts,
                &criteria,
                sort_by,
                Some(PageRequest {
                    number: page,
                    size: page_size,
                }),
            );

            if list.items.is_empty() {
                println!("No posts matched.");
                return Ok(());
            }

            for post in list.items.iter() {
                let date = post
                    .timestamp
                    .map(|value| value.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| "undated".to_string());
                let mut marks = String::new();
                if engagement.is_bookmarked(post.id) {
                    marks.push_str(" [bookmarked]");
                }
                if engagement.is_solved(post.id) {
                    marks.push_str(" [solved]");
                }
                println!(
                    "- #{} {} by {} [{}] {} likes, {} comments ({}){}",
                    post.id,
                    post.title,
                    post.author,
                    post.category,
                    post.likes,
                    post.comments,
                    date,
                    marks
                );
            }
            println!(
                "Page {} of {}",
                page.clamp(1, list.total_pages),
                list.total_pages
            );
        }
        Commands::Forums {
            filter_by,
            search,
            sort_by,
        } => {
            let categories = data::sample_categories();
            let criteria = Criteria {
                search_text: search,
                category: None,
                mode: filter_by,
            };
            let list = curate(&categories, &criteria, sort_by, None);

            if list.items.is_empty() {
                println!("No communities matched.");
                return Ok(());
            }

            for category in list.items.iter() {
                println!(
                    "- {}: {} members, {} posts",
                    category.name, category.members, category.posts
                );
            }
        }
        Commands::Doctors { query } => {
            let doctors = match SampleDirectory.search(&query) {
                Ok(results) => results,
                Err(err) => {
                    println!("{err}");
                    Vec::new()
                }
            };
            let list = curate(&doctors, &Criteria::default(), SortMode::Unsorted, None);

            for doctor in list.items.iter() {
                println!(
                    "- {} ({}) rated {:.1} across {} reviews",
                    doctor.name, doctor.specialization, doctor.rating, doctor.review_count
                );
            }
        }
        Commands::Tips {
            cycle_duration,
            last_period_duration,
            sleep_duration,
            sleep_quality,
            moods,
            symptoms,
        } => {
            let inputs = TrackedInputs {
                cycle_duration,
                last_period_duration,
                sleep_duration,
                sleep_quality,
                moods,
                symptoms,
            };
            if !inputs.symptoms.is_empty() {
                println!("Tracked symptoms: {}", inputs.symptoms.join(", "));
            }
            for tip in tips::generate_tips(&inputs) {
                println!("- {tip}");
            }
        }
        Commands::Report { out, csv } => {
            let posts = data::load_posts(csv.as_deref())?;
            let digest = report::build_report(
                &posts,
                &data::sample_categories(),
                &data::trending_topics(),
            );
            std::fs::write(&out, digest)?;
            println!("Digest written to {}.", out.display());
        }
        Commands::Prefs { key, value } => {
            let path = std::env::var("SHESYNC_PREFS")
                .unwrap_or_else(|_| "shesync-prefs.json".to_string());
            let mut store = JsonFileStore::open(std::path::Path::new(&path))?;
            match value {
                Some(value) => {
                    store.set(&key, &value)?;
                    println!("{key} = {value}");
                }
                None => match store.get(&key) {
                    Some(value) => println!("{key} = {value}"),
                    None => println!("{key} is unset"),
                },
            }
        }
    }

    Ok(())
}
