use crate::filter::{self, Criteria};
use crate::models::Record;
use crate::paginate::{self, PageRequest, PresentedList};
use crate::sort::{self, SortMode};

/// Filter, then sort, then optionally paginate. Every step returns a fresh
/// list; callers that want the full result (the category grid) pass no page.
pub fn curate<R: Record + Clone>(
    records: &[R],
    criteria: &Criteria,
    mode: SortMode,
    page: Option<PageRequest>,
) -> PresentedList<R> {
    let filtered = filter::apply(records, criteria);
    let sorted = sort::apply(&filtered, mode);
    match page {
        Some(request) => paginate::paginate(&sorted, request),
        None => PresentedList {
            items: sorted,
            total_pages: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::filter::FilterMode;

    #[test]
    fn full_pipeline_filters_sorts_and_pages() {
        let posts = data::sample_posts().unwrap();
        let list = curate(
            &posts,
            &Criteria::default(),
            SortMode::Likes,
            Some(PageRequest { number: 1, size: 2 }),
        );

        assert_eq!(list.total_pages, 2);
        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].title, "Coping with Endometriosis");
        assert_eq!(list.items[1].title, "My PCOS Journey");
    }

    #[test]
    fn omitted_page_returns_the_full_list() {
        let categories = data::sample_categories();
        let list = curate(
            &categories,
            &Criteria {
                mode: FilterMode::Large,
                ..Criteria::default()
            },
            SortMode::Unsorted,
            None,
        );

        assert_eq!(list.total_pages, 1);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].name, "Women's Health");
    }

    #[test]
    fn input_list_is_left_untouched() {
        let posts = data::sample_posts().unwrap();
        let before: Vec<u64> = posts.iter().map(|post| post.id).collect();
        let _ = curate(
            &posts,
            &Criteria::search("pcos"),
            SortMode::Newest,
            Some(PageRequest { number: 1, size: 5 }),
        );
        let after: Vec<u64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn empty_input_degrades_to_an_empty_presented_list() {
        let posts: Vec<crate::models::ForumPost> = Vec::new();
        let list = curate(
            &posts,
            &Criteria::default(),
            SortMode::Newest,
            Some(PageRequest { number: 1, size: 5 }),
        );
        assert!(list.items.is_empty());
        assert_eq!(list.total_pages, 1);
    }

    #[test]
    fn search_and_category_combine_with_and_semantics() {
        let posts = data::sample_posts().unwrap();
        let criteria = Criteria {
            search_text: "my".to_string(),
            category: Some("Fitness & Nutrition".to_string()),
            ..Criteria::default()
        };
        let list = curate(&posts, &criteria, SortMode::Newest, None);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].title, "Best Foods for Hormonal Balance");
    }
}
