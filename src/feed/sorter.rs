use std::cmp::Ordering;

use chrono::NaiveDateTime;

use crate::post::PostRecord;
use crate::text_utils::parse_timestamp;

/// Orders posts newest first.
///
/// The sort is stable, so posts with the same date keep the order the backend sent them in.
/// Posts whose timestamp does not parse go after every dated post.
pub fn sort_newest_first(posts: &[PostRecord]) -> Vec<PostRecord> {
    let mut keyed: Vec<(Option<NaiveDateTime>, &PostRecord)> = posts.iter()
        .map(|post| (parse_timestamp(&post.timestamp), post))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| newest_first(a, b));

    keyed.into_iter().map(|(_, post)| post.clone()).collect()
}

fn newest_first(a: &Option<NaiveDateTime>, b: &Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use crate::post::PostId;
    use crate::test_data::FEED_DATA;

    use super::*;

    fn post(id: i64, timestamp: &str) -> PostRecord {
        PostRecord {
            id: PostId(id),
            title: format!("post {}", id),
            content: "content".to_string(),
            image: None,
            timestamp: timestamp.to_string(),
            author_name: "thiago".to_string(),
            has_comments: None,
        }
    }

    fn ids(posts: &[PostRecord]) -> Vec<i64> {
        posts.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_newest_first() {
        let posts = vec![post(2, "2025-06-01"), post(1, "2026-01-01"), post(3, "2025-12-31")];
        assert_eq!(ids(&sort_newest_first(&posts)), [1, 3, 2]);
    }

    #[test]
    fn test_feed_order() {
        let posts: Vec<PostRecord> = serde_json::from_str(FEED_DATA).unwrap();
        assert_eq!(ids(&sort_newest_first(&posts)), [1, 2, 3]);
    }

    #[test]
    fn test_unparseable_go_last() {
        let posts = vec![
            post(1, "someday"),
            post(2, "2020-01-01"),
            post(3, ""),
            post(4, "2024-02-29T10:00:00"),
            post(5, "2024-02-29"),
        ];
        assert_eq!(ids(&sort_newest_first(&posts)), [4, 5, 2, 1, 3]);
    }

    #[test]
    fn test_stable_on_ties() {
        let posts = vec![
            post(5, "2024-01-01"),
            post(1, "2024-01-01"),
            post(9, "not a date"),
            post(3, "2024-01-01"),
            post(2, "still not a date"),
        ];
        assert_eq!(ids(&sort_newest_first(&posts)), [5, 1, 3, 9, 2]);
    }

    #[test]
    fn test_input_untouched() {
        let posts = vec![post(1, "2020-01-01"), post(2, "2021-01-01")];
        let sorted = sort_newest_first(&posts);
        assert_eq!(ids(&posts), [1, 2]);
        assert_eq!(ids(&sorted), [2, 1]);
        assert!(sort_newest_first(&[]).is_empty());
    }
}
