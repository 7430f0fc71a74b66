//! Dashboard aggregation - derived on demand, never stored.

use chrono::{DateTime, Duration, Utc};

use crate::domain::Post;

/// How far back a post still counts as recent.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Number of posts shown in the "latest" preview.
pub const LATEST_COUNT: usize = 3;

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats<'a> {
    pub total: usize,
    pub recent: usize,
    pub latest: &'a [Post],
}

impl<'a> DashboardStats<'a> {
    /// Compute the dashboard for `posts` (newest first) as of `now`.
    pub fn compute(posts: &'a [Post], now: DateTime<Utc>) -> Self {
        let cutoff = recent_cutoff(now);
        Self {
            total: posts.len(),
            recent: posts.iter().filter(|p| p.created_at >= cutoff).count(),
            latest: &posts[..posts.len().min(LATEST_COUNT)],
        }
    }
}

/// Oldest creation time that still counts as recent. Inclusive.
pub fn recent_cutoff(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::days(RECENT_WINDOW_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    fn post_at(created_at: DateTime<Utc>) -> Post {
        Post::new("t".into(), "c".into(), created_at)
    }

    #[test]
    fn test_recent_count_over_large_collection() {
        let now = now();
        let mut posts: Vec<Post> = (0..5).map(|i| post_at(now - Duration::hours(i * 20))).collect();
        posts.extend((0..195).map(|i| post_at(now - Duration::days(8 + i))));

        let stats = DashboardStats::compute(&posts, now);

        assert_eq!(stats.total, 200);
        assert_eq!(stats.recent, 5);
    }

    #[test]
    fn test_recent_boundary_is_inclusive() {
        let now = now();
        let posts = vec![
            post_at(now - Duration::days(7)),
            post_at(now - Duration::days(7) - Duration::milliseconds(1)),
        ];

        let stats = DashboardStats::compute(&posts, now);

        assert_eq!(stats.recent, 1);
    }

    #[test]
    fn test_latest_takes_head_of_collection() {
        let now = now();
        let posts: Vec<Post> = (0..5).map(|i| post_at(now - Duration::minutes(i))).collect();

        let stats = DashboardStats::compute(&posts, now);

        assert_eq!(stats.latest, &posts[..3]);
    }

    #[test]
    fn test_empty_collection() {
        let stats = DashboardStats::compute(&[], now());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.recent, 0);
        assert!(stats.latest.is_empty());
    }
}
