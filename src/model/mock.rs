//! Built-in article rows used when no data file is given.

use super::{ArticleRow, ArticleStatus};

fn row(
    id: u64,
    title: &str,
    keyword: &str,
    traffic: u64,
    words: u64,
    created_on: &str,
    status: ArticleStatus,
) -> ArticleRow {
    ArticleRow {
        id,
        title: title.to_string(),
        keyword: keyword.to_string(),
        traffic,
        words,
        created_on: created_on.to_string(),
        status,
    }
}

/// Five sample articles: three generated, one published, one scheduled.
pub fn seed_rows() -> Vec<ArticleRow> {
    vec![
        row(
            1,
            "How to Improve Your Skills in League of Legends",
            "league of legends",
            2_240_000,
            4575,
            "20 hours ago",
            ArticleStatus::Generated,
        ),
        row(
            2,
            "How to Master Last Hitting in League of Legends",
            "league of legends",
            2_240_000,
            3480,
            "21 hours ago",
            ArticleStatus::Generated,
        ),
        row(
            3,
            "7 Tips for Better Teamplay in League of Legends",
            "league of legends",
            2_240_000,
            2676,
            "a day ago",
            ArticleStatus::Generated,
        ),
        row(
            4,
            "Top Virtual Executive Assistant Services (2024)",
            "virtual executive assistant",
            2900,
            2408,
            "1 Oct, 24",
            ArticleStatus::Published,
        ),
        row(
            5,
            "Unlimited Graphics Design Solutions",
            "unlimited graphic design services",
            390,
            1793,
            "---",
            ArticleStatus::Scheduled,
        ),
    ]
}
