//! Detection of aggregate listing titles.
//!
//! Search backends return plenty of results that are listing pages rather
//! than openings ("100+ jobs in London", "Software Jobs in Berlin"). A
//! [`Job`](super::Job) must never be built from one of those.

use regex::Regex;
use std::sync::LazyLock;

static COUNTED_LISTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*\d[\d,.]*\s*(k\b)?\s*\+?\s*(new\s+|open\s+|latest\s+)?(jobs?|vacancies|openings|positions|roles)\b")
        .expect("valid regex")
});

static LOCATED_LISTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(jobs|vacancies|openings|job\s+offers)\s+(in|near|around|at|available)\b")
        .expect("valid regex")
});

static LISTING_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(job\s+(search|listings?|board)|hiring\s+now|apply\s+today)\b")
        .expect("valid regex")
});

/// Returns `true` if `title` names a listing page instead of a single job.
pub fn is_aggregate_listing(title: &str) -> bool {
    let title = title.trim();
    if title.is_empty() {
        return true;
    }
    COUNTED_LISTING.is_match(title) || LOCATED_LISTING.is_match(title) || LISTING_PAGE.is_match(title)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counted_listings_are_aggregates() {
        assert!(is_aggregate_listing("100+ jobs in London"));
        assert!(is_aggregate_listing("2,345 Jobs"));
        assert!(is_aggregate_listing("12 new vacancies"));
        assert!(is_aggregate_listing("5k+ open positions"));
    }

    #[test]
    fn test_located_listings_are_aggregates() {
        assert!(is_aggregate_listing("Software Jobs in Berlin"));
        assert!(is_aggregate_listing("Nursing vacancies near Leeds"));
    }

    #[test]
    fn test_listing_pages_are_aggregates() {
        assert!(is_aggregate_listing("Indeed Job Search"));
        assert!(is_aggregate_listing("Hiring now: warehouse staff"));
        assert!(is_aggregate_listing("   "));
    }

    #[test]
    fn test_job_names_are_not_aggregates() {
        assert!(!is_aggregate_listing("Software Engineer"));
        assert!(!is_aggregate_listing("Senior Data Scientist"));
        assert!(!is_aggregate_listing("Project Manager (Construction)"));
        assert!(!is_aggregate_listing("Level 3 Support Technician"));
    }
}
