//! Search query templates used by the pipeline.

/// Builders for the keyword queries sent to the search backend
pub struct SearchQuery;

impl SearchQuery {
    /// Query for openings in a location, optionally narrowed to a sector.
    pub fn jobs(location: &str, sector: Option<&str>) -> String {
        match sector {
            Some(sector) => format!("jobs in {} in the {} sector", location, sector),
            None => format!("jobs in {}", location),
        }
    }

    /// Supplementary grounding query for skill extraction.
    pub fn key_skills(job_description: &str) -> String {
        format!("key skills for {}", job_description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_query_without_sector() {
        assert_eq!(SearchQuery::jobs("Berlin", None), "jobs in Berlin");
    }

    #[test]
    fn test_jobs_query_with_sector() {
        assert_eq!(
            SearchQuery::jobs("London", Some("Finance")),
            "jobs in London in the Finance sector"
        );
    }

    #[test]
    fn test_key_skills_query() {
        assert_eq!(
            SearchQuery::key_skills("Backend Developer"),
            "key skills for Backend Developer"
        );
    }
}
