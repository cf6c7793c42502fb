//! Prompt templates for each pipeline stage
//!
//! Every system instruction constrains the response to JSON only. The
//! completion backend does not enforce this; agents normalize and validate
//! whatever comes back.

use crate::career::{ResourceLinkTemplate, SearchResult};
use crate::validation::{MAX_DESCRIPTION_WORDS, MAX_ROADMAP_STEPS, SkillCountPolicy};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction for job title extraction
    pub fn job_extraction_system() -> &'static str {
        r#"You are an expert at extracting job information from a list of unstructured search results.
You will receive a list of job-related snippets. Format them as a JSON array of objects with the "title" and "description" keys.
Rules:
1. The title MUST be a job name.
2. Skip any result that is not a single job, such as "100+ jobs in London" or "Software jobs in Berlin".
3. Keep each description factual and specific to its title. Do not invent details.
4. The returned result must be JSON only, with no commentary.

Example:
[
  {
    "title": "Software Engineer",
    "description": "Seeking a skilled software engineer to develop web applications."
  },
  {
    "title": "Data Scientist",
    "description": "Looking for a data scientist to analyze data and build models."
  }
]"#
    }

    /// User content for job title extraction: the snippets as JSON
    pub fn job_extraction_user(results: &[SearchResult]) -> String {
        serde_json::to_string_pretty(results).unwrap_or_else(|_| "[]".to_string())
    }

    /// System instruction for skill extraction
    pub fn skill_extraction_system(policy: SkillCountPolicy) -> String {
        let count = match policy {
            SkillCountPolicy::Exactly(n) => format!("exactly {} skill objects", n),
            SkillCountPolicy::Unbounded => "one skill object per key skill".to_string(),
        };
        format!(
            r#"You are an expert at extracting skills from job descriptions.
You must return a JSON array containing {}. Each object has:
- "skillName": the name of the skill
- "description": a brief description of the skill
- "importance": exactly one of "High", "Medium" or "Low"
The returned result must be JSON only, with no commentary.

Example:
[
  {{
    "skillName": "Python",
    "description": "Proficiency in Python programming language.",
    "importance": "High"
  }},
  {{
    "skillName": "Communication",
    "description": "Strong written and verbal communication skills.",
    "importance": "Medium"
  }}
]"#,
            count
        )
    }

    /// User content for skill extraction, optionally grounded with search results
    pub fn skill_extraction_user(job_description: &str, grounding: Option<&[SearchResult]>) -> String {
        let mut prompt = format!(
            r#"Analyze the following job description and extract the key skills and qualifications.
For each skill, provide a brief description and an importance level (High, Medium, or Low).

Job Description:
{}
"#,
            job_description
        );

        if let Some(results) = grounding
            && !results.is_empty()
        {
            prompt.push_str("\nSearch results about the skills this role needs:\n");
            for result in results {
                prompt.push_str(&format!(
                    "- {}: {} ({})\n",
                    result.title, result.snippet_text, result.url
                ));
            }
        }

        prompt
    }

    /// System instruction for roadmap generation
    pub fn roadmap_system(links: &ResourceLinkTemplate) -> String {
        format!(
            r#"You are an expert at creating learning roadmaps.
Given a skill, generate a learning roadmap with at most {max} steps. Each step has:
- "name": a high level topic
- "description": a brief description of at most {words} words
- "resourceLinks": a list with one link to {base} searching for "free online resources for <step name> in <skill name>"
Return the roadmap as a JSON array of step objects and nothing else.

Example:
[
  {{
    "name": "Introduction to Python",
    "description": "Learn the basic syntax and data structures of Python.",
    "resourceLinks": ["{example}"]
  }}
]"#,
            max = MAX_ROADMAP_STEPS,
            words = MAX_DESCRIPTION_WORDS,
            base = links.base(),
            example = links.link_for("Introduction to Python", "Python"),
        )
    }

    /// User content for roadmap generation
    pub fn roadmap_user(skill_name: &str) -> String {
        format!(
            r#"Generate a learning roadmap for the skill "{}".
Use at most {} high level steps so that all text fits on one printed page."#,
            skill_name, MAX_ROADMAP_STEPS
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_extraction_system_mentions_json_and_aggregates() {
        let system = PromptTemplate::job_extraction_system();
        assert!(system.contains("JSON only"));
        assert!(system.contains("100+ jobs in London"));
    }

    #[test]
    fn test_job_extraction_user_serializes_results() {
        let results = vec![SearchResult::new("Welder", "Night shifts", "https://jobs.example/1")];
        let user = PromptTemplate::job_extraction_user(&results);
        let decoded: serde_json::Value = serde_json::from_str(&user).unwrap();
        assert_eq!(decoded[0]["snippetText"], "Night shifts");
    }

    #[test]
    fn test_skill_extraction_system_count() {
        let refined = PromptTemplate::skill_extraction_system(SkillCountPolicy::default());
        assert!(refined.contains("exactly 5 skill objects"));
        assert!(refined.contains("\"High\", \"Medium\" or \"Low\""));

        let basic = PromptTemplate::skill_extraction_system(SkillCountPolicy::Unbounded);
        assert!(basic.contains("one skill object per key skill"));
        assert!(!basic.contains("skill objects"));
    }

    #[test]
    fn test_skill_extraction_user_with_grounding() {
        let grounding = vec![SearchResult::new("Top skills", "SQL, Python", "https://a.example")];
        let prompt = PromptTemplate::skill_extraction_user("Data Analyst", Some(&grounding));
        assert!(prompt.contains("Data Analyst"));
        assert!(prompt.contains("- Top skills: SQL, Python (https://a.example)"));

        let bare = PromptTemplate::skill_extraction_user("Data Analyst", None);
        assert!(!bare.contains("Search results"));
    }

    #[test]
    fn test_roadmap_system_embeds_link_format() {
        let system = PromptTemplate::roadmap_system(&ResourceLinkTemplate::default());
        assert!(system.contains("at most 4 steps"));
        assert!(system.contains("at most 200 words"));
        assert!(system.contains(
            "https://duckduckgo.com/?q=free+online+resources+for+Introduction+to+Python+in+Python"
        ));
    }

    #[test]
    fn test_roadmap_user() {
        assert!(PromptTemplate::roadmap_user("Rust").contains("\"Rust\""));
    }
}
