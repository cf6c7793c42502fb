//! Console output formatter for pipeline results

use colored::Colorize;
use serde::Serialize;
use skillpath_domain::{AgentResult, CareerPlan, Importance, Job, RoadmapStep, Skill};

/// Formats pipeline results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a job list
    pub fn format_jobs(location: &str, jobs: &[Job]) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&format!("Jobs in {}", location)));
        output.push('\n');

        if jobs.is_empty() {
            output.push_str(&format!("\n{}\n", "No jobs found.".dimmed()));
        }
        for (i, job) in jobs.iter().enumerate() {
            output.push_str(&format!(
                "\n{} {}\n{}\n",
                format!("{:>2}.", i + 1).dimmed(),
                job.title.yellow().bold(),
                Self::indent(&job.description, "    ")
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format an extracted skill list
    pub fn format_skills(skills: &[Skill]) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header("Key Skills"));
        for skill in skills {
            output.push_str(&Self::skill_line(skill));
        }
        output
    }

    /// Format one roadmap
    pub fn format_roadmap(skill_name: &str, steps: &[RoadmapStep]) -> String {
        let mut output = String::new();
        output.push_str(&Self::section_header(&format!("Roadmap: {}", skill_name)));
        output.push_str(&Self::steps(steps));
        output
    }

    /// Format a full career plan: skills, then a roadmap per skill
    pub fn format_plan(plan: &CareerPlan) -> String {
        let mut output = String::new();
        output.push_str(&Self::header(&plan.job.title));
        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Job:".cyan().bold(),
            plan.job.description
        ));

        output.push_str(&Self::format_skills(&plan.skills));

        for (skill, steps) in plan.entries() {
            output.push_str(&Self::format_roadmap(&skill.skill_name, steps));
        }

        output.push_str(&Self::footer());
        output
    }

    /// Format any agent result as its JSON envelope
    pub fn format_json<T: Serialize>(result: &AgentResult<T>) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format a failed stage
    pub fn format_error(error: &str) -> String {
        format!("{} {}", "Error:".red().bold(), error)
    }

    fn skill_line(skill: &Skill) -> String {
        let importance = match skill.importance {
            Importance::High => skill.importance.as_str().red().bold(),
            Importance::Medium => skill.importance.as_str().yellow(),
            Importance::Low => skill.importance.as_str().dimmed(),
        };
        format!(
            "  * {} [{}]\n{}\n",
            skill.skill_name.bold(),
            importance,
            Self::indent(&skill.description, "      ")
        )
    }

    fn steps(steps: &[RoadmapStep]) -> String {
        let mut output = String::new();
        for (i, step) in steps.iter().enumerate() {
            output.push_str(&format!(
                "\n  {} {}\n{}\n",
                format!("Step {}:", i + 1).cyan(),
                step.name.bold(),
                Self::indent(&step.description, "    ")
            ));
            for link in &step.resource_links {
                output.push_str(&format!("    {} {}\n", "->".dimmed(), link.underline()));
            }
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
