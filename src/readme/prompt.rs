// src/readme/prompt.rs
// =============================================================================
// Builds the instruction prompt sent to the language model.
//
// The prompt has three parts:
// 1. What we know about the repository (name, languages, topics, ...)
// 2. How the README must look (section order, Markdown rules, footer)
// 3. The existing README, if there is one, as material to improve on
// =============================================================================

use std::fmt::Write;

use crate::github::RepositoryMetadata;

/// The line every generated README has to end with, right after a `---` rule.
pub const FOOTER_LINE: &str = "Generated with ❤️ and ☕.";

pub const NO_DESCRIPTION: &str = "No description provided";
pub const NO_TOPICS: &str = "No topics available";
pub const NO_LICENSE: &str = "unspecified";

const SECTIONS: [&str; 14] = [
    "A large, eye-catching title with the project name",
    "A short description and badges (stars, forks, license)",
    "A table of contents linking to every section",
    "Project overview",
    "Demo or screenshots (if applicable)",
    "Technologies used (as a list)",
    "Installation and setup (with bash code blocks)",
    "Usage (with clear examples)",
    "Project structure (as a list or table)",
    "Features (as a bulleted list)",
    "Roadmap or next steps (optional)",
    "How to contribute",
    "License",
    "Author or contact",
];

const FORMATTING_RULES: [&str; 10] = [
    "Use a clear and consistent structure",
    "Leave a blank line between sections",
    "Use the right header sizes (# for the main title, ## for sections, ### for subsections)",
    "Write lists with clear bullet markers",
    "Use fenced code blocks tagged with their language",
    "Keep alignment consistent",
    "Avoid very long lines",
    "Use tables for information that is naturally tabular",
    "Make sure every link is correctly formatted and works",
    "Start every section heading with one emoji",
];

pub fn topic_list(metadata: &RepositoryMetadata) -> String {
    if metadata.topics.is_empty() {
        NO_TOPICS.to_string()
    } else {
        metadata.topics.join(", ")
    }
}

// Builds the full prompt
//
// Parameters:
//   metadata: everything fetched from GitHub
//   languages: the comma-joined language list (see RepositoryMetadata::language_list)
//   prose_language: the natural language the README must be written in
pub fn build_prompt(metadata: &RepositoryMetadata, languages: &str, prose_language: &str) -> String {
    let mut prompt = String::new();

    // write! into a String can't fail, so the results are ignored throughout
    let _ = writeln!(
        prompt,
        "Create a professional, well formatted and detailed README.md for the following GitHub repository:"
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Name: {}", metadata.name);
    let _ = writeln!(prompt, "Description: {}", metadata.description_or(NO_DESCRIPTION));
    let _ = writeln!(prompt, "Languages: {languages}");
    if let Some(primary) = metadata.primary_language.as_deref() {
        let _ = writeln!(prompt, "Primary language: {primary}");
    }
    let _ = writeln!(prompt, "Topics: {}", topic_list(metadata));
    let _ = writeln!(prompt, "Owner: {}", metadata.owner.login);
    let _ = writeln!(prompt, "Repository URL: {}", metadata.html_url);
    if let Some(homepage) = metadata.homepage.as_deref().filter(|h| !h.trim().is_empty()) {
        let _ = writeln!(prompt, "Homepage: {homepage}");
    }
    if let Some(branch) = metadata.default_branch.as_deref() {
        let _ = writeln!(prompt, "Default branch: {branch}");
    }
    let _ = writeln!(
        prompt,
        "Stars: {}, forks: {}, open issues: {}",
        metadata.star_count, metadata.fork_count, metadata.open_issues_count
    );
    let license = metadata
        .license
        .as_ref()
        .map_or(NO_LICENSE, |license| license.name.as_str());
    let _ = writeln!(prompt, "License: {license}");

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "IMPORTANT: the README must follow these FORMATTING RULES:");
    for (number, rule) in FORMATTING_RULES.iter().enumerate() {
        let _ = writeln!(prompt, "{}. {rule}", number + 1);
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "The README must contain the following sections, in this order:");
    for (number, section) in SECTIONS.iter().enumerate() {
        if *section == "License" {
            let _ = writeln!(prompt, "{}. License: {license}", number + 1);
        } else {
            let _ = writeln!(prompt, "{}. {section}", number + 1);
        }
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "Write the whole README in {prose_language}.");
    let _ = writeln!(prompt, "Use clean and consistent Markdown formatting.");
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "At the very end of the README you MUST add the following lines, formatted exactly like this:"
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "---");
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "{FOOTER_LINE}");
    let _ = writeln!(prompt);

    match metadata.existing_documentation.as_deref() {
        Some(existing) if !existing.trim().is_empty() => {
            let _ = writeln!(
                prompt,
                "The repository already has a README. Use it as a reference, but improve it:"
            );
            let _ = writeln!(prompt);
            let _ = writeln!(prompt, "{existing}");
        }
        _ => {
            let _ = writeln!(prompt, "There is no existing README.");
        }
    }

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fixtures::{bare_metadata, full_metadata};

    #[test]
    fn test_prompt_embeds_repository_facts() {
        let metadata = full_metadata();
        let prompt = build_prompt(&metadata, &metadata.language_list(), "English");

        assert!(prompt.contains("Name: widget"));
        assert!(prompt.contains("Description: Makes widgets"));
        assert!(prompt.contains("Languages: Rust, Dockerfile, Shell"));
        assert!(prompt.contains("Primary language: Rust"));
        assert!(prompt.contains("Topics: cli, widgets"));
        assert!(prompt.contains("Owner: acme"));
        assert!(prompt.contains("Repository URL: https://github.com/acme/widget"));
        assert!(prompt.contains("Homepage: https://widget.dev"));
        assert!(prompt.contains("License: MIT License"));
        assert!(prompt.contains("Default branch: main"));
        assert!(prompt.contains("Stars: 42, forks: 7, open issues: 3"));
        assert!(prompt.contains("Use it as a reference, but improve it"));
        assert!(prompt.contains("# widget\n\nOld readme."));
    }

    #[test]
    fn test_prompt_placeholders_for_missing_fields() {
        let metadata = bare_metadata();
        let prompt = build_prompt(&metadata, "", "English");

        assert!(prompt.contains(&format!("Description: {NO_DESCRIPTION}")));
        assert!(prompt.contains(&format!("Topics: {NO_TOPICS}")));
        assert!(prompt.contains("License: unspecified"));
        assert!(prompt.contains("There is no existing README."));
        assert!(!prompt.contains("Primary language:"));
        assert!(!prompt.contains("Homepage:"));
    }

    #[test]
    fn test_prompt_mandates_sections_language_and_footer() {
        let prompt = build_prompt(&bare_metadata(), "", "Brazilian Portuguese");

        assert!(prompt.contains("Write the whole README in Brazilian Portuguese."));
        assert!(prompt.contains(&format!("---\n\n{FOOTER_LINE}")));
        assert!(prompt.contains("Start every section heading with one emoji"));

        let overview = prompt.find("4. Project overview").unwrap();
        let install = prompt.find("7. Installation and setup").unwrap();
        let author = prompt.find("14. Author or contact").unwrap();
        assert!(overview < install && install < author);
    }

    #[test]
    fn test_topic_list() {
        assert_eq!(topic_list(&full_metadata()), "cli, widgets");
        assert_eq!(topic_list(&bare_metadata()), NO_TOPICS);
    }
}
