// src/readme/fallback.rs
// =============================================================================
// Renders a README from a fixed template when the language model can't.
//
// Only fields that are already in RepositoryMetadata are used, so this never
// fails: a repository with no description, no license, no topics and no
// languages still gets a complete, well-formed document.
//
// The output is already in normalized form and is returned as-is.
// =============================================================================

use std::fmt::Write;

use crate::github::RepositoryMetadata;

pub const FALLBACK_FOOTER_LINE: &str = "Generated with ❤️ by readme-crafter";
pub const NO_LANGUAGES_BULLET: &str = "- no language information available";
pub const NO_LICENSE_TEXT: &str = "license not specified";

const NO_DESCRIPTION: &str = "No description provided.";

// (emoji, title) of every section after the table of contents, in order
const SECTIONS: [(&str, &str); 7] = [
    ("📖", "Overview"),
    ("💻", "Technologies"),
    ("🚀", "Installation"),
    ("📝", "Usage"),
    ("✨", "Features"),
    ("📄", "License"),
    ("👨‍💻", "Author"),
];

// The anchor GitHub generates for a heading: lowercase, punctuation and
// emoji dropped, spaces turned into hyphens.
//
// Example: "📖 Overview" -> "-overview"
pub fn heading_anchor(heading: &str) -> String {
    heading
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-' || *c == '_')
        .map(|c| if c == ' ' { '-' } else { c })
        .collect()
}

// Escapes text for a shields.io static badge path segment
fn badge_text(text: &str) -> String {
    let text = text.replace('-', "--").replace('_', "__");
    url::form_urlencoded::byte_serialize(text.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn badges(metadata: &RepositoryMetadata) -> Vec<String> {
    let slug = format!("{}/{}", metadata.owner.login, metadata.name);
    let mut badges = Vec::new();

    if let Some(license) = &metadata.license {
        badges.push(format!(
            "![License](https://img.shields.io/badge/license-{}-blue.svg)",
            badge_text(&license.name)
        ));
    }
    if metadata.star_count > 0 {
        badges.push(format!("![Stars](https://img.shields.io/github/stars/{slug}.svg)"));
    }
    if metadata.fork_count > 0 {
        badges.push(format!("![Forks](https://img.shields.io/github/forks/{slug}.svg)"));
    }

    badges
}

fn technology_bullets(languages: &str) -> Vec<String> {
    let bullets: Vec<String> = languages
        .split(',')
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(|language| format!("- **{language}**"))
        .collect();

    if bullets.is_empty() {
        vec![NO_LANGUAGES_BULLET.to_string()]
    } else {
        bullets
    }
}

fn section_body(metadata: &RepositoryMetadata, languages: &str, title: &str) -> String {
    match title {
        "Overview" => {
            let mut body = format!("This repository contains the source code for {}.", metadata.name);
            if !metadata.topics.is_empty() {
                let topics: Vec<String> = metadata.topics.iter().map(|t| format!("**{t}**")).collect();
                let _ = write!(body, "\n\nRelated topics: {}", topics.join(", "));
            }
            body
        }
        "Technologies" => technology_bullets(languages).join("\n"),
        "Installation" => format!(
            "```bash\n\
             # Clone the repository\n\
             git clone {}\n\
             \n\
             # Enter the project directory\n\
             cd {}\n\
             \n\
             # Install the dependencies\n\
             npm install\n\
             # or\n\
             yarn install\n\
             ```",
            metadata.clone_url, metadata.name
        ),
        "Usage" => "```bash\n\
                    # Start the application in development mode\n\
                    npm start\n\
                    # or\n\
                    yarn start\n\
                    ```"
            .to_string(),
        "Features" => "- ✅ Feature 1\n- ✅ Feature 2\n- ✅ Feature 3".to_string(),
        "License" => match &metadata.license {
            Some(license) => format!("This project is licensed under the {}.", license.name),
            None => format!("This project is licensed under a {NO_LICENSE_TEXT}."),
        },
        "Author" => format!("- [{}]({})", metadata.owner.login, metadata.owner.html_url),
        _ => String::new(),
    }
}

// Renders the fallback README
//
// Parameters:
//   metadata: everything fetched from GitHub
//   languages: comma-separated language names (may be empty)
pub fn render_fallback(metadata: &RepositoryMetadata, languages: &str) -> String {
    let mut blocks: Vec<String> = Vec::new();

    blocks.push(format!("# 🚀 {}", metadata.name));
    blocks.push(metadata.description_or(NO_DESCRIPTION));

    let badges = badges(metadata);
    if !badges.is_empty() {
        blocks.push(badges.join("\n"));
    }

    let table_of_contents: Vec<String> = SECTIONS
        .iter()
        .map(|(emoji, title)| {
            let heading = format!("{emoji} {title}");
            format!("- [{heading}](#{})", heading_anchor(&heading))
        })
        .collect();
    blocks.push("## 📋 Table of Contents".to_string());
    blocks.push(table_of_contents.join("\n"));

    for (emoji, title) in SECTIONS {
        blocks.push(format!("## {emoji} {title}"));
        blocks.push(section_body(metadata, languages, title));
    }

    blocks.push("---".to_string());
    blocks.push(FALLBACK_FOOTER_LINE.to_string());

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::fixtures::{bare_metadata, full_metadata};
    use crate::github::License;

    fn render(metadata: &RepositoryMetadata) -> String {
        render_fallback(metadata, &metadata.language_list())
    }

    #[test]
    fn test_heading_anchor() {
        assert_eq!(heading_anchor("📖 Overview"), "-overview");
        assert_eq!(heading_anchor("👨‍💻 Author"), "-author");
        assert_eq!(heading_anchor("Getting Started!"), "getting-started");
    }

    #[test]
    fn test_toc_anchors_match_emitted_headings() {
        let readme = render(&full_metadata());

        for line in readme.lines().filter(|l| l.starts_with("## ")) {
            let heading = &line[3..];
            if heading.contains("Table of Contents") {
                continue;
            }
            let entry = format!("- [{heading}](#{})", heading_anchor(heading));
            assert!(readme.contains(&entry), "missing TOC entry for {heading}");
        }
    }

    #[test]
    fn test_full_metadata() {
        let readme = render(&full_metadata());

        assert!(readme.starts_with("# 🚀 widget\n\nMakes widgets\n\n"));
        assert!(readme.contains("![License](https://img.shields.io/badge/license-MIT%20License-blue.svg)"));
        assert!(readme.contains("![Stars](https://img.shields.io/github/stars/acme/widget.svg)"));
        assert!(readme.contains("![Forks](https://img.shields.io/github/forks/acme/widget.svg)"));
        assert!(readme.contains("Related topics: **cli**, **widgets**"));
        assert!(readme.contains("- **Rust**\n- **Dockerfile**\n- **Shell**"));
        assert!(readme.contains("git clone https://github.com/acme/widget.git"));
        assert!(readme.contains("cd widget"));
        assert!(readme.contains("This project is licensed under the MIT License."));
        assert!(readme.contains("- [acme](https://github.com/acme)"));
        assert!(readme.ends_with(&format!("---\n\n{FALLBACK_FOOTER_LINE}")));
    }

    #[test]
    fn test_bare_metadata() {
        let readme = render(&bare_metadata());

        assert!(readme.starts_with("# 🚀 widget\n\nNo description provided.\n\n## 📋 Table of Contents"));
        assert!(!readme.contains("![License]"));
        assert!(!readme.contains("![Stars]"));
        assert!(!readme.contains("![Forks]"));
        assert!(!readme.contains("Related topics"));
        assert!(readme.contains("This project is licensed under a license not specified."));
        assert!(readme.ends_with(FALLBACK_FOOTER_LINE));
    }

    #[test]
    fn test_empty_languages_get_one_placeholder_bullet() {
        let readme = render_fallback(&bare_metadata(), "");
        let technologies = readme
            .split("## 💻 Technologies\n\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();

        assert_eq!(technologies, NO_LANGUAGES_BULLET);
        assert_eq!(readme.matches(NO_LANGUAGES_BULLET).count(), 1);
        assert!(!readme.contains("- **"));
    }

    #[test]
    fn test_language_string_is_split_and_trimmed() {
        let readme = render_fallback(&bare_metadata(), "Rust ,  Go,,");
        assert!(readme.contains("- **Rust**\n- **Go**\n\n"));
        assert!(!readme.contains(NO_LANGUAGES_BULLET));
    }

    #[test]
    fn test_license_badge_escaping() {
        let mut metadata = bare_metadata();
        metadata.license = Some(License {
            name: "Apache-2.0 & co_op".to_string(),
        });
        let readme = render(&metadata);
        assert!(readme.contains("badge/license-Apache--2.0%20%26%20co__op-blue.svg"));
    }
}
