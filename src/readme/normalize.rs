// src/readme/normalize.rs
// =============================================================================
// Cleans up the Markdown that comes back from the language model.
//
// Models are inconsistent about whitespace: headers glued to paragraphs,
// code right after the ``` fence, three blank lines between sections...
// normalize() fixes that with a fixed list of line-based passes:
//
//   1. trim the whole text
//   2. one blank line after every header
//   3. opening fences stand alone (content after the language tag moves down)
//   4. one blank line before every closing fence
//   5. one blank line after every bulleted list item
//   6. runs of blank lines collapse into a single blank line
//
// Passes 2 and 5 ignore lines inside fenced code blocks, so a "# comment" in
// a bash snippet is not mistaken for a header.
//
// normalize(normalize(x)) == normalize(x) for every input.
// =============================================================================

const FENCE: &str = "```";

pub fn normalize(markdown: &str) -> String {
    let lines: Vec<String> = markdown.trim().lines().map(str::to_string).collect();

    let lines = space_after(lines, is_header);
    let lines = split_opening_fences(lines);
    let lines = space_before_closing_fences(lines);
    let lines = space_after(lines, is_list_item);
    let lines = collapse_blank_runs(lines);

    lines.join("\n")
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

// A line that opens or closes a code block. "```sh ls```" opens and closes
// on the same line, so it is plain text as far as block tracking goes.
fn is_fence(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with(FENCE) && !trimmed.trim_start_matches('`').contains(FENCE)
}

/// True when the last code block in `markdown` is never closed.
pub fn has_open_fence(markdown: &str) -> bool {
    markdown.lines().filter(|line| is_fence(line)).count() % 2 == 1
}

// "# Title" .. "###### Title"; "#hashtag" and "#######" are not headers
fn is_header(line: &str) -> bool {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(1..=6).contains(&hashes) {
        return false;
    }
    let rest = &line[hashes..];
    rest.starts_with([' ', '\t']) && !rest.trim().is_empty()
}

fn is_list_item(line: &str) -> bool {
    let trimmed = line.trim_start();
    ["- ", "* ", "+ "]
        .iter()
        .any(|marker| trimmed.starts_with(marker) && !trimmed[marker.len()..].trim().is_empty())
}

// Makes sure exactly one blank line follows every matching line outside code.
// Nothing is added after the very last line.
fn space_after(lines: Vec<String>, matches: fn(&str) -> bool) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut in_code = false;
    let mut lines = lines.into_iter().peekable();

    while let Some(line) = lines.next() {
        if is_fence(&line) {
            in_code = !in_code;
            out.push(line);
            continue;
        }

        let needs_space = !in_code && matches(&line);
        out.push(line);

        if needs_space {
            while lines.peek().is_some_and(|next| is_blank(next)) {
                lines.next();
            }
            if lines.peek().is_some() {
                out.push(String::new());
            }
        }
    }

    out
}

// "```bash npm install" -> "```bash" + "npm install"
// Blank lines directly after an opening fence are dropped.
fn split_opening_fences(lines: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut in_code = false;
    let mut lines = lines.into_iter().peekable();

    while let Some(line) = lines.next() {
        if !is_fence(&line) {
            out.push(line);
            continue;
        }

        if in_code {
            in_code = false;
            out.push(line);
            continue;
        }

        in_code = true;
        match split_fence(&line) {
            Some((fence, content)) => {
                out.push(fence);
                out.push(content);
            }
            None => {
                out.push(line);
                while lines.peek().is_some_and(|next| is_blank(next)) {
                    lines.next();
                }
            }
        }
    }

    out
}

// Returns (fence with language tag, content) when an opening fence has
// content after its tag. A second fence on the same line ("```sh ls```")
// is left alone.
fn split_fence(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    let ticks = trimmed.chars().take_while(|c| *c == '`').count();
    let info = trimmed[ticks..].trim();
    let (tag, content) = match info.split_once(char::is_whitespace) {
        Some((tag, content)) => (tag, content.trim()),
        None => return None,
    };

    if content.is_empty() || content.contains(FENCE) {
        return None;
    }

    Some((
        format!("{indent}{}{tag}", &trimmed[..ticks]),
        format!("{indent}{content}"),
    ))
}

// Exactly one blank line before each closing fence, unless the block is empty
fn space_before_closing_fences(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut open_at: Option<usize> = None;

    for line in lines {
        if is_fence(&line) {
            match open_at.take() {
                None => open_at = Some(out.len()),
                Some(open) => {
                    while out.len() > open + 1 && out.last().is_some_and(|l| is_blank(l)) {
                        out.pop();
                    }
                    if out.len() > open + 1 {
                        out.push(String::new());
                    }
                }
            }
        }
        out.push(line);
    }

    out
}

fn collapse_blank_runs(lines: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for line in lines {
        if !is_blank(&line) {
            out.push(line);
        } else if out.last().is_some_and(|previous| !previous.is_empty()) {
            out.push(String::new());
        }
    }

    out
}
