//! Badge handling for `README.md`.
//!
//! Badges are Markdown image links (`[![alt](image)](target)`) on their own
//! lines right below the title.

use errors::Defect;

use crate::compile_pattern;

const BADGE_PREFIX: &str = "[![";

fn is_badge_line(line: &str) -> bool {
    line.trim_start().starts_with(BADGE_PREFIX)
}

/// Insert `badge` after the title's badge block. `None` when already present.
#[must_use]
pub fn insert_badge(text: &str, badge: &str) -> Option<String> {
    if text.contains(badge) {
        return None;
    }
    let lines: Vec<&str> = text.lines().collect();
    let Some(title) = lines.iter().position(|line| line.starts_with("# ")) else {
        let mut output = format!("{badge}\n");
        if !text.is_empty() {
            output.push('\n');
            output.push_str(text);
        }
        return Some(output);
    };

    let first_content = lines[title + 1..]
        .iter()
        .position(|line| !line.trim().is_empty())
        .map(|offset| title + 1 + offset);
    let mut output: Vec<&str> = Vec::with_capacity(lines.len() + 2);
    match first_content {
        Some(start) if is_badge_line(lines[start]) => {
            let end = lines[start..]
                .iter()
                .position(|line| !is_badge_line(line))
                .map_or(lines.len(), |offset| start + offset);
            output.extend(&lines[..end]);
            output.push(badge);
            output.extend(&lines[end..]);
        }
        _ => {
            output.extend(&lines[..=title]);
            output.push("");
            output.push(badge);
            if first_content.is_some() {
                output.push("");
            }
            output.extend(lines[title + 1..].iter().skip_while(|line| line.trim().is_empty()));
        }
    }
    let mut result = output.join("\n");
    result.push('\n');
    Some(result)
}

/// Remove every badge matching `pattern`. `None` when nothing matched.
pub fn remove_badge(text: &str, pattern: &str) -> Result<Option<String>, Defect> {
    let regex = compile_pattern(pattern)?;
    if !regex.is_match(text) {
        return Ok(None);
    }
    Ok(Some(regex.replace_all(text, "").into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE: &str = "[![Spelling checked](https://img.shields.io/badge/cspell-checked-brightgreen.svg)](https://github.com/streetsidesoftware/cspell/tree/master/packages/cspell)";
    const PATTERN: &str = r"\[\!\[[Ss]pelling.*\]\(.*cspell.*\)\]\(.*cspell.*\)\n?";

    #[test]
    fn test_insert_after_existing_badges() {
        let readme = "# Project\n\n[![CI](ci.svg)](ci)\n[![PyPI](pypi.svg)](pypi)\n\nText\n";
        let updated = insert_badge(readme, BADGE).unwrap();
        assert_eq!(
            updated,
            format!("# Project\n\n[![CI](ci.svg)](ci)\n[![PyPI](pypi.svg)](pypi)\n{BADGE}\n\nText\n")
        );
    }

    #[test]
    fn test_insert_below_title_without_badges() {
        let updated = insert_badge("# Project\n\nText\n", BADGE).unwrap();
        assert_eq!(updated, format!("# Project\n\n{BADGE}\n\nText\n"));

        let updated = insert_badge("# Project\n", BADGE).unwrap();
        assert_eq!(updated, format!("# Project\n\n{BADGE}\n"));
    }

    #[test]
    fn test_insert_without_title() {
        let updated = insert_badge("Text\n", BADGE).unwrap();
        assert_eq!(updated, format!("{BADGE}\n\nText\n"));
    }

    #[test]
    fn test_insert_is_idempotent() {
        let updated = insert_badge("# Project\n", BADGE).unwrap();
        assert!(insert_badge(&updated, BADGE).is_none());
    }

    #[test]
    fn test_remove_badge() {
        let readme = format!("# Project\n\n[![CI](ci.svg)](ci)\n{BADGE}\n\nText\n");
        let updated = remove_badge(&readme, PATTERN).unwrap().unwrap();
        assert_eq!(updated, "# Project\n\n[![CI](ci.svg)](ci)\n\nText\n");
        assert!(remove_badge(&updated, PATTERN).unwrap().is_none());
    }
}
