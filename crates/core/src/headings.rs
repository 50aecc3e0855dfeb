//! Conversion between flat outline text and [`OutlineTree`] (PRD-32).
//!
//! The strategy service sometimes returns an outline as plain text lines
//! with literal `#`/`##`/`###` prefixes rather than as structured JSON.
//! [`parse_outline_text`] upgrades that form into an [`OutlineTree`];
//! [`render_outline_text`] is the inverse used when submitting drafts for
//! final generation.
//!
//! Known edge case: a non-heading line that legitimately starts with `#`
//! cannot be distinguished from a heading marker. Any line whose first
//! token is `#`, `##`, or `###` is treated as a heading, matching the
//! upstream service's behavior. Lines with no marker are treated as H3
//! entries under the current section.

use crate::content::{OutlineTree, Section};
use crate::error::CoreError;

/// Parse flat outline text into a structured tree.
///
/// The first H1 line becomes the tree heading; `##` lines open sections;
/// `###` and unmarked lines become subsections of the current section.
/// An H2/H3 before any H1 is accepted (the tree heading stays empty until
/// an H1 appears); a subsection before any H2 opens an untitled section.
pub fn parse_outline_text(text: &str) -> Result<OutlineTree, CoreError> {
    let mut tree = OutlineTree::default();
    let mut saw_h1 = false;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = strip_marker(line, "###") {
            push_subsection(&mut tree, rest);
        } else if let Some(rest) = strip_marker(line, "##") {
            tree.sections.push(Section {
                h2: rest.to_string(),
                h3: Vec::new(),
            });
        } else if let Some(rest) = strip_marker(line, "#") {
            if !saw_h1 {
                tree.h1 = rest.to_string();
                saw_h1 = true;
            } else {
                // A second H1 is demoted to a section heading rather than
                // discarded.
                tree.sections.push(Section {
                    h2: rest.to_string(),
                    h3: Vec::new(),
                });
            }
        } else {
            push_subsection(&mut tree, line);
        }
    }

    if tree.h1.is_empty() && tree.sections.is_empty() {
        return Err(CoreError::Validation(
            "Outline text contains no headings".to_string(),
        ));
    }
    Ok(tree)
}

/// Render a structured tree back into flat outline text.
pub fn render_outline_text(tree: &OutlineTree) -> String {
    let mut out = String::new();
    if !tree.h1.is_empty() {
        out.push_str("# ");
        out.push_str(&tree.h1);
        out.push('\n');
    }
    for section in &tree.sections {
        out.push_str("## ");
        out.push_str(&section.h2);
        out.push('\n');
        for sub in &section.h3 {
            out.push_str("### ");
            out.push_str(sub);
            out.push('\n');
        }
    }
    out
}

/// Strip a heading marker followed by whitespace, or a bare marker line.
fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    if rest.is_empty() {
        Some("")
    } else {
        // Require a separator so "####" is not read as "###" + "#...".
        rest.strip_prefix(' ').map(str::trim)
    }
}

fn push_subsection(tree: &mut OutlineTree, value: &str) {
    if tree.sections.is_empty() {
        tree.sections.push(Section::default());
    }
    let last = tree
        .sections
        .last_mut()
        .expect("sections is non-empty after push");
    last.h3.push(value.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_outline() {
        let text = "# Benefits of Product X\n\
                    ## Overview\n\
                    ### What it is\n\
                    ### Who it is for\n\
                    ## Deep dive\n\
                    ### Performance\n";
        let tree = parse_outline_text(text).unwrap();
        assert_eq!(tree.h1, "Benefits of Product X");
        assert_eq!(tree.sections.len(), 2);
        assert_eq!(tree.sections[0].h3, vec!["What it is", "Who it is for"]);
        assert_eq!(tree.sections[1].h3, vec!["Performance"]);
    }

    #[test]
    fn unmarked_lines_become_subsections() {
        let text = "# Title\n## Section\nFirst point\nSecond point\n";
        let tree = parse_outline_text(text).unwrap();
        assert_eq!(tree.sections[0].h3, vec!["First point", "Second point"]);
    }

    #[test]
    fn subsection_before_section_opens_untitled_section() {
        let text = "# Title\n### Orphan\n";
        let tree = parse_outline_text(text).unwrap();
        assert_eq!(tree.sections[0].h2, "");
        assert_eq!(tree.sections[0].h3, vec!["Orphan"]);
    }

    #[test]
    fn second_h1_is_demoted_to_section() {
        let text = "# First\n# Second\n";
        let tree = parse_outline_text(text).unwrap();
        assert_eq!(tree.h1, "First");
        assert_eq!(tree.sections[0].h2, "Second");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = "\n\n# Title\n\n## Section\n\n";
        let tree = parse_outline_text(text).unwrap();
        assert_eq!(tree.h1, "Title");
        assert_eq!(tree.sections.len(), 1);
    }

    #[test]
    fn empty_text_is_invalid() {
        assert!(parse_outline_text("").is_err());
        assert!(parse_outline_text("   \n  ").is_err());
    }

    /// Pins the known ambiguity: a literal line starting with `# ` is
    /// always read as a heading, even if the author meant plain text.
    #[test]
    fn hash_prefixed_text_is_read_as_heading() {
        let text = "# 1 reason to buy\n";
        let tree = parse_outline_text(text).unwrap();
        assert_eq!(tree.h1, "1 reason to buy");
    }

    #[test]
    fn four_hashes_are_not_a_heading_marker() {
        let text = "# Title\n## Section\n#### not a marker\n";
        let tree = parse_outline_text(text).unwrap();
        // Falls through to the unmarked-line rule.
        assert_eq!(tree.sections[0].h3, vec!["#### not a marker"]);
    }

    #[test]
    fn render_round_trips_structure() {
        let text = "# Title\n## Section A\n### One\n### Two\n## Section B\n";
        let tree = parse_outline_text(text).unwrap();
        assert_eq!(render_outline_text(&tree), text);
    }
}
