//! Markdown decoration stripping for completion text.
//!
//! Chat models like to answer with `**bold**`, `# headings` and fenced code even
//! when told not to. The panels render plain text, so the decoration is removed
//! before the text leaves the server.

use std::sync::LazyLock;

use regex::Regex;

/// Asterisk runs, 1-6 hashes followed by whitespace, backtick runs, and runs of
/// two or more underscores.
static DECORATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*+|#{1,6}\s|`+|_{2,}").expect("decoration pattern is valid")
});

/// Strip markdown decoration from `text` and trim surrounding whitespace.
///
/// Single underscores are only removed when they act as emphasis markers, i.e.
/// when they are not flanked by word characters on both sides, so identifiers
/// such as `snake_case` survive.
///
/// Removal is repeated until the text stops changing. Every pass only deletes
/// characters, so this terminates, and the result is a fixed point:
/// `strip_markdown(&strip_markdown(s)) == strip_markdown(s)`.
pub fn strip_markdown(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = strip_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_once(text: &str) -> String {
    let without_runs = DECORATION.replace_all(text, "");
    strip_emphasis_underscores(&without_runs).trim().to_string()
}

fn strip_emphasis_underscores(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| chars[j]);
            let after = chars.get(i + 1).copied();
            if is_word(before) && is_word(after) {
                out.push(c);
            }
            continue;
        }
        out.push(c);
    }
    out
}

fn is_word(c: Option<char>) -> bool {
    c.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_mixed_decoration() {
        assert_eq!(
            strip_markdown("**Hello** _world_ # Title"),
            "Hello world Title"
        );
    }

    #[test]
    fn strips_each_marker_kind() {
        assert_eq!(strip_markdown("***very*** important"), "very important");
        assert_eq!(strip_markdown("## Steps\n1. File"), "Steps\n1. File");
        assert_eq!(strip_markdown("###### deep"), "deep");
        assert_eq!(strip_markdown("run `cargo` or ```sh\nls\n```"), "run cargo or sh\nls");
        assert_eq!(strip_markdown("__bold__ and ___both___"), "bold and both");
    }

    #[test]
    fn keeps_inner_underscores_and_lone_hashes() {
        assert_eq!(strip_markdown("set file_name now"), "set file_name now");
        assert_eq!(strip_markdown("Complaint #42"), "Complaint #42");
    }

    #[test]
    fn trims_and_handles_empty() {
        assert_eq!(strip_markdown("   \n  "), "");
        assert_eq!(strip_markdown(""), "");
        assert_eq!(strip_markdown("  plain text \n"), "plain text");
    }

    #[test]
    fn removal_that_exposes_new_markers_is_finished() {
        // Dropping the backtick leaves "# x", which is itself a heading marker.
        assert_eq!(strip_markdown("#` x"), "x");
        // Dropping the asterisk leaves "__".
        assert_eq!(strip_markdown("a _*_ b"), "a  b");
    }

    #[test]
    fn idempotent_on_awkward_inputs() {
        let inputs = [
            "**Hello** _world_ # Title",
            "#` x",
            "####### seven",
            "_a_b_ __c__ *d* `e`",
            "# # # nested",
            "_\n_ mixed \t# \n",
            "unicode ✅ **ok** _ünïcode_",
            "trailing ** ",
        ];
        for input in inputs {
            let once = strip_markdown(input);
            assert_eq!(strip_markdown(&once), once, "input: {input:?}");
        }
    }
}
