//! Substring diagnostics.
//!
//! Renders a haystack and needle quoted, plus a marker line with `^` under
//! every occurrence of the needle inside the quoted haystack:
//!
//! ```text
//! Needle: needle
//! Haystack: "a haystack with a needle in it"
//!                              ^^^^^^
//! ```

/// Quoted haystack and needle with a marker line aligned to the haystack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeedlePosition {
    /// The haystack, escaped and surrounded by double quotes.
    pub quoted_haystack: String,
    /// The needle, escaped, without surrounding quotes.
    pub quoted_needle: String,
    /// `^` under each matched character of `quoted_haystack` and a blank
    /// under every other one, so the line is as wide as the haystack.
    pub markers: String,
    found: bool,
}

impl NeedlePosition {
    /// Whether the needle occurs in the haystack. An empty needle occurs in
    /// every haystack but covers no characters, so its marker line is blank.
    pub fn is_found(&self) -> bool {
        self.found
    }
}

/// Locate `needle` inside `haystack` for display.
pub fn needle_position(haystack: &str, needle: &str) -> NeedlePosition {
    let quoted_haystack = format!("{haystack:?}");
    let quoted_needle = escape(needle);

    let mut covered = vec![false; quoted_haystack.len()];
    if !quoted_needle.is_empty() {
        for (start, matched) in quoted_haystack.match_indices(quoted_needle.as_str()) {
            covered[start..start + matched.len()].fill(true);
        }
    }

    let markers: String = quoted_haystack
        .char_indices()
        .map(|(i, _)| if covered[i] { '^' } else { ' ' })
        .collect();

    NeedlePosition {
        quoted_haystack,
        quoted_needle,
        markers,
        found: haystack.contains(needle),
    }
}

fn escape(s: &str) -> String {
    let quoted = format!("{s:?}");
    quoted[1..quoted.len() - 1].to_owned()
}
