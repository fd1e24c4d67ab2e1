//! Fight-selection grammar: comma-separated indices and inclusive ranges.
//!
//! `0-4,7, 10 - 15 , 20` selects indices 0..=4, 7, 10..=15 and 20.
//! Tokens that fail to parse are collected and reported individually; the
//! rest of the list still applies.

use std::collections::BTreeSet;
use thiserror::Error;

/// Separators accepted between range endpoints. Selections are often
/// pasted from chat clients that substitute typographic dashes.
const RANGE_SEPARATORS: [char; 5] = ['-', '–', '−', '—', '~'];

/// Both the ASCII and the full-width comma split tokens.
const TOKEN_SEPARATORS: [char; 2] = [',', '，'];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("`{token}` is not a number or a range")]
pub struct BadToken {
    pub token: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub indices: BTreeSet<usize>,
    pub rejected: Vec<BadToken>,
}

impl Selection {
    pub fn parse(input: &str) -> Selection {
        let mut selection = Selection::default();
        for raw_token in input.split(TOKEN_SEPARATORS) {
            let token: String = raw_token.chars().filter(|c| !c.is_whitespace()).collect();
            if token.is_empty() {
                continue;
            }
            match parse_token(&token) {
                Some((lo, hi)) => selection.indices.extend(lo..=hi),
                None => selection.rejected.push(BadToken { token }),
            }
        }
        selection
    }

    /// Every fight index below `count`.
    pub fn all(count: usize) -> Selection {
        Selection {
            indices: (0..count).collect(),
            rejected: Vec::new(),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

fn parse_token(token: &str) -> Option<(usize, usize)> {
    match token.find(RANGE_SEPARATORS) {
        None => token.parse().ok().map(|n| (n, n)),
        Some(pos) => {
            let separator_len = token[pos..].chars().next()?.len_utf8();
            let lo: usize = token[..pos].parse().ok()?;
            let hi: usize = token[pos + separator_len..].parse().ok()?;
            // reversed ranges are reported, not silently reordered
            (lo <= hi).then_some((lo, hi))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(input: &str) -> Vec<usize> {
        Selection::parse(input).indices.into_iter().collect()
    }

    #[test]
    fn parses_singles_and_ranges_with_whitespace() {
        assert_eq!(indices("0-4,7, 10 - 12 , 20"), vec![0, 1, 2, 3, 4, 7, 10, 11, 12, 20]);
    }

    #[test]
    fn accepts_fullwidth_commas_and_dash_variants() {
        assert_eq!(indices("1，3–4,6−7,9—10,12~13"), vec![1, 3, 4, 6, 7, 9, 10, 12, 13]);
    }

    #[test]
    fn bad_tokens_are_reported_and_skipped() {
        let selection = Selection::parse("1, x, 3-, 5");
        assert_eq!(
            selection.indices.iter().copied().collect::<Vec<_>>(),
            vec![1, 5]
        );
        let rejected: Vec<&str> = selection.rejected.iter().map(|b| b.token.as_str()).collect();
        assert_eq!(rejected, vec!["x", "3-"]);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let selection = Selection::parse("7-3");
        assert!(selection.indices.is_empty());
        assert_eq!(selection.rejected.len(), 1);
    }

    #[test]
    fn trailing_garbage_is_not_a_number() {
        let selection = Selection::parse("3x");
        assert!(selection.indices.is_empty());
        assert_eq!(selection.rejected[0].token, "3x");
    }

    #[test]
    fn overlapping_tokens_deduplicate() {
        assert_eq!(indices("0-3, 2-5, 4"), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_input_selects_nothing() {
        let selection = Selection::parse("  ");
        assert!(selection.is_empty());
        assert!(selection.rejected.is_empty());
    }
}
