//! Weighted-ratio string similarity.
//!
//! Scores are percentages in `0.0..=100.0` built from the normalized indel
//! similarity (`2 * LCS / (len_a + len_b)`). `wratio` combines several views of
//! the same pair so that OCR noise, extra words, and word order all degrade
//! the score gracefully:
//!
//! - `ratio`: whole-string similarity
//! - `partial_ratio`: best alignment of the shorter string inside the longer
//! - `token_sort_ratio` / `token_set_ratio`: order- and repetition-insensitive
//! - `partial_token_ratio`: token sets compared by partial alignment
//!
//! All functions work on characters, not bytes. Only `wratio` normalizes its
//! input; the component ratios compare exactly what they are given.

use std::collections::BTreeSet;

/// Scale applied to token-based scores so an exact string match always wins.
const UNBASE_SCALE: f64 = 0.95;

/// Lowercase, replace every non-alphanumeric character with a space, trim.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    out.trim().to_string()
}

/// Weighted ratio of two raw strings. Both are normalized first, so case and
/// punctuation do not affect the score. Either side blank scores 0.
pub fn wratio(a: &str, b: &str) -> f64 {
    weighted_ratio(&normalize(a), &normalize(b))
}

/// Weighted ratio of two already-normalized strings.
pub(crate) fn weighted_ratio(a: &str, b: &str) -> f64 {
    let ac: Vec<char> = a.chars().collect();
    let bc: Vec<char> = b.chars().collect();
    if ac.is_empty() || bc.is_empty() {
        return 0.0;
    }

    let (shorter, longer) = if ac.len() <= bc.len() {
        (ac.len(), bc.len())
    } else {
        (bc.len(), ac.len())
    };
    let len_ratio = longer as f64 / shorter as f64;

    let end_ratio = indel_ratio(&ac, &bc);

    if len_ratio < 1.5 {
        return end_ratio.max(token_ratio(a, b) * UNBASE_SCALE);
    }

    // Very different lengths make partial alignments less trustworthy.
    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };

    let end_ratio = end_ratio.max(partial_ratio_chars(&ac, &bc) * partial_scale);
    end_ratio.max(partial_token_ratio(a, b) * UNBASE_SCALE * partial_scale)
}

/// Whole-string similarity. Two empty strings are identical (100).
pub fn ratio(a: &str, b: &str) -> f64 {
    let ac: Vec<char> = a.chars().collect();
    let bc: Vec<char> = b.chars().collect();
    indel_ratio(&ac, &bc)
}

/// Best `ratio` of the shorter string against any same-length window of the
/// longer one, including windows clipped at either edge.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let ac: Vec<char> = a.chars().collect();
    let bc: Vec<char> = b.chars().collect();
    partial_ratio_chars(&ac, &bc)
}

/// `ratio` after sorting the whitespace-separated tokens of each side.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "))
}

/// Compares the shared tokens and the leftover tokens of each side.
///
/// If every token of one side appears in the other, the score is 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let ta: BTreeSet<&str> = a.split_whitespace().collect();
    let tb: BTreeSet<&str> = b.split_whitespace().collect();
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }

    let intersection: Vec<&str> = ta.intersection(&tb).copied().collect();
    let diff_ab: Vec<&str> = ta.difference(&tb).copied().collect();
    let diff_ba: Vec<&str> = tb.difference(&ta).copied().collect();

    if !intersection.is_empty() && (diff_ab.is_empty() || diff_ba.is_empty()) {
        return 100.0;
    }

    let diff_ab_joined: Vec<char> = diff_ab.join(" ").chars().collect();
    let diff_ba_joined: Vec<char> = diff_ba.join(" ").chars().collect();
    let ab_len = diff_ab_joined.len();
    let ba_len = diff_ba_joined.len();
    let sect_len = intersection.join(" ").chars().count();

    // "sect ab" and "sect ba" share the "sect " prefix; only the tails differ.
    let sep = usize::from(sect_len != 0);
    let sect_ab_len = sect_len + sep + ab_len;
    let sect_ba_len = sect_len + sep + ba_len;

    let dist = ab_len + ba_len - 2 * lcs_len(&diff_ab_joined, &diff_ba_joined);
    let mut result = normalized_similarity(dist, sect_ab_len + sect_ba_len);

    if sect_len == 0 {
        return result;
    }

    // "sect" against "sect ab": the distance is just the appended tail.
    let sect_ab_ratio = normalized_similarity(sep + ab_len, sect_len + sect_ab_len);
    let sect_ba_ratio = normalized_similarity(sep + ba_len, sect_len + sect_ba_len);
    result = result.max(sect_ab_ratio).max(sect_ba_ratio);
    result
}

/// The better of `token_sort_ratio` and `token_set_ratio`.
pub fn token_ratio(a: &str, b: &str) -> f64 {
    token_sort_ratio(a, b).max(token_set_ratio(a, b))
}

/// Token-level partial comparison. Any shared token scores 100.
pub fn partial_token_ratio(a: &str, b: &str) -> f64 {
    let ta: BTreeSet<&str> = a.split_whitespace().collect();
    let tb: BTreeSet<&str> = b.split_whitespace().collect();
    if ta.is_empty() || tb.is_empty() {
        return 0.0;
    }
    if ta.intersection(&tb).next().is_some() {
        return 100.0;
    }

    let sorted = partial_ratio(&sorted_tokens(a).join(" "), &sorted_tokens(b).join(" "));
    let set_a: Vec<&str> = ta.into_iter().collect();
    let set_b: Vec<&str> = tb.into_iter().collect();
    let unique = partial_ratio(&set_a.join(" "), &set_b.join(" "));
    sorted.max(unique)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn sorted_tokens(s: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens
}

fn indel_ratio(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    let dist = total - 2 * lcs_len(a, b);
    normalized_similarity(dist, total)
}

fn normalized_similarity(dist: usize, lensum: usize) -> f64 {
    if lensum == 0 {
        return 0.0;
    }
    // Scale before dividing so whole-number similarities come out exact.
    100.0 * lensum.saturating_sub(dist) as f64 / lensum as f64
}

fn partial_ratio_chars(a: &[char], b: &[char]) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.len() == b.len() {
        return best_window(a, b).max(best_window(b, a));
    }
    if a.len() < b.len() {
        best_window(a, b)
    } else {
        best_window(b, a)
    }
}

/// Slide `needle` across `hay` (`needle.len() <= hay.len()`), scoring clipped
/// prefixes, full windows, and clipped suffixes.
fn best_window(needle: &[char], hay: &[char]) -> f64 {
    let n = needle.len();
    let m = hay.len();
    let mut best: f64 = 0.0;

    let prefixes = (1..n).map(|i| &hay[..i]);
    let full = (0..=m - n).map(|i| &hay[i..i + n]);
    let suffixes = (m - n + 1..m).map(|i| &hay[i..]);

    for window in prefixes.chain(full).chain(suffixes) {
        best = best.max(indel_ratio(needle, window));
        if best >= 100.0 {
            break;
        }
    }
    best
}

/// Length of the longest common subsequence, single-row DP.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if ca == cb { diag + 1 } else { up.max(row[j]) };
            diag = up;
        }
    }
    row[b.len()]
}
