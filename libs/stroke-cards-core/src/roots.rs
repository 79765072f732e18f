//! Heuristic root forms for flagging inflected variants of excluded words.
//!
//! Each rule is applied to the original word on its own; rules do not chain.
//! A word ending in "ing" therefore yields several overlapping candidates.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

const RULES: &[(&str, &str)] = &[
    // plurals
    ("s$", ""),
    ("es$", ""),
    ("ies$", "y"),
    ("ves$", "f"),
    // progressive
    ("ing$", ""),
    (".ing$", ""),
    ("ing$", "e"),
    ("ying$", "ie"),
    // past
    ("d$", ""),
    ("ed$", ""),
    ("ied$", "y"),
    ("eed$", "ee"),
];

static COMPILED: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("suffix rule is a valid regex"),
                *replacement,
            )
        })
        .collect()
});

/// Plausible roots of `word`, always including `word` lowercased.
///
/// Rule substitutions keep the input's case; only the fallback entry is
/// lowercased.
pub fn possible_roots(word: &str) -> HashSet<String> {
    let mut roots: HashSet<String> = COMPILED
        .iter()
        .filter(|(re, _)| re.is_match(word))
        .map(|(re, replacement)| re.replace(word, *replacement).into_owned())
        .collect();

    roots.insert(word.to_lowercase());
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sorted(word: &str) -> Vec<String> {
        let mut roots: Vec<_> = possible_roots(word).into_iter().collect();
        roots.sort();
        roots
    }

    #[test]
    fn progressive_yields_three_candidates() {
        assert_eq!(sorted("jumping"), vec!["jum", "jump", "jumpe", "jumping"]);
    }

    #[test]
    fn ying_maps_to_ie() {
        let roots = possible_roots("dying");
        assert!(roots.contains("die"));
        assert!(roots.contains("dye"));
        assert!(roots.contains("dy"));
    }

    #[test]
    fn plurals() {
        assert!(possible_roots("cats").contains("cat"));
        assert!(possible_roots("boxes").contains("box"));
        assert!(possible_roots("parties").contains("party"));
        assert!(possible_roots("wolves").contains("wolf"));
    }

    #[test]
    fn past_tense() {
        assert!(possible_roots("moved").contains("move"));
        assert!(possible_roots("jumped").contains("jump"));
        assert!(possible_roots("studied").contains("study"));
        assert!(possible_roots("agreed").contains("agree"));
    }

    #[test]
    fn every_rule_applies_to_matching_word() {
        let cases = [
            ("hats", "hat"),
            ("wishes", "wish"),
            ("flies", "fly"),
            ("leaves", "leaf"),
            ("going", "go"),
            ("running", "run"),
            ("making", "make"),
            ("lying", "lie"),
            ("used", "use"),
            ("played", "play"),
            ("tried", "try"),
            ("freed", "free"),
        ];
        for (word, root) in cases {
            let roots = possible_roots(word);
            assert!(roots.contains(root), "{word} should yield {root}");
            assert!(roots.contains(&word.to_lowercase()));
        }
    }

    #[test]
    fn bare_ing_is_not_stripped_by_any_char_rule() {
        assert_eq!(sorted("ing"), vec!["", "e", "ing"]);
    }

    #[test]
    fn substitutions_keep_case_but_fallback_is_lowercase() {
        let roots = possible_roots("Cats");
        assert!(roots.contains("Cat"));
        assert!(roots.contains("cats"));
        assert!(!roots.contains("cat"));
    }

    #[test]
    fn suffixes_are_case_sensitive() {
        assert_eq!(sorted("JUMPING"), vec!["jumping"]);
    }

    #[test]
    fn word_without_suffix_only_yields_itself() {
        assert_eq!(sorted("Cat"), vec!["cat"]);
    }
}
