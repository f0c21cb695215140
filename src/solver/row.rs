//! Single-row search

use crate::core::{Pattern, Word};

/// Find the first dictionary word that reproduces `pattern` against `answer`
///
/// Words whose length differs from the answer are skipped. The whole
/// pattern must match, not just its greens. Returns `None` when no word
/// explains the row.
///
/// # Examples
/// ```
/// use wordle_unveil::core::{Pattern, Word};
/// use wordle_unveil::solver::solve_row;
///
/// let answer = Word::new("crane").unwrap();
/// let words = [Word::new("slate").unwrap(), Word::new("grace").unwrap()];
/// let pattern = Pattern::parse("-GGYG").unwrap();
///
/// let found = solve_row(&pattern, &answer, &words);
/// assert_eq!(found.map(Word::text), Some("grace"));
/// ```
pub fn solve_row<'a, I>(pattern: &Pattern, answer: &Word, dictionary: I) -> Option<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    if pattern.len() != answer.len() {
        return None;
    }

    dictionary
        .into_iter()
        .filter(|candidate| candidate.len() == answer.len())
        .find(|candidate| Pattern::calculate(candidate, answer) == *pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    fn pattern(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    #[test]
    fn first_full_match_wins() {
        // CRANE scores all green, so it must be passed over even though its C matches
        let dict = Dictionary::from_slice(&["crane", "cloud", "civic"]);
        let answer = Word::new("crane").unwrap();

        let found = solve_row(&pattern("G----"), &answer, &dict).unwrap();
        assert_eq!(found.text(), "cloud");
    }

    #[test]
    fn order_decides_between_equal_matches() {
        let answer = Word::new("crane").unwrap();
        let forward = Dictionary::from_slice(&["cloud", "civic"]);
        let reverse = Dictionary::from_slice(&["civic", "cloud"]);

        assert_eq!(
            solve_row(&pattern("G----"), &answer, &forward).map(Word::text),
            Some("cloud")
        );
        assert_eq!(
            solve_row(&pattern("G----"), &answer, &reverse).map(Word::text),
            Some("civic")
        );
    }

    #[test]
    fn impossible_pattern_is_unresolved() {
        // Four greens leave only the answer's own letter for the last slot,
        // and the guess letter there differs from it, so it can never be yellow
        let answer = Word::new("crane").unwrap();
        let dict = Dictionary::embedded();
        assert!(solve_row(&pattern("GGGGY"), &answer, &dict).is_none());
    }

    #[test]
    fn skips_words_of_other_lengths() {
        let answer = Word::new("crane").unwrap();
        let dict = Dictionary::from_slice(&["cranes", "cran", "crane"]);
        let found = solve_row(&Pattern::perfect(5), &answer, &dict).unwrap();
        assert_eq!(found.text(), "crane");
    }

    #[test]
    fn pattern_length_mismatch_is_unresolved() {
        let answer = Word::new("crane").unwrap();
        let dict = Dictionary::from_slice(&["crane"]);
        assert!(solve_row(&Pattern::perfect(4), &answer, &dict).is_none());
    }

    #[test]
    fn found_word_reproduces_pattern() {
        let answer = Word::new("alarm").unwrap();
        let dict = Dictionary::embedded();
        let wanted = pattern("-GGYY");

        let found = solve_row(&wanted, &answer, &dict).unwrap();
        assert_eq!(Pattern::calculate(found, &answer), wanted);
    }

    #[test]
    fn repeated_calls_agree() {
        let answer = Word::new("slate").unwrap();
        let dict = Dictionary::embedded();
        let wanted = pattern("Y---G");

        let first = solve_row(&wanted, &answer, &dict);
        for _ in 0..5 {
            assert_eq!(solve_row(&wanted, &answer, &dict), first);
        }
    }
}
