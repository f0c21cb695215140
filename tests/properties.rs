//! Scoring and solving properties over generated words

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use wordle_unveil::core::{Board, CellType, Pattern, Word};
use wordle_unveil::solver::{RowOutcome, solve_board, solve_row};
use wordle_unveil::wordlists::Dictionary;

/// Five-letter words over a small alphabet so repeated letters are common
fn word() -> impl Strategy<Value = Word> {
    "[a-f]{5}".prop_map(|s| Word::new(s).unwrap())
}

fn letter_counts(word: &Word) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for &c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

proptest! {
    #[test]
    fn self_score_is_perfect(w in word()) {
        prop_assert!(Pattern::calculate(&w, &w).is_perfect());
    }

    #[test]
    fn marks_never_exceed_answer_frequency(guess in word(), answer in word()) {
        let pattern = Pattern::calculate(&guess, &answer);
        let available = letter_counts(&answer);

        let mut marked: FxHashMap<u8, usize> = FxHashMap::default();
        for (&letter, &cell) in guess.chars().iter().zip(pattern.cells()) {
            if cell != CellType::Absent {
                *marked.entry(letter).or_insert(0) += 1;
            }
        }

        for (letter, count) in marked {
            prop_assert!(count <= available.get(&letter).copied().unwrap_or(0));
        }
    }

    #[test]
    fn greens_are_exact_positions(guess in word(), answer in word()) {
        let pattern = Pattern::calculate(&guess, &answer);
        for (i, &cell) in pattern.cells().iter().enumerate() {
            prop_assert_eq!(cell == CellType::Correct, guess.char_at(i) == answer.char_at(i));
        }
    }

    #[test]
    fn solved_row_reproduces_pattern(
        words in prop::collection::vec(word(), 1..40),
        answer in word(),
        pick in any::<prop::sample::Index>(),
    ) {
        let dictionary = Dictionary::new(words);
        let guess = pick.get(dictionary.words());
        let pattern = Pattern::calculate(guess, &answer);

        let found = solve_row(&pattern, &answer, &dictionary);
        prop_assert!(found.is_some());
        prop_assert_eq!(Pattern::calculate(found.unwrap(), &answer), pattern);
    }

    #[test]
    fn first_match_wins(
        words in prop::collection::vec(word(), 1..40),
        answer in word(),
        pick in any::<prop::sample::Index>(),
    ) {
        let dictionary = Dictionary::new(words);
        let pattern = Pattern::calculate(pick.get(dictionary.words()), &answer);

        let expected = dictionary
            .iter()
            .position(|w| Pattern::calculate(w, &answer) == pattern)
            .unwrap();
        let found = solve_row(&pattern, &answer, &dictionary).unwrap();
        prop_assert_eq!(found, &dictionary.words()[expected]);
    }

    #[test]
    fn board_solving_is_idempotent(
        words in prop::collection::vec(word(), 1..30),
        answer in word(),
        guesses in prop::collection::vec(word(), 1..6),
    ) {
        let dictionary = Dictionary::new(words);
        let patterns: Vec<Pattern> = guesses
            .iter()
            .map(|g| Pattern::calculate(g, &answer))
            .collect();
        let board = Board::from_patterns(&patterns);

        let once = solve_board(&board, &answer, &dictionary).unwrap();
        let twice = solve_board(&once.board, &answer, &dictionary).unwrap();
        prop_assert_eq!(&once, &twice);

        for (i, outcome) in once.outcomes.iter().enumerate() {
            prop_assert_eq!(once.board.pattern(i), patterns[i].clone());
            if let RowOutcome::Revealed(w) = outcome {
                prop_assert_eq!(Pattern::calculate(w, &answer), patterns[i].clone());
            }
        }
    }
}

#[test]
fn llama_alarm_is_asymmetric() {
    use CellType::{Absent, Correct, Present};

    let llama = Word::new("llama").unwrap();
    let alarm = Word::new("alarm").unwrap();

    assert_eq!(
        Pattern::calculate(&llama, &alarm).cells(),
        &[Absent, Correct, Correct, Present, Present]
    );
    assert_eq!(
        Pattern::calculate(&alarm, &llama).cells(),
        &[Present, Correct, Correct, Absent, Present]
    );
}
