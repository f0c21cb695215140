//! Guess scoring command

use crate::core::{Pattern, Word};
use crate::error::{Error, Result};

/// Result of scoring a guess against an answer
pub struct ScoreResult {
    pub guess: Word,
    pub answer: Word,
    pub pattern: Pattern,
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word is invalid or their lengths differ.
pub fn score_words(guess: &str, answer: &str) -> Result<ScoreResult> {
    let guess = Word::new(guess)?;
    let answer = Word::new(answer)?;

    if guess.len() != answer.len() {
        return Err(Error::LengthMismatch {
            guess: guess.len(),
            answer: answer.len(),
        });
    }

    let pattern = Pattern::calculate(&guess, &answer);
    Ok(ScoreResult {
        guess,
        answer,
        pattern,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_valid_words() {
        let result = score_words("LLAMA", "alarm").unwrap();
        assert_eq!(result.guess.text(), "llama");
        assert_eq!(result.pattern, Pattern::parse("-GGYY").unwrap());
    }

    #[test]
    fn long_repeated_words_score_without_overflow() {
        let word = "a".repeat(256);
        let result = score_words(&word, &word).unwrap();
        assert!(result.pattern.is_perfect());
        assert_eq!(result.pattern.len(), 256);

        let result = score_words(&"a".repeat(300), &"b".repeat(300)).unwrap();
        assert_eq!(result.pattern.count_greens(), 0);
        assert_eq!(result.pattern.count_yellows(), 0);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(matches!(
            score_words("crane", "cranes"),
            Err(Error::LengthMismatch { guess: 5, answer: 6 })
        ));
    }

    #[test]
    fn invalid_word_is_an_error() {
        assert!(matches!(
            score_words("cr4ne", "crane"),
            Err(Error::InvalidWord(_))
        ));
    }
}
