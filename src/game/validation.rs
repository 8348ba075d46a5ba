//! Guess checking
//!
//! A guess matches when it equals the target word after both are trimmed and
//! lowercased. Nothing else about the input is validated.

/// Outcome of checking a guess against the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess is the target word
    Correct,
    /// Guess is anything else, including an empty guess
    Wrong,
}

/// Trim and lowercase a word for comparison.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Compare a guess to the target word.
pub fn check_guess(guess: &str, target: &str) -> GuessOutcome {
    if normalize(guess) == normalize(target) {
        GuessOutcome::Correct
    } else {
        GuessOutcome::Wrong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Apple"), "apple");
        assert_eq!(normalize("  PIZZA \t"), "pizza");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_exact_guess_is_correct() {
        assert_eq!(check_guess("animal", "animal"), GuessOutcome::Correct);
    }

    #[test]
    fn test_case_and_whitespace_ignored() {
        assert_eq!(check_guess("ANIMAL", "animal"), GuessOutcome::Correct);
        assert_eq!(check_guess(" Animal\n", "animal"), GuessOutcome::Correct);
        assert_eq!(check_guess("animal", " ANIMAL "), GuessOutcome::Correct);
    }

    #[test]
    fn test_wrong_guess() {
        assert_eq!(check_guess("zzz", "animal"), GuessOutcome::Wrong);
        // Anagram of the target is still wrong
        assert_eq!(check_guess("lamina", "animal"), GuessOutcome::Wrong);
        // Inner whitespace is not stripped
        assert_eq!(check_guess("ani mal", "animal"), GuessOutcome::Wrong);
    }

    #[test]
    fn test_empty_guess_is_wrong() {
        assert_eq!(check_guess("", "animal"), GuessOutcome::Wrong);
        assert_eq!(check_guess("   ", "animal"), GuessOutcome::Wrong);
    }
}
