#![allow(dead_code)]
//! Word bank for the game
//!
//! Holds the candidate words a session draws its rounds from and scrambles
//! them. The standard bank is built once on first use.
//! Words are lowercase ASCII with at least two distinct letters, so every one
//! of them has a scramble that differs from the word itself.

use super::validation::normalize;
use super::GameError;
use once_cell::sync::Lazy;
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use std::collections::HashSet;

/// Built-in word list
static WORDS: &[&str] = &[
    "animal", "auto", "anecdote", "alphabet", "all", "awesome", "arise", "balloon", "basket",
    "bench", "best", "birthday", "book", "briefcase", "camera", "camping", "candle", "cat",
    "cauliflower", "chat", "children", "class", "classic", "classroom", "coffee", "colorful",
    "cookie", "creative", "cruise", "dance", "daytime", "dinosaur", "doorknob", "dine", "dream",
    "dusk", "eating", "elephant", "emerald", "eerie", "electric", "finish", "flowers", "follow",
    "fox", "frame", "free", "frequent", "funnel", "green", "guitar", "grocery", "glass", "great",
    "giggle", "haircut", "half", "homemade", "happen", "honey", "hurry", "hundred", "ice",
    "igloo", "invest", "invite", "icon", "introduce", "joke", "jovial", "journal", "jump",
    "join", "kangaroo", "keyboard", "kitchen", "koala", "kind", "kaleidoscope", "landscape",
    "late", "laugh", "learning", "lemon", "letter", "lily", "magazine", "marine",
    "marshmallow", "maze", "meditate", "melody", "minute", "monument", "moon", "motorcycle",
    "mountain", "music", "north", "nose", "night", "name", "never", "negotiate", "number",
    "opposite", "octopus", "oak", "order", "open", "polar", "pack", "painting", "person",
    "picnic", "pillow", "pizza", "podcast", "presentation", "puppy", "puzzle", "recipe",
    "release", "restaurant", "revolve", "rewind", "room", "run", "secret", "seed", "ship",
    "shirt", "should", "small", "spaceship", "stargazing", "skill", "street", "style",
    "sunrise", "taxi", "tidy", "timer", "together", "tooth", "tourist", "travel", "truck",
    "under", "useful", "unicorn", "unique", "uplift", "uniform", "vase", "violin", "visitor",
    "vision", "volume", "view", "walrus", "wander", "world", "winter", "well", "whirlwind",
    "xylophone", "yoga", "yogurt", "yoyo", "you", "year", "yummy", "zebra", "zigzag",
    "zoology", "zone", "zeal",
];

/// The standard bank, built from [`WORDS`] on first use
static STANDARD_BANK: Lazy<WordBank> = Lazy::new(|| WordBank {
    words: WORDS.iter().map(|w| (*w).to_string()).collect(),
});

/// An immutable, ordered collection of words to unscramble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Build a bank from a custom word list.
    ///
    /// Words are normalized and duplicates dropped, keeping first occurrence
    /// order. Fails on the first word that has no distinct scramble.
    pub fn new<I, S>(words: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let mut bank = Vec::new();

        for word in words {
            let word = normalize(word.as_ref());
            if !can_scramble(&word) {
                return Err(GameError::UnscramblableWord(word));
            }
            if seen.insert(word.clone()) {
                bank.push(word);
            }
        }

        Ok(Self { words: bank })
    }

    /// The built-in bank.
    pub fn standard() -> &'static WordBank {
        &STANDARD_BANK
    }

    /// Number of distinct words in the bank
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the bank is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check if a word is in the bank (case-insensitive)
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize(word);
        self.words.iter().any(|w| *w == word)
    }

    /// The words, in bank order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Pick a word uniformly at random among those not yet used.
    pub fn pick_next_word<R: Rng + ?Sized>(
        &self,
        used: &HashSet<String>,
        rng: &mut R,
    ) -> Result<&str, GameError> {
        self.words
            .iter()
            .filter(|w| !used.contains(w.as_str()))
            .choose(rng)
            .map(String::as_str)
            .ok_or(GameError::ExhaustedWordBank {
                needed: used.len() + 1,
                available: self.words.len(),
            })
    }
}

/// A word can be scrambled if it is lowercase ASCII letters with at least two
/// distinct letters.
pub fn can_scramble(word: &str) -> bool {
    if !word.chars().all(|c| c.is_ascii_lowercase()) {
        return false;
    }
    let mut letters = word.chars();
    match letters.next() {
        Some(first) => letters.any(|c| c != first),
        None => false,
    }
}

/// Shuffle the letters of a word until the result differs from the word.
pub fn scramble_letters<R: Rng + ?Sized>(word: &str, rng: &mut R) -> Result<String, GameError> {
    if !can_scramble(word) {
        return Err(GameError::UnscramblableWord(word.to_string()));
    }

    let mut letters: Vec<char> = word.chars().collect();
    loop {
        letters.shuffle(rng);
        let scrambled: String = letters.iter().collect();
        if scrambled != word {
            return Ok(scrambled);
        }
    }
}
