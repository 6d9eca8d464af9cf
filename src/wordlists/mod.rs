//! Word lists and secret selection
//!
//! Provides the embedded word bank and the `SecretSource` that hands each new
//! game its secret.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use crate::game::GameConfig;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

/// Supplies the secret for each new game
#[derive(Debug, Clone)]
pub struct SecretSource {
    kind: SourceKind,
}

#[derive(Debug, Clone)]
enum SourceKind {
    /// Every game uses the same word
    Fixed(Word),
    /// Uniform random choice from a non-empty word bank
    Random { words: Vec<Word>, rng: StdRng },
}

impl SecretSource {
    /// Every game uses `word`
    #[must_use]
    pub const fn fixed(word: Word) -> Self {
        Self {
            kind: SourceKind::Fixed(word),
        }
    }

    /// Random choice from `words`, reproducible when `seed` is given
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn random(words: Vec<Word>, seed: Option<u64>) -> Result<Self> {
        if words.is_empty() {
            bail!("word list contains no valid 5-letter words");
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            kind: SourceKind::Random { words, rng },
        })
    }

    /// Build from configuration: a configured secret wins over the word bank
    ///
    /// `load_words` is only called when no secret is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured secret is not a valid word, or if
    /// the word bank fails to load or is empty.
    pub fn from_config<F>(config: &GameConfig, load_words: F) -> Result<Self>
    where
        F: FnOnce() -> Result<Vec<Word>>,
    {
        match &config.secret {
            Some(text) => {
                let word = Word::new(text).with_context(|| format!("invalid secret {text:?}"))?;
                Ok(Self::fixed(word))
            }
            None => {
                let words = load_words()?;
                info!("word bank has {} words", words.len());
                Self::random(words, config.seed)
            }
        }
    }

    /// Draw the secret for the next game
    pub fn next_secret(&mut self) -> Word {
        match &mut self.kind {
            SourceKind::Fixed(word) => *word,
            SourceKind::Random { words, rng } => {
                let index = rng.random_range(0..words.len());
                debug!("drew secret #{index} of {}", words.len());
                words[index]
            }
        }
    }
}
