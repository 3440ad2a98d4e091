//! Randomness seam for the engine.
//!
//! Every random decision in a reading goes through [`Entropy`], so a
//! [`ScriptedEntropy`] can replay exact draws while production code uses a
//! seeded or OS-seeded [`StdRng`].

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;
use uuid::Builder;

/// A source of random draws.
pub trait Entropy {
    /// A uniform index in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;

    /// A short identifier: 8 lowercase hex characters.
    fn token(&mut self) -> String;
}

impl Entropy for StdRng {
    fn below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn token(&mut self) -> String {
        let uuid = Builder::from_random_bytes(self.random()).into_uuid();
        uuid.simple().to_string()[..8].to_string()
    }
}

/// Replays a fixed list of draws.
///
/// Each draw is reduced modulo the requested bound so it always lands in
/// range. Once the script runs out every draw is 0.
#[derive(Debug, Clone)]
pub struct ScriptedEntropy {
    token: String,
    draws: VecDeque<usize>,
}

impl ScriptedEntropy {
    /// Script a token and a sequence of draws.
    pub fn new(token: impl Into<String>, draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            token: token.into(),
            draws: draws.into_iter().collect(),
        }
    }

    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl Entropy for ScriptedEntropy {
    fn below(&mut self, upper: usize) -> usize {
        match self.draws.pop_front() {
            Some(draw) => draw % upper,
            None => {
                log::warn!("scripted entropy exhausted, drawing 0 of {upper}");
                0
            }
        }
    }

    fn token(&mut self) -> String {
        self.token.clone()
    }
}
