//! Internal implementation of token generation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// A UUID rendered in canonical hyphenated lowercase form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token(Uuid);

impl Default for Token {
    fn default() -> Self {
        Self::new()
    }
}

impl Token {
    /// Generates a new random (version 4) token.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Source of bundle-local unique tokens.
///
/// Every call must return a token not returned before by the same source.
pub trait TokenSource: Send + Sync {
    fn next_token(&self) -> String;
}

/// Random version 4 tokens. Not reproducible.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomTokens;

impl TokenSource for RandomTokens {
    fn next_token(&self) -> String {
        Token::new().to_string()
    }
}

/// Deterministic tokens counting up from 1, still in canonical UUID form.
///
/// `00000000-0000-0000-0000-000000000001`, `...002`, and so on.
#[derive(Debug, Default)]
pub struct SequentialTokens {
    issued: AtomicU64,
}

impl SequentialTokens {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenSource for SequentialTokens {
    fn next_token(&self) -> String {
        let n = self.issued.fetch_add(1, Ordering::Relaxed) + 1;
        Token(Uuid::from_u128(u128::from(n))).to_string()
    }
}
