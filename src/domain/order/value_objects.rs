use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Short numeric secret issued with every order: exactly four ASCII digits,
/// drawn uniformly from `0000..=9999`. Not unique across orders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerificationCode(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Verification code must be exactly 4 ASCII digits, got {0:?}")]
pub struct InvalidVerificationCode(pub String);

impl VerificationCode {
    pub const LEN: usize = 4;
    const SPACE: u32 = 10_000;

    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value = rng.gen_range(0..Self::SPACE);
        Self(format!("{:0width$}", value, width = Self::LEN))
    }

    pub fn parse(raw: &str) -> Result<Self, InvalidVerificationCode> {
        if raw.len() == Self::LEN && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(InvalidVerificationCode(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for VerificationCode {
    type Error = InvalidVerificationCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VerificationCode> for String {
    fn from(code: VerificationCode) -> Self {
        code.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of checking an (order id, code) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerificationOutcome {
    Match,
    NoMatch,
}

impl VerificationOutcome {
    pub fn is_match(self) -> bool {
        matches!(self, VerificationOutcome::Match)
    }

    pub fn as_label(self) -> &'static str {
        match self {
            VerificationOutcome::Match => "match",
            VerificationOutcome::NoMatch => "no_match",
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
