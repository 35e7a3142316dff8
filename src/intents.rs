//! Hand-authored intents: trigger phrases mapped to canned responses.
//!
//! Intents outrank scraped content outright, so the match rule is positional,
//! not best-match: the first intent (in file order) with a trigger occurring
//! anywhere in the query wins.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Intent {
    /// Trigger phrases, matched as contiguous substrings of the query.
    #[serde(rename = "text")]
    pub triggers: Vec<String>,
    pub responses: Vec<String>,
}

/// The full intent table, loaded once at startup and immutable afterward.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntentTable {
    pub intents: Vec<Intent>,
}

impl IntentTable {
    /// Load the table from a JSON file of shape
    /// `{"intents": [{"text": [...], "responses": [...]}]}`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading intents file {}", path.display()))?;
        let table: IntentTable =
            serde_json::from_str(&raw).context("parsing intents JSON")?;
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// Return a canned response for the query, or `None` when no trigger
    /// matches. First intent and first trigger in table order win; the reply
    /// is drawn uniformly at random from the matched intent's responses.
    pub fn reply<R: Rng>(&self, query: &str, rng: &mut R) -> Option<&str> {
        let query = query.to_lowercase();
        for intent in &self.intents {
            for trigger in &intent.triggers {
                if query.contains(&trigger.to_lowercase()) {
                    return intent.responses.choose(rng).map(String::as_str);
                }
            }
        }
        None
    }
}
