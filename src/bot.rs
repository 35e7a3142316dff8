//! Answer pipeline: curated intents first, then ranked scraped context, then
//! a fixed fallback. Intents win outright; no confidence blending between the
//! layers.

use rand::Rng;
use tracing::debug;

use crate::config;
use crate::intents::IntentTable;
use crate::rank;

/// Shown when nothing clears the acceptance threshold. Kept deliberately
/// honest instead of guessing an answer.
pub const FALLBACK_MESSAGE: &str = "I'm sorry, I don't have information on that specific topic yet. Please try asking about admissions, courses, or fees.";

/// Placeholder for the generative branch, which is not wired up.
pub const AI_MODE_NOTICE: &str = "AI Mode is not active yet.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Intent,
    Scraped,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub source: SourceKind,
    pub score: Option<f32>,
}

/// Immutable snapshot of everything the bot knows, built once at startup and
/// shared read-only across requests.
pub struct Responder {
    intents: IntentTable,
    knowledge: Vec<String>,
    threshold: f32,
    enable_ai: bool,
}

impl Responder {
    pub fn new(intents: IntentTable, knowledge: Vec<String>, enable_ai: bool) -> Self {
        Self {
            intents,
            knowledge,
            threshold: config::SCORE_THRESHOLD,
            enable_ai,
        }
    }

    /// Strict comparison: a fragment scoring exactly at the threshold is not
    /// trusted.
    fn accepts(&self, score: f32) -> bool {
        score > self.threshold
    }

    pub fn respond<R: Rng>(&self, query: &str, rng: &mut R) -> Reply {
        if let Some(canned) = self.intents.reply(query, rng) {
            return Reply {
                text: canned.to_string(),
                source: SourceKind::Intent,
                score: None,
            };
        }

        if let Some(hit) = rank::best_match(query, &self.knowledge) {
            if self.accepts(hit.score) {
                let text = if self.enable_ai {
                    AI_MODE_NOTICE.to_string()
                } else {
                    format!("📚 <b>Found on Website:</b><br>{}", hit.fragment)
                };
                return Reply {
                    text,
                    source: SourceKind::Scraped,
                    score: Some(hit.score),
                };
            }
            debug!(score = hit.score, "best fragment below threshold");
        }

        Reply {
            text: FALLBACK_MESSAGE.to_string(),
            source: SourceKind::Fallback,
            score: None,
        }
    }
}
