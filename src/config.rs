//! Process configuration: CLI flags and the fixed scraping/ranking constants.

use clap::Parser;

/// Pages harvested into the knowledge base at startup.
pub const SCRAPE_URLS: &[&str] = &[
    "https://www.dkut.ac.ke/",
    "https://www.dkut.ac.ke/index.php/admission/admission-requirements",
];

/// Minimum cosine similarity before a scraped fragment is trusted as an
/// answer. The comparison is strict: a score equal to the threshold falls
/// back.
pub const SCORE_THRESHOLD: f32 = 0.15;

/// Fragments with this many whitespace words or fewer are treated as menu
/// labels and buttons, not content.
pub const MIN_FRAGMENT_WORDS: usize = 5;

/// Per-URL fetch timeout during knowledge-base construction.
pub const FETCH_TIMEOUT_SECS: u64 = 15;

/// Browser-like identity; some university CMSes refuse unknown agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Parser, Debug, Clone)]
#[command(name = "campus-qa", version, about = "University site Q&A over curated intents + scraped pages")]
pub struct Cli {
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
    pub bind: String,

    #[arg(long, env = "INTENTS_FILE", default_value = "intents.json")]
    pub intents_file: String,

    /// Route scraped hits through a generative backend instead of returning
    /// the raw fragment. The backend is not wired up; enabling this answers
    /// scraped hits with a static notice.
    #[arg(long, env = "ENABLE_AI")]
    pub enable_ai: bool,
}
