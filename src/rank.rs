//! TF-IDF relevance ranking of knowledge fragments against a query.
//!
//! The vector space is fit jointly over the query plus the whole knowledge
//! base on every call, so the query's vocabulary participates in the IDF
//! weighting. That makes scores incomparable across calls with different
//! queries; within one call they rank fragments consistently. The base is
//! small enough that the repeated fit is an accepted cost.

use std::collections::{HashMap, HashSet};

/// Common words carrying no topical signal; dropped before weighting.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "been", "but", "by", "can",
    "did", "do", "does", "for", "from", "had", "has", "have", "how", "if",
    "in", "is", "it", "its", "me", "my", "no", "not", "of", "on", "or",
    "our", "that", "the", "their", "then", "these", "this", "those", "to",
    "was", "we", "were", "what", "when", "where", "which", "who", "why",
    "will", "with", "you", "your",
];

/// The winning fragment for a query, with its cosine similarity in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a> {
    pub fragment: &'a str,
    pub score: f32,
}

/// Lower-cased alphanumeric runs, minus one-character tokens and stopwords.
fn tokenize(s: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut cur = String::new();
    for ch in s.chars() {
        if ch.is_alphanumeric() {
            for lc in ch.to_lowercase() {
                cur.push(lc);
            }
        } else if !cur.is_empty() {
            out.push(std::mem::take(&mut cur));
        }
    }
    if !cur.is_empty() {
        out.push(cur);
    }
    out.retain(|t| t.len() >= 2 && !STOPWORDS.contains(&t.as_str()));
    out
}

fn term_counts(tokens: &[String]) -> HashMap<String, u32> {
    let mut m = HashMap::new();
    for t in tokens {
        *m.entry(t.clone()).or_insert(0) += 1;
    }
    m
}

/// Smoothed inverse document frequency: `ln((1 + n) / (1 + df)) + 1`.
/// Smoothing keeps the weight positive even for terms present in every
/// document, so identical texts still score 1.0.
fn idf(df: u32, total_docs: usize) -> f32 {
    ((1.0 + total_docs as f32) / (1.0 + df as f32)).ln() + 1.0
}

/// L2-normalized TF-IDF vector for one document.
fn weigh(
    counts: &HashMap<String, u32>,
    df: &HashMap<String, u32>,
    total_docs: usize,
) -> HashMap<String, f32> {
    let mut vec: HashMap<String, f32> = counts
        .iter()
        .map(|(term, &tf)| {
            let w = tf as f32 * idf(*df.get(term).unwrap_or(&0), total_docs);
            (term.clone(), w)
        })
        .collect();
    let norm = vec.values().map(|w| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for w in vec.values_mut() {
            *w /= norm;
        }
    }
    vec
}

/// Dot product of two normalized sparse vectors, i.e. cosine similarity.
fn cosine(a: &HashMap<String, f32>, b: &HashMap<String, f32>) -> f32 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let dot: f32 = small
        .iter()
        .filter_map(|(term, wa)| large.get(term).map(|wb| wa * wb))
        .sum();
    dot.clamp(0.0, 1.0)
}

/// Rank the knowledge base against `query` and return the best fragment with
/// its similarity. Returns `None` when the base is empty or the query has no
/// usable vocabulary; a base with no lexical overlap still returns the first
/// fragment at score 0.0 (the caller's threshold rejects it). Ties keep the
/// lowest index.
pub fn best_match<'a>(query: &str, base: &'a [String]) -> Option<Ranked<'a>> {
    if base.is_empty() {
        return None;
    }

    let query_tokens = tokenize(query);
    if query_tokens.is_empty() {
        // Degenerate vocabulary (empty, stopword-only, or punctuation-only
        // query); treated as a no-match rather than an error.
        return None;
    }

    let doc_tokens: Vec<Vec<String>> = base.iter().map(|f| tokenize(f)).collect();

    // Document frequencies over the joint set: query first, then every
    // fragment, each counting a term at most once.
    let total_docs = 1 + base.len();
    let mut df: HashMap<String, u32> = HashMap::new();
    for tokens in std::iter::once(&query_tokens).chain(doc_tokens.iter()) {
        let unique: HashSet<&String> = tokens.iter().collect();
        for term in unique {
            *df.entry(term.clone()).or_insert(0) += 1;
        }
    }

    let query_vec = weigh(&term_counts(&query_tokens), &df, total_docs);

    let mut best: Option<Ranked<'a>> = None;
    for (i, tokens) in doc_tokens.iter().enumerate() {
        let doc_vec = weigh(&term_counts(tokens), &df, total_docs);
        let score = cosine(&query_vec, &doc_vec);
        if best.map_or(true, |b| score > b.score) {
            best = Some(Ranked {
                fragment: &base[i],
                score,
            });
        }
    }
    best
}
