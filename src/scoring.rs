// Per-message spam scores from the batch similarity matrix.
//
// A message's score is its mean cosine similarity to every *other* message
// in the batch: row sum minus the diagonal, divided by (N - 1). Scores are
// relative to the batch only — a lone message has no peers, so it scores 0.0
// by policy rather than by computation.
//
// Results are keyed by batch position, not by message text. A text-keyed map
// would silently collapse duplicate message strings into one entry and lose
// a score; positions can't collide.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similarity::similarity_matrix;

/// One message with its batch-relative spam score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMessage {
    /// Position in the input batch
    pub index: usize,
    /// The original message text, unmodified
    pub text: String,
    /// Mean similarity to all other messages, 0.0 to 1.0
    pub score: f64,
}

/// Score an ordered batch of messages for spam-likelihood.
///
/// Returns one entry per input position, in input order:
/// - empty batch → empty vec (no matrix built)
/// - single message → score exactly 0.0 (no matrix built)
/// - otherwise → mean similarity to the rest of the batch, in [0, 1]
///
/// Deterministic: the same ordered batch always produces identical scores.
pub fn spam_scores(messages: &[String]) -> Vec<ScoredMessage> {
    let n = messages.len();

    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![ScoredMessage {
            index: 0,
            text: messages[0].clone(),
            score: 0.0,
        }];
    }

    let matrix = similarity_matrix(messages);
    debug!(batch_size = n, "Built similarity matrix");

    messages
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let sum: f64 = matrix[i]
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, &similarity)| similarity)
                .sum();
            ScoredMessage {
                index: i,
                text: text.clone(),
                score: sum / (n - 1) as f64,
            }
        })
        .collect()
}

/// The message with the highest score. Ties break toward the earliest
/// position in the original batch. None on an empty batch.
pub fn most_spammy(scores: &[ScoredMessage]) -> Option<&ScoredMessage> {
    scores
        .iter()
        .reduce(|best, candidate| if candidate.score > best.score { candidate } else { best })
}

/// The message with the lowest score. Ties break toward the earliest
/// position in the original batch. None on an empty batch.
pub fn least_spammy(scores: &[ScoredMessage]) -> Option<&ScoredMessage> {
    scores
        .iter()
        .reduce(|best, candidate| if candidate.score < best.score { candidate } else { best })
}
