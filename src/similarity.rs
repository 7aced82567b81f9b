// Cosine similarity between messages, and the batch similarity matrix.
//
// Each frequency map is treated as a sparse vector over the implicit
// vocabulary. The dot product walks the first map's entries (a token absent
// from the second map contributes zero), while each magnitude is the
// Euclidean norm over that map's *own* entries — never just the shared keys.
//
//   similarity = dot / (magnitude_a * magnitude_b)
//
// All counts are non-negative, so the result always lands in [0, 1].

use std::collections::HashMap;

use crate::vectorize::word_frequencies;

/// Cosine similarity of two raw message texts.
///
/// Convenience wrapper that vectorizes both sides per call. Batch callers
/// should vectorize once and use [`cosine_from_frequencies`] instead.
pub fn cosine(text_a: &str, text_b: &str) -> f64 {
    cosine_from_frequencies(&word_frequencies(text_a), &word_frequencies(text_b))
}

/// Cosine similarity of two word-frequency maps.
///
/// If either vector has zero magnitude the similarity is defined as 0.0 —
/// no similarity with an empty vector, never NaN.
pub fn cosine_from_frequencies(
    freq_a: &HashMap<String, u32>,
    freq_b: &HashMap<String, u32>,
) -> f64 {
    let mut dot = 0.0;
    let mut magnitude_a = 0.0;

    for (token, &count_a) in freq_a {
        magnitude_a += f64::from(count_a) * f64::from(count_a);
        if let Some(&count_b) = freq_b.get(token) {
            dot += f64::from(count_a) * f64::from(count_b);
        }
    }

    let mut magnitude_b = 0.0;
    for &count_b in freq_b.values() {
        magnitude_b += f64::from(count_b) * f64::from(count_b);
    }

    let magnitude_a = magnitude_a.sqrt();
    let magnitude_b = magnitude_b.sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        0.0
    } else {
        dot / (magnitude_a * magnitude_b)
    }
}

/// Build the N×N cosine similarity matrix for an ordered batch of messages.
///
/// Indexed by batch position, so duplicate message strings at different
/// positions get independent rows. Each message is vectorized once up front
/// and reused across every pairwise comparison. Diagonal entries are fixed
/// at 1.0 by definition rather than computed; off-diagonal entries fill the
/// upper triangle and mirror down, since cosine is symmetric.
pub fn similarity_matrix(messages: &[String]) -> Vec<Vec<f64>> {
    let n = messages.len();
    let frequencies: Vec<HashMap<String, u32>> =
        messages.iter().map(|m| word_frequencies(m)).collect();

    let mut matrix = vec![vec![0.0; n]; n];
    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let similarity = cosine_from_frequencies(&frequencies[i], &frequencies[j]);
            matrix[i][j] = similarity;
            matrix[j][i] = similarity;
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_score_one() {
        let score = cosine("This is a spam mail.", "This is a spam mail.");
        assert!(
            (score - 1.0).abs() < 1e-9,
            "Identical texts should score 1.0, got {score}"
        );
    }

    #[test]
    fn disjoint_texts_score_exactly_zero() {
        let score = cosine("apple banana", "xyz qrs");
        assert_eq!(score, 0.0, "No shared tokens should score exactly 0.0");
    }

    #[test]
    fn symmetric() {
        let a = "You are a winner! Get your free iPhone now!";
        let b = "Get the latest iPhone for just $1! Limited time offer.";
        assert_eq!(cosine(a, b), cosine(b, a));
    }

    #[test]
    fn scale_invariant_on_repeated_tokens() {
        // Doubling every token keeps the direction of the vector
        let score = cosine("win free prize", "win free prize win free prize");
        assert!(
            (score - 1.0).abs() < 1e-9,
            "Proportional vectors should score 1.0, got {score}"
        );
    }

    #[test]
    fn zero_magnitude_map_scores_zero() {
        let empty = HashMap::new();
        let freq = word_frequencies("hello world");
        assert_eq!(cosine_from_frequencies(&empty, &freq), 0.0);
        assert_eq!(cosine_from_frequencies(&freq, &empty), 0.0);
        assert_eq!(cosine_from_frequencies(&empty, &empty), 0.0);
    }

    #[test]
    fn magnitudes_cover_full_vectors_not_shared_keys() {
        // One shared token out of three on the left: dot = 1,
        // |a| = sqrt(3), |b| = 1 — the unshared tokens must still
        // count toward the left magnitude.
        let a = word_frequencies("shared alpha beta");
        let b = word_frequencies("shared");
        let score = cosine_from_frequencies(&a, &b);
        let expected = 1.0 / 3.0_f64.sqrt();
        assert!(
            (score - expected).abs() < 1e-9,
            "Expected {expected}, got {score}"
        );
    }

    #[test]
    fn similarity_in_unit_interval() {
        let pairs = [
            ("Earn money from home with just a few clicks!", "Earn money fast!"),
            ("Your account requires verification.", "Your bank account has been flagged."),
            ("", "anything at all"),
        ];
        for (a, b) in pairs {
            let score = cosine(a, b);
            assert!(
                (0.0..=1.0).contains(&score),
                "cosine({a:?}, {b:?}) = {score} out of range"
            );
        }
    }

    #[test]
    fn matrix_diagonal_is_one_by_definition() {
        let messages = vec!["!!!".to_string(), "spam spam spam".to_string()];
        let matrix = similarity_matrix(&messages);
        assert_eq!(matrix[0][0], 1.0);
        assert_eq!(matrix[1][1], 1.0);
    }

    #[test]
    fn matrix_is_symmetric() {
        let messages = vec![
            "Congratulations! You have won a free iPhone!".to_string(),
            "You are a winner! Get your free iPhone now!".to_string(),
            "The weather today is sunny.".to_string(),
        ];
        let matrix = similarity_matrix(&messages);
        for i in 0..messages.len() {
            for j in 0..messages.len() {
                assert_eq!(matrix[i][j], matrix[j][i], "Asymmetry at ({i}, {j})");
            }
        }
    }

    #[test]
    fn empty_batch_yields_empty_matrix() {
        let matrix = similarity_matrix(&[]);
        assert!(matrix.is_empty());
    }
}
