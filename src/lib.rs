// Ember: batch spam-likelihood scoring for short messages.
//
// This is the library root. The pipeline runs leaf to root: vectorize turns
// text into word-frequency maps, similarity compares them pairwise and
// builds the batch matrix, scoring collapses the matrix into one
// spam-likelihood score per message.

pub mod config;
pub mod output;
pub mod scoring;
pub mod similarity;
pub mod vectorize;
