#![cfg_attr(docsrs, feature(doc_cfg))]

//! # Gondola
//!
//! Gondola is a hidden Markov model based part-of-speech tagger decoded
//! with the Viterbi algorithm.
//!
//! Model parameters are estimated in a single pass over a tagged training
//! stream; unseen sentences are then decoded independently, so batches of
//! sentences can be tagged in parallel.
//!
//! ## Examples
//!
//! ```
//! use gondola::{TagSet, Tagger, Trainer, DEFAULT_SMOOTHING};
//!
//! let tag_set = TagSet::new(["AT0", "NN1", "VVZ", "PUN"]).unwrap();
//! let mut trainer = Trainer::new(tag_set, DEFAULT_SMOOTHING).unwrap();
//! for (word, tag) in [("the", "AT0"), ("dog", "NN1"), ("runs", "VVZ"), (".", "PUN")] {
//!     trainer.push_pair(word, tag).unwrap();
//! }
//!
//! let tagger = Tagger::new(trainer.train());
//! assert_eq!(
//!     vec!["AT0", "NN1", "VVZ", "PUN"],
//!     tagger.tag(&["the", "dog", "runs", "."])
//! );
//! ```

pub mod errors;

mod corpus;
mod model;
mod tag_set;
mod tagger;
mod trainer;

pub use corpus::{
    is_terminal, parse_train_line, read_test_sentences, read_training_pairs, TERMINAL_TOKENS,
};
pub use model::Model;
pub use tag_set::{TagSet, BNC_C5};
pub use tagger::Tagger;
pub use trainer::{Trainer, DEFAULT_SMOOTHING};

#[cfg(feature = "multithreading")]
pub use tagger::MultithreadTagger;
