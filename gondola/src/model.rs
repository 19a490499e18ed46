//! Model artifacts estimated from a training corpus.

use hashbrown::{HashMap, HashSet};

use crate::tag_set::TagSet;

/// Per-tag emission statistics.
///
/// `words` maps every known word to a value under this tag; during
/// estimation the values are raw smoothed counts, after estimation they are
/// probabilities. `total` is the raw number of observations of the tag,
/// kept separately from the word map.
pub(crate) struct EmissionBucket {
    pub(crate) words: HashMap<String, f64>,
    pub(crate) total: f64,
}

/// An estimated hidden Markov model for part-of-speech tagging.
///
/// All artifacts are built in one pass over the training stream by a
/// [`Trainer`](crate::Trainer) and are immutable afterwards, so a model
/// can be shared read-only across concurrent decodes.
pub struct Model {
    pub(crate) tag_set: TagSet,
    pub(crate) emission: Vec<EmissionBucket>,
    pub(crate) initial: Vec<f64>,
    pub(crate) transition: Vec<Vec<f64>>,
    pub(crate) prior: Vec<f64>,
    pub(crate) known_words: HashSet<String>,
}

impl Model {
    /// Gets the tag catalogue the model is indexed by.
    pub fn tag_set(&self) -> &TagSet {
        &self.tag_set
    }

    /// Gets the number of tags.
    pub fn n_tags(&self) -> usize {
        self.tag_set.len()
    }

    /// Gets the probability that a sentence begins with each tag.
    pub fn initial(&self) -> &[f64] {
        &self.initial
    }

    /// Gets the marginal relative frequency of each tag over the training
    /// stream.
    pub fn prior(&self) -> &[f64] {
        &self.prior
    }

    /// Gets the row of transition probabilities out of the tag `from_id`.
    pub fn transition(&self, from_id: usize) -> &[f64] {
        &self.transition[from_id]
    }

    /// Gets the emission probability of `word` under the tag `tag_id`, if
    /// the word has an entry in that tag's bucket.
    pub fn emission(&self, tag_id: usize, word: &str) -> Option<f64> {
        self.emission[tag_id].words.get(word).copied()
    }

    /// Checks whether `word` was observed anywhere during training.
    pub fn is_known_word(&self, word: &str) -> bool {
        self.known_words.contains(word)
    }
}
