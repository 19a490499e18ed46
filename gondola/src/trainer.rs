//! Estimation of model parameters from a tagged training stream.

use hashbrown::{HashMap, HashSet};

use crate::corpus::is_terminal;
use crate::errors::{GondolaError, Result};
use crate::model::{EmissionBucket, Model};
use crate::tag_set::TagSet;

/// The smoothing floor used by the reference corpus.
pub const DEFAULT_SMOOTHING: f64 = 0.00101;

/// Estimator of the model parameters.
///
/// Training pairs are pushed one at a time in stream order. Sentence and
/// file boundaries are not tracked, so transition statistics span the
/// whole concatenated stream.
///
/// # Examples
///
/// ```
/// use gondola::{TagSet, Trainer, DEFAULT_SMOOTHING};
///
/// let tag_set = TagSet::new(["AT0", "NN1"]).unwrap();
/// let mut trainer = Trainer::new(tag_set, DEFAULT_SMOOTHING).unwrap();
/// trainer.push_pair("the", "AT0").unwrap();
/// trainer.push_pair("dog", "NN1").unwrap();
///
/// let model = trainer.train();
/// assert_eq!(2, model.n_tags());
/// assert!(model.is_known_word("dog"));
/// ```
pub struct Trainer {
    tag_set: TagSet,
    smoothing: f64,
    emission: Vec<EmissionBucket>,
    known_words: HashSet<String>,
    tag_counts: Vec<u64>,
    initial_counts: Vec<f64>,
    n_starts: u64,
    transition_counts: Vec<Vec<f64>>,
    transition_totals: Vec<f64>,
    last_tag: Option<usize>,
    start_pending: bool,
    n_pairs: u64,
}

impl Trainer {
    /// Creates a new trainer.
    ///
    /// # Arguments
    ///
    /// * `tag_set` - The tag catalogue.
    /// * `smoothing` - The smoothing floor assigned to unobserved events.
    ///
    /// # Errors
    ///
    /// [`GondolaError::InvalidArgument`] will be returned if `smoothing` is
    /// not a positive finite number.
    pub fn new(tag_set: TagSet, smoothing: f64) -> Result<Self> {
        if !smoothing.is_finite() || smoothing <= 0.0 {
            return Err(GondolaError::invalid_argument(
                "smoothing",
                format!("must be a positive finite number: {}", smoothing),
            ));
        }
        let n = tag_set.len();
        Ok(Self {
            tag_set,
            smoothing,
            emission: (0..n)
                .map(|_| EmissionBucket {
                    words: HashMap::new(),
                    total: 0.0,
                })
                .collect(),
            known_words: HashSet::new(),
            tag_counts: vec![0; n],
            initial_counts: vec![smoothing; n],
            n_starts: 0,
            transition_counts: vec![vec![smoothing; n]; n],
            transition_totals: vec![smoothing; n],
            last_tag: None,
            start_pending: false,
            n_pairs: 0,
        })
    }

    /// Adds one `(word, tag)` pair of the training stream.
    ///
    /// The first time a word is seen under any tag, its entry is seeded at
    /// the smoothing floor in every tag's bucket.
    ///
    /// # Arguments
    ///
    /// * `word` - The observed word.
    /// * `tag` - Its annotated tag symbol.
    ///
    /// # Errors
    ///
    /// [`GondolaError::UnknownTag`] will be returned if `tag` is not a
    /// member of the tag catalogue.
    pub fn push_pair(&mut self, word: &str, tag: &str) -> Result<()> {
        let tag_id = self
            .tag_set
            .tag_id(tag)
            .ok_or_else(|| GondolaError::unknown_tag(tag))?;

        if self.known_words.insert(word.to_string()) {
            for bucket in &mut self.emission {
                bucket.words.insert(word.to_string(), self.smoothing);
            }
        }
        if let Some(count) = self.emission[tag_id].words.get_mut(word) {
            *count += 1.0;
        }
        self.emission[tag_id].total += 1.0;
        self.tag_counts[tag_id] += 1;

        if self.n_pairs == 0 || self.start_pending {
            self.initial_counts[tag_id] += 1.0;
            self.n_starts += 1;
        }

        if let Some(prev) = self.last_tag {
            self.transition_counts[prev][tag_id] += 1.0;
            self.transition_totals[prev] += 1.0 + self.smoothing * self.tag_set.len() as f64;
        }

        self.last_tag = Some(tag_id);
        self.start_pending = is_terminal(word);
        self.n_pairs += 1;
        Ok(())
    }

    /// Gets the number of training pairs pushed so far.
    pub fn n_pairs(&self) -> u64 {
        self.n_pairs
    }

    /// Normalizes the accumulated counts into a model.
    ///
    /// # Returns
    ///
    /// The estimated model.
    pub fn train(self) -> Model {
        let mut emission = self.emission;
        for bucket in &mut emission {
            if bucket.total > 0.0 {
                for prob in bucket.words.values_mut() {
                    *prob /= bucket.total;
                }
            }
        }

        let mut initial = self.initial_counts;
        if self.n_starts > 0 {
            for prob in &mut initial {
                *prob /= self.n_starts as f64;
            }
        }
        for prob in &mut initial {
            *prob = prob.max(self.smoothing);
        }

        let mut transition = self.transition_counts;
        for (row, total) in transition.iter_mut().zip(&self.transition_totals) {
            for prob in row.iter_mut() {
                *prob /= total;
            }
        }

        let n = self.tag_set.len();
        let mut prior = vec![0.0; n];
        if self.n_pairs > 0 {
            for (prob, &count) in prior.iter_mut().zip(&self.tag_counts) {
                *prob = count as f64 / self.n_pairs as f64;
            }
        }

        Model {
            tag_set: self.tag_set,
            emission,
            initial,
            transition,
            prior,
            known_words: self.known_words,
        }
    }
}
