//! Viterbi decoding of tag sequences.

#[cfg(feature = "multithreading")]
use std::sync::Arc;
#[cfg(feature = "multithreading")]
use std::thread;

#[cfg(feature = "multithreading")]
use crossbeam_channel::{Receiver, Sender};

use crate::model::Model;

/// Viterbi decoder over an estimated [`Model`].
///
/// Each decode is independent and allocates its own tables, so a tagger
/// can be shared across threads behind an [`Arc`](std::sync::Arc).
pub struct Tagger {
    model: Model,
}

impl Tagger {
    /// Creates a new tagger.
    ///
    /// # Arguments
    ///
    /// * `model` - An estimated model.
    pub fn new(model: Model) -> Self {
        Self { model }
    }

    /// Gets the underlying model.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Tags a sentence.
    ///
    /// # Arguments
    ///
    /// * `sentence` - The words of one sentence, in order.
    ///
    /// # Returns
    ///
    /// The maximum-likelihood tag symbol for each input word. An empty
    /// input produces an empty sequence.
    pub fn tag<S>(&self, sentence: &[S]) -> Vec<&str>
    where
        S: AsRef<str>,
    {
        self.decode(sentence)
            .into_iter()
            .map(|id| self.model.tag_set.symbols()[id].as_str())
            .collect()
    }

    fn decode<S>(&self, sentence: &[S]) -> Vec<usize>
    where
        S: AsRef<str>,
    {
        let model = &self.model;
        let n = model.tag_set.len();
        if sentence.is_empty() {
            return vec![];
        }
        let len = sentence.len();
        let mut prob = vec![vec![0.0; n]; len];
        // position 0 has no predecessor
        let mut back = vec![vec![None; n]; len];

        let word = sentence[0].as_ref();
        for i in 0..n {
            let emit = model.emission[i]
                .words
                .get(word)
                .copied()
                .unwrap_or(1.0 / n as f64);
            prob[0][i] = model.initial[i] * emit;
        }

        for t in 1..len {
            let word = sentence[t].as_ref();
            let known = model.known_words.contains(word);
            for i in 0..n {
                let emit = if known {
                    model.emission[i]
                        .words
                        .get(word)
                        .copied()
                        .unwrap_or(1.0 / (n - 1) as f64)
                } else {
                    model.prior[i]
                };
                let mut best = prob[t - 1][0] * model.transition[0][i];
                let mut best_prev = 0;
                for p in 1..n {
                    let score = prob[t - 1][p] * model.transition[p][i];
                    if score > best {
                        best = score;
                        best_prev = p;
                    }
                }
                prob[t][i] = best * emit;
                back[t][i] = Some(best_prev);
            }
            // rescale the row to keep long sentences away from underflow;
            // magnitudes change, arg-maxes do not
            let sum: f64 = prob[t].iter().sum();
            if sum > 0.0 {
                for score in &mut prob[t] {
                    *score /= sum;
                }
            }
        }

        let mut best_tag = 0;
        for i in 1..n {
            if prob[len - 1][i] > prob[len - 1][best_tag] {
                best_tag = i;
            }
        }
        let mut tag_ids = vec![0; len];
        tag_ids[len - 1] = best_tag;
        for t in (1..len).rev() {
            // every position after the first records a predecessor
            best_tag = back[t][best_tag].unwrap();
            tag_ids[t - 1] = best_tag;
        }
        tag_ids
    }
}

/// Tagger for multithreading.
#[cfg(feature = "multithreading")]
#[cfg_attr(docsrs, doc(cfg(feature = "multithreading")))]
pub struct MultithreadTagger {
    task_tx: Sender<(usize, Vec<String>)>,
    result_rx: Receiver<(usize, Vec<String>)>,
}

#[cfg(feature = "multithreading")]
impl MultithreadTagger {
    /// Creates a multithreading tagger.
    ///
    /// # Arguments
    ///
    /// * `tagger` - A normal tagger.
    /// * `n_threads` - The number of threads.
    pub fn new(tagger: Tagger, n_threads: usize) -> Self {
        let tagger = Arc::new(tagger);

        let (result_tx, result_rx) = crossbeam_channel::unbounded();
        let (task_tx, task_rx) = crossbeam_channel::unbounded::<(usize, Vec<String>)>();
        for _ in 0..n_threads {
            let tagger = Arc::clone(&tagger);
            let result_tx = result_tx.clone();
            let task_rx = task_rx.clone();
            thread::spawn(move || {
                for (idx, sentence) in task_rx {
                    let tags = tagger
                        .tag(&sentence)
                        .into_iter()
                        .map(|tag| tag.to_string())
                        .collect();
                    result_tx.send((idx, tags)).unwrap();
                }
            });
        }

        Self { task_tx, result_rx }
    }

    /// Tags a batch of sentences.
    ///
    /// Sentences are decoded in parallel; the returned sequences are in
    /// input order.
    ///
    /// # Arguments
    ///
    /// * `sentences` - The sentences to tag.
    pub fn tag_all(&self, sentences: &[Vec<String>]) -> Vec<Vec<String>> {
        for (idx, sentence) in sentences.iter().enumerate() {
            self.task_tx.send((idx, sentence.clone())).unwrap();
        }
        let mut results = vec![vec![]; sentences.len()];
        for _ in 0..sentences.len() {
            let (idx, tags) = self.result_rx.recv().unwrap();
            results[idx] = tags;
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tag_set::TagSet;
    use crate::trainer::{Trainer, DEFAULT_SMOOTHING};

    const CORPUS: &[(&str, &str)] = &[
        ("the", "AT0"),
        ("dog", "NN1"),
        ("runs", "VVZ"),
        (".", "PUN"),
        ("a", "AT0"),
        ("cat", "NN1"),
        ("sleeps", "VVZ"),
        (".", "PUN"),
    ];

    fn train_small() -> Model {
        let tag_set = TagSet::new(["AT0", "NN1", "VVZ", "PUN"]).unwrap();
        let mut trainer = Trainer::new(tag_set, DEFAULT_SMOOTHING).unwrap();
        for &(word, tag) in CORPUS {
            trainer.push_pair(word, tag).unwrap();
        }
        trainer.train()
    }

    #[test]
    fn test_end_to_end_decode() {
        let tagger = Tagger::new(train_small());

        let tags = tagger.tag(&["the", "cat", "runs", "."]);

        assert_eq!(vec!["AT0", "NN1", "VVZ", "PUN"], tags);
    }

    #[test]
    fn test_output_length() {
        let tagger = Tagger::new(train_small());

        let sentence = ["colorless", "green", "ideas", "sleep", "furiously", "."];

        assert_eq!(sentence.len(), tagger.tag(&sentence).len());
    }

    #[test]
    fn test_empty_sentence() {
        let tagger = Tagger::new(train_small());

        assert!(tagger.tag::<&str>(&[]).is_empty());
    }

    #[test]
    fn test_unknown_word_at_position_zero() {
        let tagger = Tagger::new(train_small());
        let model = tagger.model();

        // position 0 of an unknown word uses the uniform emission
        // fallback, so the expected tag follows from the initial
        // distribution alone
        let uniform = 1.0 / model.n_tags() as f64;
        let mut expected = 0;
        for i in 1..model.n_tags() {
            if model.initial()[i] * uniform > model.initial()[expected] * uniform {
                expected = i;
            }
        }

        let tags = tagger.tag(&["foo"]);

        assert_eq!(vec![model.tag_set().symbol(expected).unwrap()], tags);
    }

    #[test]
    fn test_unknown_word_mid_sentence() {
        let tagger = Tagger::new(train_small());

        // "blorp" is unknown; the tag prior substitutes for its emission
        // and the transition row out of AT0 decides
        assert_eq!(vec!["AT0", "NN1"], tagger.tag(&["the", "blorp"]));
    }

    #[test]
    fn test_determinism() {
        let first = Tagger::new(train_small());
        let second = Tagger::new(train_small());
        let sentence = ["a", "dog", "sleeps", "quickly", "."];

        assert_eq!(first.tag(&sentence), second.tag(&sentence));
        assert_eq!(first.model().initial(), second.model().initial());
        assert_eq!(first.model().prior(), second.model().prior());
        for i in 0..first.model().n_tags() {
            assert_eq!(first.model().transition(i), second.model().transition(i));
        }
    }

    #[cfg(feature = "multithreading")]
    #[test]
    fn test_multithread_preserves_order() {
        let sentences: Vec<Vec<String>> = [
            vec!["the", "dog", "runs", "."],
            vec!["a", "cat", "sleeps", "."],
            vec!["the", "cat", "runs", "."],
            vec!["a", "dog", "sleeps", "."],
            vec!["the", "blorp", "runs", "."],
        ]
        .iter()
        .map(|s| s.iter().map(|w| w.to_string()).collect())
        .collect();

        let tagger = Tagger::new(train_small());
        let sequential: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| {
                tagger
                    .tag(s)
                    .into_iter()
                    .map(|tag| tag.to_string())
                    .collect()
            })
            .collect();

        let tagger = MultithreadTagger::new(Tagger::new(train_small()), 4);

        assert_eq!(sequential, tagger.tag_all(&sentences));
    }
}
