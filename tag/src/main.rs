use std::fs::File;
use std::io::{prelude::*, stderr, BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use gondola::{
    read_test_sentences, read_training_pairs, MultithreadTagger, TagSet, Tagger, Trainer,
    DEFAULT_SMOOTHING,
};

#[derive(Parser, Debug)]
#[command(about = "A program to train the part-of-speech tagger and tag a test corpus.")]
struct Args {
    /// Tagged training corpora, concatenated in the given order
    #[arg(long, required = true, num_args = 1..)]
    trainingfiles: Vec<PathBuf>,

    /// The test file to tag, one token per line
    #[arg(long)]
    testfile: PathBuf,

    /// The file to write tagged output to
    #[arg(long)]
    outputfile: PathBuf,

    /// A file with one tag symbol per line, replacing the built-in tagset
    #[arg(long)]
    tagset: Option<PathBuf>,

    /// The smoothing floor for probability estimation
    #[arg(long, default_value_t = DEFAULT_SMOOTHING)]
    smoothing: f64,

    /// The number of threads (0 means multithreading will be disabled)
    #[arg(long, default_value = "0")]
    n_threads: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let tag_set = match args.tagset {
        Some(path) => {
            eprintln!("Loading {path:?} ...");
            let f = BufReader::new(File::open(path)?);
            let mut symbols = vec![];
            for line in f.lines() {
                symbols.push(line?.trim().to_string());
            }
            TagSet::new(symbols)?
        }
        None => TagSet::default(),
    };

    let mut trainer = Trainer::new(tag_set, args.smoothing)?;
    for path in args.trainingfiles {
        eprintln!("Loading {path:?} ...");
        let f = BufReader::new(File::open(path)?);
        for (word, tag) in read_training_pairs(f)? {
            if trainer.n_pairs() % 10000 == 0 {
                eprint!("# of tokens: {}\r", trainer.n_pairs());
                stderr().flush()?;
            }
            trainer.push_pair(&word, &tag)?;
        }
        eprintln!("# of tokens: {}", trainer.n_pairs());
    }

    eprintln!("Start training...");
    let tagger = Tagger::new(trainer.train());
    eprintln!("Finish training.");

    let f = BufReader::new(File::open(&args.testfile)?);
    let sentences = read_test_sentences(f)?;
    eprintln!("# of sentences: {}", sentences.len());

    eprintln!("Start tagging");
    let start = Instant::now();
    let results: Vec<Vec<String>> = if args.n_threads == 0 {
        sentences
            .iter()
            .map(|sentence| {
                tagger
                    .tag(sentence)
                    .into_iter()
                    .map(|tag| tag.to_string())
                    .collect()
            })
            .collect()
    } else {
        let tagger = MultithreadTagger::new(tagger, args.n_threads);
        tagger.tag_all(&sentences)
    };
    let duration = start.elapsed();
    let n_tokens: usize = sentences.iter().map(|sentence| sentence.len()).sum();
    eprintln!("Elapsed: {} [sec]", duration.as_secs_f64());
    eprintln!(
        "Speed: {} [tokens/sec]",
        n_tokens as f64 / duration.as_secs_f64()
    );

    let mut out = BufWriter::new(File::create(&args.outputfile)?);
    for (sentence, tags) in sentences.iter().zip(&results) {
        for (word, tag) in sentence.iter().zip(tags) {
            writeln!(out, "{} : {}", word, tag)?;
        }
    }
    out.flush()?;

    Ok(())
}
