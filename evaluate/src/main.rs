use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;
use gondola::read_training_pairs;

#[derive(Parser, Debug)]
#[command(about = "A program to evaluate the accuracy of the part-of-speech tagger.")]
struct Args {
    /// The reference file with gold tags
    #[arg(long)]
    reference: PathBuf,

    /// The output file produced by the tagger
    #[arg(long)]
    predicted: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let reference = read_training_pairs(BufReader::new(File::open(&args.reference)?))?;
    let predicted = read_training_pairs(BufReader::new(File::open(&args.predicted)?))?;
    if reference.len() != predicted.len() {
        return Err(format!(
            "token counts differ: {} in the reference, {} in the prediction",
            reference.len(),
            predicted.len()
        )
        .into());
    }

    let mut n_cor = 0;
    for ((ref_word, ref_tag), (pred_word, pred_tag)) in reference.iter().zip(&predicted) {
        if ref_word != pred_word {
            return Err(format!(
                "word mismatch: {:?} in the reference, {:?} in the prediction",
                ref_word, pred_word
            )
            .into());
        }
        if ref_tag == pred_tag {
            n_cor += 1;
        }
    }
    println!("Accuracy: {}", n_cor as f64 / reference.len() as f64);
    println!("Correct: {}, Total: {}", n_cor, reference.len());

    Ok(())
}
