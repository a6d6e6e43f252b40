use std::env;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use pos_hmm::{load_and_estimate, EstimatorConfig};

fn main() {
    let Some(path) = env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("usage: estimate <tagged-corpus-file>");
        process::exit(2);
    };

    let config = EstimatorConfig::new().with_parallel(cfg!(feature = "parallel"));
    let start = Instant::now();

    let model = match load_and_estimate(&path, &config) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("estimate: {err}");
            process::exit(1);
        }
    };

    println!(
        "{} sentences, {} words, {} transitions",
        model.sentence_count, model.word_count, model.total_transitions
    );

    println!("\nInitial-state probabilities:");
    for (tag, probability) in &model.initial_state_probabilities {
        println!("  {tag}\t{probability:.6}");
    }

    println!("\nTransitions into each tag:");
    for (tag, total) in &model.tag_totals {
        println!("  {tag}\t{total}");
    }

    println!("\nTook {:?}.", start.elapsed());
}
