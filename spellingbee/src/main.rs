use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use rayon::prelude::*;
use spellingbee::{read_words, Dictionary, Puzzle, Ranking};

/// Solve Spelling Bee puzzles against a word list.
#[derive(Parser)]
struct Options {
    /// Newline separated word list
    dictionary: PathBuf,

    /// Puzzle letters, mandatory letter first
    #[arg(required = true)]
    letters: Vec<String>,

    /// List pangrams and longer words first
    #[arg(short, long)]
    reverse: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = Options::parse();

    let dictionary = Dictionary::new(read_words(&options.dictionary)?);

    let solutions: Vec<(&str, Vec<&str>)> = options
        .letters
        .par_iter()
        .map(|letters| {
            let mut soln = dictionary.find_words(letters);
            Ranking::new(letters, options.reverse).sort(&mut soln);
            (letters.as_str(), soln)
        })
        .collect();

    for (letters, soln) in solutions {
        let puzzle = Puzzle::new(letters);
        println!("{} ({} words)", letters, soln.len());
        for word in soln {
            let mark = if puzzle.is_pangram(word) { '*' } else { ' ' };
            println!("{} {}", mark, word);
        }
    }

    Ok(())
}
