//! Quartiles Puzzle Solver
//!
//! Solves the daily Quartiles word puzzle: a 5x4 board of letter chunks in
//! which every word spellable from up to four distinct chunks scores, and
//! the five four-chunk words compact the board as they are accepted.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use quartiles::{
    format_solutions, merge_word_list, remove_word_list, solve, BoardShape, CompactionTracker,
    Dictionary, Grid, Solution,
};

/// Solves Quartiles boards and maintains the word list.
#[derive(Parser)]
#[command(name = "quartiles")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list used to validate candidate words.
    #[arg(long, global = true, default_value = "dictionaries/quartiles.txt")]
    dictionary: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a board and list every word it contains.
    Solve {
        /// Board file with one chunk per line, in reading order.
        #[arg(long, conflicts_with = "chunks")]
        board: Option<PathBuf>,
        /// Chunks given directly, in reading order.
        chunks: Vec<String>,
    },
    /// Replay a board: accept each quartile in turn and show the compaction.
    Simulate {
        /// Board file with one chunk per line, in reading order.
        board: PathBuf,
    },
    /// Merge a word list into the dictionary, keeping it sorted and unique.
    Merge {
        /// File of candidate words, one per line.
        source: PathBuf,
        /// Remove the listed words instead of adding them.
        #[arg(long)]
        remove: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Solve { board, chunks } => run_solve(&cli.dictionary, board.as_deref(), chunks),
        Command::Simulate { board } => run_simulate(&cli.dictionary, board),
        Command::Merge { source, remove } => run_merge(&cli.dictionary, source, *remove),
    };

    if let Err(error) = result {
        eprintln!("{error}");
        process::exit(1);
    }
}

/// Solves one board and prints the grouped word listing.
fn run_solve(
    dictionary_path: &Path,
    board: Option<&Path>,
    chunks: &[String],
) -> Result<(), Box<dyn Error>> {
    let dictionary = Dictionary::load(dictionary_path)?;
    let chunks = board_chunks(board, chunks)?;
    let found = solve(&dictionary, &chunks, BoardShape::STANDARD)?;
    println!("{}", format_solutions(&found));
    Ok(())
}

/// Replays a board the way a player clears it: every quartile whose chunks
/// are all still in play is accepted in discovery order, compacting as it
/// goes.
fn run_simulate(dictionary_path: &Path, board: &Path) -> Result<(), Box<dyn Error>> {
    let dictionary = Dictionary::load(dictionary_path)?;
    let chunks = board_chunks(Some(board), &[])?;
    let shape = BoardShape::STANDARD;
    let found = solve(&dictionary, &chunks, shape)?;

    let mut grid = Grid::new(shape, &chunks)?;
    let mut tracker = CompactionTracker::new(&grid);
    println!("{}\n", grid.render());

    for solution in found.of_size(shape.max_chunks()) {
        if tracker.is_exhausted() {
            break;
        }
        let available = grid
            .match_active(solution.chunks())
            .iter()
            .all(Option::is_some);
        if !available {
            continue;
        }
        tracker.accept(&mut grid, solution.word(), solution.chunks());
        println!("accepted {} ({})", solution.word(), solution.spelled());
        println!("{}\n", grid.render());
    }

    println!(
        "accepted {} of {} words; {} free rows left",
        tracker.accepted().len(),
        found.len(),
        tracker.free_rows()
    );
    if grid.active_count() > 0 {
        println!("still in play: {}", grid.active_letters().join(", "));
    }
    let leftovers: Vec<&str> = found
        .iter()
        .map(Solution::word)
        .filter(|word| !tracker.accepted().iter().any(|accepted| accepted == word))
        .collect();
    if !leftovers.is_empty() {
        println!("smaller words: {}", leftovers.join(", "));
    }
    Ok(())
}

/// Rewrites the dictionary file with the source words merged in or removed.
fn run_merge(dictionary: &Path, source: &Path, remove: bool) -> Result<(), Box<dyn Error>> {
    let outcome = if remove {
        remove_word_list(dictionary, source)?
    } else {
        merge_word_list(dictionary, source)?
    };
    let verb = if remove { "removed" } else { "added" };
    println!(
        "read {} words, {} {}; {} now has {} words",
        outcome.read,
        verb,
        outcome.changed,
        dictionary.display(),
        outcome.total
    );
    Ok(())
}

/// Collects the board's chunks from a file or from direct arguments.
fn board_chunks(board: Option<&Path>, chunks: &[String]) -> Result<Vec<String>, Box<dyn Error>> {
    match board {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|error| format!("failed to read board {}: {error}", path.display()))?;
            Ok(contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_ascii_lowercase)
                .collect())
        }
        None if chunks.is_empty() => {
            Err("no chunks given; pass them as arguments or use --board".into())
        }
        None => Ok(chunks.iter().map(|chunk| chunk.to_ascii_lowercase()).collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The May 30 2024 board, chunks in reading order.
    const BOARD_2024_05_30: [&str; 20] = [
        "gest", "lo", "nt", "ut", "ger", "di", "ive", "ate", "min", "eco", "gi", "ul", "stu",
        "cal", "wo", "man", "rum", "or", "mon", "ic",
    ];

    /// The September 17 2024 board.
    const BOARD_2024_09_17: [&str; 20] = [
        "og", "hic", "od", "ara", "sc", "ella", "nks", "wi", "rap", "dem", "ly", "ny", "ent",
        "ial", "cam", "ho", "mi", "rie", "pot", "de",
    ];

    /// The November 10 2024 board.
    const BOARD_2024_11_10: [&str; 20] = [
        "ter", "ch", "fl", "wo", "age", "od", "ta", "ate", "quis", "acc", "con", "gro", "at",
        "dor", "box", "ou", "omm", "cam", "rk", "und",
    ];

    /// Every word the May 30 board contains.
    const MAY_2024_WORDS: [&str; 30] = [
        "diminutive",
        "ecological",
        "gesticulate",
        "rumormonger",
        "stuntwoman",
        "callout",
        "caloric",
        "digestive",
        "germinate",
        "logical",
        "stuntman",
        "digest",
        "dint",
        "gestate",
        "local",
        "lout",
        "manger",
        "manic",
        "manor",
        "minor",
        "orate",
        "rumor",
        "stunt",
        "woman",
        "wont",
        "ate",
        "gi",
        "man",
        "or",
        "rum",
    ];

    /// A dictionary restricted to exactly the May 30 board's words.
    fn may_2024_dictionary() -> Dictionary {
        Dictionary::from_words(MAY_2024_WORDS)
    }

    fn repo_dictionary() -> Dictionary {
        Dictionary::load(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/dictionaries/quartiles.txt"
        ))
        .unwrap()
    }

    #[test]
    fn test_known_board_finds_all_words() {
        let found = solve(
            &may_2024_dictionary(),
            &BOARD_2024_05_30,
            BoardShape::STANDARD,
        )
        .unwrap();
        assert_eq!(found.len(), 30);
    }

    #[test]
    fn test_known_board_listing_snapshot() {
        let found = solve(
            &may_2024_dictionary(),
            &BOARD_2024_05_30,
            BoardShape::STANDARD,
        )
        .unwrap();

        insta::assert_snapshot!(format_solutions(&found), @r#"
        found 30 words

        4 chunks:
          diminutive (di + min + ut + ive)
          ecological (eco + lo + gi + cal)
          gesticulate (gest + ic + ul + ate)
          rumormonger (rum + or + mon + ger)
          stuntwoman (stu + nt + wo + man)

        3 chunks:
          callout (cal + lo + ut)
          caloric (cal + or + ic)
          digestive (di + gest + ive)
          germinate (ger + min + ate)
          logical (lo + gi + cal)
          stuntman (stu + nt + man)

        2 chunks:
          digest (di + gest)
          dint (di + nt)
          gestate (gest + ate)
          local (lo + cal)
          lout (lo + ut)
          manger (man + ger)
          manic (man + ic)
          manor (man + or)
          minor (min + or)
          orate (or + ate)
          rumor (rum + or)
          stunt (stu + nt)
          woman (wo + man)
          wont (wo + nt)

        1 chunk:
          ate
          gi
          man
          or
          rum
        "#);
    }

    #[test]
    fn test_witnesses_concatenate_to_their_words() {
        let found = solve(
            &may_2024_dictionary(),
            &BOARD_2024_05_30,
            BoardShape::STANDARD,
        )
        .unwrap();
        for solution in found.iter() {
            assert_eq!(solution.chunks().concat(), solution.word());
            assert!(solution.size() >= 1 && solution.size() <= 4);
        }
    }

    #[test]
    fn test_repo_dictionary_covers_the_may_board() {
        let found = solve(&repo_dictionary(), &BOARD_2024_05_30, BoardShape::STANDARD).unwrap();
        for word in MAY_2024_WORDS {
            assert!(found.contains(word), "expected to find {word}");
        }
        // the shipped word list adds no extra quartile to this board
        assert_eq!(found.of_size(4).count(), 5);
    }

    #[test]
    fn test_repo_dictionary_covers_the_september_board() {
        let found = solve(&repo_dictionary(), &BOARD_2024_09_17, BoardShape::STANDARD).unwrap();
        let expected = [
            "camaraderie",
            "demographic",
            "hoodwinks",
            "miscellany",
            "potentially",
            "cam",
            "deny",
            "depot",
            "descent",
            "entrap",
            "holy",
            "homily",
            "hominy",
            "honks",
            "hood",
            "minks",
            "pot",
            "potent",
            "potential",
            "potently",
            "rap",
            "scent",
            "scrap",
            "wide",
            "widely",
            "wily",
            "winks",
            "winy",
        ];
        for word in expected {
            assert!(found.contains(word), "expected to find {word}");
        }
        assert_eq!(
            found.witness("hoodwinks").unwrap().spelled(),
            "ho + od + wi + nks"
        );
    }

    #[test]
    fn test_repo_dictionary_covers_the_november_board() {
        let found = solve(&repo_dictionary(), &BOARD_2024_11_10, BoardShape::STANDARD).unwrap();
        let expected = [
            "accommodate",
            "camouflage",
            "chatterbox",
            "conquistador",
            "groundwork",
            "age",
            "at",
            "ate",
            "attach",
            "box",
            "boxwood",
            "cam",
            "chat",
            "chatter",
            "con",
            "conch",
            "condor",
            "conflate",
            "flat",
            "flatter",
            "groat",
            "ground",
            "ouch",
            "outer",
            "tater",
            "wood",
            "work",
            "wound",
        ];
        for word in expected {
            assert!(found.contains(word), "expected to find {word}");
        }
        assert_eq!(found.of_size(4).count(), 5);
        assert_eq!(
            found.witness("conquistador").unwrap().spelled(),
            "con + quis + ta + dor"
        );
    }

    #[test]
    fn test_simulate_clears_an_official_board() {
        let dictionary = repo_dictionary();
        let found = solve(&dictionary, &BOARD_2024_05_30, BoardShape::STANDARD).unwrap();

        let mut grid = Grid::new(BoardShape::STANDARD, &BOARD_2024_05_30).unwrap();
        let mut tracker = CompactionTracker::new(&grid);
        for solution in found.of_size(4) {
            if tracker.is_exhausted() {
                break;
            }
            let available = grid
                .match_active(solution.chunks())
                .iter()
                .all(Option::is_some);
            if available {
                tracker.accept(&mut grid, solution.word(), solution.chunks());
            }
        }

        assert!(tracker.is_exhausted());
        assert_eq!(grid.active_count(), 0);
        assert_eq!(tracker.accepted().len(), 5);
    }

    #[test]
    fn test_board_chunks_reads_files_and_arguments() {
        let direct = board_chunks(None, &["GEST".to_string(), "lo".to_string()]).unwrap();
        assert_eq!(direct, vec!["gest", "lo"]);

        let path = std::env::temp_dir().join(format!("quartiles-board-{}.txt", process::id()));
        fs::write(&path, "GEST\n\n  lo \nnt\n").unwrap();
        let from_file = board_chunks(Some(&path), &[]).unwrap();
        assert_eq!(from_file, vec!["gest", "lo", "nt"]);
        fs::remove_file(&path).unwrap();

        let missing = board_chunks(None, &[]);
        assert!(missing.is_err());
    }
}
