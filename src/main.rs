use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use windrow::{DelimiterPolicy, SegmentExt, checked_size};

#[derive(Parser, Debug)]
#[command(
    name = "windrow",
    about = "Segment, sample, deduplicate and join lines of a text file"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Group lines into fixed-size batches.
    Batch {
        /// Input file (one element per line).
        input: PathBuf,
        /// Number of lines per batch.
        #[arg(long)]
        size: i64,
    },
    /// Split lines into batches at each delimiter line.
    Split {
        /// Input file (one element per line).
        input: PathBuf,
        /// Line that acts as the delimiter.
        #[arg(long)]
        delim: String,
        /// Keep each delimiter line at the end of the batch it closes.
        #[arg(long)]
        keep: bool,
    },
    /// Print every Nth line.
    Sample {
        /// Input file (one element per line).
        input: PathBuf,
        /// Cycle length: lines at positions N, 2N, 3N, ... are printed.
        #[arg(long)]
        every: i64,
    },
    /// Report maximal runs of lines containing a substring.
    Ranges {
        /// Input file (one element per line).
        input: PathBuf,
        /// Substring a line must contain to belong to a run.
        #[arg(long = "match")]
        pattern: String,
    },
    /// Keep the first line per distinct key.
    Distinct {
        /// Input file (one element per line).
        input: PathBuf,
        /// Field separator; the key is the part before its first
        /// occurrence (default: the whole line).
        #[arg(long)]
        key_sep: Option<char>,
    },
    /// Join all lines into one string.
    Join {
        /// Input file (one element per line).
        input: PathBuf,
        /// Separator placed between consecutive lines.
        #[arg(long, default_value = ",")]
        sep: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Batch { input, size } => {
            // Validate before touching the input file.
            let size = checked_size("batch size", size)?;
            for batch in read_lines(&input)?.into_iter().batched(size) {
                println!("{}", batch.join("\t"));
            }
        }
        Commands::Split { input, delim, keep } => {
            let policy = if keep {
                DelimiterPolicy::KeepInBatch
            } else {
                DelimiterPolicy::Drop
            };
            let batches = read_lines(&input)?
                .into_iter()
                .split_when(move |line| *line == delim, policy);
            for batch in batches {
                println!("{}", batch.join("\t"));
            }
        }
        Commands::Sample { input, every } => {
            let every = checked_size("sample cycle", every)?;
            for line in read_lines(&input)?.into_iter().take_every(every) {
                println!("{line}");
            }
        }
        Commands::Ranges { input, pattern } => {
            let markers = read_lines(&input)?
                .into_iter()
                .match_ranges(move |line| line.contains(&pattern));
            for marker in markers {
                println!("start={}\tlen={}", marker.start, marker.len);
            }
        }
        Commands::Distinct { input, key_sep } => {
            let distinct = read_lines(&input)?.into_iter().distinct_by(move |line| {
                match key_sep.and_then(|sep| line.find(sep)) {
                    Some(at) => line[..at].to_string(),
                    None => line.clone(),
                }
            });
            for line in distinct {
                println!("{line}");
            }
        }
        Commands::Join { input, sep } => {
            println!("{}", read_lines(&input)?.into_iter().join_display(&sep));
        }
    }

    Ok(())
}

fn read_lines(path: &PathBuf) -> Result<Vec<String>> {
    let lines = if is_stdin(path) {
        collect_lines(std::io::stdin().lock()).context("failed to read stdin")?
    } else {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        collect_lines(BufReader::new(file))
            .with_context(|| format!("failed to read {}", path.display()))?
    };
    debug!(lines = lines.len(), path = %path.display(), "read input");
    Ok(lines)
}

/// A lone `-` names stdin rather than a file.
fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn collect_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    reader.lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_is_recognised_before_any_file_open() {
        assert!(is_stdin(Path::new("-")));
        assert!(!is_stdin(Path::new("data.txt")));
        assert!(!is_stdin(Path::new("./-")));
    }

    #[test]
    fn lines_are_collected_from_any_buffered_reader() {
        let input: &[u8] = b"north,4\nsouth,1\n";
        let lines = collect_lines(input).unwrap();
        assert_eq!(lines, vec!["north,4".to_string(), "south,1".to_string()]);
    }
}
