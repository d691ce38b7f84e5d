//! Anagram Finder - CLI
//!
//! Looks up single-word anagrams and decomposes phrases into multi-word
//! anagrams, with an interactive prompt as the default mode.

use anagram_finder::{
    cache::{self, DEFAULT_CACHE_PATH},
    commands::{SearchConfig, run_groups, run_interactive, run_lookup, run_search, run_update},
    errors::parse_word_count,
    logging::init_logger,
    output::{
        print_combination, print_groups_result, print_lookup_result, print_search_header,
        print_search_report, print_update_result,
    },
    search::{Finder, SearchOptions, StopRule},
    wordlists::WordSource,
};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "anagram_finder",
    about = "Find single-word and multi-word anagrams of words and phrases",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word source for (re)building the cache: 'builtin' (default) or path to file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Vocabulary cache file
    #[arg(short, long, global = true, default_value = DEFAULT_CACHE_PATH)]
    cache: PathBuf,

    /// Rebuild the vocabulary cache before searching
    #[arg(short, long, global = true)]
    update: bool,

    /// Report every matching combination instead of stopping each word count
    /// at the first full-length one
    #[arg(short = 'x', long, global = true)]
    exhaustive: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for words and word counts repeatedly (default)
    Interactive,

    /// Find multi-word anagrams of a word or phrase
    Search {
        /// The word or phrase to rearrange
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,

        /// Maximum words per result (0 for no limit)
        #[arg(short = 'n', long, value_parser = parse_word_count)]
        max_words: Option<usize>,
    },

    /// List the single-word anagrams of a word
    Lookup {
        /// Word to look up
        word: String,
    },

    /// Rebuild the vocabulary cache and exit
    Update,

    /// List the largest anagram groups in the vocabulary
    Groups {
        /// Smallest group size to report
        #[arg(short, long, default_value = "2")]
        min_size: usize,

        /// Maximum number of groups to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.debug);

    let source = WordSource::from_name(&cli.wordlist);
    let stop_rule = if cli.exhaustive {
        StopRule::Exhaustive
    } else {
        StopRule::FirstFullLength
    };

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Interactive);

    if matches!(command, Commands::Update) {
        let (_, report) = run_update(&source, &cli.cache)?;
        print_update_result(&report);
        return Ok(());
    }

    let index = cache::open(&source, &cli.cache, cli.update)?;
    let finder = Finder::new(&index);

    match command {
        Commands::Interactive => run_interactive(&finder, stop_rule)?,
        Commands::Search { term, max_words } => {
            run_search_command(&finder, &term.join(" "), max_words, stop_rule);
        }
        Commands::Lookup { word } => print_lookup_result(&run_lookup(&finder, &word)),
        Commands::Groups { min_size, limit } => {
            print_groups_result(&run_groups(&finder, min_size, limit));
        }
        Commands::Update => unreachable!("handled before loading the cache"),
    }
    Ok(())
}

fn run_search_command(
    finder: &Finder<'_>,
    query: &str,
    max_words: Option<usize>,
    stop_rule: StopRule,
) {
    let config = SearchConfig {
        query: query.to_string(),
        options: SearchOptions::new(max_words, stop_rule),
    };

    print_search_header(&config);
    let report = run_search(finder, &config, print_combination);
    print_search_report(&report);
}
