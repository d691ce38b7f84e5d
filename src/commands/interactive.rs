//! Interactive prompt mode
//!
//! Repeatedly asks for a word or phrase and a maximum word count, then
//! reports its anagrams, until the user quits or input ends.

use super::lookup::run_lookup;
use super::search::{SearchConfig, run_search};
use crate::errors::parse_word_count;
use crate::output::display::{
    print_combination, print_lookup_result, print_search_header, print_search_report,
};
use crate::search::{Finder, SearchOptions, StopRule};
use colored::Colorize;
use std::io::{self, BufRead, Write};

const QUIT_COMMANDS: [&str; 3] = ["quit", "q", "exit"];

/// Run the interactive prompt loop on stdin
///
/// # Errors
///
/// Returns an error if reading from stdin or writing the prompt fails.
pub fn run_interactive(finder: &Finder<'_>, stop_rule: StopRule) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Anagram Finder - Interactive                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Vocabulary: {} words. Type 'quit' to exit.\n",
        finder.index().len()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let Some(query) = read_query(&mut input)? else {
            break;
        };
        let Some(max_words) = read_word_count(&mut input)? else {
            break;
        };

        if !query.contains(char::is_whitespace) {
            print_lookup_result(&run_lookup(finder, &query));
        }

        let config = SearchConfig {
            query,
            options: SearchOptions::new(Some(max_words), stop_rule),
        };
        print_search_header(&config);
        let report = run_search(finder, &config, print_combination);
        print_search_report(&report);
        println!();
    }

    println!("\n👋 Goodbye!\n");
    Ok(())
}

/// Ask for a non-empty word or phrase; `None` means quit
fn read_query<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    loop {
        match get_user_input("Enter the word or phrase to find anagrams of", input)? {
            None => return Ok(None),
            Some(text) if QUIT_COMMANDS.contains(&text.as_str()) => return Ok(None),
            Some(text) if text.is_empty() => {}
            Some(text) => return Ok(Some(text)),
        }
    }
}

/// Ask for a maximum word count, re-prompting until it is valid; `None` means quit
fn read_word_count<R: BufRead>(input: &mut R) -> io::Result<Option<usize>> {
    loop {
        let Some(text) = get_user_input("Maximum words per result (0 for no limit)", input)?
        else {
            return Ok(None);
        };
        if QUIT_COMMANDS.contains(&text.as_str()) {
            return Ok(None);
        }
        if text.is_empty() {
            return Ok(Some(0));
        }

        match parse_word_count(&text) {
            Ok(count) => return Ok(Some(count)),
            Err(e) => println!("{} {e}", "❌".red()),
        }
    }
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn query_skips_blank_lines() {
        let mut input = Cursor::new("\n   \nnight owl\n");
        assert_eq!(read_query(&mut input).unwrap(), Some("night owl".to_string()));
    }

    #[test]
    fn query_quits() {
        assert_eq!(read_query(&mut Cursor::new("quit\n")).unwrap(), None);
        assert_eq!(read_query(&mut Cursor::new("")).unwrap(), None);
    }

    #[test]
    fn count_reprompts_on_invalid_input() {
        let mut input = Cursor::new("-3\nmany\n2\n");
        assert_eq!(read_word_count(&mut input).unwrap(), Some(2));
    }

    #[test]
    fn count_blank_means_no_limit() {
        assert_eq!(read_word_count(&mut Cursor::new("\n")).unwrap(), Some(0));
        assert_eq!(read_word_count(&mut Cursor::new("0\n")).unwrap(), Some(0));
    }

    #[test]
    fn count_quits_on_eof() {
        assert_eq!(read_word_count(&mut Cursor::new("abc\n")).unwrap(), None);
        assert_eq!(read_word_count(&mut Cursor::new("q\n")).unwrap(), None);
    }
}
