//! Simple interactive CLI mode
//!
//! Text-based search loop without TUI

use super::find::{SearchConfig, find_words};
use crate::output::print_find_result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode
///
/// Each round asks for tiles and constraints and prints the playable words.
/// Length policy and maximum length are taken from `base`.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(words: &[String], base: &SearchConfig) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Scrabbler - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Searching {} words.", words.len());
    print_help();

    let mut input = io::stdin().lock();

    loop {
        let Some(tiles) = get_user_input(&mut input, "Tiles")? else {
            break;
        };

        match tiles.to_lowercase().as_str() {
            "quit" | "q" | "exit" => break,
            "help" | "h" | "?" => {
                print_help();
                continue;
            }
            "" => {
                println!("Enter at least one tile.\n");
                continue;
            }
            _ => {}
        }

        let Some(constraints) = get_user_input(&mut input, "Constraints")? else {
            break;
        };

        let config = SearchConfig {
            tiles,
            constraints: Some(constraints).filter(|c| !c.is_empty()),
            ..base.clone()
        };

        match find_words(&config, words) {
            Ok(result) => print_find_result(&result),
            Err(e) => println!("{} {e}\n", "❌".red()),
        }
    }

    println!("\n👋 Good luck with your game!\n");
    Ok(())
}

fn print_help() {
    println!("\nEnter your tiles (e.g. 'aertsl' or 'a,e,r,t,s,l'), then optional");
    println!("constraints as letter,position pairs (e.g. 'a,1,t,3'). Leave the");
    println!("constraints blank for none.\n");
    println!("Commands: 'help' for this message, 'quit' to exit\n");
}

/// Get user input with a prompt, `None` on end of input
fn get_user_input<R: BufRead>(input: &mut R, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
