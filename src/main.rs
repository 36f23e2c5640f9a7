//! ordlist - Binary entry point
//!
//! Thin command loop over [`OrderedListTable`]. Whitespace-delimited tokens
//! are read from standard input; an optional file argument seeds the table
//! with each word mapped to its position in the stream (0 for the first word,
//! 1 for the second, and so on).
//!
//! ## Commands
//!
//! | Command | Effect |
//! |---------|--------|
//! | `show` | print every `key value` pair in ascending key order |
//! | `size` | print the entry count |
//! | `min` / `max` | print the least / greatest key |
//! | `delete-min` / `delete-max` | remove and print the least / greatest entry |
//! | `put <key> <value>` | insert or overwrite |
//! | `delete <key>` | remove (no-op if absent) |
//! | `contains <key>` | print `true` / `false` |
//! | `rank <key>` | print the number of keys below `<key>` |
//! | `select <n>` | print the key at sorted position `<n>` |
//! | `floor <key>` / `ceiling <key>` | print the nearest key at or below / above |
//! | anything else | treated as a key: print its value |
//!
//! Absent results print as `-`. Underflow and invalid-argument failures are
//! reported on stderr as `error:` lines; the loop keeps running.

use std::env;
use std::fs;
use std::io::{self, Read};

use ordlist::{OrderedListTable, Result, TableError};

fn main() -> io::Result<()> {
    let mut table: OrderedListTable<String, usize> = OrderedListTable::new();

    // Optional seed file: every whitespace-delimited word keyed to its
    // position in the stream. Re-put of a repeated word overwrites, so the
    // stored value is the word's last position.
    if let Some(path) = env::args().nth(1) {
        let text = fs::read_to_string(&path)?;
        for (position, word) in text.split_whitespace().enumerate() {
            table.put(word.to_string(), position);
        }
    }

    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;

    let mut tokens = input.split_whitespace();
    while let Some(command) = tokens.next() {
        if let Err(err) = run_command(&mut table, command, &mut tokens) {
            eprintln!("error: {err}");
        }
    }

    Ok(())
}

/// Execute one command, pulling any arguments it needs from the token stream.
fn run_command<'a, I>(
    table: &mut OrderedListTable<String, usize>,
    command: &str,
    args: &mut I,
) -> Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match command {
        "show" => {
            for (key, value) in table.iter() {
                println!("{key} {value}");
            }
        }
        "size" => println!("{}", table.len()),
        "min" => print_key(table.min()),
        "max" => print_key(table.max()),
        "delete-min" => {
            let (key, value) = table.delete_min()?;
            println!("{key} {value}");
        }
        "delete-max" => {
            let (key, value) = table.delete_max()?;
            println!("{key} {value}");
        }
        "put" => {
            let key = next_arg(args, "put")?;
            let value = parse_number(next_arg(args, "put")?, "put")?;
            table.put(key.to_string(), value);
        }
        "delete" => {
            let key = next_arg(args, "delete")?;
            table.delete(key);
        }
        "contains" => {
            let key = next_arg(args, "contains")?;
            println!("{}", table.contains(key));
        }
        "rank" => {
            let key = next_arg(args, "rank")?;
            println!("{}", table.rank(key));
        }
        "select" => {
            let position = parse_number(next_arg(args, "select")?, "select")?;
            print_key(table.select(position));
        }
        "floor" => {
            let key = next_arg(args, "floor")?;
            print_key(table.floor(key));
        }
        "ceiling" => {
            let key = next_arg(args, "ceiling")?;
            print_key(table.ceiling(key));
        }
        // Any unrecognized token is a key to look up
        key => match table.get(key) {
            Some(value) => println!("{value}"),
            None => println!("-"),
        },
    }
    Ok(())
}

/// Pull the next token as an argument for `command`.
fn next_arg<'a, I>(args: &mut I, command: &str) -> Result<&'a str>
where
    I: Iterator<Item = &'a str>,
{
    args.next()
        .ok_or_else(|| TableError::InvalidArgument(format!("{command}: missing argument")))
}

fn parse_number(token: &str, command: &str) -> Result<usize> {
    token.parse().map_err(|_| {
        TableError::InvalidArgument(format!("{command}: expected a number, got {token:?}"))
    })
}

fn print_key(key: Option<&String>) {
    match key {
        Some(key) => println!("{key}"),
        None => println!("-"),
    }
}
