//! Interactive shell implementation
//!
//! Each input line is one user action dispatched to the session:
//!
//! ```text
//! more                                   next page of the active results
//! search title=the author=Jane Austen    new search (fields optional)
//! show <id>                              book details
//! options                                search form choices
//! theme <day|night>                      switch theme
//! quit                                   leave the shell
//! ```

use crate::config::Config;
use crate::render::{write_detail, write_options, write_page, write_theme};
use anyhow::Result;
use bookcase_core::options::{author_options, genre_options};
use bookcase_core::{BookId, Catalog, FilterCriteria, Session, Theme};
use std::io::{BufRead, Write};

const HELP: &str = "Commands: more | search [title=..] [author=..] [genre=..] | show <id> | options | theme <day|night> | quit";

/// Run the shell on stdin/stdout
pub fn shell(config: &Config) -> Result<()> {
    let catalog = config.load_catalog()?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&catalog, config, stdin.lock(), stdout.lock())
}

/// A parsed input line
#[derive(Debug, PartialEq)]
enum Command {
    More,
    Search(FilterCriteria),
    Show(String),
    Options,
    Theme(Option<String>),
    Help,
    Quit,
    Unknown(String),
}

fn run(catalog: &Catalog, config: &Config, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut session = Session::with_page_size(catalog, config.page_size);
    session.apply_theme(config.theme);

    // Initial page, as when the list first loads
    let page = session.search(FilterCriteria::match_all())?;
    write_page(&mut out, &page)?;

    for line in input.lines() {
        let line = line?;
        let command = parse_command(&line);
        tracing::debug!(?command, "Shell command");

        match command {
            Command::More => {
                if session.show_more_state().is_enabled() {
                    let page = session.show_more()?;
                    write_page(&mut out, &page)?;
                } else {
                    writeln!(out, "Nothing more to show")?;
                }
            }
            Command::Search(criteria) => {
                let page = session.search(criteria)?;
                write_page(&mut out, &page)?;
            }
            Command::Show(id) => match session.detail(&BookId::new(id)) {
                Ok(detail) => write_detail(&mut out, &detail)?,
                Err(err) => {
                    tracing::warn!(error = %err, "Detail lookup failed");
                    writeln!(out, "{}", err)?;
                }
            },
            Command::Options => write_options(
                &mut out,
                &author_options(catalog),
                &genre_options(catalog),
            )?,
            Command::Theme(None) => write_theme(&mut out, session.theme())?,
            Command::Theme(Some(name)) => match name.parse::<Theme>() {
                Ok(theme) => {
                    session.apply_theme(theme);
                    write_theme(&mut out, theme)?;
                }
                Err(err) => writeln!(out, "{}", err)?,
            },
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => break,
            Command::Unknown(word) => writeln!(out, "Unknown command: {}. {}", word, HELP)?,
        }
        out.flush()?;
    }

    Ok(())
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match word {
        "more" => Command::More,
        "search" => Command::Search(parse_search(rest)),
        "show" if !rest.is_empty() => Command::Show(rest.to_string()),
        "options" => Command::Options,
        "theme" if rest.is_empty() => Command::Theme(None),
        "theme" => Command::Theme(Some(rest.to_string())),
        "help" | "" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// Parse `title=.. author=.. genre=..`; a value runs until the next field
fn parse_search(args: &str) -> FilterCriteria {
    let mut values: [Option<String>; 3] = Default::default();
    let mut current = None;

    for token in args.split_whitespace() {
        let field = token.split_once('=').and_then(|(key, value)| {
            let index = match key {
                "title" => 0,
                "author" => 1,
                "genre" => 2,
                _ => return None,
            };
            Some((index, value))
        });

        match (field, current) {
            (Some((index, value)), _) => {
                values[index] = Some(value.to_string());
                current = Some(index);
            }
            (None, Some(index)) => {
                if let Some(value) = values[index].as_mut() {
                    value.push(' ');
                    value.push_str(token);
                }
            }
            (None, None) => {}
        }
    }

    let [title, author, genre] = values;
    FilterCriteria::from_form(title.as_deref(), author.as_deref(), genre.as_deref())
}
