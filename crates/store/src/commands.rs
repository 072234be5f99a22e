//! Line-oriented commands for the interactive prompt.
//!
//! Parsing never touches session state; a parse error is reported and the
//! prompt keeps its current filters and cart.

use core::str::FromStr;

use thiserror::Error;

use runway_catalog::{SizeFilter, TextFilter};

use crate::session::Session;
use crate::view;

/// One action typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Cart,
    Size(SizeFilter),
    Brand(TextFilter),
    Gender(TextFilter),
    ToggleStock,
    Add(String),
    Plus(String),
    Minus(String),
    Remove(String),
    Help,
    Quit,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown command: {0} (try \"help\")")]
    Unknown(String),

    #[error("\"{0}\" needs an argument")]
    MissingArgument(&'static str),

    #[error("size must be a number or \"any\"")]
    InvalidSize,
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (head, rest) = match s.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (s, ""),
        };

        match head.to_ascii_lowercase().as_str() {
            "list" => Ok(Command::List),
            "cart" => Ok(Command::Cart),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "instock" => Ok(Command::ToggleStock),
            "size" => parse_size(rest),
            "brand" => Ok(Command::Brand(text_filter(require(rest, "brand")?))),
            "gender" => Ok(Command::Gender(text_filter(require(rest, "gender")?))),
            "add" => Ok(Command::Add(require(rest, "add")?.to_string())),
            "plus" => Ok(Command::Plus(require(rest, "plus")?.to_string())),
            "minus" => Ok(Command::Minus(require(rest, "minus")?.to_string())),
            "remove" => Ok(Command::Remove(require(rest, "remove")?.to_string())),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

fn require<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn text_filter(arg: &str) -> TextFilter {
    if arg.eq_ignore_ascii_case("any") {
        TextFilter::Any
    } else {
        TextFilter::contains(arg)
    }
}

fn parse_size(rest: &str) -> Result<Command, ParseError> {
    let rest = require(rest, "size")?;
    if rest.eq_ignore_ascii_case("any") {
        return Ok(Command::Size(SizeFilter::Any));
    }
    rest.parse::<u32>()
        .map(|n| Command::Size(SizeFilter::Size(n)))
        .map_err(|_| ParseError::InvalidSize)
}

/// Run `command` against the session and re-render the affected view.
pub fn apply(session: &mut Session, command: Command) -> String {
    match command {
        Command::List => view::product_grid(&session.visible()),
        Command::Cart => view::cart_panel(session.cart()),
        Command::Size(size) => {
            session.set_size(size);
            view::product_grid(&session.visible())
        }
        Command::Brand(brand) => {
            session.set_brand(brand);
            view::product_grid(&session.visible())
        }
        Command::Gender(gender) => {
            session.set_gender(gender);
            view::product_grid(&session.visible())
        }
        Command::ToggleStock => {
            let on = session.toggle_in_stock_only();
            tracing::debug!(in_stock_only = on, "stock filter toggled");
            view::product_grid(&session.visible())
        }
        Command::Add(name) => {
            session.add_to_cart(&name);
            view::cart_panel(session.cart())
        }
        Command::Plus(name) => {
            session.increment_line(&name);
            view::cart_panel(session.cart())
        }
        Command::Minus(name) => {
            session.decrement_line(&name);
            view::cart_panel(session.cart())
        }
        Command::Remove(name) => {
            session.remove_line(&name);
            view::cart_panel(session.cart())
        }
        Command::Help => view::help(),
        // The caller breaks its loop on Quit before applying anything.
        Command::Quit => String::new(),
    }
}
