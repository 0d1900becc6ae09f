//! User-facing status lines.
//!
//! Colour is applied only when the target stream is a terminal, so piped
//! output and test captures stay plain text.

use ansi_term::{Colour, Style};
use std::fmt;
use std::io::{self, IsTerminal};

fn paint<T: fmt::Display>(style: Style, msg: T, tty: bool) -> String {
    if tty {
        style.paint(msg.to_string()).to_string()
    } else {
        msg.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(Colour::Blue.bold(), msg, io::stdout().is_terminal()));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(Colour::Red.bold(), msg, io::stderr().is_terminal()));
}

/// Section header, e.g. `Recent activity for octocat:`.
pub fn header<T: fmt::Display>(msg: T, tty: bool) -> String {
    paint(Style::new().bold(), msg, tty)
}
