//! Terminal notices and confirmations

use std::io::{self, BufRead, Write};

use crate::core::{Confirm, Notice, Notifier};

/// Prints notices; failures and alerts go to stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice {
            Notice::Success(message) => println!("✓ {message}"),
            Notice::Failure { title, message } => eprintln!("✗ {title}: {message}"),
            Notice::Alert { title, message } => eprintln!("! {title}: {message}"),
            Notice::SessionExpired => eprintln!("! Session expired, please log in again"),
        }
    }
}

/// y/N prompt on stdin. Anything but "y"/"yes" declines, as does EOF.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        let mut stdout = io::stdout();
        if write!(stdout, "{prompt} [y/N] ").and_then(|_| stdout.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => parse_answer(&answer),
        }
    }
}

fn parse_answer(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
