use std::io::{self, BufRead, Write};

/// Yes/no gate in front of destructive operations (clearing a table,
/// dropping a database).
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Asks on stdout and reads the answer from stdin. Only `yes`
/// (case-insensitive) confirms; anything else, including a read error or
/// end of input, declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} (yes/no): ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => answer.trim().eq_ignore_ascii_case("yes"),
        }
    }
}

/// Always gives the same answer. Used for scripted runs (`--yes`) and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm {
    answer: bool,
}

impl AutoConfirm {
    pub fn new(answer: bool) -> Self {
        Self { answer }
    }
}

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.answer
    }
}
