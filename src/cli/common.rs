use std::io::Write;
use user_probe::{error::report, ApiResponse, InvokeError, OutcomeHandler};

// Green and bold "Success:" banner
pub fn success(out: &mut impl Write, s: &str) {
    let _ = writeln!(out, "\x1b[1;32mSuccess: \x1b[0m{}", s);
}

// Red and bold "Error:" banner
pub fn error_out(out: &mut impl Write, s: &str) {
    let _ = writeln!(out, "\x1b[1;31mError: \x1b[0m{}", s);
}

/// Prints the outcome of the request to the console, one line either way.
pub struct ConsoleHandler<O, E> {
    out: O,
    err: E,
}

impl ConsoleHandler<std::io::Stdout, std::io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> ConsoleHandler<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl<O: Write, E: Write> OutcomeHandler for ConsoleHandler<O, E> {
    fn on_success(&mut self, response: &ApiResponse) {
        success(&mut self.out, &response.body.to_string());
    }

    fn on_failure(&mut self, error: &InvokeError) {
        error_out(&mut self.err, &report(error));
    }
}
