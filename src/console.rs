use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};

const BIN: &str = "oa";

/// Where user-facing output goes. Quiet mode silences everything except
/// messages sent through [`Console::complain_always`].
pub struct Console<O = Stdout, E = Stderr> {
    quiet: bool,
    out: O,
    err: E,
}

impl Console {
    pub fn stdio(quiet: bool) -> Self {
        Console::new(quiet, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Console<O, E> {
    pub fn new(quiet: bool, out: O, err: E) -> Self {
        Self { quiet, out, err }
    }

    /// Print a line to stdout unless quiet.
    pub fn say(&mut self, line: impl Display) {
        if !self.quiet {
            // a closed stdout is not worth failing the launch over
            let _ = writeln!(self.out, "{line}");
        }
    }

    /// Report an error on stderr unless quiet.
    pub fn complain(&mut self, error: impl Display) {
        if !self.quiet {
            self.complain_always(error);
        }
    }

    pub fn complain_always(&mut self, error: impl Display) {
        let _ = writeln!(self.err, "{BIN}: {error}");
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (O, E) {
        (self.out, self.err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn loud_console_prints_everything() {
        let mut console = Console::new(false, Vec::new(), Vec::new());
        console.say("Launching /usr/bin/true");
        console.complain("command not found: nope");
        let (out, err) = console.into_parts();
        assert_eq!(text(out), "Launching /usr/bin/true\n");
        assert_eq!(text(err), "oa: command not found: nope\n");
    }

    #[test]
    fn quiet_console_only_prints_forced_errors() {
        let mut console = Console::new(true, Vec::new(), Vec::new());
        console.say("/usr/bin/true");
        console.complain("command not found: nope");
        console.complain_always("Syntax error at line 1, column 1 of ~/.oarc: oops");
        let (out, err) = console.into_parts();
        assert!(out.is_empty());
        assert_eq!(text(err), "oa: Syntax error at line 1, column 1 of ~/.oarc: oops\n");
    }
}
