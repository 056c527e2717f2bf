//! Console reporting: echoes actions before they run, explains staleness
//! decisions on request, and prints warnings and fatal errors.

const ANSI_NOTE: &str = "\x1b[96m";
const ANSI_ERR: &str = "\x1b[1;91m";
const ANSI_RESET: &str = "\x1b[0m";

#[cfg(unix)]
fn stdout_is_tty() -> bool {
    unsafe {
        libc::isatty(/* stdout */ 1) == 1
    }
}

#[cfg(not(unix))]
fn stdout_is_tty() -> bool {
    false
}

pub struct Console {
    /// Use ANSI color; only when stdout is a terminal.
    color: bool,
    /// Log why each target is or isn't rebuilt (-d explain).
    verbose: bool,
}

impl Console {
    pub fn new(verbose: bool) -> Self {
        Console {
            color: stdout_is_tty(),
            verbose,
        }
    }

    fn note(&self, msg: &str) {
        if self.color {
            println!("{}{}{}", ANSI_NOTE, msg, ANSI_RESET);
        } else {
            println!("{}", msg);
        }
    }

    /// Echo an external command about to be spawned.
    pub fn command(&self, cmdline: &str) {
        self.note(&format!("$ {}", cmdline));
    }

    /// Echo an in-process action about to be invoked.
    pub fn callback(&self) {
        self.note("call <callback>");
    }

    pub fn explain(&self, msg: &str) {
        if self.verbose {
            self.note(msg);
        }
    }

    pub fn warning(&self, msg: &str) {
        if self.color {
            println!("{}Warning: {}{}", ANSI_ERR, msg, ANSI_RESET);
        } else {
            println!("Warning: {}", msg);
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            println!("{}rmk: error: {}{}", ANSI_ERR, msg, ANSI_RESET);
        } else {
            println!("rmk: error: {}", msg);
        }
    }
}
