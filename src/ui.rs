use colored::{ColoredString, Colorize};

/// What a status line says about the scanned identity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Nothing leaked
    Clean,
    /// Records were found
    Exposed,
    /// Licence usage
    Quota,
    Note,
    Failure,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Tone::Clean => "[clean]",
            Tone::Exposed => "[exposed]",
            Tone::Quota => "[quota]",
            Tone::Note => "[note]",
            Tone::Failure => "[error]",
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            Tone::Clean => text.green(),
            Tone::Exposed => text.red().bold(),
            Tone::Quota => text.cyan(),
            Tone::Note => text.normal(),
            Tone::Failure => text.red(),
        }
    }
}

/// Uncoloured status line, as written to logs and tests
pub fn plain_line(tone: Tone, message: &str) -> String {
    format!("{:<9} {}", tone.marker(), message)
}

/// Title line for a block of command output
pub fn plain_heading(command: &str, subject: &str) -> String {
    if subject.is_empty() {
        format!("meontheweb {}", command)
    } else {
        format!("meontheweb {}: {}", command, subject)
    }
}

pub fn heading(command: &str, subject: &str) {
    println!("\n{}", plain_heading(command, subject).bold().underline());
}

pub fn clean(message: &str) {
    println!("{}", Tone::Clean.paint(&plain_line(Tone::Clean, message)));
}

pub fn exposed(message: &str) {
    println!("{}", Tone::Exposed.paint(&plain_line(Tone::Exposed, message)));
}

pub fn quota(message: &str) {
    println!("{}", Tone::Quota.paint(&plain_line(Tone::Quota, message)));
}

pub fn note(message: &str) {
    println!("{}", Tone::Note.paint(&plain_line(Tone::Note, message)));
}

/// Goes to stderr so `--json` output stays parseable
pub fn failure(message: &str) {
    eprintln!("{}", Tone::Failure.paint(&plain_line(Tone::Failure, message)));
}
