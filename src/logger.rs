use std::{
    fs::{self, File},
    io::{self, Write},
    path::PathBuf,
};

use chrono::Local;
use colored::Colorize;

// Solver trace sink: numbered note files under a directory plus optional
// console echo. Writes are best effort so a full disk never turns a
// solvable puzzle into an error.
pub struct SolveLog {
    dir: Option<PathBuf>,
    echo: bool,
    color: bool,
    max_notes: usize,
    counter: usize,
}

impl SolveLog {
    // no files, no console output; used by tests and the check operation
    pub fn quiet() -> Self {
        Self { dir: None, echo: false, color: false, max_notes: 0, counter: 0 }
    }

    pub fn echo(color: bool, max_notes: usize) -> Self {
        Self { dir: None, echo: true, color, max_notes, counter: 0 }
    }

    pub fn to_dir(dir: impl Into<PathBuf>, color: bool, max_notes: usize) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir: Some(dir), echo: true, color, max_notes, counter: 0 })
    }

    pub fn note(&mut self, title: &str, details: &str) {
        if self.dir.is_none() && !self.echo { return; }
        if self.max_notes != 0 && self.counter >= self.max_notes { return; }
        self.counter += 1;

        if let Some(dir) = &self.dir {
            let path = dir.join(format!("trace({}).txt", self.counter));
            let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
            if let Ok(mut f) = File::create(path) {
                let _ = writeln!(f, "[{}] {}\n\n{}", ts, title, details);
            }
        }

        if self.echo {
            if self.color {
                println!("{} {}\n{}", "\u{27a4}".blue().bold(), title.bold(), details);
            } else {
                println!("\u{27a4} {}\n{}", title, details);
            }
        }
    }
}
