use std::collections::VecDeque;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Pull-based source of player commands. `None` means the input is exhausted.
pub trait CommandSource {
    fn next_command(&mut self) -> Option<String>;
}

/// One command per line from any buffered reader (stdin for the binary).
pub struct LineInput<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> CommandSource for LineInput<R> {
    fn next_command(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                log::warn!("input: read failed: {}", e);
                None
            }
        }
    }
}

/// Commands loaded up front from a script, for replays and demos.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    commands: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Read a script file: one command per line, blank lines and `#` comments skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let reader = BufReader::new(File::open(path)?);
        let mut commands = VecDeque::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            commands.push_back(trimmed.to_string());
        }
        Ok(Self { commands })
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl CommandSource for ScriptedInput {
    fn next_command(&mut self) -> Option<String> {
        self.commands.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn line_input_strips_newlines_and_ends_at_eof() {
        let mut input = LineInput::new(io::Cursor::new("b rope\r\nm\n"));
        assert_eq!(input.next_command().as_deref(), Some("b rope"));
        assert_eq!(input.next_command().as_deref(), Some("m"));
        assert_eq!(input.next_command(), None);
    }

    #[test]
    fn script_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# buy a shovel first").unwrap();
        writeln!(file, "b shovel").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  d  ").unwrap();
        let mut script = ScriptedInput::from_file(file.path()).unwrap();
        assert_eq!(script.remaining(), 2);
        assert_eq!(script.next_command().as_deref(), Some("b shovel"));
        assert_eq!(script.next_command().as_deref(), Some("d"));
        assert_eq!(script.next_command(), None);
    }
}
