//! Line-oriented console I/O
//!
//! Every read returns `None` once the input is closed so callers can end the
//! session instead of re-prompting forever.
use skills_lab_core::SkillLevel;
use std::fmt;
use std::io::{self, BufRead, Write};

pub const INVALID_LEVEL: &str = "Entrada inválida. Por favor, insira um número entre 1 e 5.";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of output
    pub fn line(&mut self, text: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    /// Shows `prompt` without a newline and reads the trimmed answer
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            log::debug!("[SHELL] Input closed while waiting for: {}", prompt.trim_end());
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for a level of `skill` until a value in 1-5 is given
    pub fn ask_level(&mut self, skill: &str) -> io::Result<Option<SkillLevel>> {
        let prompt = format!("Informe seu nível em '{}' (1-5): ", skill);
        loop {
            let Some(answer) = self.ask(&prompt)? else {
                return Ok(None);
            };
            match answer.parse::<SkillLevel>() {
                Ok(level) => return Ok(Some(level)),
                Err(e) => {
                    log::debug!("[SHELL] Rejected level for '{}': {}", skill, e);
                    self.line(INVALID_LEVEL)?;
                }
            }
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut console = console("  Ana  \n");
        assert_eq!(console.ask("Nome: ").unwrap(), Some("Ana".to_string()));
        assert_eq!(String::from_utf8(console.into_output()).unwrap(), "Nome: ");
    }

    #[test]
    fn test_ask_returns_none_on_eof() {
        let mut console = console("");
        assert_eq!(console.ask("Nome: ").unwrap(), None);
    }

    #[test]
    fn test_ask_level_reprompts_until_valid() {
        let mut console = console("abc\n0\n6\n-1\n4\n");
        let level = console.ask_level("Curiosidade").unwrap().unwrap();
        assert_eq!(level.value(), 4);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches(INVALID_LEVEL).count(), 4);
        assert_eq!(
            output.matches("Informe seu nível em 'Curiosidade' (1-5): ").count(),
            5
        );
    }

    #[test]
    fn test_ask_level_accepts_each_valid_level() {
        for input in ["1", "2", "3", "4", "5"] {
            let mut console = console(&format!("{}\n", input));
            let level = console.ask_level("X").unwrap().unwrap();
            assert_eq!(level.to_string(), input);
        }
    }

    #[test]
    fn test_ask_level_stops_on_eof() {
        let mut console = console("abc\n");
        assert_eq!(console.ask_level("X").unwrap(), None);
    }
}
