//! A [`Tokenizer`] backed by an external analyzer process.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, debug_span};

use teinei_core::tokenizer::{AnalyzerFormat, PosMap, TokenizeError, Tokenizer};
use teinei_core::{PartOfSpeech, PosCategory, Token};

/// Runs an analyzer command once per input line, feeding it on stdin and
/// parsing its stdout with the configured output format.
pub struct ProcessTokenizer {
    program: String,
    args: Vec<String>,
    format: Box<dyn AnalyzerFormat + Send + Sync>,
    pos_map: PosMap,
}

impl ProcessTokenizer {
    /// `command_line` is split on whitespace; no shell quoting is applied.
    pub fn new(
        command_line: &str,
        format: Box<dyn AnalyzerFormat + Send + Sync>,
        pos_map: PosMap,
    ) -> Result<Self, TokenizeError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| TokenizeError::Command("empty analyzer command".to_string()))?;
        Ok(Self {
            program,
            args: parts.collect(),
            format,
            pos_map,
        })
    }

    /// Analyze a single line of text in one analyzer run.
    fn run(&self, line: &str) -> Result<Vec<Token>, TokenizeError> {
        let _span = debug_span!("analyzer", program = %self.program).entered();
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        // Write from a separate thread so a chatty analyzer cannot fill the
        // stdout pipe while we are still blocked on stdin.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| TokenizeError::Command("analyzer stdin unavailable".to_string()))?;
        let input = format!("{line}\n");
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| TokenizeError::Command("stdin writer panicked".to_string()))?;

        // A failed analyzer usually also breaks the stdin pipe; report its status first.
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(TokenizeError::Command(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        written?;

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| TokenizeError::Command(format!("analyzer output is not UTF-8: {e}")))?;
        let tokens = self.format.parse(&stdout, &self.pos_map)?;
        debug!(tokens = tokens.len(), "analyzer finished");
        Ok(tokens)
    }
}

impl Tokenizer for ProcessTokenizer {
    /// Analyzers answer every input line with its own sentence block and drop
    /// the line break itself, so each line runs separately and the breaks are
    /// put back as symbol tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                tokens.push(Token::new(
                    "\n",
                    PartOfSpeech::from_category(PosCategory::Symbol),
                    None,
                ));
            }
            if !line.is_empty() {
                tokens.extend(self.run(line)?);
            }
        }
        Ok(tokens)
    }
}
