use std::io::{self, BufRead};

/// Outcome of asking the scanner for the next integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Int(i64),
    /// The next word does not start with an integer.
    NotInt(String),
    Eof,
}

/// Line-buffered reader that mixes whitespace-delimited integers with
/// free-text line tails.
///
/// Integers follow `%d` rules: leading whitespace (newlines included) is
/// skipped, then an optional sign and a run of ASCII digits are consumed.
/// Whatever follows the digits on the same line stays available to
/// [`Scanner::rest_of_line`].
pub(crate) struct Scanner<R> {
    rdr: R,
    buf: String,
    pos: usize,
}

impl<R: BufRead> Scanner<R> {
    pub(crate) fn new(rdr: R) -> Self {
        Self {
            rdr,
            buf: String::new(),
            pos: 0,
        }
    }

    /// Replaces the buffer with the next line, terminator included.
    /// Returns `Ok(false)` on EOF.
    fn fill_line(&mut self) -> io::Result<bool> {
        let mut bytes = Vec::new();
        let n = self.rdr.read_until(b'\n', &mut bytes)?;
        self.buf = String::from_utf8_lossy(&bytes).into_owned();
        self.pos = 0;
        Ok(n > 0)
    }

    pub(crate) fn next_int(&mut self) -> io::Result<Token> {
        loop {
            let rest = &self.buf[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let skip = rest.len() - trimmed.len();
                self.pos += skip;
                break;
            }
            if !self.fill_line()? {
                return Ok(Token::Eof);
            }
        }

        let rest = &self.buf[self.pos..];
        let sign_len = usize::from(rest.starts_with(['+', '-']));
        let digits = rest[sign_len..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if digits == 0 {
            let word = rest.split_whitespace().next().unwrap_or_default();
            return Ok(Token::NotInt(word.to_owned()));
        }

        let end = sign_len + digits;
        let value = parse_saturating(&rest[..end]);
        self.pos += end;
        Ok(Token::Int(value))
    }

    /// Takes the remainder of the current line, terminator included.
    ///
    /// Returns `None` when nothing is left before EOF, i.e. the last integer
    /// was the final token of an unterminated line.
    pub(crate) fn rest_of_line(&mut self) -> Option<String> {
        let rest = &self.buf[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let line = rest.to_owned();
        self.pos = self.buf.len();
        Some(line)
    }
}

/// Parses `[+-]digits`, clamping values that overflow `i64`.
fn parse_saturating(token: &str) -> i64 {
    token.parse().unwrap_or(if token.starts_with('-') {
        i64::MIN
    } else {
        i64::MAX
    })
}
