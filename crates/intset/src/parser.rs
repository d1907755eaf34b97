use alloc::vec::Vec;

use crate::{
    buffer::ElementBuffer,
    error::{ParseError, ParseErrorKind},
};

/// Element buffer capacity reserved on first use; growth doubles beyond it.
const INITIAL_CAPACITY: usize = 32;

/// What committed the most recently completed number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Committer {
    None,
    Blank,
    Comma,
    CloseBrace,
}

/// Transient state for one parse. Reset at entry, discarded at exit.
#[derive(Debug)]
struct LiteralParser {
    left_braces: u32,
    right_braces: u32,
    pending_comma: bool,
    pending_number: bool,
    committer: Committer,
    accumulator: i32,
    elements: ElementBuffer,
}

/// Runs the state machine over `input`.
///
/// On success the returned elements are unique but in commit order; the
/// caller establishes the canonical order.
pub(crate) fn parse_literal(input: &[u8]) -> Result<Vec<i32>, ParseError> {
    let mut parser = LiteralParser::new();
    for (offset, &byte) in input.iter().enumerate() {
        parser.step(byte, offset, input)?;
    }
    parser.finish(input.len())
}

impl LiteralParser {
    fn new() -> Self {
        Self {
            left_braces: 0,
            right_braces: 0,
            pending_comma: false,
            pending_number: false,
            committer: Committer::None,
            accumulator: 0,
            elements: ElementBuffer::new(INITIAL_CAPACITY),
        }
    }

    #[inline]
    fn step(&mut self, byte: u8, offset: usize, input: &[u8]) -> Result<(), ParseError> {
        if self.right_braces > 0 {
            return Self::step_closed(byte, offset, input);
        }
        match byte {
            b'{' => {
                self.left_braces += 1;
            }
            b'}' => {
                self.right_braces += 1;
                if self.left_braces != 1 {
                    return Err(fail(ParseErrorKind::UnbalancedBraces, offset));
                }
                if self.pending_number {
                    self.commit(Committer::CloseBrace, offset)?;
                }
            }
            b' ' => {
                // A space commits a pending number but never consumes or
                // produces a separator.
                if self.pending_number {
                    self.commit(Committer::Blank, offset)?;
                }
            }
            b',' => {
                if self.pending_comma {
                    return Err(fail(ParseErrorKind::DuplicateSeparator, offset));
                }
                if self.pending_number {
                    self.commit(Committer::Comma, offset)?;
                }
                self.pending_comma = true;
            }
            b'0'..=b'9' => {
                self.pending_number = true;
                self.accumulate(byte, offset)?;
                self.check_separated(offset)?;
                self.pending_comma = false;
            }
            _ => return Err(invalid_character(input, offset)),
        }
        Ok(())
    }

    /// After the closing brace only trailing spaces are permitted.
    fn step_closed(byte: u8, offset: usize, input: &[u8]) -> Result<(), ParseError> {
        match byte {
            b' ' => Ok(()),
            b'{' | b'}' => Err(fail(ParseErrorKind::UnbalancedBraces, offset)),
            b',' => Err(fail(ParseErrorKind::DanglingComma, offset)),
            b'0'..=b'9' => Err(fail(ParseErrorKind::MissingSeparator, offset)),
            _ => Err(invalid_character(input, offset)),
        }
    }

    /// Folds one decimal digit into the accumulator.
    #[inline]
    fn accumulate(&mut self, byte: u8, offset: usize) -> Result<(), ParseError> {
        let digit = i32::from(byte - b'0');
        self.accumulator = self
            .accumulator
            .checked_mul(10)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| fail(ParseErrorKind::NumericOverflow, offset))?;
        Ok(())
    }

    /// A digit starting a new number must have seen a comma since the
    /// previous number ended, unless the comma itself committed it. Spaces
    /// alone do not separate.
    #[inline]
    fn check_separated(&self, offset: usize) -> Result<(), ParseError> {
        if self.committer != Committer::None
            && self.committer != Committer::Comma
            && !self.pending_comma
        {
            return Err(fail(ParseErrorKind::MissingSeparator, offset));
        }
        Ok(())
    }

    /// Inserts the accumulated number and records what committed it.
    fn commit(&mut self, committer: Committer, offset: usize) -> Result<(), ParseError> {
        self.elements
            .push(self.accumulator)
            .map_err(|_| fail(ParseErrorKind::AllocationError, offset))?;
        self.accumulator = 0;
        self.pending_number = false;
        self.committer = committer;
        Ok(())
    }

    /// End-of-input validation; checks performed here report the input
    /// length as their offset.
    fn finish(self, end: usize) -> Result<Vec<i32>, ParseError> {
        if self.pending_comma {
            return Err(fail(ParseErrorKind::DanglingComma, end));
        }
        if self.right_braces != 1 {
            return Err(fail(ParseErrorKind::MissingClosingBrace, end));
        }
        Ok(self.elements.into_elements())
    }
}

fn fail(kind: ParseErrorKind, offset: usize) -> ParseError {
    ParseError { kind, offset }
}

fn invalid_character(input: &[u8], offset: usize) -> ParseError {
    let (ch, _) = bstr::decode_utf8(&input[offset..]);
    let ch = ch.unwrap_or('\u{FFFD}'); // replace invalid
    fail(ParseErrorKind::InvalidCharacter(ch), offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_come_back_in_commit_order() {
        assert_eq!(parse_literal(b"{3,1,2}").unwrap(), [3, 1, 2]);
        assert_eq!(parse_literal(b"{2,2,1}").unwrap(), [2, 1]);
    }

    #[test]
    fn digits_straddling_the_open_brace_accumulate() {
        assert_eq!(parse_literal(b"5{6}").unwrap(), [56]);
    }

    #[test]
    fn errors_carry_the_offending_offset() {
        assert_eq!(parse_literal(b"{1,,2}").unwrap_err().offset(), 3);
        assert_eq!(parse_literal(b"{1,a}").unwrap_err().offset(), 3);
        assert_eq!(parse_literal(b"{1,2").unwrap_err().offset(), 4);
    }

    #[test]
    fn non_utf8_bytes_report_the_replacement_character() {
        let err = parse_literal(b"{1,\xFF}").unwrap_err();
        assert_eq!(
            err.kind(),
            ParseErrorKind::InvalidCharacter('\u{FFFD}')
        );
        assert_eq!(err.offset(), 3);
    }
}
