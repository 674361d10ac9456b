//! Boundary-aware literal replacement.
//!
//! Literals are numeric (`0`, `1.25rem`), so a plain word boundary is not
//! enough: `0` must not match the integer part of `0.5rem`, and `1rem` must
//! not match the tail of `0.1rem` or `21rem`. The replacer walks the source
//! left to right, checks each candidate occurrence against its neighbours
//! in the original text, and copies everything else through untouched.

/// Which form of a literal a pass rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// The bare literal, bounded on both sides.
    Bounded,
    /// The literal preceded by a minus sign. Only the trailing side is checked.
    Negated,
}

/// Single-needle replacer over a borrowed source.
pub struct Replacer<'a> {
    source: &'a str,
    needle: &'a str,
    pass: Pass,
    pos: usize,
    output: String,
    count: usize,
}

impl<'a> Replacer<'a> {
    pub fn new(source: &'a str, needle: &'a str, pass: Pass) -> Self {
        Self {
            source,
            needle,
            pass,
            pos: 0,
            output: String::with_capacity(source.len()),
            count: 0,
        }
    }

    /// Replace every accepted occurrence of `needle` in `source`.
    ///
    /// Returns the rewritten text and the number of replacements made.
    pub fn replace(source: &str, needle: &str, replacement: &str, pass: Pass) -> (String, usize) {
        let mut replacer = Replacer::new(source, needle, pass);
        replacer.run(replacement);
        (replacer.output, replacer.count)
    }

    fn run(&mut self, replacement: &str) {
        if self.needle.is_empty() {
            self.output.push_str(self.source);
            return;
        }

        while let Some(offset) = self.source[self.pos..].find(self.needle) {
            let start = self.pos + offset;
            let end = start + self.needle.len();

            if self.accepts(start, end) {
                self.output.push_str(&self.source[self.pos..start]);
                self.output.push_str(replacement);
                self.count += 1;
                self.pos = end;
            } else {
                // Rejected: resume one character past the candidate's start
                let step = self.source[start..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.output.push_str(&self.source[self.pos..start + step]);
                self.pos = start + step;
            }
        }

        self.output.push_str(&self.source[self.pos..]);
    }

    // --- Boundaries ---

    fn accepts(&self, start: usize, end: usize) -> bool {
        let leading_ok = match self.pass {
            Pass::Bounded => !self.char_before(start).is_some_and(continues_leftward),
            Pass::Negated => true,
        };
        leading_ok && !self.continues_after(end)
    }

    fn char_before(&self, idx: usize) -> Option<char> {
        self.source[..idx].chars().next_back()
    }

    /// True when the text at `end` extends the literal into a longer word or number.
    fn continues_after(&self, end: usize) -> bool {
        let mut rest = self.source[end..].chars();
        match rest.next() {
            Some(c) if is_word_char(c) => true,
            Some('.') => rest.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }
}

/// Word characters: Unicode alphanumerics and `_`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Characters that make a following literal part of a larger token:
/// `21rem`, `0.1rem`, `--space-0`.
fn continues_leftward(c: char) -> bool {
    is_word_char(c) || c == '.' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bounded(source: &str, needle: &str) -> (String, usize) {
        Replacer::replace(source, needle, "X", Pass::Bounded)
    }

    fn negated(source: &str, needle: &str) -> (String, usize) {
        Replacer::replace(source, needle, "-X", Pass::Negated)
    }

    // =========================================================================
    // Bounded pass
    // =========================================================================

    #[test]
    fn test_standalone_literal() {
        assert_eq!(bounded("gap: 1rem;", "1rem"), ("gap: X;".into(), 1));
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(bounded("1rem 1rem\n1rem", "1rem"), ("X X\nX".into(), 3));
    }

    #[test]
    fn test_literal_at_start_and_end() {
        assert_eq!(bounded("1rem", "1rem"), ("X".into(), 1));
    }

    #[test]
    fn test_no_occurrence() {
        assert_eq!(bounded("gap: 7rem;", "1rem"), ("gap: 7rem;".into(), 0));
    }

    #[test]
    fn test_longer_number_not_matched() {
        assert_eq!(bounded("width: 21rem;", "1rem"), ("width: 21rem;".into(), 0));
    }

    #[test]
    fn test_fraction_tail_not_matched() {
        assert_eq!(bounded("width: 0.1rem;", "1rem"), ("width: 0.1rem;".into(), 0));
    }

    #[test]
    fn test_zero_inside_decimal_not_matched() {
        assert_eq!(bounded("padding: 0.5rem;", "0"), ("padding: 0.5rem;".into(), 0));
    }

    #[test]
    fn test_zero_before_unit_not_matched() {
        assert_eq!(bounded("top: 0px; left: 10;", "0"), ("top: 0px; left: 10;".into(), 0));
    }

    #[test]
    fn test_zero_inside_token_name_not_matched() {
        assert_eq!(
            bounded("var(--space-0)", "0"),
            ("var(--space-0)".into(), 0)
        );
    }

    #[test]
    fn test_zero_before_period_at_end_of_sentence() {
        assert_eq!(bounded("/* set to 0. */", "0"), ("/* set to X. */".into(), 1));
    }

    #[test]
    fn test_minus_prefixed_left_to_negated_pass() {
        assert_eq!(bounded("margin: -1rem;", "1rem"), ("margin: -1rem;".into(), 0));
    }

    #[test]
    fn test_rejected_candidate_does_not_hide_next() {
        assert_eq!(bounded("21rem 1rem", "1rem"), ("21rem X".into(), 1));
    }

    #[test]
    fn test_non_ascii_neighbours() {
        assert_eq!(bounded("é1rem «1rem»", "1rem"), ("é1rem «X»".into(), 1));
    }

    #[test]
    fn test_empty_needle_is_noop() {
        assert_eq!(bounded("gap: 1rem;", ""), ("gap: 1rem;".into(), 0));
    }

    // =========================================================================
    // Negated pass
    // =========================================================================

    #[test]
    fn test_negated_literal() {
        assert_eq!(negated("margin: -1rem;", "-1rem"), ("margin: -X;".into(), 1));
    }

    #[test]
    fn test_negated_ignores_leading_side() {
        assert_eq!(
            negated("calc(100%-1rem) a-1rem", "-1rem"),
            ("calc(100%-X) a-X".into(), 2)
        );
    }

    #[test]
    fn test_negated_trailing_boundary() {
        assert_eq!(negated("margin: -1rems;", "-1rem"), ("margin: -1rems;".into(), 0));
    }
}
