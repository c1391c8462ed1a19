//! Inline flag prefix parsing
//!
//! A pattern may start with a parenthesized run of letters, e.g.
//! `(?ms)^interface`. The run is stripped before compilation and turned
//! into builder options. Letters the matcher does not support are
//! dropped without error.

/// Matcher options selected by an inline flag prefix
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineFlags {
    /// `i`
    pub case_insensitive: bool,
    /// `m`: `^`/`$` match at line boundaries
    pub multi_line: bool,
    /// `s`: `.` matches `\n`
    pub dot_matches_new_line: bool,
    /// `u`
    pub unicode: bool,
    /// `y`: every match must start where the previous one ended
    pub sticky: bool,
}

impl InlineFlags {
    /// Split a raw pattern into its flags and the pattern to compile
    ///
    /// Returns default flags and the untouched pattern when there is no
    /// `(?letters)` prefix.
    pub fn parse(raw: &str) -> (InlineFlags, &str) {
        let mut flags = InlineFlags::default();

        let Some(body) = raw.strip_prefix("(?") else {
            return (flags, raw);
        };
        let letters = body.bytes().take_while(u8::is_ascii_alphabetic).count();
        if letters == 0 || body.as_bytes().get(letters) != Some(&b')') {
            return (flags, raw);
        }

        for letter in body[..letters].chars() {
            match letter {
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'u' => flags.unicode = true,
                'y' => flags.sticky = true,
                // Searches are always global
                'g' => {}
                other => tracing::trace!(flag = %other, "ignoring unsupported inline flag"),
            }
        }

        (flags, &body[letters + 1..])
    }

    /// The supported letters that are set, in canonical order
    pub fn letters(&self) -> String {
        [
            (self.case_insensitive, 'i'),
            (self.multi_line, 'm'),
            (self.dot_matches_new_line, 's'),
            (self.unicode, 'u'),
            (self.sticky, 'y'),
        ]
        .into_iter()
        .filter_map(|(set, letter)| set.then_some(letter))
        .collect()
    }
}
