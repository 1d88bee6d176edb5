//! Tokenization for template engine
//!
//! Provides O(n) placeholder scanning using a state machine.

/// A single `{{field_id}}` token with position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    /// Identifier between the braces (braces stripped)
    pub field_id: &'a str,
    /// Absolute byte position of `{{` in the HTML
    pub start: usize,
    /// Total length in bytes including `{{` and `}}`
    pub length: usize,
    /// Line number where the token starts
    pub line: usize,
}

/// Returns true for bytes allowed in a field identifier (`[A-Za-z0-9_]`)
#[inline]
pub(crate) fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Returns true if the whole string is a valid field identifier
pub fn is_valid_field_id(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(is_ident_byte)
}

/// Tokenization state machine (explicit for testability)
///
/// # State Transitions
///
/// ```text
/// Normal ──{──> SeenLBrace ──{──> InIdent ──}──> SeenRBrace ──}──> [Yield Token] → Normal
///   │              │                 │ │              │
///   │ (not {)      │ (not {)         │ └─{ (empty)    │ (not })
///   └─────────────>└────────────────>│   shift start  └──────────> Normal (reprocess)
///                                    └── other byte ─────────────> Normal (reprocess)
/// ```
///
/// A `{` arriving before any identifier byte (`{{{`) moves the candidate start
/// one byte right, so the scan always reports the leftmost match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ScanState {
    /// Normal text scanning
    Normal,

    /// Seen first `{`, checking for second `{`
    SeenLBrace {
        /// Position of the first `{` character
        pos: usize,
    },

    /// Inside `{{`, reading identifier bytes
    InIdent {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where the identifier starts (after `{{`)
        ident_start: usize,
    },

    /// Seen first `}` after a non-empty identifier, checking for second `}`
    SeenRBrace {
        /// Byte position of the opening `{{`
        start: usize,
        /// Byte position where the identifier starts
        ident_start: usize,
        /// Position of the first `}` character
        rbrace_pos: usize,
    },
}

/// Iterator over placeholder tokens in an HTML string
///
/// Each byte is processed at most twice (once more after a failed candidate),
/// in a forward-only manner. Malformed brace sequences are skipped, never reported.
///
/// ```
/// use cardsmith_core::template::TokenStream;
///
/// let mut stream = TokenStream::new("Hello\n{{name}} {{ skipped }}");
/// let token = stream.next().unwrap();
/// assert_eq!((token.field_id, token.start, token.length, token.line), ("name", 6, 8, 2));
/// assert!(stream.next().is_none());
/// ```
pub struct TokenStream<'a> {
    /// Original text, for zero-copy identifier slices
    text: &'a str,
    /// Byte view of `text`
    bytes: &'a [u8],
    /// Current byte position
    pos: usize,
    /// State machine state
    state: ScanState,
    /// Current line number
    line: usize,
    /// Step count for runaway protection
    step_count: usize,
}

impl<'a> TokenStream<'a> {
    /// Create a new TokenStream over HTML text
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            state: ScanState::Normal,
            line: 1,
            step_count: 0,
        }
    }

    /// Check if we should continue iteration (guards for step budget and EOF)
    #[inline]
    fn should_continue(&mut self, max_steps: usize) -> bool {
        self.step_count += 1;
        self.step_count <= max_steps && self.pos < self.bytes.len()
    }

    /// Record step for O(n) performance verification in tests
    #[cfg(test)]
    #[inline]
    fn record_test_step() {
        test_counter::inc();
    }

    /// Process Normal state: look for an opening brace
    fn process_normal(&mut self, byte: u8) {
        if byte == b'{' {
            self.state = ScanState::SeenLBrace { pos: self.pos };
        } else if byte == b'\n' {
            self.line += 1;
        }
        self.pos += 1;
    }

    /// Process SeenLBrace state: check for second brace
    ///
    /// A non-brace byte is left in place and reprocessed in Normal state.
    fn process_seen_lbrace(&mut self, byte: u8, lbrace_pos: usize) {
        if byte == b'{' {
            self.state = ScanState::InIdent {
                start: lbrace_pos,
                ident_start: self.pos + 1,
            };
            self.pos += 1;
        } else {
            self.state = ScanState::Normal;
        }
    }

    /// Process InIdent state: accumulate identifier bytes
    ///
    /// Any byte that cannot continue the candidate is reprocessed in Normal state.
    fn process_in_ident(&mut self, byte: u8, start: usize, ident_start: usize) {
        let empty = self.pos == ident_start;

        if is_ident_byte(byte) {
            self.pos += 1;
        } else if byte == b'}' && !empty {
            self.state = ScanState::SeenRBrace {
                start,
                ident_start,
                rbrace_pos: self.pos,
            };
            self.pos += 1;
        } else if byte == b'{' && empty {
            // `{{{`: the candidate now starts one byte later
            self.state = ScanState::InIdent {
                start: start + 1,
                ident_start: self.pos + 1,
            };
            self.pos += 1;
        } else if byte == b'{' {
            self.state = ScanState::SeenLBrace { pos: self.pos };
            self.pos += 1;
        } else {
            self.state = ScanState::Normal;
        }
    }

    /// Process SeenRBrace state: check for second brace to complete token
    fn process_seen_rbrace(
        &mut self,
        byte: u8,
        start: usize,
        ident_start: usize,
        rbrace_pos: usize,
    ) -> Option<Token<'a>> {
        self.state = ScanState::Normal;
        if byte != b'}' {
            // Reprocess: the byte may open the next candidate
            return None;
        }

        self.pos += 1;
        Some(Token {
            field_id: &self.text[ident_start..rbrace_pos],
            start,
            length: self.pos - start,
            line: self.line,
        })
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        const MAX_STEPS_MULTIPLIER: usize = 3;
        let max_steps = self.bytes.len().saturating_mul(MAX_STEPS_MULTIPLIER);

        loop {
            if !self.should_continue(max_steps) {
                return None;
            }

            let byte = self.bytes[self.pos];
            #[cfg(test)]
            Self::record_test_step();

            match self.state {
                ScanState::Normal => self.process_normal(byte),
                ScanState::SeenLBrace { pos } => self.process_seen_lbrace(byte, pos),
                ScanState::InIdent { start, ident_start } => {
                    self.process_in_ident(byte, start, ident_start)
                }
                ScanState::SeenRBrace {
                    start,
                    ident_start,
                    rbrace_pos,
                } => {
                    if let Some(token) =
                        self.process_seen_rbrace(byte, start, ident_start, rbrace_pos)
                    {
                        return Some(token);
                    }
                }
            }
        }
    }
}
