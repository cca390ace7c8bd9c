//! Where-clause extraction and condition tokenizing.
//!
//! ```text
//! SELECT A, B WHERE A = 'x y' AND B <> '1' ORDER BY A
//!                   └────────── where text ───────┘
//!                   [A] [=] ['x y'] [AND] [B] [<>] ['1']
//! ```
//!
//! The where text is taken from the query as written, so literal values keep
//! their case. Offsets are byte offsets into the full query string.

use tracing::debug;

use super::error::ParseErrorKind;

const WHERE_UPPER: &str = " WHERE ";
const WHERE_LOWER: &str = " where ";
const GROUP_BY: &str = "GROUP BY";
const ORDER_BY: &str = "ORDER BY";

// ============================================================================
// Where clause extraction
// ============================================================================

/// The condition text of a query and where it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WhereClause<'q> {
    pub text: &'q str,
    pub offset: usize,
}

/// Locate the text after the first ` WHERE ` (or ` where `), stopping before
/// any `GROUP BY` / `ORDER BY`.
///
/// The keyword must be surrounded by single spaces. Mixed-case spellings such
/// as ` Where `, or a newline or tab before the keyword, are not recognized and
/// the query is treated as having no where clause. Returns `None` in that case.
pub fn extract_where_clause(query: &str) -> Option<WhereClause<'_>> {
    let idx = query
        .find(WHERE_UPPER)
        .or_else(|| query.find(WHERE_LOWER))?;
    let offset = idx + WHERE_UPPER.len();

    // Both cut points are located in the where text before any truncation.
    // ASCII upper-casing keeps byte offsets aligned with `query`.
    let upper = query[offset..].to_ascii_uppercase();
    let mut truncated = query;

    if let Some(group_by) = upper.find(GROUP_BY) {
        debug!(query, "found group by in where clause");
        truncated = &truncated[..offset + group_by];
    }

    if let Some(order_by) = upper.find(ORDER_BY) {
        debug!(query, "found order by in where clause");
        let end = (offset + order_by).min(truncated.len());
        truncated = &truncated[..end];
    }

    Some(WhereClause {
        text: &truncated[offset..],
        offset,
    })
}

// ============================================================================
// Tokenizer
// ============================================================================

/// One token of a where clause.
///
/// Quoted literals keep their surrounding quotes; escaped characters appear
/// without the backslash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionToken {
    pub text: String,
    /// Byte offset of the token's first character in the full query.
    pub offset: usize,
}

impl ConditionToken {
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Normal,
    Quoted,
    /// The next character is copied verbatim, then scanning resumes in the
    /// recorded quote state.
    Escaped { quoted: bool },
}

struct TokenBuffer {
    text: String,
    start: usize,
    tokens: Vec<ConditionToken>,
}

impl TokenBuffer {
    fn push(&mut self, c: char, offset: usize) {
        if self.text.is_empty() {
            self.start = offset;
        }
        self.text.push(c);
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(ConditionToken {
                text: std::mem::take(&mut self.text),
                offset: self.start,
            });
        }
    }
}

/// Split a where clause into tokens.
///
/// `base_offset` is the position of `clause` within the full query and is
/// added to every reported offset.
pub fn tokenize_conditions(
    clause: &str,
    base_offset: usize,
) -> Result<Vec<ConditionToken>, ParseErrorKind> {
    let mut buf = TokenBuffer {
        text: String::new(),
        start: base_offset,
        tokens: Vec::new(),
    };
    let mut state = ScanState::Normal;

    for (i, c) in clause.char_indices() {
        let offset = base_offset + i;
        state = match (state, c) {
            (ScanState::Escaped { quoted }, c) => {
                buf.push(c, offset);
                if quoted {
                    ScanState::Quoted
                } else {
                    ScanState::Normal
                }
            }
            (ScanState::Normal, '\\') => ScanState::Escaped { quoted: false },
            (ScanState::Quoted, '\\') => ScanState::Escaped { quoted: true },
            (ScanState::Normal, ' ') => {
                buf.flush();
                ScanState::Normal
            }
            (ScanState::Normal, '\'') => {
                if !buf.text.is_empty() {
                    return Err(ParseErrorKind::InvalidQuote { offset });
                }
                buf.push(c, offset);
                ScanState::Quoted
            }
            (ScanState::Quoted, '\'') => {
                buf.push(c, offset);
                ScanState::Normal
            }
            (state, c) => {
                buf.push(c, offset);
                state
            }
        };
    }

    if matches!(state, ScanState::Quoted | ScanState::Escaped { quoted: true }) {
        return Err(ParseErrorKind::UnterminatedLiteral);
    }
    // A trailing lone backslash escapes nothing.
    buf.flush();

    debug!(tokens = ?buf.tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>(), "where clause tokens");
    Ok(buf.tokens)
}
