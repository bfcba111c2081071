//! Request document parser.
//!
//! This module turns a plain-text request document into a [`ParsedDocument`]:
//! an ordered list of variable declarations and an ordered list of request
//! definitions. Requests open on a method line (or a bare URL line), collect
//! headers until the first blank line, then accumulate a raw body until the
//! next request, `###` section marker, or end of input.
//!
//! Classification is a single forward scan. Each physical line is matched
//! against an ordered rule list, first claim wins:
//!
//! 1. blank line - header/body divider, or verbatim body content once inside
//!    a body
//! 2. `###` section marker - finalizes the open request, trailing text seeds
//!    the next request's description
//! 3. `#` / `//` comment - pending description when no request is open,
//!    swallowed otherwise
//! 4. `@name = value` variable declaration - recorded even mid-body
//! 5. body accumulation for an open request already past its headers
//! 6. method line (`VERB target [HTTP/x.y]`)
//! 7. bare absolute URL line (implied GET, only when no request is open)
//! 8. `key: value` header line
//! 9. anything else while a request is open starts/extends its body
//!
//! Lines matching no rule are absorbed silently; the only error the parser
//! can produce is a read fault from the underlying source.

pub mod error;

use crate::models::{HttpMethod, ParsedDocument, RequestDefinition, VariableDeclaration};
use error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::io::BufRead;
use std::mem;

static VARIABLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@(\w+)\s*=\s*(.+)$").expect("variable line regex"));

static METHOD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(GET|POST|PUT|DELETE|PATCH|HEAD|OPTIONS|TRACE|CONNECT)\s+(.+)$")
        .expect("method line regex")
});

static HEADER_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([\w-]+)\s*:\s*(.+)$").expect("header line regex"));

static COMMENT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:#|//)(.*)$").expect("comment line regex"));

static VERSION_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*?)\s+(HTTP/\d+(?:\.\d+)?)$").expect("version suffix regex"));

/// A request that has been opened but not yet finalized.
#[derive(Debug)]
struct OpenRequest {
    method: HttpMethod,
    url: String,
    http_version: Option<String>,
    headers: HashMap<String, String>,
    description: String,
    line_start: usize,
}

/// Accumulator state threaded through the line scan.
///
/// The whole record is the single source of truth for the scan; rules mutate
/// it through the methods below and nothing else carries cross-line state.
#[derive(Debug, Default)]
struct ParserState {
    variables: Vec<VariableDeclaration>,
    requests: Vec<RequestDefinition>,
    open: Option<OpenRequest>,
    pending_description: String,
    in_body: bool,
    body_lines: Vec<String>,
}

impl ParserState {
    /// Finalizes the open request, if any, with the given end line, and
    /// resets body accumulation.
    fn finalize_open(&mut self, line_end: usize) {
        if let Some(open) = self.open.take() {
            self.requests.push(RequestDefinition {
                id: format!("req-{}", self.requests.len() + 1),
                method: open.method,
                url: open.url,
                http_version: open.http_version,
                headers: open.headers,
                body: self.body_lines.join("\n"),
                description: open.description,
                line_start: open.line_start,
                line_end,
            });
        }
        self.in_body = false;
        self.body_lines.clear();
    }

    /// Opens a new request, consuming the pending description.
    fn open_request(
        &mut self,
        method: HttpMethod,
        url: String,
        http_version: Option<String>,
        line_start: usize,
    ) {
        self.open = Some(OpenRequest {
            method,
            url,
            http_version,
            headers: HashMap::new(),
            description: mem::take(&mut self.pending_description),
            line_start,
        });
    }
}

/// Parses a request document from any buffered line source.
///
/// The only failure mode is a read fault from `reader`; every line of
/// content is either claimed by a classifier rule or silently absorbed.
/// A document with zero requests is a valid result - checking for that
/// condition is the caller's concern.
///
/// # Arguments
///
/// * `reader` - The line source for the document
///
/// # Returns
///
/// The parsed document, or `ParseError::ReadFailure` if the source failed.
///
/// # Examples
///
/// ```
/// use reqtui::parser::parse_document;
///
/// let content = "\
/// @host = https://api.example.com
///
/// ### List users
/// GET {{host}}/users
/// ";
/// let document = parse_document(content.as_bytes()).unwrap();
/// assert_eq!(document.variables.len(), 1);
/// assert_eq!(document.requests.len(), 1);
/// assert_eq!(document.requests[0].id, "req-1");
/// ```
pub fn parse_document<R: BufRead>(reader: R) -> Result<ParsedDocument, ParseError> {
    let mut state = ParserState::default();
    let mut raw_lines = Vec::new();
    let mut line_num = 0;

    for line in reader.lines() {
        let line = line.map_err(|source| ParseError::ReadFailure { source })?;
        line_num += 1;
        classify_line(&mut state, line_num, &line);
        raw_lines.push(line);
    }

    // EOF finalizes a still-open request with the last line number.
    state.finalize_open(line_num);

    tracing::debug!(
        variables = state.variables.len(),
        requests = state.requests.len(),
        lines = line_num,
        "parsed request document"
    );

    Ok(ParsedDocument {
        variables: state.variables,
        requests: state.requests,
        raw_lines,
    })
}

/// Parses a request document held entirely in memory.
///
/// In-memory reads cannot fault, so this variant is infallible.
pub fn parse_str(content: &str) -> ParsedDocument {
    parse_document(content.as_bytes()).expect("in-memory reads cannot fail")
}

/// Applies the ordered classifier rules to one physical line.
fn classify_line(state: &mut ParserState, line_num: usize, line: &str) {
    let trimmed = line.trim();

    // Rule 1: blank line. First one after the header block switches the open
    // request into body mode; further blanks inside a body are content.
    if trimmed.is_empty() {
        if state.open.is_some() && !state.in_body {
            state.in_body = true;
        } else if state.in_body {
            state.body_lines.push(line.to_string());
        }
        return;
    }

    // Rule 2: section marker. Ends the open request; trailing text becomes
    // the next request's description.
    if trimmed.starts_with("###") {
        state.finalize_open(line_num.saturating_sub(1));
        state.pending_description.clear();
        let rest = trimmed[3..].trim();
        if !rest.is_empty() {
            state.pending_description = rest.to_string();
        }
        return;
    }

    // Rule 3: comment line. Only a comment outside any request survives, as
    // the pending description; inside a request it is dropped entirely.
    if let Some(caps) = COMMENT_LINE.captures(trimmed) {
        if state.open.is_none() {
            let text = caps[1].trim();
            if !text.is_empty() {
                state.pending_description = text.to_string();
            }
        }
        return;
    }

    // Rule 4: variable declaration. Takes priority over body accumulation,
    // so a body line shaped like `@name = value` is claimed here.
    if let Some(caps) = VARIABLE_LINE.captures(trimmed) {
        state.variables.push(VariableDeclaration {
            name: caps[1].to_string(),
            value: caps[2].trim().to_string(),
            line: line_num,
        });
        return;
    }

    // Rule 5: body accumulation, verbatim.
    if state.in_body {
        state.body_lines.push(line.to_string());
        return;
    }

    // Rule 6: method line opens a new request (closing any previous one).
    if let Some(caps) = METHOD_LINE.captures(trimmed) {
        let method = HttpMethod::from_str(&caps[1]).expect("verb alternation matches HttpMethod");
        let (url, http_version) = split_version(caps[2].trim());
        state.finalize_open(line_num.saturating_sub(1));
        state.open_request(method, url, http_version, line_num);
        return;
    }

    // Rule 7: bare absolute URL opens an implied-GET request, but only when
    // no request is open.
    if state.open.is_none()
        && (trimmed.starts_with("http://") || trimmed.starts_with("https://"))
    {
        state.finalize_open(line_num.saturating_sub(1));
        state.open_request(HttpMethod::GET, trimmed.to_string(), None, line_num);
        return;
    }

    // Rule 8: header line. Redefining a key overwrites the earlier value.
    if state.open.is_some() && !state.in_body {
        if let Some(caps) = HEADER_LINE.captures(trimmed) {
            if let Some(open) = state.open.as_mut() {
                open.headers
                    .insert(caps[1].to_string(), caps[2].trim().to_string());
            }
            return;
        }
    }

    // Rule 9: any other line while a request is open starts or extends its
    // body. With no request open the line is absorbed without effect.
    if state.open.is_some() {
        state.in_body = true;
        state.body_lines.push(line.to_string());
    }
}

/// Splits a trailing protocol-version token off a method-line target.
fn split_version(target: &str) -> (String, Option<String>) {
    if let Some(caps) = VERSION_SUFFIX.captures(target) {
        (caps[1].to_string(), Some(caps[2].to_string()))
    } else {
        (target.to_string(), None)
    }
}
