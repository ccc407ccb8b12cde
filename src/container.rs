use serde::Serialize;

use crate::document::RawContainer;

/// Kind attribute value signalling that the display kind lives in the
/// element's `label` attribute instead.
pub const OTHERTYPE: &str = "othertype";

/// Sort key for containers whose content carries no number. Sorts ahead of
/// every zero-padded numeric key.
pub const NO_NUMBER_SORTBIT: &str = "00000";

/// One physical-storage reference with its derived display label and
/// natural sort key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Container {
    pub kind: String,
    pub content: String,
    pub label: String,
    pub sortbit: String,
}

impl Container {
    /// Derive a container from a raw element.
    ///
    /// The label is `"<kind> <content>"` with the content lower-cased and
    /// runs of spaces collapsed to one. A kind of `othertype` is replaced
    /// by the element's stored label attribute, lower-cased like the
    /// content.
    pub fn from_raw(raw: &RawContainer) -> Self {
        let kind = match raw.kind.as_deref() {
            Some(OTHERTYPE) => raw
                .fallback_label
                .as_deref()
                .unwrap_or_default()
                .to_lowercase(),
            Some(kind) => kind.to_string(),
            None => String::new(),
        };
        let label = squash_spaces(&format!("{} {}", kind, raw.content.to_lowercase()));
        Container {
            sortbit: sortbit(&raw.content),
            kind,
            content: raw.content.clone(),
            label,
        }
    }

    /// Synthetic empty container used to equalize row widths.
    pub fn placeholder() -> Self {
        Container {
            kind: String::new(),
            content: String::new(),
            label: String::new(),
            sortbit: NO_NUMBER_SORTBIT.to_string(),
        }
    }
}

/// Natural sort key: the first run of decimal digits in `content`,
/// zero-padded to four places, a space, then the full original content.
/// Content without digits maps to the fixed minimal key, so non-numeric
/// containers group at the front in content order.
fn sortbit(content: &str) -> String {
    match first_digit_run(content) {
        Some(run) => {
            let padded = match run.parse::<u64>() {
                Ok(n) => format!("{n:04}"),
                // Digit runs longer than u64 keep their raw digits.
                Err(_) => run.to_string(),
            };
            format!("{padded} {content}")
        }
        None => NO_NUMBER_SORTBIT.to_string(),
    }
}

fn first_digit_run(s: &str) -> Option<&str> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Collapse every run of two or more spaces to a single space and trim.
fn squash_spaces(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for c in s.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
