//! Read-only source-document model handed from the EAD parser to the
//! container scan.
//!
//! The scan never touches XML. The parser reduces a finding aid to this
//! model once per run; everything downstream treats it as immutable.

/// One `<container>` element as read from the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawContainer {
    /// `id` attribute. Only containers carrying an id can root a row.
    pub id: Option<String>,
    /// `parent` attribute, referencing the root container's id. This is a
    /// flat-graph back-reference, not tree nesting.
    pub parent_ref: Option<String>,
    /// `type` attribute (`box`, `folder`, `othertype`, ...).
    pub kind: Option<String>,
    /// `label` attribute, substituted for the kind when the kind is
    /// `othertype`.
    pub fallback_label: Option<String>,
    /// Text content, e.g. "Box 12".
    pub content: String,
}

impl RawContainer {
    /// A container with neither a readable kind nor any content carries no
    /// information; the scan skips it during row discovery.
    pub fn is_malformed(&self) -> bool {
        self.kind.is_none() && self.content.trim().is_empty()
    }
}

/// One enclosing parent scope: in EAD, the `<did>` holding containers.
///
/// `title` and `date` are the first `<unittitle>`/`<unitdate>` found
/// anywhere in the fragment, not the nearest ancestor of any particular
/// container. All rows built from the fragment share them.
#[derive(Debug, Clone, Default)]
pub struct Fragment {
    pub title: Option<String>,
    pub date: Option<String>,
    /// All container elements of the fragment, in document order.
    pub containers: Vec<RawContainer>,
}

/// A parsed finding aid, reduced to what the container scan needs.
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    /// First `<titleproper>` text. The scan requires this.
    pub title: Option<String>,
    /// All fragments, in document order.
    pub fragments: Vec<Fragment>,
}
