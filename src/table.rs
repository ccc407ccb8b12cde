use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::container::Container;
use crate::document::SourceDocument;
use crate::row::ContainerRow;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The document-level title is mandatory; without it no table is
    /// produced at all.
    #[error("document has no title")]
    MissingTitle,
}

/// The document-level result: sorted, column-padded container rows.
///
/// Every row holds the same number of containers (the widest row sets the
/// column count). Immutable after `scan` returns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerTable {
    pub title: String,
    pub rows: Vec<ContainerRow>,
}

/// Scan a parsed finding aid into a container table.
///
/// Every container element carrying an `id` attribute roots one row, in
/// document order. Rows are sorted ascending by their natural sort key
/// (stable, so equal keys keep discovery order) and padded with trailing
/// placeholder containers until every row spans the same number of
/// columns. A document with no containers yields an empty table.
pub fn scan(doc: &SourceDocument) -> Result<ContainerTable, ScanError> {
    let title = doc
        .title
        .as_deref()
        .ok_or(ScanError::MissingTitle)?
        .trim()
        .to_string();

    let mut rows = Vec::new();
    for fragment in &doc.fragments {
        // Parent-id -> child indices, built once per fragment.
        let mut children: HashMap<&str, Vec<usize>> = HashMap::new();
        for (i, container) in fragment.containers.iter().enumerate() {
            if let Some(parent) = container.parent_ref.as_deref() {
                children.entry(parent).or_default().push(i);
            }
        }

        for (i, container) in fragment.containers.iter().enumerate() {
            let Some(id) = container.id.as_deref() else {
                continue;
            };
            if container.is_malformed() {
                continue;
            }
            let linked = children.get(id).map(Vec::as_slice).unwrap_or(&[]);
            rows.push(ContainerRow::build(fragment, i, linked));
        }
    }

    rows.sort_by(|a, b| a.sortkey.cmp(&b.sortkey));

    let max = rows.iter().map(ContainerRow::len).max().unwrap_or(0);
    for row in &mut rows {
        for _ in row.len()..max {
            row.push(Container::placeholder());
        }
    }

    Ok(ContainerTable { title, rows })
}
