use serde::Serialize;

use crate::container::Container;
use crate::document::Fragment;

/// Title shown for rows whose fragment carries no descriptive title.
pub const NO_TITLE: &str = "No title available";

/// One finding-aid item's full storage path: a root container plus the
/// child containers linked to it by parent reference, with the unit's
/// title and date.
///
/// `label` and `sortkey` are the comma-joined container labels and
/// sortbits. They are recomputed on every append, so they always reflect
/// the current container sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerRow {
    pub title: String,
    pub date: String,
    pub containers: Vec<Container>,
    pub label: String,
    pub sortkey: String,
}

impl ContainerRow {
    /// Build a row for the root container at index `root` in `fragment`.
    ///
    /// `children` holds the fragment-order indices of containers whose
    /// `parent` attribute references the root's id. Empty when the root
    /// has no id or nothing links to it; the row then degenerates to a
    /// single container.
    pub fn build(fragment: &Fragment, root: usize, children: &[usize]) -> Self {
        let mut row = ContainerRow {
            title: fragment
                .title
                .clone()
                .unwrap_or_else(|| NO_TITLE.to_string()),
            date: fragment.date.clone().unwrap_or_default(),
            containers: Vec::with_capacity(1 + children.len()),
            label: String::new(),
            sortkey: String::new(),
        };
        row.containers
            .push(Container::from_raw(&fragment.containers[root]));
        for &child in children {
            row.containers
                .push(Container::from_raw(&fragment.containers[child]));
        }
        row.recompute();
        row
    }

    /// Append a container, keeping `label` and `sortkey` consistent.
    /// Used by the table builder to pad rows to a common width.
    pub fn push(&mut self, container: Container) {
        self.containers.push(container);
        self.recompute();
    }

    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    fn recompute(&mut self) {
        self.label = join(self.containers.iter().map(|c| c.label.as_str()));
        self.sortkey = join(self.containers.iter().map(|c| c.sortbit.as_str()));
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}
