//! EAD XML parsing into the source-document model.
//!
//! Elements are matched by local name, so documents carrying the EAD
//! namespace (`urn:isbn:1-931666-22-9`) and plain documents both parse.
//! A fragment is the direct parent element of one or more `<container>`
//! elements; in well-formed EAD that is the `<did>` of a component.

use std::collections::HashSet;

use roxmltree::{Document, Node};
use thiserror::Error;

use crate::document::{Fragment, RawContainer, SourceDocument};

/// EAD vocabulary read by the scan.
mod names {
    pub const TITLEPROPER: &str = "titleproper";
    pub const CONTAINER: &str = "container";
    pub const UNITTITLE: &str = "unittitle";
    pub const UNITDATE: &str = "unitdate";
    pub const ATTR_ID: &str = "id";
    pub const ATTR_PARENT: &str = "parent";
    pub const ATTR_TYPE: &str = "type";
    pub const ATTR_LABEL: &str = "label";
}

#[derive(Debug, Error)]
pub enum EadError {
    #[error("invalid xml: {0}")]
    Xml(#[from] roxmltree::Error),
}

/// Parse an EAD document into the model consumed by the container scan.
///
/// Container elements keep their document order: fragments appear in order
/// of their first container, containers in child order within a fragment.
pub fn parse(xml: &str) -> Result<SourceDocument, EadError> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let title = first_descendant_text(root, names::TITLEPROPER);

    let mut parents = Vec::new();
    let mut seen = HashSet::new();
    for node in root.descendants().filter(|n| is_named(*n, names::CONTAINER)) {
        if let Some(parent) = node.parent().filter(Node::is_element) {
            if seen.insert(parent.id().get()) {
                parents.push(parent);
            }
        }
    }

    let fragments = parents.into_iter().map(read_fragment).collect();

    Ok(SourceDocument { title, fragments })
}

fn read_fragment(parent: Node) -> Fragment {
    Fragment {
        title: first_descendant_text(parent, names::UNITTITLE),
        date: first_descendant_text(parent, names::UNITDATE),
        containers: parent
            .children()
            .filter(|n| is_named(*n, names::CONTAINER))
            .map(read_container)
            .collect(),
    }
}

fn read_container(node: Node) -> RawContainer {
    RawContainer {
        id: node.attribute(names::ATTR_ID).map(str::to_string),
        parent_ref: node.attribute(names::ATTR_PARENT).map(str::to_string),
        kind: node.attribute(names::ATTR_TYPE).map(str::to_string),
        fallback_label: node.attribute(names::ATTR_LABEL).map(str::to_string),
        content: node_text(node),
    }
}

fn is_named(node: Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn first_descendant_text(scope: Node, name: &str) -> Option<String> {
    scope
        .descendants()
        .find(|n| is_named(*n, name))
        .map(node_text)
}

/// Concatenated text of the node and all of its descendants, trimmed.
fn node_text(node: Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<ead>
  <eadheader>
    <filedesc><titlestmt><titleproper>Papers of Jane Example</titleproper></titlestmt></filedesc>
  </eadheader>
  <archdesc>
    <dsc>
      <c01>
        <did>
          <unittitle>Correspondence</unittitle>
          <unitdate>1901-1942</unitdate>
          <container id="c1" type="box">Box 2</container>
          <container parent="c1" type="folder">Folder 5</container>
        </did>
      </c01>
      <c01>
        <did>
          <unittitle>Photographs</unittitle>
          <container id="c2" type="box">Box 3</container>
        </did>
      </c01>
    </dsc>
  </archdesc>
</ead>"#;

    #[test]
    fn test_parse_reads_title_fragments_and_containers() {
        let doc = parse(SAMPLE).unwrap();

        assert_eq!(doc.title.as_deref(), Some("Papers of Jane Example"));
        assert_eq!(doc.fragments.len(), 2);

        let first = &doc.fragments[0];
        assert_eq!(first.title.as_deref(), Some("Correspondence"));
        assert_eq!(first.date.as_deref(), Some("1901-1942"));
        assert_eq!(first.containers.len(), 2);
        assert_eq!(first.containers[0].id.as_deref(), Some("c1"));
        assert_eq!(first.containers[0].kind.as_deref(), Some("box"));
        assert_eq!(first.containers[0].content, "Box 2");
        assert_eq!(first.containers[1].parent_ref.as_deref(), Some("c1"));

        let second = &doc.fragments[1];
        assert_eq!(second.title.as_deref(), Some("Photographs"));
        assert_eq!(second.date, None);
    }

    #[test]
    fn test_parse_namespaced_document() {
        let xml = r#"<ead xmlns="urn:isbn:1-931666-22-9">
  <eadheader><filedesc><titlestmt><titleproper>Namespaced</titleproper></titlestmt></filedesc></eadheader>
  <archdesc><dsc><c01><did>
    <unittitle>Series</unittitle>
    <container id="c1" type="box">Box 1</container>
  </did></c01></dsc></archdesc>
</ead>"#;
        let doc = parse(xml).unwrap();

        assert_eq!(doc.title.as_deref(), Some("Namespaced"));
        assert_eq!(doc.fragments.len(), 1);
        assert_eq!(doc.fragments[0].containers.len(), 1);
    }

    #[test]
    fn test_parse_missing_title_is_none() {
        let xml = r#"<ead><archdesc><dsc><c01><did>
  <container id="c1" type="box">Box 1</container>
</did></c01></dsc></archdesc></ead>"#;
        let doc = parse(xml).unwrap();
        assert_eq!(doc.title, None);
    }

    #[test]
    fn test_parse_othertype_label_attribute() {
        let xml = r#"<ead>
  <eadheader><filedesc><titlestmt><titleproper>T</titleproper></titlestmt></filedesc></eadheader>
  <archdesc><dsc><c01><did>
    <container id="c1" type="othertype" label="Volume">Volume 3</container>
  </did></c01></dsc></archdesc>
</ead>"#;
        let doc = parse(xml).unwrap();
        let raw = &doc.fragments[0].containers[0];
        assert_eq!(raw.kind.as_deref(), Some("othertype"));
        assert_eq!(raw.fallback_label.as_deref(), Some("Volume"));
    }

    #[test]
    fn test_container_text_concatenates_nested_markup() {
        let xml = r#"<ead>
  <archdesc><dsc><c01><did>
    <container id="c1" type="box">Box <emph>12</emph></container>
  </did></c01></dsc></archdesc>
</ead>"#;
        let doc = parse(xml).unwrap();
        assert_eq!(doc.fragments[0].containers[0].content, "Box 12");
    }

    #[test]
    fn test_fragment_title_is_first_match_in_fragment() {
        // Two unittitles in one fragment scope: the first one wins for
        // every row rooted there.
        let xml = r#"<ead>
  <archdesc><dsc><c01><did>
    <unittitle>First</unittitle>
    <unittitle>Second</unittitle>
    <container id="c1" type="box">Box 1</container>
  </did></c01></dsc></archdesc>
</ead>"#;
        let doc = parse(xml).unwrap();
        assert_eq!(doc.fragments[0].title.as_deref(), Some("First"));
    }

    #[test]
    fn test_parse_rejects_invalid_xml() {
        assert!(matches!(parse("not xml at all"), Err(EadError::Xml(_))));
    }
}
