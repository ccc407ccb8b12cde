//! HTML rendering of a container table through minijinja.

use minijinja::Environment;
use thiserror::Error;

use crate::table::ContainerTable;

/// Default page template, compiled into the binary.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/ead.html");

// The .html name keeps minijinja's auto-escaping on.
const TEMPLATE_NAME: &str = "ead.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

/// Render a table to HTML.
///
/// `template` overrides the built-in page template. Templates see the
/// table's fields directly: `title`, and `rows` with `title`, `date`,
/// `label`, `sortkey`, and `containers` (each exposing `label`).
pub fn render(table: &ContainerTable, template: Option<&str>) -> Result<String, RenderError> {
    let mut env = Environment::new();
    env.add_template(TEMPLATE_NAME, template.unwrap_or(DEFAULT_TEMPLATE))?;
    let tmpl = env.get_template(TEMPLATE_NAME)?;
    Ok(tmpl.render(table)?)
}
