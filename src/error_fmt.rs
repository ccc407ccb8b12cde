use std::fmt;
use std::io;

use owo_colors::OwoColorize;

use crate::ead::EadError;
use crate::render::RenderError;
use crate::table::ScanError;

/// Application error with context for actionable error messages.
#[derive(Debug)]
pub enum AppError {
    /// IO error with context
    Io { context: String, source: io::Error },
    /// EAD parse error with input path context
    Parse { file_path: String, source: EadError },
    /// Scan error with input path context
    Scan { file_path: String, source: ScanError },
    /// Template rendering error with template name context
    Render { template: String, source: RenderError },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io { context, source } => {
                write!(f, "{}", format_cli_error(&format!("{}: {}", context, source)))
            }
            AppError::Parse { file_path, source } => {
                write!(f, "{}", format_parse_error(source, file_path))
            }
            AppError::Scan { file_path, source } => {
                write!(f, "{}", format_scan_error(source, file_path))
            }
            AppError::Render { template, source } => {
                write!(f, "{}", format_render_error(source, template))
            }
        }
    }
}

impl std::error::Error for AppError {}

/// Extension trait to add file path context to EAD parse results.
pub trait ParseResultExt<T> {
    fn with_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> ParseResultExt<T> for Result<T, EadError> {
    fn with_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Parse {
            file_path: path.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add file path context to scan results.
pub trait ScanResultExt<T> {
    fn with_path(self, path: &str) -> Result<T, AppError>;
}

impl<T> ScanResultExt<T> for Result<T, ScanError> {
    fn with_path(self, path: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Scan {
            file_path: path.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add template name context to render results.
pub trait RenderResultExt<T> {
    fn with_template(self, template: &str) -> Result<T, AppError>;
}

impl<T> RenderResultExt<T> for Result<T, RenderError> {
    fn with_template(self, template: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Render {
            template: template.to_string(),
            source: e,
        })
    }
}

/// Extension trait to add context to IO results.
pub trait IoResultExt<T> {
    fn with_context(self, context: &str) -> Result<T, AppError>;
}

impl<T> IoResultExt<T> for Result<T, io::Error> {
    fn with_context(self, context: &str) -> Result<T, AppError> {
        self.map_err(|e| AppError::Io {
            context: context.to_string(),
            source: e,
        })
    }
}

// ============================================================================
// Formatting functions (internal implementation)
// ============================================================================

fn format_cli_error(message: &str) -> String {
    format!("{}: {}\n", "error".red().bold(), message)
}

fn format_parse_error(error: &EadError, file_path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("cannot parse {}\n", file_path.cyan()));
    out.push('\n');

    match error {
        EadError::Xml(xml_err) => {
            out.push_str(&format!("  {}\n", xml_err.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str("    1. Check that the file is well-formed XML\n");
            out.push_str(&format!(
                "    2. Validate it: {}\n",
                format!("xmllint --noout {}", file_path).cyan()
            ));
        }
    }

    out
}

fn format_scan_error(error: &ScanError, file_path: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));

    match error {
        ScanError::MissingTitle => {
            out.push_str(&format!(
                "no document title in {}\n",
                file_path.cyan()
            ));
            out.push('\n');
            out.push_str(&format!(
                "  {}\n",
                "The finding aid has no <titleproper> element. The document".dimmed()
            ));
            out.push_str(&format!(
                "  {}\n",
                "title is mandatory; no output is produced without it.".dimmed()
            ));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str(&format!(
                "    Add a {} element to the <titlestmt> of {}\n",
                "<titleproper>".cyan(),
                file_path.cyan()
            ));
        }
    }

    out
}

fn format_render_error(error: &RenderError, template: &str) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}: ", "error".red().bold()));
    out.push_str(&format!("cannot render template {}\n", template.cyan()));
    out.push('\n');

    match error {
        RenderError::Template(tmpl_err) => {
            out.push_str(&format!("  {}\n", tmpl_err.to_string().dimmed()));
            out.push('\n');
            out.push_str(&format!("  {}:\n", "To fix this".bold()));
            out.push_str("    1. Check the template's syntax near the reported line\n");
            out.push_str(&format!(
                "    2. Templates see {} and {} (rows expose title, date,\n",
                "title".cyan(),
                "rows".cyan()
            ));
            out.push_str("       label, sortkey, and containers with their labels)\n");
        }
    }

    out
}
