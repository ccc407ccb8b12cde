pub mod container;
pub mod document;
pub mod ead;
pub mod error_fmt;
pub mod render;
pub mod row;
pub mod table;

// Re-export the pipeline types for library consumers
pub use container::Container;
pub use document::{Fragment, RawContainer, SourceDocument};
pub use ead::EadError;
pub use render::RenderError;
pub use row::ContainerRow;
pub use table::{scan, ContainerTable, ScanError};
