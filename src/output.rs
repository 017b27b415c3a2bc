//! Renderers turning translation rows into generated files.
//!
//! None of them performs I/O. Files reach disk through an [`ArtifactSink`].

pub mod artifact;
pub mod enums;
pub mod strings;
pub mod templates;

pub use artifact::{
    ArtifactSink,
    DirectorySink,
    RenderedFile,
    SinkError,
};
pub use enums::render_enum_file;
pub use strings::{
    render_plain_strings,
    render_plural_strings,
};
pub use templates::Templates;
