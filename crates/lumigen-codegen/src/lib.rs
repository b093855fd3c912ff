//! Emission of the engine's Vulkan enum binding header.

pub mod context;
pub mod emit;
pub mod error;
pub mod generated;

pub use context::CodeWriter;
pub use emit::{emit_header, EmitOptions, HeaderEmitter, OUTPUT_FILE_NAME};
pub use error::CodegenError;
pub use generated::GeneratedFile;
