//! Declaration-side input model: drives clang over the Vulkan header and
//! collects enum (and constant-derived pseudo-enum) declarations from the
//! resulting tree.

pub mod ast;
pub mod clang;
pub mod collect;
pub mod error;

pub use ast::{Clang, Node};
pub use clang::{parse_header, ParseConfig, ParsedHeader};
pub use collect::{collect_declarations, RawEnum, UNRESOLVED_VALUE};
pub use error::DeclError;
