use std::path::{Path, PathBuf};
use std::process::Command;

use crate::ast::Node;
use crate::error::DeclError;

/// Arguments for one header parse. The argument set is fixed per target;
/// `vulkan` builds the one this tool ships for.
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Entry header handed to clang.
    pub header: PathBuf,
    /// Include roots, also the trusted roots for collection.
    pub include_dirs: Vec<PathBuf>,
    /// `-D` macro definitions.
    pub definitions: Vec<String>,
    /// `-std=` selector.
    pub standard: String,
}

impl ParseConfig {
    /// Parse `<sdk_root>/include/vulkan/vulkan.h` the way the engine's
    /// binding header expects: C++ mode, no loader prototypes.
    pub fn vulkan(sdk_root: &Path) -> Self {
        let include_dir = sdk_root.join("include");
        Self {
            header: include_dir.join("vulkan/vulkan.h"),
            include_dirs: vec![include_dir],
            definitions: vec!["VK_NO_PROTOTYPES".to_string()],
            standard: "c++2b".to_string(),
        }
    }

    fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-x".to_string(),
            "c++".to_string(),
            format!("-std={}", self.standard),
        ];
        for dir in &self.include_dirs {
            args.push(format!("-I{}", dir.display()));
        }
        for definition in &self.definitions {
            args.push(format!("-D{definition}"));
        }
        args.push("-fsyntax-only".to_string());
        args.push("-Xclang".to_string());
        args.push("-ast-dump=json".to_string());
        args.push(self.header.display().to_string());
        args
    }
}

/// A deserialized declaration tree plus whatever clang complained about.
/// Diagnostics never abort generation; the Vulkan headers contain
/// constructs clang flags in strict modes and the tree is still usable.
#[derive(Debug)]
pub struct ParsedHeader {
    pub root: Node,
    pub diagnostics: Vec<String>,
}

/// Invoke clang on the configured header and deserialize its declaration
/// tree. The clang binary comes from the `CLANG` environment variable when
/// set, otherwise `PATH`.
pub fn parse_header(config: &ParseConfig) -> Result<ParsedHeader, DeclError> {
    let clang = std::env::var("CLANG").unwrap_or_else(|_| "clang".to_string());

    let output = Command::new(&clang)
        .args(config.to_args())
        .output()
        .map_err(|source| DeclError::ClangNotFound { clang, source })?;

    let diagnostics: Vec<String> = String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    if output.stdout.is_empty() {
        return Err(DeclError::EmptyTree {
            header: config.header.display().to_string(),
        });
    }

    let root: Node = serde_json::from_slice(&output.stdout)?;

    Ok(ParsedHeader { root, diagnostics })
}
