use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use regex::Regex;

use crate::ast::{location_file, Clang, Node};

/// Placeholder value for constants collected into pseudo-enums. Their
/// numeric identity travels through the enumerator names, which the emitted
/// header references verbatim.
pub const UNRESOLVED_VALUE: i64 = -1;

/// One collected source enumeration, keyed by its type name in the
/// collection map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEnum {
    /// Ordered (enumerator name, value) pairs as declared.
    pub values: IndexMap<String, i64>,
    /// True when this bucket was built from grouped constant declarations
    /// sharing a flag type rather than a real `enum`.
    pub is_pseudo: bool,
}

/// Walk the declaration tree depth-first and collect every named enum and
/// flag-typed constant group declared under one of the trusted include
/// roots. Declarations dragged in from unrelated system headers are
/// ignored, as are enums on the exclude list.
pub fn collect_declarations(
    root: &Node,
    trusted_roots: &[PathBuf],
    excludes: &[&str],
) -> IndexMap<String, RawEnum> {
    let flag_type = Regex::new(r"^Vk[A-Za-z0-9]*FlagBits[A-Za-z0-9]*$")
        .expect("flag type pattern is valid");

    let mut enums: IndexMap<String, RawEnum> = IndexMap::new();
    let mut stack: Vec<&Node> = vec![root];

    while let Some(current) = stack.pop() {
        match &current.kind {
            Clang::EnumDecl(decl) => {
                if let Some(name) = &decl.name {
                    if trusted(location_file(&decl.loc), trusted_roots)
                        && !excludes.contains(&name.as_str())
                    {
                        enums.insert(name.clone(), read_enumerators(current));
                    }
                }
            }
            Clang::VarDecl(var) => {
                if let (Some(name), Some(ty)) = (&var.name, &var.ty) {
                    if trusted(location_file(&var.loc), trusted_roots) {
                        let type_name =
                            ty.qual_type.strip_prefix("const ").unwrap_or(&ty.qual_type);
                        if flag_type.is_match(type_name) {
                            enums
                                .entry(type_name.to_string())
                                .or_insert_with(|| RawEnum {
                                    values: IndexMap::new(),
                                    is_pseudo: true,
                                })
                                .values
                                .insert(name.clone(), UNRESOLVED_VALUE);
                        }
                    }
                }
            }
            _ => {}
        }
        // Enumerators are read above; everything else may nest declarations.
        // Children are pushed reversed so the walk visits them in
        // declaration order, which fixes the emission order downstream.
        if !matches!(current.kind, Clang::EnumDecl(_)) {
            stack.extend(current.inner.iter().rev());
        }
    }

    enums
}

fn trusted(file: Option<&str>, trusted_roots: &[PathBuf]) -> bool {
    match file {
        Some(file) => {
            let path = Path::new(file);
            trusted_roots.iter().any(|root| path.starts_with(root))
        }
        None => false,
    }
}

/// Ordered enumerators of one enum declaration. An enumerator without an
/// initializer takes predecessor + 1, first defaults to 0.
fn read_enumerators(decl: &Node) -> RawEnum {
    let mut values = IndexMap::new();
    let mut next_value = 0i64;
    for child in &decl.inner {
        let Clang::EnumConstantDecl(constant) = &child.kind else {
            continue;
        };
        let value = explicit_value(child).unwrap_or(next_value);
        values.insert(constant.name.clone(), value);
        next_value = value + 1;
    }
    RawEnum {
        values,
        is_pseudo: false,
    }
}

/// First evaluated constant in the enumerator's subtree, if any.
fn explicit_value(node: &Node) -> Option<i64> {
    for child in &node.inner {
        let parsed = match &child.kind {
            Clang::ConstantExpr(expr) => expr.value.as_deref().and_then(|v| v.parse().ok()),
            Clang::IntegerLiteral(lit) => lit.value.as_deref().and_then(|v| v.parse().ok()),
            _ => None,
        };
        if let Some(value) = parsed.or_else(|| explicit_value(child)) {
            return Some(value);
        }
    }
    None
}
