use clang_ast::SourceLocation;
use serde::Deserialize;

/// A node of the clang JSON declaration tree.
pub type Node = clang_ast::Node<Clang>;

/// The node kinds the collector consumes. Everything else falls through to
/// `Other`; its children are still traversed, so declarations nested inside
/// `extern "C"` blocks or other wrappers are reached.
#[derive(Deserialize, Debug)]
pub enum Clang {
    TranslationUnitDecl,
    EnumDecl(EnumDecl),
    EnumConstantDecl(EnumConstantDecl),
    ConstantExpr(ConstantExpr),
    IntegerLiteral(IntegerLiteral),
    VarDecl(VarDecl),
    Other,
}

#[derive(Deserialize, Debug)]
pub struct EnumDecl {
    /// Anonymous enums carry no name and are skipped.
    pub name: Option<String>,
    pub loc: SourceLocation,
}

#[derive(Deserialize, Debug)]
pub struct EnumConstantDecl {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct ConstantExpr {
    /// Evaluated value, as clang prints it (decimal string).
    pub value: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct IntegerLiteral {
    pub value: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct VarDecl {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<Type>,
    pub loc: SourceLocation,
}

#[derive(Deserialize, Debug)]
pub struct Type {
    #[serde(rename = "qualType")]
    pub qual_type: String,
}

/// File a location points into, preferring the spelling site over macro
/// expansion sites.
pub fn location_file(loc: &SourceLocation) -> Option<&str> {
    loc.spelling_loc
        .as_ref()
        .or(loc.expansion_loc.as_ref())
        .map(|bare| &*bare.file)
}
