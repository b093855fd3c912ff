use indexmap::IndexMap;
use serde::Serialize;

/// Storage width of a generated scoped enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnderlyingWidth {
    /// The source declaration's own underlying integer type.
    Inferred,
    /// Fixed 64-bit unsigned storage; the source is a flag typedef wider
    /// than the enum clang infers for it.
    Wide64,
}

/// How an enum participates in source ↔ target conversion. Decided once
/// during classification and consumed by every emission step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConversionKind {
    /// Converted through the generic correspondence table.
    Tabled,
    /// Converted through a hand-emitted overload; the source counterpart is
    /// not a real enumeration type.
    Special,
}

/// One enum after renaming and classification.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedEnum {
    pub source_name: String,
    pub target_name: String,
    pub width: UnderlyingWidth,
    pub kind: ConversionKind,
    /// Target enumerator spelling → source enumerator it aliases, in
    /// declaration order.
    pub values: IndexMap<String, String>,
}

impl NormalizedEnum {
    /// Flag enums additionally stringify through the plural aggregate type.
    pub fn is_flag(&self) -> bool {
        self.target_name.ends_with("Flag")
    }

    /// Plural `Flags` aggregate of the source type (`VkAccessFlagBits` →
    /// `VkAccessFlags`).
    pub fn source_flags_aggregate(&self) -> String {
        self.source_name.replacen("FlagBits", "Flags", 1)
    }
}

/// Bidirectional source ↔ target type-name mapping for tabled enums.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CorrespondenceTable {
    source_to_target: IndexMap<String, String>,
    target_to_source: IndexMap<String, String>,
}

impl CorrespondenceTable {
    pub fn insert(&mut self, source: &str, target: &str) {
        self.source_to_target
            .insert(source.to_string(), target.to_string());
        self.target_to_source
            .insert(target.to_string(), source.to_string());
    }

    pub fn target_of(&self, source: &str) -> Option<&str> {
        self.source_to_target.get(source).map(String::as_str)
    }

    pub fn source_of(&self, target: &str) -> Option<&str> {
        self.target_to_source.get(target).map(String::as_str)
    }

    /// (source, target) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.source_to_target
            .iter()
            .map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.source_to_target.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_to_target.is_empty()
    }
}
