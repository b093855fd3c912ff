//! Binding header emission. Sections are emitted in a fixed order:
//! declarations, correspondence table, conversion accessors, stringifiers,
//! sentinel constants, bitmask operators. Special enums never reach the
//! generic table or the direct stringifier; their conversion path is
//! emitted by hand because their source counterpart is a flag typedef, not
//! a real enumeration type.

use lumigen_ir::{ConversionKind, NormalizedEnum, NormalizedSet, UnderlyingWidth};

use crate::context::CodeWriter;
use crate::generated::GeneratedFile;

/// Fixed output artifact name.
pub const OUTPUT_FILE_NAME: &str = "Enums.hpp";

/// Sentinel and numeric markers re-exported under engine names.
const SENTINEL_CONSTANTS: &[(&str, &str)] = &[
    ("EXTERNAL_SUBPASS", "VK_SUBPASS_EXTERNAL"),
    ("LOD_CLAMP_NONE", "VK_LOD_CLAMP_NONE"),
    ("SUBRESOURCE_LEVEL_IGNORED", "-1_u32"),
    ("SUBRESOURCE_LAYER_IGNORED", "-1_u32"),
    ("SUBRESOURCE_REMAINING_LEVELS", "VK_REMAINING_MIP_LEVELS"),
    ("SUBRESOURCE_REMAINING_LAYERS", "VK_REMAINING_ARRAY_LAYERS"),
    ("WHOLE_SIZE", "VK_WHOLE_SIZE"),
    ("ATTACHMENT_UNUSED", "VK_ATTACHMENT_UNUSED"),
    ("QUEUE_FAMILY_IGNORED", "VK_QUEUE_FAMILY_IGNORED"),
];

/// Engine-side naming of the emitted header.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub namespace: String,
    pub macro_prefix: String,
    pub core_include: String,
    /// Underlying type of wide enums; an alias provided by the core
    /// include.
    pub wide_type: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            namespace: "Lumina::Graphics".to_string(),
            macro_prefix: "LUMINA".to_string(),
            core_include: "Lumina/Core/Core.hpp".to_string(),
            wide_type: "uint64".to_string(),
        }
    }
}

/// Emit the binding header for a normalized enum set.
pub fn emit_header(set: &NormalizedSet) -> GeneratedFile {
    GeneratedFile::new(OUTPUT_FILE_NAME, HeaderEmitter::new(set).emit())
}

/// Join macro body lines into a backslash-continued block with the
/// continuation markers aligned one column past the widest line.
fn continuation_block(lines: &[String]) -> String {
    let width = lines.iter().map(String::len).max().unwrap_or(0);
    let mut out = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        if i + 1 == lines.len() {
            out.push(line.clone());
        } else {
            out.push(format!("{line:<width$} \\"));
        }
    }
    out.join("\n")
}

pub struct HeaderEmitter<'a> {
    set: &'a NormalizedSet,
    options: EmitOptions,
}

impl<'a> HeaderEmitter<'a> {
    pub fn new(set: &'a NormalizedSet) -> Self {
        Self::with_options(set, EmitOptions::default())
    }

    pub fn with_options(set: &'a NormalizedSet, options: EmitOptions) -> Self {
        Self { set, options }
    }

    pub fn emit(&self) -> String {
        let mut w = CodeWriter::new();
        self.emit_prologue(&mut w);
        w.push_indent();
        self.emit_enum_declarations(&mut w);
        self.emit_counterpart_table(&mut w);
        self.emit_counterpart_accessors(&mut w);
        self.emit_stringifiers(&mut w);
        self.emit_constants(&mut w);
        self.emit_operators(&mut w);
        w.pop_indent();
        w.line("}");
        w.finish()
    }

    fn tabled(&self) -> impl Iterator<Item = &NormalizedEnum> {
        self.set
            .enums
            .iter()
            .filter(|e| e.kind == ConversionKind::Tabled)
    }

    fn specials(&self) -> impl Iterator<Item = &NormalizedEnum> {
        self.set
            .enums
            .iter()
            .filter(|e| e.kind == ConversionKind::Special)
    }

    fn underlying_type(&self, e: &NormalizedEnum) -> String {
        match e.width {
            UnderlyingWidth::Wide64 => self.options.wide_type.clone(),
            UnderlyingWidth::Inferred => {
                format!("std::underlying_type_t<{}>", e.source_name)
            }
        }
    }

    fn emit_prologue(&self, w: &mut CodeWriter) {
        w.line("#pragma once");
        w.blank();
        w.line("/* This file was generated automatically, do not edit directly. */");
        w.blank();
        w.line(&format!("#include <{}>", self.options.core_include));
        w.blank();
        w.line("#include <vulkan/vulkan.h>");
        w.line("#include <vulkan/vk_enum_string_helper.h>");
        w.blank();
        w.line("#include <type_traits>");
        w.blank();
        w.line(&format!("namespace {} {{", self.options.namespace));
    }

    fn emit_enum_declarations(&self, w: &mut CodeWriter) {
        for e in &self.set.enums {
            w.line(&format!("// {}", e.source_name));
            w.line(&format!(
                "enum class {} : {} {{",
                e.target_name,
                self.underlying_type(e),
            ));
            w.push_indent();
            for (target, source) in &e.values {
                w.line(&format!("{target} = {source},"));
            }
            w.pop_indent();
            w.line("};");
            w.blank();
        }
    }

    fn counterpart_macro(&self) -> String {
        let p = &self.options.macro_prefix;
        continuation_block(&[
            format!("#define {p}_ENUM_COUNTERPART_SPECIALIZATION(E, T)"),
            "  template <> struct SEnumCounterpart<E> { using Type = T; };".to_string(),
            "  template <> struct SEnumCounterpart<T> { using Type = E; }".to_string(),
        ])
    }

    fn string_overload_macro(&self) -> String {
        let p = &self.options.macro_prefix;
        continuation_block(&[
            format!("#define {p}_ENUM_AS_STRING_OVERLOAD(E, T)"),
            "  constexpr auto ToString(T e) noexcept -> std::string {".to_string(),
            format!("    return {p}_CONCAT(string_, E)(e);"),
            "  }".to_string(),
        ])
    }

    fn string_conversion_macro(&self) -> String {
        let p = &self.options.macro_prefix;
        continuation_block(&[
            format!("#define {p}_ENUM_AS_STRING_CONVERSION_OVERLOAD(E, T)"),
            "  constexpr auto ToString(T e) noexcept -> std::string {".to_string(),
            format!("    return {p}_CONCAT(string_, E)(AsEnumCounterpart(e));"),
            "  }".to_string(),
        ])
    }

    fn string_base_and_conversion_macro(&self) -> String {
        let p = &self.options.macro_prefix;
        continuation_block(&[
            format!("#define {p}_ENUM_AS_STRING_BASE_AND_CONVERSION_OVERLOAD(E, T)"),
            "  constexpr auto ToString(T e) noexcept -> std::string {".to_string(),
            format!("    return {p}_CONCAT(string_, E)(AsEnumCounterpart(e));"),
            "  }".to_string(),
            String::new(),
            "  constexpr auto ToString(E e) noexcept -> std::string {".to_string(),
            format!("    return {p}_CONCAT(string_, E)(e);"),
            "  }".to_string(),
        ])
    }

    fn flag_string_macro(&self) -> String {
        let p = &self.options.macro_prefix;
        continuation_block(&[
            format!("#define {p}_FLAG_ENUM_AS_STRING_OVERLOAD(F, T, E)"),
            format!("  {p}_ENUM_AS_STRING_CONVERSION_OVERLOAD(E, T)"),
            format!("  {p}_ENUM_AS_STRING_OVERLOAD(E, F)"),
        ])
    }

    fn emit_counterpart_table(&self, w: &mut CodeWriter) {
        let p = self.options.macro_prefix.clone();
        w.line("namespace Details {");
        w.push_indent();
        w.line("template <typename T>");
        w.line("struct SEnumCounterpart;");
        w.blank();
        w.block(&self.counterpart_macro());
        w.blank();
        for (source, target) in self.set.correspondence.iter() {
            w.line(&format!(
                "{p}_ENUM_COUNTERPART_SPECIALIZATION({source}, {target});"
            ));
        }
        w.blank();
        w.line(&format!("#undef {p}_ENUM_COUNTERPART_SPECIALIZATION"));
        w.blank();
        w.line("template <typename T>");
        w.line("using EnumCounterpartType = typename SEnumCounterpart<T>::Type;");
        w.pop_indent();
        w.line("}");
        w.blank();
    }

    fn emit_counterpart_accessors(&self, w: &mut CodeWriter) {
        w.line("template <typename E>");
        w.line("constexpr auto AsEnumCounterpart(E e) noexcept -> Details::EnumCounterpartType<E> {");
        w.push_indent();
        w.line("return static_cast<Details::EnumCounterpartType<E>>(e);");
        w.pop_indent();
        w.line("}");
        w.blank();
        for e in self.specials() {
            w.line(&format!(
                "constexpr auto AsEnumCounterpart({} e) noexcept -> {} {{",
                e.target_name, e.source_name,
            ));
            w.push_indent();
            w.line(&format!("return static_cast<{}>(e);", e.source_name));
            w.pop_indent();
            w.line("}");
            w.blank();
        }
    }

    fn emit_stringifiers(&self, w: &mut CodeWriter) {
        let p = self.options.macro_prefix.clone();
        w.block(&self.string_overload_macro());
        w.blank();
        w.block(&self.string_conversion_macro());
        w.blank();
        w.block(&self.string_base_and_conversion_macro());
        w.blank();
        w.block(&self.flag_string_macro());
        w.blank();
        for e in self.tabled() {
            if e.is_flag() {
                w.line(&format!(
                    "{p}_FLAG_ENUM_AS_STRING_OVERLOAD({}, {}, {})",
                    e.source_name,
                    e.target_name,
                    e.source_flags_aggregate(),
                ));
            } else {
                w.line(&format!(
                    "{p}_ENUM_AS_STRING_BASE_AND_CONVERSION_OVERLOAD({}, {})",
                    e.source_name, e.target_name,
                ));
            }
        }
        w.blank();
        for e in self.specials() {
            w.line(&format!(
                "{p}_ENUM_AS_STRING_CONVERSION_OVERLOAD({}, {})",
                e.source_name, e.target_name,
            ));
        }
        w.blank();
        w.line(&format!("#undef {p}_ENUM_AS_STRING_OVERLOAD"));
        w.line(&format!("#undef {p}_ENUM_AS_STRING_CONVERSION_OVERLOAD"));
        w.line(&format!("#undef {p}_ENUM_AS_STRING_BASE_AND_CONVERSION_OVERLOAD"));
        w.line(&format!("#undef {p}_FLAG_ENUM_AS_STRING_OVERLOAD"));
        w.blank();
    }

    fn emit_constants(&self, w: &mut CodeWriter) {
        w.line("// Useful constants");
        for (name, value) in SENTINEL_CONSTANTS {
            w.line(&format!("constexpr auto {name} = {value};"));
        }
        w.blank();
    }

    fn emit_operators(&self, w: &mut CodeWriter) {
        let p = self.options.macro_prefix.clone();
        for op in ['&', '|', '^'] {
            w.block(&format!(
                r"template <typename T, typename U = std::underlying_type_t<T>>
  requires (std::is_scoped_enum_v<T>)
{p}_NODISCARD constexpr auto operator {op}(T left, T right) noexcept -> T {{
  return static_cast<T>(static_cast<U>(left) {op} static_cast<U>(right));
}}"
            ));
            w.blank();
        }
        for op in ['&', '|', '^'] {
            w.block(&format!(
                r"template <typename T>
  requires (std::is_scoped_enum_v<T>)
constexpr auto operator {op}=(T& left, T right) noexcept -> T& {{
  return left = left {op} right;
}}"
            ));
            w.blank();
        }
        w.block(&format!(
            r"template <typename T, typename U = std::underlying_type_t<T>>
  requires (std::is_scoped_enum_v<T>)
{p}_NODISCARD constexpr auto operator ~(T value) noexcept -> T {{
  return static_cast<T>(~static_cast<U>(value));
}}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use lumigen_decl::RawEnum;
    use lumigen_ir::{normalize_enums, NamingPolicy};

    fn raw(names: &[&str]) -> RawEnum {
        RawEnum {
            values: names.iter().map(|n| (n.to_string(), 0)).collect(),
            is_pseudo: false,
        }
    }

    fn pseudo(names: &[&str]) -> RawEnum {
        RawEnum {
            values: names.iter().map(|n| (n.to_string(), -1)).collect(),
            is_pseudo: true,
        }
    }

    fn sample_set() -> NormalizedSet {
        let mut collected = IndexMap::new();
        collected.insert(
            "VkImageLayout".to_string(),
            raw(&[
                "VK_IMAGE_LAYOUT_UNDEFINED",
                "VK_IMAGE_LAYOUT_GENERAL",
                "VK_IMAGE_LAYOUT_MAX_ENUM",
            ]),
        );
        collected.insert(
            "VkSampleCountFlagBits".to_string(),
            raw(&[
                "VK_SAMPLE_COUNT_1_BIT",
                "VK_SAMPLE_COUNT_2_BIT",
                "VK_SAMPLE_COUNT_FLAG_BITS_MAX_ENUM",
            ]),
        );
        collected.insert(
            "VkAccessFlagBits2".to_string(),
            pseudo(&["VK_ACCESS_2_NONE", "VK_ACCESS_2_SHADER_READ_BIT"]),
        );
        normalize_enums(collected, &NamingPolicy::default())
    }

    #[test]
    fn declarations_reference_source_enumerators() {
        let header = emit_header(&sample_set());
        assert_eq!(header.path, OUTPUT_FILE_NAME);
        assert!(header
            .content
            .contains("enum class EImageLayout : std::underlying_type_t<VkImageLayout> {"));
        assert!(header.content.contains("E_UNDEFINED = VK_IMAGE_LAYOUT_UNDEFINED,"));
        assert!(header.content.contains("E_GENERAL = VK_IMAGE_LAYOUT_GENERAL,"));
    }

    #[test]
    fn wide_enums_use_the_fixed_64_bit_type() {
        let header = emit_header(&sample_set());
        assert!(header.content.contains("enum class EResourceAccessFlag : uint64 {"));
    }

    #[test]
    fn sentinels_never_reach_the_header() {
        let header = emit_header(&sample_set());
        assert!(!header.content.contains("MAX_ENUM"));
    }

    #[test]
    fn specials_are_absent_from_the_table_but_have_accessors() {
        let header = emit_header(&sample_set());
        assert!(header
            .content
            .contains("LUMINA_ENUM_COUNTERPART_SPECIALIZATION(VkImageLayout, EImageLayout);"));
        assert!(!header
            .content
            .contains("LUMINA_ENUM_COUNTERPART_SPECIALIZATION(VkAccessFlagBits2"));
        assert!(header
            .content
            .contains("constexpr auto AsEnumCounterpart(EResourceAccessFlag e) noexcept -> VkAccessFlagBits2 {"));
    }

    #[test]
    fn flag_enums_stringify_through_the_plural_aggregate() {
        let header = emit_header(&sample_set());
        assert!(header.content.contains(
            "LUMINA_FLAG_ENUM_AS_STRING_OVERLOAD(VkSampleCountFlagBits, ESampleCountFlag, VkSampleCountFlags)"
        ));
        assert!(header.content.contains(
            "LUMINA_ENUM_AS_STRING_BASE_AND_CONVERSION_OVERLOAD(VkImageLayout, EImageLayout)"
        ));
        assert!(header.content.contains(
            "LUMINA_ENUM_AS_STRING_CONVERSION_OVERLOAD(VkAccessFlagBits2, EResourceAccessFlag)"
        ));
    }

    #[test]
    fn constants_and_operators_are_present() {
        let header = emit_header(&sample_set());
        assert!(header.content.contains("constexpr auto WHOLE_SIZE = VK_WHOLE_SIZE;"));
        assert!(header.content.contains("constexpr auto SUBRESOURCE_LEVEL_IGNORED = -1_u32;"));
        assert!(header
            .content
            .contains("LUMINA_NODISCARD constexpr auto operator &(T left, T right) noexcept -> T {"));
        assert!(header.content.contains("constexpr auto operator ^=(T& left, T right) noexcept -> T& {"));
        assert!(header
            .content
            .contains("LUMINA_NODISCARD constexpr auto operator ~(T value) noexcept -> T {"));
    }

    #[test]
    fn continuation_blocks_align_their_backslashes() {
        let header = emit_header(&sample_set());
        let columns: Vec<usize> = header
            .content
            .lines()
            .skip_while(|l| !l.contains("_ENUM_COUNTERPART_SPECIALIZATION(E, T)"))
            .take(3)
            .filter(|l| l.ends_with('\\'))
            .map(|l| l.len())
            .collect();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0], columns[1]);
    }

    #[test]
    fn emission_is_idempotent() {
        let set = sample_set();
        assert_eq!(emit_header(&set).content, emit_header(&set).content);
    }
}
