//! Type-name rewriting: an ordered list of independent rules, each a no-op
//! when its predicate fails. Rule order matters (`FlagBits` must collapse
//! before the `Op` rule could ever see a trailing `Op`, the override table
//! sees fully mechanically-rewritten names) and is fixed by `RULES`.

use crate::policy::NamingPolicy;
use crate::vendor;

type Rule = fn(&str, &NamingPolicy) -> Option<String>;

/// The rewrite sequence applied to every surviving source type name.
pub const RULES: &[(&str, Rule)] = &[
    ("strip-namespace-prefix", strip_namespace_prefix),
    ("strip-vendor-tag", strip_vendor_tag),
    ("strip-revision-suffix", strip_revision_suffix),
    ("flag-bits-to-flag", flag_bits_to_flag),
    ("op-to-operator", op_to_operator),
    ("apply-override", apply_override),
];

/// Rewrite `source` into the engine type name, e.g.
/// `VkSurfaceTransformFlagBitsKHR` → `ESurfaceTransformFlag`.
pub fn rename_type(source: &str, policy: &NamingPolicy) -> String {
    let mut name = source.to_string();
    for (_, rule) in RULES {
        if let Some(rewritten) = rule(&name, policy) {
            name = rewritten;
        }
    }
    format!("{}{}", policy.type_marker, name)
}

fn strip_namespace_prefix(name: &str, policy: &NamingPolicy) -> Option<String> {
    name.strip_prefix(policy.namespace_prefix).map(str::to_string)
}

fn strip_vendor_tag(name: &str, _: &NamingPolicy) -> Option<String> {
    vendor::vendor_suffix(name).map(|tag| name[..name.len() - tag.len()].to_string())
}

/// A trailing `2` marks the second revision of a type; the engine name
/// replaces the first revision outright.
fn strip_revision_suffix(name: &str, _: &NamingPolicy) -> Option<String> {
    name.strip_suffix('2').map(str::to_string)
}

fn flag_bits_to_flag(name: &str, _: &NamingPolicy) -> Option<String> {
    name.strip_suffix("FlagBits").map(|base| format!("{base}Flag"))
}

fn op_to_operator(name: &str, _: &NamingPolicy) -> Option<String> {
    name.strip_suffix("Op").map(|base| format!("{base}Operator"))
}

fn apply_override(name: &str, policy: &NamingPolicy) -> Option<String> {
    policy.override_for(name).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn policy() -> NamingPolicy {
        NamingPolicy::default()
    }

    #[test]
    fn rule_strip_namespace_prefix() {
        assert_eq!(strip_namespace_prefix("VkImageLayout", &policy()), Some("ImageLayout".into()));
        assert_eq!(strip_namespace_prefix("ImageLayout", &policy()), None);
    }

    #[test]
    fn rule_strip_vendor_tag() {
        assert_eq!(strip_vendor_tag("PresentModeKHR", &policy()), Some("PresentMode".into()));
        assert_eq!(strip_vendor_tag("PresentMode", &policy()), None);
    }

    #[test]
    fn rule_strip_revision_suffix() {
        assert_eq!(strip_revision_suffix("AccessFlagBits2", &policy()), Some("AccessFlagBits".into()));
        assert_eq!(strip_revision_suffix("AccessFlagBits", &policy()), None);
    }

    #[test]
    fn rule_flag_bits_to_flag() {
        assert_eq!(flag_bits_to_flag("SampleCountFlagBits", &policy()), Some("SampleCountFlag".into()));
        assert_eq!(flag_bits_to_flag("SampleCount", &policy()), None);
    }

    #[test]
    fn rule_op_to_operator() {
        assert_eq!(op_to_operator("BlendOp", &policy()), Some("BlendOperator".into()));
        assert_eq!(op_to_operator("BlendFactor", &policy()), None);
    }

    #[test]
    fn rule_apply_override() {
        assert_eq!(apply_override("Format", &policy()), Some("ResourceFormat".into()));
        assert_eq!(apply_override("StencilOperator", &policy()), None);
    }

    #[test]
    fn full_chain_on_plain_enum() {
        assert_eq!(rename_type("VkImageLayout", &policy()), "EImageLayout");
    }

    #[test]
    fn full_chain_on_vendor_flag_enum() {
        assert_eq!(
            rename_type("VkSurfaceTransformFlagBitsKHR", &policy()),
            "ESurfaceTransformFlag",
        );
    }

    #[test]
    fn full_chain_applies_format_override() {
        assert_eq!(rename_type("VkFormat", &policy()), "EResourceFormat");
    }

    #[test]
    fn full_chain_on_wide_revision() {
        // Revision marker, FlagBits collapse, and the override all fire.
        assert_eq!(rename_type("VkAccessFlagBits2", &policy()), "EResourceAccessFlag");
        assert_eq!(rename_type("VkPipelineStageFlagBits2", &policy()), "EPipelineStageFlag");
    }

    #[test]
    fn full_chain_on_operator_enum() {
        assert_eq!(rename_type("VkCompareOp", &policy()), "ECompareOperator");
        assert_eq!(rename_type("VkLogicOp", &policy()), "ELogicOperator");
    }

    #[test]
    fn full_chain_on_layout_create_flag() {
        assert_eq!(
            rename_type("VkDescriptorSetLayoutCreateFlagBits", &policy()),
            "EDescriptorLayoutCreateFlag",
        );
    }
}
