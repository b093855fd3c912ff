use indexmap::IndexMap;

use lumigen_decl::RawEnum;

use crate::vendor;

/// Drop every vendor-suffixed declaration whose vendor-stripped name was
/// also collected: the core/base declaration is authoritative, the suffixed
/// one is the promoted extension alias. Names without a recognized tag are
/// never dropped. Returns the dropped names for reporting.
pub fn dedupe_vendor_aliases(enums: &mut IndexMap<String, RawEnum>) -> Vec<String> {
    let duplicates: Vec<String> = enums
        .keys()
        .filter(|name| {
            let stripped = vendor::strip_vendor_suffix(name);
            stripped != name.as_str() && enums.contains_key(stripped)
        })
        .cloned()
        .collect();

    for name in &duplicates {
        enums.shift_remove(name);
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(names: &[&str]) -> RawEnum {
        RawEnum {
            values: names.iter().map(|n| (n.to_string(), 0)).collect(),
            is_pseudo: false,
        }
    }

    #[test]
    fn suffixed_duplicate_of_core_enum_is_dropped() {
        let mut enums = IndexMap::new();
        enums.insert("VkSamplerReductionMode".to_string(), raw(&["VK_SAMPLER_REDUCTION_MODE_WEIGHTED_AVERAGE"]));
        enums.insert("VkSamplerReductionModeEXT".to_string(), raw(&["VK_SAMPLER_REDUCTION_MODE_WEIGHTED_AVERAGE_EXT"]));

        let dropped = dedupe_vendor_aliases(&mut enums);

        assert_eq!(dropped, vec!["VkSamplerReductionModeEXT".to_string()]);
        assert!(enums.contains_key("VkSamplerReductionMode"));
        assert!(!enums.contains_key("VkSamplerReductionModeEXT"));
    }

    #[test]
    fn suffixed_enum_without_core_counterpart_survives() {
        let mut enums = IndexMap::new();
        enums.insert("VkShaderInfoTypeAMD".to_string(), raw(&["VK_SHADER_INFO_TYPE_STATISTICS_AMD"]));

        let dropped = dedupe_vendor_aliases(&mut enums);

        assert!(dropped.is_empty());
        assert!(enums.contains_key("VkShaderInfoTypeAMD"));
    }

    #[test]
    fn unsuffixed_enums_are_never_dropped() {
        let mut enums = IndexMap::new();
        enums.insert("VkImageLayout".to_string(), raw(&["VK_IMAGE_LAYOUT_UNDEFINED"]));
        enums.insert("VkFormat".to_string(), raw(&["VK_FORMAT_UNDEFINED"]));

        assert!(dedupe_vendor_aliases(&mut enums).is_empty());
        assert_eq!(enums.len(), 2);
    }
}
