//! The naming policy: every curated table the pipeline consults, in one
//! place, separate from the rewrite mechanism.

/// Curated naming decisions for the Vulkan → engine mapping.
#[derive(Debug, Clone)]
pub struct NamingPolicy {
    /// Type-name namespace prefix of the source API.
    pub namespace_prefix: &'static str,
    /// Enumerator prefix of the source API.
    pub value_prefix: &'static str,
    /// Enumerator prefix of the generated enums.
    pub target_value_prefix: &'static str,
    /// Marker prepended to every generated type name.
    pub type_marker: &'static str,
    /// Prefix of provisional video-codec types that never take part in
    /// conversion.
    pub provisional_prefix: &'static str,
    /// Enums skipped at collection: superseded by a wider revision that is
    /// collected instead.
    pub collect_excludes: &'static [&'static str],
    /// Enums stored as 64-bit and converted through hand-emitted overloads;
    /// their source counterpart is a flag typedef, not a real enum.
    pub wide_enums: &'static [&'static str],
    /// Final spelling fixes applied after the mechanical rename rules.
    pub name_overrides: &'static [(&'static str, &'static str)],
    /// Enums dropped from conversion entirely (duplicate or meaningless
    /// counterparts).
    pub conversion_excludes: &'static [&'static str],
}

impl Default for NamingPolicy {
    fn default() -> Self {
        Self {
            namespace_prefix: "Vk",
            value_prefix: "VK_",
            target_value_prefix: "E_",
            type_marker: "E",
            provisional_prefix: "Std",
            collect_excludes: &["VkAccessFlagBits", "VkPipelineStageFlagBits"],
            wide_enums: &[
                "VkAccessFlagBits2",
                "VkPipelineStageFlagBits2",
                "VkPhysicalDeviceSchedulingControlsFlagBitsARM",
                "VkMemoryDecompressionMethodFlagBitsNV",
            ],
            name_overrides: &[
                ("Format", "ResourceFormat"),
                ("AccessFlag", "ResourceAccessFlag"),
                ("DescriptorSetLayoutCreateFlag", "DescriptorLayoutCreateFlag"),
            ],
            conversion_excludes: &[
                "VkAcquireProfilingLockFlagBitsKHR",
                "VkPipelineCompilerControlFlagBitsAMD",
                "VkShaderCorePropertiesFlagBitsAMD",
            ],
        }
    }
}

impl NamingPolicy {
    /// True when `source_name` requires 64-bit storage and the hand-emitted
    /// conversion path.
    pub fn is_wide(&self, source_name: &str) -> bool {
        self.wide_enums.contains(&source_name)
    }

    /// True when `source_name` is dropped before normalization.
    pub fn is_conversion_excluded(&self, source_name: &str) -> bool {
        source_name.starts_with(self.provisional_prefix)
            || self.conversion_excludes.contains(&source_name)
    }

    /// Curated replacement for an intermediate (already mechanically
    /// rewritten) name.
    pub fn override_for(&self, intermediate: &str) -> Option<&'static str> {
        self.name_overrides
            .iter()
            .find(|(from, _)| *from == intermediate)
            .map(|(_, to)| *to)
    }
}
