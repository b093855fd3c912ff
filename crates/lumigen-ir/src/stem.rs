//! Common-stem derivation: the SCREAMING_SNAKE_CASE token shared by every
//! enumerator of one enum, derived from its type name.

use crate::policy::NamingPolicy;
use crate::vendor;

/// Derive the stem of `source_name`: strip the namespace prefix, the
/// trailing vendor tag, and every `FlagBits` infix, then break the
/// remainder at case boundaries. A boundary goes before an uppercase
/// character or before a digit that follows a lowercase letter; after an
/// inserted boundary any following digit run stays in the same segment, so
/// `H264` and `11`-style revision markers are not split digit by digit.
///
/// `VkSurfaceTransformFlagBitsKHR` → `SURFACE_TRANSFORM`,
/// `VkAccessFlagBits2` → `ACCESS_2`.
pub fn common_stem(source_name: &str, policy: &NamingPolicy) -> String {
    let stripped = source_name
        .strip_prefix(policy.namespace_prefix)
        .unwrap_or(source_name);
    let stripped = vendor::strip_vendor_suffix(stripped).replace("FlagBits", "");

    let chars: Vec<char> = stripped.chars().collect();
    let mut stem = String::with_capacity(stripped.len() + stripped.len() / 2);
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if i == 0 {
            stem.push(c.to_ascii_uppercase());
            i += 1;
            continue;
        }
        let boundary =
            c.is_ascii_uppercase() || (c.is_ascii_digit() && chars[i - 1].is_ascii_lowercase());
        if boundary {
            stem.push('_');
        }
        stem.push(c.to_ascii_uppercase());
        i += 1;
        if boundary {
            while i < chars.len() && chars[i].is_ascii_digit() {
                stem.push(chars[i]);
                i += 1;
            }
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stem(name: &str) -> String {
        common_stem(name, &NamingPolicy::default())
    }

    #[test]
    fn splits_camel_case_words() {
        assert_eq!(stem("VkImageLayout"), "IMAGE_LAYOUT");
        assert_eq!(stem("VkPhysicalDeviceType"), "PHYSICAL_DEVICE_TYPE");
    }

    #[test]
    fn drops_flag_bits_and_vendor_tag() {
        assert_eq!(stem("VkSurfaceTransformFlagBitsKHR"), "SURFACE_TRANSFORM");
        assert_eq!(stem("VkSampleCountFlagBits"), "SAMPLE_COUNT");
    }

    #[test]
    fn keeps_revision_digit_as_own_segment() {
        assert_eq!(stem("VkAccessFlagBits2"), "ACCESS_2");
        assert_eq!(stem("VkPipelineStageFlagBits2"), "PIPELINE_STAGE_2");
    }

    #[test]
    fn digit_runs_stay_attached_to_their_segment() {
        assert_eq!(stem("VkVideoEncodeH264CapabilityFlagBitsKHR"), "VIDEO_ENCODE_H264_CAPABILITY");
        assert_eq!(stem("VkDemoVulkan11Thing"), "DEMO_VULKAN_11_THING");
    }

    #[test]
    fn single_word_names_pass_through() {
        assert_eq!(stem("VkFormat"), "FORMAT");
        assert_eq!(stem("VkResult"), "RESULT");
    }
}
