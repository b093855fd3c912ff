//! Khronos vendor/author tags, as they appear at the end of extension
//! symbols. The table is stored longest-first so that suffix matching never
//! depends on declaration order: a compound tag (`NVX`, `AMDX`, `_KHR`)
//! always wins over a tag that is its own trailing substring (`NV`, `AMD`,
//! `KHR`).

/// Every tag in `_TAG` and bare form, sorted by descending length.
pub const VENDOR_TAGS: &[&str] = &[
    "_RASTERGRID",
    "_RENDERDOC",
    "RASTERGRID",
    "_CHROMIUM",
    "RENDERDOC",
    "_ANDROID",
    "_FUCHSIA",
    "_SAMSUNG",
    "CHROMIUM",
    "_GOOGLE",
    "_LUNARG",
    "_HUAWEI",
    "ANDROID",
    "FUCHSIA",
    "SAMSUNG",
    "_TIZEN",
    "_INTEL",
    "_VALVE",
    "_JUICE",
    "GOOGLE",
    "LUNARG",
    "HUAWEI",
    "_AMDX",
    "_BRCM",
    "_KDAB",
    "_QCOM",
    "_NZXT",
    "_MESA",
    "_MSFT",
    "TIZEN",
    "INTEL",
    "VALVE",
    "JUICE",
    "_IMG",
    "_AMD",
    "_ARM",
    "_FSL",
    "_NXP",
    "_NVX",
    "_VIV",
    "_VSI",
    "_GGP",
    "_SEC",
    "_MVK",
    "_KHR",
    "_KHX",
    "_EXT",
    "_QNX",
    "AMDX",
    "BRCM",
    "KDAB",
    "QCOM",
    "NZXT",
    "MESA",
    "MSFT",
    "_NV",
    "_NN",
    "_FB",
    "IMG",
    "AMD",
    "ARM",
    "FSL",
    "NXP",
    "NVX",
    "VIV",
    "VSI",
    "GGP",
    "SEC",
    "MVK",
    "KHR",
    "KHX",
    "EXT",
    "QNX",
    "NV",
    "NN",
    "FB",
];

/// The vendor tag `name` ends with, if any.
pub fn vendor_suffix(name: &str) -> Option<&'static str> {
    VENDOR_TAGS.iter().copied().find(|tag| name.ends_with(tag))
}

/// `name` with its single trailing vendor tag removed; unchanged when no
/// tag matches.
pub fn strip_vendor_suffix(name: &str) -> &str {
    match vendor_suffix(name) {
        Some(tag) => &name[..name.len() - tag.len()],
        None => name,
    }
}
