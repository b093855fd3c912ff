//! Pipeline orchestration: collected declarations in, normalized enums and
//! the correspondence table out.

use std::collections::HashSet;

use indexmap::IndexMap;

use lumigen_decl::RawEnum;

use crate::dedup::dedupe_vendor_aliases;
use crate::policy::NamingPolicy;
use crate::rename::rename_type;
use crate::types::{ConversionKind, CorrespondenceTable, NormalizedEnum, UnderlyingWidth};
use crate::values::normalize_values;

/// Everything the emitter consumes, plus what the run should report.
#[derive(Debug, Clone)]
pub struct NormalizedSet {
    pub enums: Vec<NormalizedEnum>,
    pub correspondence: CorrespondenceTable,
    /// Vendor-suffixed duplicates removed in favor of their core form.
    pub dropped_vendor_aliases: Vec<String>,
    /// Non-fatal curation gaps (rewrite collisions).
    pub warnings: Vec<String>,
}

/// Run the transformation stages in order: vendor dedup, conversion
/// filtering, name rewriting, classification, enumerator rewriting.
pub fn normalize_enums(
    mut collected: IndexMap<String, RawEnum>,
    policy: &NamingPolicy,
) -> NormalizedSet {
    let dropped_vendor_aliases = dedupe_vendor_aliases(&mut collected);

    let mut warnings = Vec::new();
    let mut enums = Vec::new();
    let mut correspondence = CorrespondenceTable::default();
    let mut claimed_targets: HashSet<String> = HashSet::new();

    for (source_name, raw) in &collected {
        if policy.is_conversion_excluded(source_name) {
            continue;
        }

        let target_name = rename_type(source_name, policy);
        if !claimed_targets.insert(target_name.clone()) {
            warnings.push(format!(
                "'{source_name}' also rewrites to '{target_name}', keeping the earlier declaration"
            ));
            continue;
        }

        let (width, kind) = if policy.is_wide(source_name) {
            (UnderlyingWidth::Wide64, ConversionKind::Special)
        } else {
            (UnderlyingWidth::Inferred, ConversionKind::Tabled)
        };

        // A constant-derived group has no real enum to infer a width from;
        // it only emits correctly through the wide set.
        if raw.is_pseudo && kind == ConversionKind::Tabled {
            warnings.push(format!(
                "'{source_name}' is a constant-derived flag group missing from the wide set"
            ));
        }

        if kind == ConversionKind::Tabled {
            correspondence.insert(source_name, &target_name);
        }

        enums.push(NormalizedEnum {
            source_name: source_name.clone(),
            target_name,
            width,
            kind,
            values: normalize_values(source_name, raw, policy, &mut warnings),
        });
    }

    NormalizedSet {
        enums,
        correspondence,
        dropped_vendor_aliases,
        warnings,
    }
}
