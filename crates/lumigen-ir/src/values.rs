//! Enumerator rewriting: source spellings become engine spellings by
//! swapping the namespace prefix, dropping the `_BIT` marker and the
//! enum's common stem, and discarding sentinel range terminators.

use indexmap::IndexMap;

use lumigen_decl::RawEnum;

use crate::policy::NamingPolicy;
use crate::stem::common_stem;

const SENTINEL_MARKER: &str = "MAX_ENUM";

/// Rewrite every enumerator of `raw`, keyed by the rewritten spelling and
/// mapping back to the source enumerator the emitted member references.
/// Two source enumerators can reduce to the same spelling; the first one
/// wins and the loser is reported through `warnings`.
pub fn normalize_values(
    source_name: &str,
    raw: &RawEnum,
    policy: &NamingPolicy,
    warnings: &mut Vec<String>,
) -> IndexMap<String, String> {
    let stem = common_stem(source_name, policy);
    let stem_token = format!("_{stem}");

    let mut values = IndexMap::new();
    for source_value in raw.values.keys() {
        let mut target = match source_value.strip_prefix(policy.value_prefix) {
            Some(rest) => format!("{}{rest}", policy.target_value_prefix),
            None => source_value.clone(),
        };
        target = remove_first(&target, "_BIT");
        target = remove_first(&target, &stem_token);

        if target.contains(SENTINEL_MARKER) || source_value.contains(SENTINEL_MARKER) {
            continue;
        }

        if let Some(first) = values.get(&target) {
            warnings.push(format!(
                "{source_name}: '{source_value}' also rewrites to '{target}', keeping '{first}'"
            ));
            continue;
        }
        values.insert(target, source_value.clone());
    }
    values
}

/// `s` with the first occurrence of `token` removed.
fn remove_first(s: &str, token: &str) -> String {
    match s.find(token) {
        Some(at) => {
            let mut out = String::with_capacity(s.len() - token.len());
            out.push_str(&s[..at]);
            out.push_str(&s[at + token.len()..]);
            out
        }
        None => s.to_string(),
    }
}
