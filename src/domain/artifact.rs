use regex::Regex;

/// Classifies an artifact key as stable or pre-stable.
///
/// A key is pre-stable only when it ends in `-v<digits><qualifier>` where the
/// qualifier is non-empty, starts with a non-digit and contains no hyphen
/// (e.g. "core-v2beta"). Everything else is stable: no suffix ("core"), a
/// plain major-version suffix ("core-v2", "core-v22"), or a qualifier broken
/// by a hyphen ("core-v2-rc1" — the hyphen falls outside the suffix pattern,
/// a known quirk kept for compatibility).
///
/// Parallel major-version lines of one logical artifact can this way be
/// independently eligible for promotion.
pub fn is_stable_artifact(key: &str) -> bool {
    let pre_stable = Regex::new(r"-v\d+[^-\d][^-]*$")
        .map(|re| re.is_match(key))
        .unwrap_or(false);
    !pre_stable
}
