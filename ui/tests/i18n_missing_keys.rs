use std::collections::{BTreeSet, HashSet};

const EN_US: &str = include_str!("../i18n/en-US/whatif-ui.ftl");
const IT_IT: &str = include_str!("../i18n/it-IT/whatif-ui.ftl");

/// Every non-fallback locale must define at least the keys of the fallback
/// (en-US) `whatif-ui.ftl`.
///
/// The parser is deliberately shallow: comment, attribute and continuation
/// lines are skipped and any `key =` line counts as a message definition.
///
/// A new locale goes in `ui/i18n/<locale>/whatif-ui.ftl` and in the table below.
#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback_keys = extract_keys(EN_US);

    assert!(
        !fallback_keys.is_empty(),
        "Fallback (en-US) contains no keys."
    );
    assert_no_dup_keys(EN_US, "en-US");

    let locales: &[(&str, &str)] = &[("it-IT", IT_IT)];

    let mut failures = Vec::new();

    for (locale, src) in locales {
        assert_no_dup_keys(src, locale);

        let keys = extract_keys(src);
        let missing: BTreeSet<String> = fallback_keys
            .iter()
            .filter(|k| !keys.contains(*k))
            .cloned()
            .collect();

        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    if !failures.is_empty() {
        panic!(
            "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
            failures.join("\n\n")
        );
    }
}

/// Chart titles travel as data and are looked up at runtime, so `fl!` cannot
/// check them at compile time.
#[test]
fn runtime_chart_titles_are_translated() {
    const CHARTS: &str = include_str!("../src/charts/mod.rs");
    let keys = extract_keys(EN_US);

    let titles: BTreeSet<&str> = CHARTS
        .split('"')
        .filter(|part| part.starts_with("chart-") && !part.contains(' '))
        .collect();
    assert!(titles.len() >= 7, "expected the bar chart titles, found {titles:?}");

    let missing: Vec<&str> = titles
        .into_iter()
        .filter(|title| !keys.contains(*title))
        .collect();
    assert!(missing.is_empty(), "untranslated chart titles: {missing:?}");
}

#[test]
fn runtime_series_names_are_translated() {
    const CHARTS: &str = include_str!("../src/charts/mod.rs");
    let en = extract_keys(EN_US);
    let it = extract_keys(IT_IT);

    let names: BTreeSet<&str> = CHARTS
        .split('"')
        .filter(|part| part.starts_with("series-") && !part.contains(' '))
        .collect();
    assert!(names.len() >= 10, "expected the bar series names, found {names:?}");

    let missing: Vec<&str> = names
        .into_iter()
        .filter(|name| !en.contains(*name) || !it.contains(*name))
        .collect();
    assert!(missing.is_empty(), "untranslated series names: {missing:?}");
}

/// Extract message keys from a Fluent file (simple heuristic).
fn extract_keys(src: &str) -> HashSet<String> {
    let mut keys = HashSet::new();

    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        // Skip attribute or continuation lines (start with '.' or indent).
        if line.starts_with('.') {
            continue;
        }
        // Basic pattern: key [space]* '='
        if let Some(eq_pos) = line.find('=') {
            let (left, _right) = line.split_at(eq_pos);
            let key = left.trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                keys.insert(key.to_string());
            }
        }
    }

    keys
}

/// Assert no duplicate key definitions in a single FTL file (rudimentary).
fn assert_no_dup_keys(src: &str, locale: &str) {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();

    for line in src.lines() {
        let raw = line;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some(eq_pos) = line.find('=') {
            let key = line[..eq_pos].trim();
            if !key.is_empty()
                && !key.contains(' ')
                && !key.contains('\t')
                && !key.starts_with('[')
                && !key.starts_with('@')
            {
                if !seen.insert(key.to_string()) {
                    dups.insert(format!("{key}  (line: \"{raw}\")"));
                }
            }
        }
    }

    if !dups.is_empty() {
        panic!(
            "Duplicate key definitions in {locale}:\n  {}",
            dups.into_iter().collect::<Vec<_>>().join("\n  ")
        );
    }
}
