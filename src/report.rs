//! Report builder: turns a reconciliation result into positioned annotations.

use std::collections::HashMap;

use serde::Serialize;

use crate::{
    core::{KeyPosition, TextRange, parent_of},
    issues::{
        Issue, MissingNestedKeysIssue, MissingParentIssue, MissingTranslationIssue, Report, Rule,
        Severity,
    },
    rules::ReconciliationResult,
};

/// Tag attached to every annotation so hosts can filter or group them.
pub const SOURCE_TAG: &str = "locdiff";

/// A warning anchored to a key token of one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub range: TextRange,
    pub message: String,
    pub severity: Severity,
    pub source: &'static str,
    pub rule: Rule,
    /// Dotted path of the anchoring key.
    pub key: String,
}

/// Issues of a result, in report order: nested-key groups, per-key gaps,
/// missing parents.
pub fn collect_issues(result: &ReconciliationResult) -> Vec<Issue> {
    let nested = result
        .missing_nested_keys_by_parent
        .iter()
        .map(|(namespace, by_locale)| {
            Issue::from(MissingNestedKeysIssue {
                namespace: namespace.clone(),
                missing: by_locale
                    .iter()
                    .map(|(locale, paths)| (locale.clone(), paths.iter().cloned().collect()))
                    .collect(),
            })
        });

    let per_key = result
        .missing_translations_by_key
        .iter()
        .map(|(key, locales)| {
            Issue::from(MissingTranslationIssue {
                key: key.clone(),
                current_locale: result.current_locale.clone(),
                locales: locales.iter().cloned().collect(),
                in_current: !result.absent_from_current.contains(key),
            })
        });

    let parents = result.missing_parent_findings.iter().filter_map(|key| {
        parent_of(key).map(|parent| {
            Issue::from(MissingParentIssue {
                key: key.clone(),
                parent: parent.to_string(),
            })
        })
    });

    nested.chain(per_key).chain(parents).collect()
}

/// Paths the locator must resolve to anchor every issue of `result`.
pub fn anchor_paths(result: &ReconciliationResult) -> Vec<String> {
    let mut paths: Vec<String> = collect_issues(result)
        .iter()
        .map(|issue| issue.anchor().to_string())
        .collect();
    paths.sort();
    paths.dedup();
    paths
}

/// Build annotations for every issue whose anchor has a position.
///
/// Issues without a resolvable position are dropped.
pub fn build_annotations(
    result: &ReconciliationResult,
    positions: &[KeyPosition],
) -> Vec<Annotation> {
    let ranges: HashMap<&str, TextRange> = positions
        .iter()
        .rev()
        .map(|p| (p.path.as_str(), p.range))
        .collect();

    collect_issues(result)
        .into_iter()
        .filter_map(|issue| {
            let Some(range) = ranges.get(issue.anchor()) else {
                tracing::debug!(key = issue.anchor(), "no position for key, dropping");
                return None;
            };
            Some(Annotation {
                range: *range,
                message: issue.message(),
                severity: issue.report_severity(),
                source: SOURCE_TAG,
                rule: issue.report_rule(),
                key: issue.anchor().to_string(),
            })
        })
        .collect()
}
