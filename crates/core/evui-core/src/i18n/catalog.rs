use super::Locale;
use crate::error::{AppError, AppResult};
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::OnceLock;

type Index = HashMap<&'static str, &'static str>;

static INDEX: OnceLock<HashMap<Locale, Index>> = OnceLock::new();

fn index() -> &'static HashMap<Locale, Index> {
    INDEX.get_or_init(|| {
        Locale::ALL
            .iter()
            .map(|locale| {
                let entries = locale.messages().entries();
                (*locale, entries.iter().copied().collect())
            })
            .collect()
    })
}

/// Looks up a raw template in exactly one table, without fallback.
pub fn lookup(locale: Locale, key: &str) -> Option<&'static str> {
    index().get(&locale)?.get(key).copied()
}

/// Joins namespace segments into a dotted key path.
pub fn key_path(segments: &[&str]) -> String {
    segments.join(".")
}

/// Replaces `{name}` tokens with matching values in one pass.
///
/// Tokens without a value are left untouched, and substituted values are
/// never scanned again.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (before, tail) = rest.split_at(open);
        out.push_str(before);
        let Some(close) = tail.find('}') else {
            rest = tail;
            break;
        };

        let name = &tail[1..close];
        if let Some(inner) = name.find('{') {
            out.push_str(&tail[..=inner]);
            rest = &tail[inner + 1..];
            continue;
        }

        match vars.iter().find(|(k, _)| !name.is_empty() && *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&tail[..=close]),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Placeholder names in order of appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            break;
        };
        let name = &tail[..close];
        if let Some(inner) = name.find('{') {
            rest = &tail[inner..];
            continue;
        }
        if !name.is_empty() {
            names.push(name);
        }
        rest = &tail[close + 1..];
    }
    names
}

/// Splits a `name=value` assignment as typed on the command line.
pub fn parse_var(raw: &str) -> AppResult<(String, String)> {
    match raw.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), value.to_string()))
        }
        _ => Err(AppError::InvalidVariable(raw.to_string())),
    }
}

/// Template for `key` from `primary`, else from `fallback`.
fn resolve(primary: &Index, fallback: &Index, key: &str) -> Option<&'static str> {
    if let Some(template) = primary.get(key) {
        return Some(*template);
    }
    let template = fallback.get(key).copied();
    if template.is_some() {
        debug!("'{}' resolved from the fallback table", key);
    }
    template
}

/// Keys of `reference` that `table` lacks, in reference order.
fn missing_from(
    table: &Index,
    reference: &'static [(&'static str, &'static str)],
) -> Vec<&'static str> {
    reference
        .iter()
        .map(|(key, _)| *key)
        .filter(|key| !table.contains_key(key))
        .collect()
}

/// Keys present in the fallback table but absent from `locale`.
pub fn missing_keys(locale: Locale) -> Vec<&'static str> {
    let reference = Locale::FALLBACK.messages().entries();
    match index().get(&locale) {
        Some(table) => missing_from(table, reference),
        None => reference.iter().map(|(key, _)| *key).collect(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    pub locale: Locale,
    pub total: usize,
    pub missing: Vec<&'static str>,
}

impl LocaleCoverage {
    pub fn translated(&self) -> usize {
        self.total - self.missing.len()
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.translated() as f64 / self.total as f64
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Coverage of every supported locale against the fallback table.
pub fn coverage() -> Vec<LocaleCoverage> {
    let total = Locale::FALLBACK.messages().entries().len();
    Locale::ALL
        .iter()
        .map(|locale| LocaleCoverage {
            locale: *locale,
            total,
            missing: missing_keys(*locale),
        })
        .collect()
}

/// Resolves key paths for one active locale, falling back to English.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Translator {
    locale: Locale,
}

impl Translator {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn from_env() -> Self {
        Self::new(Locale::from_env())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Raw template from the active table or the fallback table.
    pub fn lookup(&self, key: &str) -> Option<&'static str> {
        let tables = index();
        let primary = tables.get(&self.locale)?;
        let fallback = tables.get(&Locale::FALLBACK)?;
        resolve(primary, fallback, key)
    }

    pub fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }

    /// Translates `key`, returning the key path itself when no table has it.
    pub fn translate(&self, key: &str, vars: &[(&str, &str)]) -> String {
        match self.lookup(key) {
            Some(template) => interpolate(template, vars),
            None => {
                warn!("Unresolved translation key '{}' ({})", key, self.locale);
                key.to_string()
            }
        }
    }

    pub fn try_translate(&self, key: &str, vars: &[(&str, &str)]) -> AppResult<String> {
        self.lookup(key)
            .map(|template| interpolate(template, vars))
            .ok_or_else(|| AppError::MissingKey(key.to_string()))
    }
}
