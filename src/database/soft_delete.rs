//! Soft-delete predicate builders.
//!
//! One place owns the active/deleted filtering convention: a row is active
//! iff its tombstone column is NULL. Everything that queries a soft-deletable
//! table composes these fragments instead of hand-rolling the filter.

/// Double-quote an SQL identifier.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name)
}

/// Condition matching active rows only.
pub fn exclude_deleted(col: &str) -> String {
    format!("{} IS NULL", quote_ident(col))
}

/// Condition matching soft-deleted rows only.
pub fn only_deleted(col: &str) -> String {
    format!("{} IS NOT NULL", quote_ident(col))
}

/// Conjunction of "active" with caller conditions.
pub fn without_deleted(col: &str, extra: &[&str]) -> String {
    and_all(&exclude_deleted(col), extra)
}

/// Conjunction of "deleted" with caller conditions.
pub fn with_only_deleted(col: &str, extra: &[&str]) -> String {
    and_all(&only_deleted(col), extra)
}

fn and_all(first: &str, extra: &[&str]) -> String {
    let mut parts = vec![first];
    parts.extend(extra.iter().filter(|c| !c.is_empty()).copied());
    parts.join(" AND ")
}
