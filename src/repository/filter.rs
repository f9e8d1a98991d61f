//! WHERE-clause fragments with bound parameters.
//!
//! Fragments render to `(sql, params)`; values never end up inside the SQL text.

/// Escape character used with `LIKE ... ESCAPE`
const LIKE_ESCAPE: char = '\\';

/// Condition that matches when any of `columns` contains `needle` as a substring
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainsAny {
    columns: Vec<String>,
    pattern: String,
}

impl ContainsAny {
    /// `columns` are SQL expressions supplied by the caller, e.g. `CAST(year AS TEXT)`
    pub fn new(columns: &[&str], needle: &str) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            pattern: format!("%{}%", escape_like(needle)),
        }
    }

    /// Render as `(a LIKE ? ESCAPE '\' OR b LIKE ? ESCAPE '\' ...)` with one bind per column
    pub fn to_sql(&self) -> (String, Vec<String>) {
        if self.columns.is_empty() {
            return ("1=0".to_string(), Vec::new());
        }

        let parts: Vec<String> = self
            .columns
            .iter()
            .map(|c| format!("{} LIKE ? ESCAPE '{}'", c, LIKE_ESCAPE))
            .collect();
        let params = vec![self.pattern.clone(); self.columns.len()];

        (format!("({})", parts.join(" OR ")), params)
    }
}

/// Escape LIKE wildcards so user text matches literally
pub fn escape_like(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch == LIKE_ESCAPE || ch == '%' || ch == '_' {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }

    #[test]
    fn test_contains_any_sql() {
        let (sql, params) = ContainsAny::new(&["title", "CAST(year AS TEXT)"], "19").to_sql();
        assert_eq!(
            sql,
            "(title LIKE ? ESCAPE '\\' OR CAST(year AS TEXT) LIKE ? ESCAPE '\\')"
        );
        assert_eq!(params, vec!["%19%".to_string(), "%19%".to_string()]);
    }

    #[test]
    fn test_user_text_stays_out_of_sql() {
        let (sql, params) = ContainsAny::new(&["title"], "'; DROP TABLE books; --").to_sql();
        assert!(!sql.contains("DROP"));
        assert_eq!(params[0], "%'; DROP TABLE books; --%");
    }

    #[test]
    fn test_empty_needle_matches_everything() {
        let (_, params) = ContainsAny::new(&["title"], "").to_sql();
        assert_eq!(params, vec!["%%".to_string()]);
    }

    #[test]
    fn test_no_columns_matches_nothing() {
        let (sql, params) = ContainsAny::new(&[], "x").to_sql();
        assert_eq!(sql, "1=0");
        assert!(params.is_empty());
    }
}
