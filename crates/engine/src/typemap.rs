use std::collections::HashMap;

/// Fixed mapping from Postgres type names to MariaDB column types.
///
/// The mapping is an immutable value injected into the schema translator,
/// so tests can swap in alternate tables. It is intentionally lossy:
/// integer widths below BIGINT collapse to INT and every NUMERIC becomes
/// DECIMAL(20,6) regardless of its declared precision and scale.
#[derive(Debug, Clone)]
pub struct TypeMap {
    entries: HashMap<String, String>,
    fallback: String,
}

impl TypeMap {
    pub fn new(entries: HashMap<String, String>, fallback: &str) -> Self {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (normalize(&k), v))
            .collect();
        Self {
            entries,
            fallback: fallback.to_string(),
        }
    }

    /// Target type literal for a source type name. Total: unknown names
    /// resolve to the free-form text fallback so no table creation is ever
    /// blocked by an unrecognized type. Lookup normalizes the name the same
    /// way type classification does, so casing and stray whitespace in the
    /// source catalog cannot route a known type to the fallback.
    pub fn resolve(&self, source_type: &str) -> &str {
        self.entries
            .get(&normalize(source_type))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}

fn normalize(type_name: &str) -> String {
    type_name.trim().to_lowercase()
}

impl Default for TypeMap {
    fn default() -> Self {
        let entries = [
            ("smallint", "INT"),
            ("integer", "INT"),
            ("bigint", "BIGINT"),
            ("boolean", "TINYINT(1)"),
            ("character varying", "VARCHAR(255)"),
            ("text", "TEXT"),
            ("timestamp without time zone", "DATETIME"),
            ("date", "DATE"),
            ("numeric", "DECIMAL(20,6)"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self::new(entries, "TEXT")
    }
}
