use crate::typemap::TypeMap;

pub const DEFAULT_BATCH_SIZE: usize = 100;
pub const DEFAULT_ENGINE: &str = "InnoDB";
pub const DEFAULT_CHARSET: &str = "utf8mb4";

/// Plain configuration values consumed by the engine. Owned by the
/// bootstrap layer; the engine never reads the environment itself.
#[derive(Debug, Clone)]
pub struct MigrationSettings {
    pub batch_size: usize,
    pub table_engine: String,
    pub charset: String,
    pub type_map: TypeMap,
}

impl Default for MigrationSettings {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            table_engine: DEFAULT_ENGINE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            type_map: TypeMap::default(),
        }
    }
}
