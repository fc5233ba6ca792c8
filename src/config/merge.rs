use crate::config::types::*;

/// Trait for merging optional configuration values
pub trait Merge<T> {
    fn merge(self, other: T) -> T;
}

impl<T> Merge<Option<T>> for Option<T> {
    fn merge(self, other: Option<T>) -> Option<T> {
        other.or(self)
    }
}

impl Merge<EnvironmentInput> for EnvironmentInput {
    fn merge(self, other: EnvironmentInput) -> EnvironmentInput {
        EnvironmentInput {
            dialect: self.dialect.merge(other.dialect),
            data_source: self.data_source.merge(other.data_source),
            dir: self.dir.merge(other.dir),
            table_name: self.table_name.merge(other.table_name),
            schema_name: self.schema_name.merge(other.schema_name),
        }
    }
}
