use std::collections::HashMap;

use sea_orm::RelationDef;
use sea_orm::sea_query::{Alias, Expr};

use crate::domain::common::entities::app_errors::CoreError;

/// How query-string text is coerced before it is compared with a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
    Uuid,
    Date,
    DateTime,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub table: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
}

impl Field {
    pub fn expr(&self) -> Expr {
        Expr::col((Alias::new(self.table), Alias::new(self.column)))
    }
}

pub struct Relation {
    pub join: fn() -> RelationDef,
    pub fields: FieldMap,
}

/// Whitelist of the API field names a listing accepts, keyed by their
/// camelCase name, plus the relations that may be traversed with `relation.field`.
pub struct FieldMap {
    table: &'static str,
    fields: HashMap<&'static str, Field>,
    relations: HashMap<&'static str, Relation>,
}

impl FieldMap {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            fields: HashMap::new(),
            relations: HashMap::new(),
        }
    }

    pub fn field(mut self, name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        self.fields.insert(
            name,
            Field {
                table: self.table,
                column,
                kind,
            },
        );
        self
    }

    pub fn relation(
        mut self,
        name: &'static str,
        join: fn() -> RelationDef,
        fields: FieldMap,
    ) -> Self {
        self.relations.insert(name, Relation { join, fields });
        self
    }

    pub fn get(&self, name: &str) -> Result<Field, CoreError> {
        self.fields
            .get(name)
            .copied()
            .ok_or_else(|| CoreError::InvalidField(name.to_string()))
    }

    /// Returns the relation together with the name it is registered under.
    pub fn get_relation(&self, name: &str) -> Result<(&'static str, &Relation), CoreError> {
        self.relations
            .get_key_value(name)
            .map(|(key, relation)| (*key, relation))
            .ok_or_else(|| CoreError::InvalidField(name.to_string()))
    }
}
