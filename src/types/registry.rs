//! Name → column type registry.
//!
//! ORMs resolve column types by name (`#[column(type = "simple_date")]`,
//! mapping files, schema introspection). `TypeRegistry` holds type-erased
//! [`ColumnType`] views of the bindings for that lookup.

use super::binding::{ColumnValue, TypeBinding};
use super::bindings::{SIMPLE_DATE, SIMPLE_DATE_IMMUTABLE, SIMPLE_TIME, SIMPLE_TIME_IMMUTABLE};
use super::kind::{ColumnKind, ColumnMeta};
use super::platform::Platform;
use crate::error::TypeError;
use crate::value::Formattable;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

/// Object-safe view of a column type
pub trait ColumnType: Send + Sync {
    /// The registry name of this type
    fn name(&self) -> Result<&'static str, TypeError>;

    fn kind(&self) -> ColumnKind;

    /// Platform-native DDL fragment for a column of this type
    fn sql_declaration(&self, column: &ColumnMeta, platform: &dyn Platform) -> String;

    /// Native column type names this type claims
    fn mapped_database_types(&self, platform: &dyn Platform) -> Vec<&'static str>;

    /// Validate a raw database string and return it in canonical form.
    ///
    /// Parses through the value object and formats it back, so `NULL` and `''`
    /// come out as `None` and malformed input fails with [`TypeError::Parse`].
    fn normalize_database_value(&self, raw: Option<&str>) -> Result<Option<String>, TypeError>;
}

impl<T> ColumnType for TypeBinding<T>
where
    T: Formattable + 'static,
{
    fn name(&self) -> Result<&'static str, TypeError> {
        TypeBinding::name(self)
    }

    fn kind(&self) -> ColumnKind {
        TypeBinding::kind(self)
    }

    fn sql_declaration(&self, column: &ColumnMeta, platform: &dyn Platform) -> String {
        TypeBinding::sql_declaration(self, column, platform)
    }

    fn mapped_database_types(&self, platform: &dyn Platform) -> Vec<&'static str> {
        TypeBinding::mapped_database_types(self, platform)
    }

    fn normalize_database_value(&self, raw: Option<&str>) -> Result<Option<String>, TypeError> {
        let value = self.convert_to_value(ColumnValue::from(raw))?;
        self.convert_value_to_database(value.as_ref())
    }
}

/// Column types by name
#[derive(Default)]
pub struct TypeRegistry {
    types: BTreeMap<&'static str, Box<dyn ColumnType>>,
}

impl TypeRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the four built-in types
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        let defaults: [Box<dyn ColumnType>; 4] = [
            Box::new(SIMPLE_DATE),
            Box::new(SIMPLE_DATE_IMMUTABLE),
            Box::new(SIMPLE_TIME),
            Box::new(SIMPLE_TIME_IMMUTABLE),
        ];
        for column_type in defaults {
            if let Err(err) = registry.insert(column_type) {
                log::error!("Skipping built-in column type: {}", err);
            }
        }
        registry
    }

    /// Register a type under its own name.
    ///
    /// Fails if the type has no name or the name is taken.
    pub fn add_type<C>(&mut self, column_type: C) -> Result<(), TypeError>
    where
        C: ColumnType + 'static,
    {
        self.insert(Box::new(column_type))
    }

    fn insert(&mut self, column_type: Box<dyn ColumnType>) -> Result<(), TypeError> {
        let name = column_type.name()?;
        if self.types.contains_key(name) {
            return Err(TypeError::DuplicateType(name.to_string()));
        }
        log::debug!("Registering column type {}", name);
        self.types.insert(name, column_type);
        Ok(())
    }

    /// Replace an already registered type.
    pub fn override_type<C>(&mut self, column_type: C) -> Result<(), TypeError>
    where
        C: ColumnType + 'static,
    {
        let name = column_type.name()?;
        match self.types.get_mut(name) {
            Some(slot) => {
                log::debug!("Overriding column type {}", name);
                *slot = Box::new(column_type);
                Ok(())
            }
            None => Err(TypeError::UnknownType(name.to_string())),
        }
    }

    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Look up a type by name
    pub fn get_type(&self, name: &str) -> Result<&dyn ColumnType, TypeError> {
        self.types
            .get(name)
            .map(|t| t.as_ref())
            .ok_or_else(|| TypeError::UnknownType(name.to_string()))
    }

    /// Registered names, sorted
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    /// Names of the types claiming a native column type on `platform`
    pub fn types_for_database_type(&self, db_type: &str, platform: &dyn Platform) -> Vec<&'static str> {
        let db_type = db_type.to_lowercase();
        self.types
            .iter()
            .filter(|(_, t)| t.mapped_database_types(platform).contains(&db_type.as_str()))
            .map(|(name, _)| *name)
            .collect()
    }
}

static DEFAULT_REGISTRY: Lazy<TypeRegistry> = Lazy::new(TypeRegistry::with_defaults);

/// Process-wide registry with the four built-in types
pub fn default_registry() -> &'static TypeRegistry {
    &DEFAULT_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::platform::{MySqlPlatform, PostgresPlatform};
    use crate::value::SimpleDate;

    #[test]
    fn test_defaults() {
        let registry = TypeRegistry::with_defaults();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "simple_date",
                "simple_date_immutable",
                "simple_time",
                "simple_time_immutable"
            ]
        );
        let time = registry.get_type("simple_time").unwrap();
        assert_eq!(time.kind(), ColumnKind::Time);
        assert_eq!(
            time.sql_declaration(&ColumnMeta::default(), &PostgresPlatform),
            "TIME(0) WITHOUT TIME ZONE"
        );
    }

    #[test]
    fn test_defaults_are_keyed_by_binding_names() {
        let registry = TypeRegistry::with_defaults();
        for name in [
            SIMPLE_DATE.name(),
            SIMPLE_DATE_IMMUTABLE.name(),
            SIMPLE_TIME.name(),
            SIMPLE_TIME_IMMUTABLE.name(),
        ] {
            let name = name.unwrap();
            assert_eq!(registry.get_type(name).unwrap().name(), Ok(name));
        }
        assert_eq!(registry.names().count(), 4);
    }

    #[test]
    fn test_add_type_rejects_duplicates_and_unnamed() {
        let mut registry = TypeRegistry::with_defaults();
        assert_eq!(
            registry.add_type(SIMPLE_DATE),
            Err(TypeError::DuplicateType("simple_date".to_string()))
        );
        let unnamed = TypeBinding::unnamed(ColumnKind::Date, SimpleDate::from_string);
        assert!(matches!(
            registry.add_type(unnamed),
            Err(TypeError::MissingName { .. })
        ));
    }

    #[test]
    fn test_add_and_override_custom_type() {
        let mut registry = TypeRegistry::new();
        let birthday = TypeBinding::new("birthday", ColumnKind::Date, SimpleDate::from_string);
        assert!(!registry.has_type("birthday"));
        assert_eq!(
            registry.override_type(birthday),
            Err(TypeError::UnknownType("birthday".to_string()))
        );
        registry.add_type(birthday).unwrap();
        assert!(registry.has_type("birthday"));
        registry.override_type(birthday).unwrap();
    }

    #[test]
    fn test_unknown_type() {
        let err = default_registry().get_type("simple_datetime").err();
        assert_eq!(err, Some(TypeError::UnknownType("simple_datetime".to_string())));
    }

    #[test]
    fn test_normalize_database_value() {
        let date = default_registry().get_type("simple_date").unwrap();
        assert_eq!(date.normalize_database_value(Some("2025-1-5")), Ok(Some("2025-01-05".to_string())));
        assert_eq!(date.normalize_database_value(Some("")), Ok(None));
        assert!(matches!(
            date.normalize_database_value(Some("14:30:45")),
            Err(TypeError::Parse(_))
        ));
    }

    #[test]
    fn test_types_for_database_type() {
        let registry = default_registry();
        assert_eq!(
            registry.types_for_database_type("DATE", &MySqlPlatform),
            vec!["simple_date", "simple_date_immutable"]
        );
        assert_eq!(
            registry.types_for_database_type("time", &PostgresPlatform),
            vec!["simple_time", "simple_time_immutable"]
        );
        assert!(registry.types_for_database_type("timestamp", &PostgresPlatform).is_empty());
    }
}
