//! Projection facet.

use serde_json::Value;
use smallvec::SmallVec;

use super::fields::Schema;

/// Which public fields a rendered document keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Projection {
    #[default]
    All,
    Only(SmallVec<[&'static str; 8]>),
}

impl Projection {
    /// Parse a comma separated field list. The id field is always kept and
    /// unknown names are dropped.
    #[must_use]
    pub fn parse(raw: Option<&str>, schema: &Schema) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
            return Self::All;
        };

        let mut names: SmallVec<[&'static str; 8]> = SmallVec::new();
        names.push(schema.id.name);

        for name in raw.split(',').map(str::trim) {
            if let Some(field) = schema.field(name)
                && !names.contains(&field.name)
            {
                names.push(field.name);
            }
        }

        Self::Only(names)
    }

    #[must_use]
    pub fn includes(&self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.iter().any(|kept| *kept == name),
        }
    }

    /// Strip every key the projection does not keep from a rendered document.
    #[must_use]
    pub fn apply(&self, document: Value) -> Value {
        match (self, document) {
            (Self::Only(_), Value::Object(mut map)) => {
                map.retain(|key, _| self.includes(key));
                Value::Object(map)
            }
            (_, document) => document,
        }
    }
}
