//! Field filter facet.

use jiff::Timestamp;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;
use uuid::Uuid;

use super::fields::{Field, FieldKind, Schema};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Gte,
    Gt,
    Lte,
    Lt,
}

impl Operator {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "gte" => Some(Self::Gte),
            "gt" => Some(Self::Gt),
            "lte" => Some(Self::Lte),
            "lt" => Some(Self::Lt),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Gte => ">=",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Lt => "<",
        }
    }
}

/// A filter value, already parsed into the field's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Timestamp(Timestamp),
    Uuid(Uuid),
}

impl Value {
    fn parse(kind: FieldKind, raw: &str) -> Option<Self> {
        match kind {
            FieldKind::Text => Some(Self::Text(raw.to_owned())),
            FieldKind::Integer => raw.trim().parse().ok().map(Self::Integer),
            FieldKind::Timestamp => raw.trim().parse().ok().map(Self::Timestamp),
            FieldKind::Uuid => raw.trim().parse().ok().map(Self::Uuid),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Compare(Operator, Value),

    /// Exact match against any of several values.
    AnyOf(SmallVec<[Value; 4]>),

    /// The raw value did not parse for the field's kind; nothing can match.
    Nothing,
}

/// A condition on one declared field.
///
/// Repeated exact-match keys (`category=a&category=b`) collapse into a single
/// [`Condition::AnyOf`]; ranged keys (`price[gte]=…`) each add their own
/// predicate, and all predicates are combined with AND.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: &'static Field,
    pub condition: Condition,
}

impl Predicate {
    fn compare(field: &'static Field, operator: Operator, raw: &str) -> Self {
        let condition = Value::parse(field.kind, raw).map_or(Condition::Nothing, |value| {
            Condition::Compare(operator, value)
        });

        Self { field, condition }
    }

    fn any_of(field: &'static Field, raw: &[String]) -> Self {
        let mut values: SmallVec<[Value; 4]> = raw
            .iter()
            .filter_map(|value| Value::parse(field.kind, value))
            .collect();

        let condition = match values.len() {
            0 => Condition::Nothing,
            1 => values
                .pop()
                .map_or(Condition::Nothing, |value| {
                    Condition::Compare(Operator::Eq, value)
                }),
            _ => Condition::AnyOf(values),
        };

        Self { field, condition }
    }
}

/// Split `price[gte]` into `("price", Gte)`; a bare key is an exact match.
fn split_key(key: &str) -> Option<(&str, Operator)> {
    let Some((name, rest)) = key.split_once('[') else {
        return Some((key, Operator::Eq));
    };

    let suffix = rest.strip_suffix(']')?;

    Some((name, Operator::from_suffix(suffix)?))
}

enum Pending {
    Exact(&'static Field, SmallVec<[String; 4]>),
    Ranged(&'static Field, Operator, String),
}

pub(super) fn parse(params: Vec<(String, String)>, schema: &Schema) -> Vec<Predicate> {
    let mut pending: Vec<Pending> = Vec::new();
    let mut exact: FxHashMap<&'static str, usize> = FxHashMap::default();

    for (key, value) in params {
        let Some((name, operator)) = split_key(&key) else {
            debug!(%key, "ignoring filter with unknown operator");
            continue;
        };

        let Some(field) = schema.field(name).filter(|field| field.filterable) else {
            debug!(%key, "ignoring filter on undeclared field");
            continue;
        };

        if operator != Operator::Eq {
            pending.push(Pending::Ranged(field, operator, value));
            continue;
        }

        if let Some(Pending::Exact(_, values)) =
            exact.get(field.name).and_then(|index| pending.get_mut(*index))
        {
            values.push(value);
            continue;
        }

        exact.insert(field.name, pending.len());
        pending.push(Pending::Exact(field, SmallVec::from_elem(value, 1)));
    }

    pending
        .into_iter()
        .map(|entry| match entry {
            Pending::Exact(field, values) => Predicate::any_of(field, &values),
            Pending::Ranged(field, operator, value) => Predicate::compare(field, operator, &value),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use crate::query::tests::BOOKS;

    use super::*;

    fn filters(pairs: &[(&str, &str)]) -> Vec<Predicate> {
        parse(
            pairs
                .iter()
                .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
                .collect(),
            &BOOKS,
        )
    }

    fn condition(predicate: Option<&Predicate>) -> Option<&Condition> {
        predicate.map(|predicate| &predicate.condition)
    }

    #[test]
    fn exact_match_on_text_field() {
        let predicates = filters(&[("genre", "sci-fi")]);

        assert_eq!(predicates.len(), 1);
        assert_eq!(
            condition(predicates.first()),
            Some(&Condition::Compare(
                Operator::Eq,
                Value::Text("sci-fi".to_owned())
            ))
        );
    }

    #[test]
    fn repeated_exact_keys_become_membership() {
        let predicates = filters(&[("genre", "sci-fi"), ("pages", "100"), ("genre", "fantasy")]);

        assert_eq!(predicates.len(), 2);
        assert_eq!(
            condition(predicates.first()),
            Some(&Condition::AnyOf(smallvec![
                Value::Text("sci-fi".to_owned()),
                Value::Text("fantasy".to_owned()),
            ]))
        );
    }

    #[test]
    fn ranged_operators_each_add_a_predicate() {
        let predicates = filters(&[("pages[gte]", "100"), ("pages[lt]", "500")]);

        assert_eq!(
            predicates
                .iter()
                .map(|predicate| predicate.condition.clone())
                .collect::<Vec<_>>(),
            vec![
                Condition::Compare(Operator::Gte, Value::Integer(100)),
                Condition::Compare(Operator::Lt, Value::Integer(500)),
            ]
        );
    }

    #[test]
    fn unparsable_value_matches_nothing() {
        let predicates = filters(&[("pages[gte]", "abc")]);

        assert_eq!(condition(predicates.first()), Some(&Condition::Nothing));
    }

    #[test]
    fn membership_drops_unparsable_values() {
        let predicates = filters(&[("pages", "abc"), ("pages", "120")]);

        assert_eq!(
            condition(predicates.first()),
            Some(&Condition::Compare(Operator::Eq, Value::Integer(120)))
        );
    }

    #[test]
    fn timestamps_parse_as_rfc3339() {
        let predicates = filters(&[("publishedAt[gt]", "2024-01-01T00:00:00Z")]);

        assert!(
            matches!(
                condition(predicates.first()),
                Some(Condition::Compare(Operator::Gt, Value::Timestamp(_)))
            ),
            "expected a timestamp comparison, got {predicates:?}"
        );
    }

    #[test]
    fn unknown_operators_and_fields_are_ignored() {
        let predicates = filters(&[
            ("pages[ne]", "1"),
            ("pages[gte", "1"),
            ("colour", "red"),
            ("blurb", "not filterable"),
        ]);

        assert!(predicates.is_empty(), "expected no predicates, got {predicates:?}");
    }
}
