//! List-query execution.
//!
//! Compiles a [`ListQuery`] into a count statement and a page statement over the
//! resource's table. Column names come only from declared [`Field`]s; every
//! user supplied value is bound.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Postgres, QueryBuilder, Transaction};

use super::{
    ListQuery,
    fields::{Field, Listable, Schema},
    filter::{Condition, Predicate, Value},
    page::Page,
    search::Search,
    sort::SortKey,
};

/// Count the matching rows and fetch the requested page.
///
/// Both statements run on `tx`; callers open it with
/// [`crate::database::Db::begin_read_snapshot`] so the count and the page see
/// the same data.
///
/// # Errors
///
/// Returns an error if either statement fails or a row cannot be decoded.
pub async fn execute<T: Listable>(
    tx: &mut Transaction<'_, Postgres>,
    query: &ListQuery,
) -> Result<Page<T>, sqlx::Error> {
    let total_count: i64 = count_statement(&T::SCHEMA, query)
        .build_query_scalar()
        .fetch_one(&mut **tx)
        .await?;

    let mut select = select_statement(&T::SCHEMA, query);

    let items = select.build_query_as::<T>().fetch_all(&mut **tx).await?;

    Ok(Page {
        items,
        total_count: u64::try_from(total_count).unwrap_or_default(),
        pagination: query.pagination,
        projection: query.projection.clone(),
    })
}

pub(crate) fn count_statement(schema: &Schema, query: &ListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM ");

    builder.push(schema.table);
    push_where(&mut builder, query);

    builder
}

pub(crate) fn select_statement(schema: &Schema, query: &ListQuery) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT * FROM ");

    builder.push(schema.table);
    push_where(&mut builder, query);
    push_order_by(&mut builder, schema, &query.sort);

    let offset = i64::try_from(query.pagination.offset()).unwrap_or(i64::MAX);

    builder
        .push(" LIMIT ")
        .push_bind(i64::from(query.pagination.limit))
        .push(" OFFSET ")
        .push_bind(offset);

    builder
}

fn push_where(builder: &mut QueryBuilder<'static, Postgres>, query: &ListQuery) {
    let mut glue = " WHERE ";

    if let Some(search) = &query.search {
        builder.push(glue);
        push_search(builder, search);
        glue = " AND ";
    }

    for predicate in &query.filters {
        builder.push(glue);
        push_predicate(builder, predicate);
        glue = " AND ";
    }
}

fn push_search(builder: &mut QueryBuilder<'static, Postgres>, search: &Search) {
    builder.push("(");

    for (index, field) in search.fields.iter().enumerate() {
        if index > 0 {
            builder.push(" OR ");
        }

        builder
            .push("strpos(lower(")
            .push(field.column)
            .push("), lower(")
            .push_bind(search.term.clone())
            .push(")) > 0");
    }

    builder.push(")");
}

fn push_predicate(builder: &mut QueryBuilder<'static, Postgres>, predicate: &Predicate) {
    let Field { column, .. } = *predicate.field;

    match &predicate.condition {
        Condition::Compare(operator, value) => {
            builder.push(column).push(" ").push(operator.as_sql()).push(" ");
            push_value(builder, value);
        }
        Condition::AnyOf(values) => {
            builder.push(column).push(" IN (");

            for (index, value) in values.iter().enumerate() {
                if index > 0 {
                    builder.push(", ");
                }

                push_value(builder, value);
            }

            builder.push(")");
        }
        Condition::Nothing => {
            builder.push("FALSE");
        }
    }
}

fn push_value(builder: &mut QueryBuilder<'static, Postgres>, value: &Value) {
    match value {
        Value::Text(text) => builder.push_bind(text.clone()),
        Value::Integer(integer) => builder.push_bind(*integer),
        Value::Timestamp(timestamp) => builder.push_bind(SqlxTimestamp::from(*timestamp)),
        Value::Uuid(uuid) => builder.push_bind(*uuid),
    };
}

fn push_order_by(builder: &mut QueryBuilder<'static, Postgres>, schema: &Schema, sort: &[SortKey]) {
    builder.push(" ORDER BY ");

    for key in sort {
        builder
            .push(key.field.column)
            .push(" ")
            .push(key.direction.as_sql())
            .push(", ");
    }

    builder.push(schema.id.column).push(" ASC");
}

#[cfg(test)]
mod tests {
    use crate::query::tests::BOOKS;

    use super::*;

    fn parse(pairs: &[(&str, &str)]) -> ListQuery {
        ListQuery::parse(pairs.iter().copied(), &BOOKS)
    }

    #[test]
    fn unfiltered_select_sorts_by_default_then_id() {
        let query = parse(&[]);

        assert_eq!(
            select_statement(&BOOKS, &query).sql(),
            "SELECT * FROM books ORDER BY published_at DESC, uuid ASC LIMIT $1 OFFSET $2"
        );
        assert_eq!(
            count_statement(&BOOKS, &query).sql(),
            "SELECT COUNT(*) FROM books"
        );
    }

    #[test]
    fn search_spans_searchable_columns() {
        let query = parse(&[("search", "Dune")]);

        assert_eq!(
            count_statement(&BOOKS, &query).sql(),
            "SELECT COUNT(*) FROM books WHERE (strpos(lower(title), lower($1)) > 0 \
             OR strpos(lower(genre), lower($2)) > 0 OR strpos(lower(blurb), lower($3)) > 0)"
        );
    }

    #[test]
    fn search_and_filters_are_conjoined() {
        let query = parse(&[
            ("genre", "sci-fi"),
            ("genre", "fantasy"),
            ("pages[gte]", "100"),
            ("pages[lte]", "500"),
        ]);

        assert_eq!(
            count_statement(&BOOKS, &query).sql(),
            "SELECT COUNT(*) FROM books WHERE genre IN ($1, $2) AND pages >= $3 AND pages <= $4"
        );
    }

    #[test]
    fn unparsable_filter_compiles_to_false() {
        let query = parse(&[("pages[gte]", "abc")]);

        assert_eq!(
            count_statement(&BOOKS, &query).sql(),
            "SELECT COUNT(*) FROM books WHERE FALSE"
        );
    }

    #[test]
    fn explicit_sort_keeps_id_tiebreaker() {
        let query = parse(&[("sort", "pages,-title"), ("page", "3"), ("limit", "5")]);

        assert_eq!(
            select_statement(&BOOKS, &query).sql(),
            "SELECT * FROM books ORDER BY pages ASC, title DESC, uuid ASC LIMIT $1 OFFSET $2"
        );
    }
}
