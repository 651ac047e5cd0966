//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Expression {
    true_expr()
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// Empty `LIMIT` and `OFFSET` clauses.
pub fn empty_limit() -> Limit {
    Limit {
        limit: None,
        offset: None,
    }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::Bool(true))
}

// Names //

/// A table inside a database.
pub fn table_reference(database: &str, table: &str) -> TableReference {
    TableReference::DBTable {
        database: DatabaseName(database.to_string()),
        table: TableName(table.to_string()),
    }
}

/// Refer to a column by name.
pub fn column(name: &str) -> Expression {
    Expression::ColumnReference(ColumnName(name.to_string()))
}

/// Generate a select list entry for a column.
pub fn make_column(name: ColumnName, alias: ColumnAlias) -> (ColumnAlias, Expression) {
    (alias, Expression::ColumnReference(name))
}

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: String) -> ColumnAlias {
    ColumnAlias { name }
}

// Predicates //

pub fn equals(left: Expression, right: Expression) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(left),
        operator: BinaryOperator::Equals,
        right: Box::new(right),
    }
}

pub fn and(left: Expression, right: Expression) -> Expression {
    Expression::And {
        left: Box::new(left),
        right: Box::new(right),
    }
}

pub fn or(left: Expression, right: Expression) -> Expression {
    Expression::Or {
        left: Box::new(left),
        right: Box::new(right),
    }
}

/// Combine predicates with `AND`. No predicates at all means `true`.
pub fn conjunction(expressions: impl IntoIterator<Item = Expression>) -> Expression {
    expressions
        .into_iter()
        .reduce(and)
        .unwrap_or_else(true_expr)
}

// Ordering //

/// Order by the given columns.
pub fn order_by(columns: Vec<(&str, OrderByDirection)>) -> OrderBy {
    OrderBy {
        elements: columns
            .into_iter()
            .map(|(name, direction)| OrderByElement {
                target: column(name),
                direction,
            })
            .collect(),
    }
}

// SELECTs //

/// Build a simple select with a select list and the rest are empty.
pub fn simple_select(select_list: Vec<(ColumnAlias, Expression)>) -> Select {
    Select {
        select_list: SelectList::SelectList(select_list),
        from: None,
        where_: Where(empty_where()),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

/// Select the named columns, aliased to themselves, from a table.
pub fn select_columns(reference: TableReference, columns: &[&str]) -> Select {
    let mut select = simple_select(
        columns
            .iter()
            .map(|name| {
                make_column(
                    ColumnName((*name).to_string()),
                    make_column_alias((*name).to_string()),
                )
            })
            .collect(),
    );
    select.from = Some(From::Table { reference });
    select
}
