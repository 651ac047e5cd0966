//! Convert a SQL AST to a low-level SQL string.

use super::ast::*;
use super::helpers;
use super::string::*;

// Convert to SQL strings

impl SelectList {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            SelectList::SelectList(select_list) => {
                for (index, (col, expr)) in select_list.iter().enumerate() {
                    expr.to_sql(sql);
                    sql.append_syntax(" AS ");
                    col.to_sql(sql);
                    if index < (select_list.len() - 1) {
                        sql.append_syntax(", ");
                    }
                }
            }
            SelectList::SelectStar => {
                sql.append_syntax("*");
            }
        }
    }
}

impl Select {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SELECT ");

        self.select_list.to_sql(sql);

        if let Some(from) = &self.from {
            sql.append_syntax(" ");
            from.to_sql(sql);
        }

        self.where_.to_sql(sql);

        self.order_by.to_sql(sql);

        self.limit.to_sql(sql);
    }
}

impl From {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("FROM ");
        match &self {
            From::Table { reference } => reference.to_sql(sql),
        }
    }
}

impl Where {
    pub fn to_sql(&self, sql: &mut SQL) {
        let Where(expression) = self;
        if *expression != helpers::true_expr() {
            sql.append_syntax(" WHERE ");
            expression.to_sql(sql);
        }
    }
}

// scalars
impl Expression {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Expression::ColumnReference(column_name) => column_name.to_sql(sql),
            Expression::Value(value) => value.to_sql(sql),
            Expression::Parameter(param) => sql.append_param(param.clone()),
            Expression::And { left, right } => {
                sql.append_syntax("(");
                left.to_sql(sql);
                sql.append_syntax(" AND ");
                right.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::Or { left, right } => {
                sql.append_syntax("(");
                left.to_sql(sql);
                sql.append_syntax(" OR ");
                right.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::BinaryOperation {
                left,
                operator,
                right,
            } => {
                sql.append_syntax("(");
                left.to_sql(sql);
                operator.to_sql(sql);
                right.to_sql(sql);
                sql.append_syntax(")");
            }
            Expression::Between {
                expression,
                low,
                high,
            } => {
                sql.append_syntax("(");
                expression.to_sql(sql);
                sql.append_syntax(" BETWEEN ");
                low.to_sql(sql);
                sql.append_syntax(" AND ");
                high.to_sql(sql);
                sql.append_syntax(")");
            }
        }
    }
}

impl BinaryOperator {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            BinaryOperator::Equals => sql.append_syntax(" = "),
            BinaryOperator::GreaterThanOrEqualTo => sql.append_syntax(" >= "),
            BinaryOperator::LessThanOrEqualTo => sql.append_syntax(" <= "),
            BinaryOperator::CaseInsensitiveLike => sql.append_syntax(" ILIKE "),
        }
    }
}

impl Value {
    pub fn to_sql(&self, sql: &mut SQL) {
        match &self {
            Value::Int(i) => sql.append_syntax(format!("{i}").as_str()),
            Value::Bool(true) => sql.append_syntax("true"),
            Value::Bool(false) => sql.append_syntax("false"),
        }
    }
}

impl Limit {
    pub fn to_sql(&self, sql: &mut SQL) {
        if let Some(limit) = self.limit {
            sql.append_syntax(" LIMIT ");
            sql.append_syntax(format!("{limit}").as_str());
        }
        if let Some(offset) = self.offset {
            sql.append_syntax(" OFFSET ");
            sql.append_syntax(format!("{offset}").as_str());
        }
    }
}

impl OrderBy {
    pub fn to_sql(&self, sql: &mut SQL) {
        if !self.elements.is_empty() {
            sql.append_syntax(" ORDER BY ");
            for (index, order_by_item) in self.elements.iter().enumerate() {
                order_by_item.to_sql(sql);
                if index < (self.elements.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
        }
    }
}

impl OrderByElement {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.target.to_sql(sql);
        self.direction.to_sql(sql);
    }
}

impl OrderByDirection {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            OrderByDirection::Asc => sql.append_syntax(" ASC"),
            OrderByDirection::Desc => sql.append_syntax(" DESC"),
        }
    }
}

// names
impl TableReference {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            TableReference::DBTable { database, table } => {
                database.to_sql(sql);
                sql.append_syntax(".");
                table.to_sql(sql);
            }
        }
    }
}

impl DatabaseName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl TableName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl ColumnName {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.0);
    }
}

impl ColumnAlias {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_identifier(&self.name);
    }
}

// DDL

impl CreateDatabase {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("CREATE DATABASE ");
        if self.if_not_exists {
            sql.append_syntax("IF NOT EXISTS ");
        }
        self.name.to_sql(sql);
    }
}

impl CreateTable {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("CREATE TABLE ");
        if self.if_not_exists {
            sql.append_syntax("IF NOT EXISTS ");
        }
        self.table.to_sql(sql);
        sql.append_syntax(" (");
        for (index, column) in self.columns.iter().enumerate() {
            column.to_sql(sql);
            if index < (self.columns.len() - 1) {
                sql.append_syntax(", ");
            }
        }
        sql.append_syntax(") ENGINE = ");
        self.engine.to_sql(sql);
        sql.append_syntax(" ORDER BY (");
        for (index, column) in self.order_by.iter().enumerate() {
            column.to_sql(sql);
            if index < (self.order_by.len() - 1) {
                sql.append_syntax(", ");
            }
        }
        sql.append_syntax(")");
    }
}

impl ColumnDefinition {
    pub fn to_sql(&self, sql: &mut SQL) {
        self.name.to_sql(sql);
        sql.append_syntax(" ");
        sql.append_syntax(&self.data_type);
    }
}

impl Engine {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Engine::MergeTree => sql.append_syntax("MergeTree()"),
        }
    }
}

impl Insert {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("INSERT INTO ");
        self.table.to_sql(sql);
        if !self.columns.is_empty() {
            sql.append_syntax(" (");
            for (index, column) in self.columns.iter().enumerate() {
                column.to_sql(sql);
                if index < (self.columns.len() - 1) {
                    sql.append_syntax(", ");
                }
            }
            sql.append_syntax(")");
        }
        sql.append_syntax(" FORMAT ");
        self.format.to_sql(sql);
    }
}

impl Format {
    pub fn to_sql(&self, sql: &mut SQL) {
        match self {
            Format::JSONEachRow => sql.append_syntax("JSONEachRow"),
        }
    }
}

impl ShowDatabases {
    pub fn to_sql(&self, sql: &mut SQL) {
        sql.append_syntax("SHOW DATABASES");
    }
}
