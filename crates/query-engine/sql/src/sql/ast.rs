//! Type definitions of a SQL AST representation.

/// A SELECT clause
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub select_list: SelectList,
    pub from: Option<From>,
    pub where_: Where,
    pub order_by: OrderBy,
    pub limit: Limit,
}

/// A select list
#[derive(Debug, Clone, PartialEq)]
pub enum SelectList {
    SelectList(Vec<(ColumnAlias, Expression)>),
    SelectStar,
}

/// A FROM clause
#[derive(Debug, Clone, PartialEq)]
pub enum From {
    /// Select from a table reference
    Table { reference: TableReference },
}

/// A WHERE clause
#[derive(Debug, Clone, PartialEq)]
pub struct Where(pub Expression);

/// An ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub elements: Vec<OrderByElement>,
}

/// A single element in an ORDER BY clause
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByElement {
    pub target: Expression,
    pub direction: OrderByDirection,
}

/// A direction for a single ORDER BY element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderByDirection {
    Asc,
    Desc,
}

/// LIMIT and OFFSET clauses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// A scalar expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    And {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    Or {
        left: Box<Expression>,
        right: Box<Expression>,
    },
    BinaryOperation {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
    /// An inclusive range check
    Between {
        expression: Box<Expression>,
        low: Box<Expression>,
        high: Box<Expression>,
    },
    ColumnReference(ColumnName),
    /// A constant written into the statement text
    Value(Value),
    /// A value bound through a typed query parameter
    Parameter(Param),
}

/// A comparison operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Equals,
    GreaterThanOrEqualTo,
    LessThanOrEqualTo,
    CaseInsensitiveLike,
}

/// A constant value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Bool(bool),
}

pub use super::string::Param;

/// A reference to a table inside a database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableReference {
    DBTable {
        database: DatabaseName,
        table: TableName,
    },
}

/// Name of a database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseName(pub String);

/// Name of a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(pub String);

/// Name of a column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnName(pub String);

/// Aliases that we give to columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAlias {
    pub name: String,
}

// DDL //

/// A CREATE DATABASE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDatabase {
    pub name: DatabaseName,
    pub if_not_exists: bool,
}

/// A CREATE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTable {
    pub table: TableReference,
    pub if_not_exists: bool,
    pub columns: Vec<ColumnDefinition>,
    pub engine: Engine,
    pub order_by: Vec<ColumnName>,
}

/// A column name together with its storage type, such as `Nullable(Float64)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub name: ColumnName,
    pub data_type: String,
}

/// Table engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    MergeTree,
}

/// An INSERT statement whose rows follow the statement in the given format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    pub table: TableReference,
    pub columns: Vec<ColumnName>,
    pub format: Format,
}

/// Data formats for row input and output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// One JSON object per line, keyed by column name
    JSONEachRow,
}

/// A `SHOW DATABASES` statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShowDatabases;
