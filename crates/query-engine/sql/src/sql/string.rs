//! Type definitions of a low-level SQL string representation.

use chrono::NaiveDate;

/// A SQL statement together with the values of its typed placeholders.
#[derive(Debug, PartialEq, Eq)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Param>,
    /// for internal use and tests only
    pub param_index: u64,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

/// A parameter for a parameterized query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// A literal string
    String(String),
    /// An unsigned 64 bit integer, such as a brand id
    UInt64(u64),
    /// A calendar date
    Date(NaiveDate),
}

impl Param {
    /// The store type the placeholder is declared with.
    pub fn type_name(&self) -> &'static str {
        match self {
            Param::String(_) => "String",
            Param::UInt64(_) => "UInt64",
            Param::Date(_) => "Date",
        }
    }

    /// Render the value the way the store expects parameter values: in its escaped text format.
    pub fn to_param_value(&self) -> String {
        match self {
            Param::String(string) => escape_param_value(string),
            Param::UInt64(number) => number.to_string(),
            Param::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Name of the n-th (1-based) placeholder of a statement.
pub fn param_name(index: u64) -> String {
    format!("p{index}")
}

fn escape_param_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for character in value.chars() {
        match character {
            '\\' => escaped.push_str("\\\\"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// A DDL statement.
#[derive(Debug, PartialEq, Eq)]
pub struct DDL(pub SQL);

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
            params: vec![],
            param_index: 0,
        }
    }
    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push('"');
        for character in identifier.chars() {
            if character == '"' || character == '\\' {
                self.sql.push('\\');
            }
            self.sql.push(character);
        }
        self.sql.push('"');
    }
    pub fn append_param(&mut self, param: Param) {
        self.param_index += 1;
        self.sql.push_str(
            format!("{{{}:{}}}", param_name(self.param_index), param.type_name()).as_str(),
        );
        self.params.push(param);
    }

    /// The placeholder names paired with their rendered values.
    pub fn named_params(&self) -> impl Iterator<Item = (String, String)> + '_ {
        (1..)
            .zip(self.params.iter())
            .map(|(index, param)| (param_name(index), param.to_param_value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_are_numbered_in_order() {
        let mut sql = SQL::new();
        sql.append_param(Param::UInt64(42));
        sql.append_syntax(" ");
        sql.append_param(Param::Date(NaiveDate::from_ymd_opt(2022, 1, 3).unwrap()));

        assert_eq!(sql.sql, "{p1:UInt64} {p2:Date}");
        assert_eq!(
            sql.named_params().collect::<Vec<_>>(),
            vec![
                ("p1".to_string(), "42".to_string()),
                ("p2".to_string(), "2022-01-03".to_string())
            ]
        );
    }

    #[test]
    fn string_params_are_escaped() {
        let param = Param::String("a\\b\tc\nd'e".to_string());
        assert_eq!(param.to_param_value(), "a\\\\b\\tc\\nd'e");
    }

    #[test]
    fn identifiers_are_quoted() {
        let mut sql = SQL::new();
        sql.append_identifier("_insert_time");
        sql.append_syntax(".");
        sql.append_identifier("we\"ird");
        assert_eq!(sql.sql, "\"_insert_time\".\"we\\\"ird\"");
    }
}
