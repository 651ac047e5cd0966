//! Request filters and the predicates they translate to.

use chrono::NaiveDate;
use query_engine_sql::sql::ast::{BinaryOperator, Expression, Param};
use query_engine_sql::sql::helpers;

/// A brand search: a case-insensitive substring of the brand name, or an exact brand id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandSearch {
    text: String,
    brand_id: Option<u64>,
}

impl BrandSearch {
    /// An empty search text means no search at all.
    pub fn parse(text: &str) -> Option<BrandSearch> {
        if text.is_empty() {
            None
        } else {
            Some(BrandSearch {
                text: text.to_string(),
                brand_id: text.parse().ok(),
            })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The brand id the search text spells, if it spells one.
    pub fn brand_id(&self) -> Option<u64> {
        self.brand_id
    }

    /// The `ILIKE` pattern matching the search text anywhere in a name.
    pub fn like_pattern(&self) -> String {
        format!("%{}%", escape_like(&self.text))
    }

    pub(crate) fn predicate(&self) -> Expression {
        let name_matches = Expression::BinaryOperation {
            left: Box::new(helpers::column("brand_name")),
            operator: BinaryOperator::CaseInsensitiveLike,
            right: Box::new(Expression::Parameter(Param::String(self.like_pattern()))),
        };
        match self.brand_id {
            None => name_matches,
            Some(brand_id) => helpers::or(
                helpers::equals(
                    helpers::column("brand_id"),
                    Expression::Parameter(Param::UInt64(brand_id)),
                ),
                name_matches,
            ),
        }
    }
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        if matches!(character, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}

/// An inclusive report date range. Either bound may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub(crate) fn predicate(&self, column: &str) -> Option<Expression> {
        let date = |value: NaiveDate| Box::new(Expression::Parameter(Param::Date(value)));
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(Expression::Between {
                expression: Box::new(helpers::column(column)),
                low: date(start),
                high: date(end),
            }),
            (Some(start), None) => Some(Expression::BinaryOperation {
                left: Box::new(helpers::column(column)),
                operator: BinaryOperator::GreaterThanOrEqualTo,
                right: date(start),
            }),
            (None, Some(end)) => Some(Expression::BinaryOperation {
                left: Box::new(helpers::column(column)),
                operator: BinaryOperator::LessThanOrEqualTo,
                right: date(end),
            }),
            (None, None) => None,
        }
    }
}
