//! Column definitions of the tables we manage.
//!
//! Column order is significant: it is the order used by `CREATE TABLE` and by the
//! fixture record type.

use std::fmt;

pub const INCREMENTALITY_TABLE_NAME: &str = "incrementalityResult_all";
pub const BRANDS_TABLE_NAME: &str = "brands";

pub const INCREMENTALITY_SORTING_KEY: &[&str] = &["brandOriginalId", "reportDate"];
pub const BRANDS_SORTING_KEY: &[&str] = &["brand_id"];

/// The storage types used by our tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarType {
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Int8,
    Float64,
    Date,
    DateTime,
    String,
}

impl ScalarType {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarType::UInt8 => "UInt8",
            ScalarType::UInt16 => "UInt16",
            ScalarType::UInt32 => "UInt32",
            ScalarType::UInt64 => "UInt64",
            ScalarType::Int8 => "Int8",
            ScalarType::Float64 => "Float64",
            ScalarType::Date => "Date",
            ScalarType::DateTime => "DateTime",
            ScalarType::String => "String",
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// The type of a column, possibly wrapped in `Nullable(..)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnType {
    pub scalar_type: ScalarType,
    pub nullable: bool,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            write!(f, "Nullable({})", self.scalar_type)
        } else {
            write!(f, "{}", self.scalar_type)
        }
    }
}

/// Information about a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub r#type: ColumnType,
}

/// Information about a table: where it lives, its columns and its sorting key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableInfo {
    pub database: String,
    pub table_name: &'static str,
    pub columns: &'static [ColumnInfo],
    pub sorting_key: &'static [&'static str],
}

impl TableInfo {
    pub fn column(&self, name: &str) -> Option<&'static ColumnInfo> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|column| column.name)
    }
}

const fn required(name: &'static str, scalar_type: ScalarType) -> ColumnInfo {
    ColumnInfo {
        name,
        r#type: ColumnType {
            scalar_type,
            nullable: false,
        },
    }
}

const fn nullable(name: &'static str, scalar_type: ScalarType) -> ColumnInfo {
    ColumnInfo {
        name,
        r#type: ColumnType {
            scalar_type,
            nullable: true,
        },
    }
}

/// The columns of `incrementalityResult_all`.
pub const INCREMENTALITY_COLUMNS: &[ColumnInfo] = &[
    required("brandOriginalId", ScalarType::UInt64),
    required("reportDate", ScalarType::Date),
    required("date", ScalarType::Date),
    required("year", ScalarType::UInt16),
    required("month", ScalarType::UInt8),
    required("week", ScalarType::UInt32),
    required("quarter", ScalarType::UInt8),
    required("updateTimestamp", ScalarType::DateTime),
    required("updatedBy", ScalarType::String),
    required("spBrandedSearchPct", ScalarType::Float64),
    required("sbBrandedPct", ScalarType::Float64),
    required("spNtbPct", ScalarType::Float64),
    required("dspNtbPct", ScalarType::Float64),
    required("glanceViewPct", ScalarType::Float64),
    required("ctr", ScalarType::Float64),
    nullable("discount", ScalarType::Float64),
    nullable("keywordSimilarity", ScalarType::Float64),
    nullable("sovWeighted", ScalarType::Float64),
    nullable("organicRanking", ScalarType::Float64),
    nullable("amazonBrandRanking", ScalarType::Float64),
    required("repeatedPurchase", ScalarType::Float64),
    required("spendWeight", ScalarType::Float64),
    required("spBrandedSearchPctWeight", ScalarType::Float64),
    required("sbBrandedPctWeight", ScalarType::Float64),
    required("spNtbPctWeight", ScalarType::Float64),
    required("dspNtbPctWeight", ScalarType::Float64),
    required("glanceViewPctWeight", ScalarType::Float64),
    required("ctrWeight", ScalarType::Float64),
    required("discountWeight", ScalarType::Float64),
    required("keywordSimilarityWeight", ScalarType::Float64),
    required("sovWeightedWeight", ScalarType::Float64),
    required("organicRankingWeight", ScalarType::Float64),
    required("amazonBrandRankingWeight", ScalarType::Float64),
    required("repeatedPurchaseWeight", ScalarType::Float64),
    required("totalIroas", ScalarType::Float64),
    required("spIroas", ScalarType::Float64),
    nullable("sdIroas", ScalarType::Float64),
    required("sbIroas", ScalarType::Float64),
    nullable("dspIroas", ScalarType::Float64),
    required("totalIroasFactor", ScalarType::Float64),
    required("spIroasFactor", ScalarType::Float64),
    nullable("sdIroasFactor", ScalarType::Float64),
    required("sbIroasFactor", ScalarType::Float64),
    nullable("dspIroasFactor", ScalarType::Float64),
    required("totalAttributedSales", ScalarType::Float64),
    required("spAttributedSales", ScalarType::Float64),
    nullable("sdAttributedSales", ScalarType::Float64),
    required("sbAttributedSales", ScalarType::Float64),
    nullable("dspAttributedSales", ScalarType::Float64),
    required("totalAzattributedSales", ScalarType::Float64),
    required("spAzattributedSales", ScalarType::Float64),
    nullable("sdAzattributedSales", ScalarType::Float64),
    required("sbAzattributedSales", ScalarType::Float64),
    nullable("dspAzattributedSales", ScalarType::Float64),
    required("spSpend", ScalarType::Float64),
    nullable("sdSpend", ScalarType::Float64),
    required("sbSpend", ScalarType::Float64),
    nullable("dspSpend", ScalarType::Float64),
    required("cac", ScalarType::Float64),
    required("totalSpend", ScalarType::Float64),
    required("totalSales", ScalarType::Float64),
    required("baselineShare", ScalarType::Float64),
    required("spAttributedShare", ScalarType::Float64),
    required("sbAttributedShare", ScalarType::Float64),
    nullable("sdAttributedShare", ScalarType::Float64),
    nullable("dspAttributedShare", ScalarType::Float64),
    required("spCoef", ScalarType::Float64),
    required("sbCoef", ScalarType::Float64),
    nullable("sdCoef", ScalarType::Float64),
    nullable("dspCoef", ScalarType::Float64),
    required("otherCoef", ScalarType::Float64),
    required("spLagweight", ScalarType::Float64),
    nullable("sdLagweight", ScalarType::Float64),
    required("sbLagweight", ScalarType::Float64),
    nullable("dspLagweight", ScalarType::Float64),
    required("spHalfmax", ScalarType::Float64),
    nullable("sdHalfmax", ScalarType::Float64),
    required("sbHalfmax", ScalarType::Float64),
    nullable("dspHalfmax", ScalarType::Float64),
    required("spSlope", ScalarType::Float64),
    nullable("sdSlope", ScalarType::Float64),
    required("sbSlope", ScalarType::Float64),
    nullable("dspSlope", ScalarType::Float64),
    required("status", ScalarType::UInt16),
    required("version", ScalarType::UInt64),
    required("sign", ScalarType::Int8),
    required("_insert_time", ScalarType::DateTime),
];

/// The columns of `brands`.
pub const BRANDS_COLUMNS: &[ColumnInfo] = &[
    required("brand_id", ScalarType::UInt64),
    required("brand_name", ScalarType::String),
    nullable("totalIroas", ScalarType::Float64),
    nullable("spIroas", ScalarType::Float64),
    nullable("sdIroas", ScalarType::Float64),
    nullable("sbIroas", ScalarType::Float64),
    nullable("dspIroas", ScalarType::Float64),
];
