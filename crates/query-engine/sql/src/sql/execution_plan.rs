//! Describe the statement that answers a request.

use super::ast::Select;
use super::string::SQL;

/// A single read against the store. `root_field` names the request it answers and is used
/// for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionPlan {
    pub root_field: String,
    pub query: Select,
}

impl ExecutionPlan {
    /// Render the query with its parameters.
    pub fn query_sql(&self) -> SQL {
        let mut sql = SQL::new();
        self.query.to_sql(&mut sql);
        sql
    }
}
