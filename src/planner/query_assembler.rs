use thiserror::Error;

use crate::planner::QueryComponents;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("query has no SELECT list")]
    EmptySelect,
    #[error("query has no FROM table")]
    EmptyFrom,
}

/// Concatenates clause fragments into SQL text.
///
/// Clause order is fixed (`SELECT, FROM, JOIN*, WHERE, GROUP BY, HAVING,
/// ORDER BY, LIMIT`), one clause per line, empty clauses omitted. The same
/// components always give byte-identical output.
pub struct QueryAssembler;

impl QueryAssembler {
    pub fn assemble(components: &QueryComponents) -> Result<String, AssemblyError> {
        if components.select.is_empty() {
            return Err(AssemblyError::EmptySelect);
        }
        if components.from.trim().is_empty() {
            return Err(AssemblyError::EmptyFrom);
        }

        let mut parts = vec![
            format!("SELECT {}", components.select.join(", ")),
            format!("FROM {}", components.from),
        ];

        parts.extend(components.joins.iter().cloned());

        if !components.conditions.is_empty() {
            parts.push(format!("WHERE {}", components.conditions.join(" AND ")));
        }
        if !components.group_by.is_empty() {
            parts.push(format!("GROUP BY {}", components.group_by.join(", ")));
        }
        if !components.having.is_empty() {
            parts.push(format!("HAVING {}", components.having.join(" AND ")));
        }
        if let Some(order_by) = &components.order_by {
            parts.push(format!("ORDER BY {order_by}"));
        }
        if let Some(limit) = components.limit {
            parts.push(format!("LIMIT {limit}"));
        }

        Ok(parts.join("\n"))
    }
}
