use tracing::{debug, warn};

use crate::error::ExecuteError;
use crate::row::Row;
use crate::statement::Statement;
use crate::table::Table;
use crate::TABLE_MAX_ROWS;

/// Outcome of a successfully executed statement.
pub enum Executed<'a> {
    Inserted,
    Selected(Rows<'a>),
}

pub fn execute<'a>(statement: &Statement, table: &'a mut Table) -> Result<Executed<'a>, ExecuteError> {
    match statement {
        Statement::Insert(row) => {
            execute_insert(row, table)?;
            Ok(Executed::Inserted)
        }
        Statement::Select => Ok(Executed::Selected(execute_select(table))),
    }
}

/// Appends `row` after the last stored row.
///
/// Fails with [`ExecuteError::TableFull`] once `TABLE_MAX_ROWS` rows are
/// stored, leaving the table untouched.
pub fn execute_insert(row: &Row, table: &mut Table) -> Result<(), ExecuteError> {
    if table.num_rows >= TABLE_MAX_ROWS {
        warn!(num_rows = table.num_rows, "table full, insert rejected");
        return Err(ExecuteError::TableFull);
    }

    let row_num = table.num_rows;
    row.serialize(table.row_slot_mut(row_num));
    table.num_rows += 1;
    debug!(id = row.id, row_num, "row inserted");

    Ok(())
}

/// Scans every stored row in insertion order.
pub fn execute_select(table: &Table) -> Rows<'_> {
    Rows { table, next: 0 }
}

/// Lazy scan over the rows of a [`Table`]. Each row is decoded on demand.
pub struct Rows<'a> {
    table: &'a Table,
    next: usize,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.next >= self.table.num_rows {
            return None;
        }
        let slot = self.table.row_slot(self.next)?;
        self.next += 1;
        Some(Row::deserialize(slot))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.num_rows.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
