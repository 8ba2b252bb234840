use prettytable::{
    format::consts::FORMAT_BOX_CHARS,
    {Cell, Row, Table},
};
use std::fmt::Display;

/// Renders tuples as a box table, one row per tuple, prefixed by its ordinal.
///
/// Works with either odometer, or anything else yielding rows.
///
/// ```
/// use odometer::{tabulate, IndexOdometer};
///
/// let sizes = [2, 2];
/// let table = tabulate(IndexOdometer::new(&sizes)?);
/// assert_eq!(table.len(), 4);
/// # Ok::<(), odometer::DimensionError>(())
/// ```
pub fn tabulate<I, R, T>(tuples: I) -> Table
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = T>,
    T: Display,
{
    let mut width = 0;
    let rows = tuples
        .into_iter()
        .enumerate()
        .map(|(ordinal, tuple)| {
            let mut row = Row::new(vec![Cell::new(&ordinal.to_string())]);
            for element in tuple {
                row.add_cell(Cell::new(&element.to_string()));
            }
            width = width.max(row.len() - 1);
            row
        })
        .collect();

    let mut table = Table::init(rows);
    table.set_titles(titles(width));
    set_style(table)
}

fn titles(width: usize) -> Row {
    let mut titles = Row::new(vec![Cell::new("#")]);
    for dimension in 0..width {
        titles.add_cell(Cell::new(&format!("d{dimension}")));
    }
    titles
}

fn set_style(mut table: Table) -> Table {
    table.set_format(*FORMAT_BOX_CHARS);
    table
}
