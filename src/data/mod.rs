mod row;
mod segment;
mod table;

pub use row::DataRow;
pub use segment::Segment;
pub use table::{DataTable, SegmentIndex};
