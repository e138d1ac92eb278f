mod checklist;

pub use checklist::{ChecklistFileError, ChecklistReader, ChecklistWriter};
