mod marks;

pub use marks::{MarkSet, NewStudent, StudentMark, SubMark};
