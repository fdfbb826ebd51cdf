/// The five per-subject mark columns of a student record. A `None` means the
/// mark was never supplied and is stored as NULL; `Some(0)` is a real mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkSet {
    pub jp: Option<i32>,
    pub ds: Option<i32>,
    pub vccf: Option<i32>,
    pub daa: Option<i32>,
    pub dpco: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentMark {
    pub id: u64,
    pub name: String,
    pub roll: String,
    pub marks: MarkSet,
}

// a student record as accepted for insertion: name and roll already trimmed
// and known to be non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub roll: String,
    pub marks: MarkSet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubMark {
    pub roll: String,
    pub name: Option<String>,
    pub jp: Option<i32>,
}
