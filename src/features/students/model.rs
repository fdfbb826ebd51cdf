use serde::{Deserialize, Serialize};

use crate::domain::{MarkSet, NewStudent, StudentMark};
use crate::error::ServiceError;
use crate::features::trimmed_field;

// incoming body for POST /create; every field is optional so that a missing
// key reaches validation instead of being rejected by the deserializer
#[derive(Deserialize, Debug, Default)]
pub struct CreateStudentRequest {
    pub name: Option<String>,
    pub roll: Option<String>,
    pub jp: Option<i32>,
    pub ds: Option<i32>,
    pub vccf: Option<i32>,
    pub daa: Option<i32>,
    pub dpco: Option<i32>,
}

impl TryFrom<CreateStudentRequest> for NewStudent {
    type Error = ServiceError;

    fn try_from(req: CreateStudentRequest) -> Result<Self, Self::Error> {
        let name = trimmed_field(req.name.as_deref());
        let roll = trimmed_field(req.roll.as_deref());

        let (Some(name), Some(roll)) = (name, roll) else {
            return Err(ServiceError::Validation(
                "Name and Roll are required".to_string(),
            ));
        };

        // a provided 0 is a real mark; only a missing field maps to null
        Ok(NewStudent {
            name,
            roll,
            marks: MarkSet {
                jp: req.jp,
                ds: req.ds,
                vccf: req.vccf,
                daa: req.daa,
                dpco: req.dpco,
            },
        })
    }
}

// incoming body for PUT /update/{id}; overwrites all five mark columns,
// absent fields become null
#[derive(Deserialize, Debug, Default)]
pub struct UpdateMarksRequest {
    pub jp: Option<i32>,
    pub ds: Option<i32>,
    pub vccf: Option<i32>,
    pub daa: Option<i32>,
    pub dpco: Option<i32>,
}

impl From<UpdateMarksRequest> for MarkSet {
    fn from(req: UpdateMarksRequest) -> Self {
        MarkSet {
            jp: req.jp,
            ds: req.ds,
            vccf: req.vccf,
            daa: req.daa,
            dpco: req.dpco,
        }
    }
}

// wire shape of a student row; the frontend expects the legacy uppercase keys
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct StudentMarkJson {
    pub id: u64,
    pub name: String,
    pub roll: String,
    pub jp: Option<i32>,
    pub ds: Option<i32>,
    pub vccf: Option<i32>,
    pub daa: Option<i32>,
    pub dpco: Option<i32>,
}

impl From<StudentMark> for StudentMarkJson {
    fn from(student: StudentMark) -> Self {
        StudentMarkJson {
            id: student.id,
            name: student.name,
            roll: student.roll,
            jp: student.marks.jp,
            ds: student.marks.ds,
            vccf: student.marks.vccf,
            daa: student.marks.daa,
            dpco: student.marks.dpco,
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct CreateStudentResponse {
    pub message: String,
    pub id: u64,
}
