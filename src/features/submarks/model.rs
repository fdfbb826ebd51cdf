use serde::{Deserialize, Serialize};

use crate::domain::SubMark;
use crate::error::ServiceError;
use crate::features::trimmed_field;

// incoming body for POST /createjp; roll is the only required field
#[derive(Deserialize, Debug, Default)]
pub struct UpsertSubMarkRequest {
    pub roll: Option<String>,
    pub name: Option<String>,
    pub jp: Option<i32>,
}

impl TryFrom<UpsertSubMarkRequest> for SubMark {
    type Error = ServiceError;

    fn try_from(req: UpsertSubMarkRequest) -> Result<Self, Self::Error> {
        let Some(roll) = trimmed_field(req.roll.as_deref()) else {
            return Err(ServiceError::Validation("Roll is required".to_string()));
        };

        Ok(SubMark {
            roll,
            name: trimmed_field(req.name.as_deref()),
            jp: req.jp,
        })
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct SubMarkJson {
    pub roll: String,
    pub name: Option<String>,
    pub jp: Option<i32>,
}

impl From<SubMark> for SubMarkJson {
    fn from(sub: SubMark) -> Self {
        SubMarkJson {
            roll: sub.roll,
            name: sub.name,
            jp: sub.jp,
        }
    }
}
