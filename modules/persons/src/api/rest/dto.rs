use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::contract::model::{NewPerson, Person};

/// REST DTO for a stored person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub email: String,
}

/// REST DTO for creating a person. An `id` in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonReq {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub email: String,
}

/// REST DTO for replacing a person's fields; `id` selects the record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePersonReq {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub gender: String,
    pub email: String,
}

impl From<Person> for PersonDto {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            first_name: p.first_name,
            last_name: p.last_name,
            address: p.address,
            gender: p.gender,
            email: p.email,
        }
    }
}

impl From<CreatePersonReq> for NewPerson {
    fn from(req: CreatePersonReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            address: req.address,
            gender: req.gender,
            email: req.email,
        }
    }
}

impl From<UpdatePersonReq> for Person {
    fn from(req: UpdatePersonReq) -> Self {
        Self {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            address: req.address,
            gender: req.gender,
            email: req.email,
        }
    }
}
