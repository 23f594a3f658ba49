use sea_orm::{ActiveValue::NotSet, Set};

use crate::contract::model::{NewPerson, Person};
use crate::infra::storage::entity::{ActiveModel, Model as PersonEntity};

/// Convert a database entity to a contract model
pub fn entity_to_contract(entity: PersonEntity) -> Person {
    Person {
        id: entity.id,
        first_name: entity.first_name,
        last_name: entity.last_name,
        address: entity.address,
        gender: entity.gender,
        email: entity.email,
    }
}

/// Build an active model for a save. `None` lets the database assign the id.
pub fn to_active_model(id: Option<i64>, data: NewPerson) -> ActiveModel {
    ActiveModel {
        id: id.map_or(NotSet, Set),
        first_name: Set(data.first_name),
        last_name: Set(data.last_name),
        address: Set(data.address),
        gender: Set(data.gender),
        email: Set(data.email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn sample() -> NewPerson {
        NewPerson {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            address: "London".into(),
            gender: "F".into(),
            email: "ada@example.com".into(),
        }
    }

    #[test]
    fn new_row_leaves_id_unset() {
        let am = to_active_model(None, sample());
        assert!(matches!(am.id, ActiveValue::NotSet));
        assert_eq!(am.email, ActiveValue::Set("ada@example.com".to_string()));
    }

    #[test]
    fn existing_row_carries_id() {
        let am = to_active_model(Some(9), sample());
        assert_eq!(am.id, ActiveValue::Set(9));
    }
}
