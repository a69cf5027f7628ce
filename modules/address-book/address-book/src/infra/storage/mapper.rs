use address_book_sdk::{Address, AddressFields};
use sea_orm::ActiveValue::Set;

use super::entity::{ActiveModel, Model};

/// Convert a database entity to a contract model
impl From<Model> for Address {
    fn from(m: Model) -> Self {
        Self {
            uid: m.uid,
            fields: AddressFields {
                name: m.name,
                latitude: m.latitude,
                longitude: m.longitude,
                street_num: m.street_num,
                street_name: m.street_name,
                city: m.city,
                country: m.country,
            },
        }
    }
}

/// Every column set, ready for insert or full-row update
impl From<Address> for ActiveModel {
    fn from(a: Address) -> Self {
        let f = a.fields;
        Self {
            uid: Set(a.uid),
            name: Set(f.name),
            latitude: Set(f.latitude),
            longitude: Set(f.longitude),
            street_num: Set(f.street_num),
            street_name: Set(f.street_name),
            city: Set(f.city),
            country: Set(f.country),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn model() -> Model {
        Model {
            uid: "a1".to_owned(),
            name: "Test Name".to_owned(),
            latitude: 40.824_428_180_400_41,
            longitude: -74.212_912_145_288_85,
            street_num: "123".to_owned(),
            street_name: "Bloomfield Ave".to_owned(),
            city: "Montclair".to_owned(),
            country: "USA".to_owned(),
        }
    }

    #[test]
    fn test_model_to_address() {
        let address: Address = model().into();

        assert_eq!(address.uid, "a1");
        assert_eq!(address.fields.name, "Test Name");
        assert_eq!(address.fields.street_name, "Bloomfield Ave");
        assert_eq!(address.fields.country, "USA");
        assert!((address.fields.latitude - 40.824_428_180_400_41).abs() < f64::EPSILON);
    }

    #[test]
    fn test_address_to_active_model_sets_every_column() {
        let address: Address = model().into();
        let am: ActiveModel = address.into();

        assert_eq!(am.uid, ActiveValue::Set("a1".to_owned()));
        assert_eq!(am.city, ActiveValue::Set("Montclair".to_owned()));
        assert!(matches!(am.longitude, ActiveValue::Set(_)));
        assert!(matches!(am.street_num, ActiveValue::Set(_)));
    }
}
