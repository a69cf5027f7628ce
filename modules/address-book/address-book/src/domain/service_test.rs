#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use address_book_sdk::{Address, AddressFields, ProximityQuery};
    use async_trait::async_trait;
    use tracing_test::traced_test;

    use crate::domain::error::DomainError;
    use crate::domain::repo::AddressRepository;
    use crate::domain::service::{validate_coordinates, Service};

    // In-memory repository keyed by uid
    #[derive(Default)]
    struct MockRepository {
        rows: Mutex<BTreeMap<String, AddressFields>>,
    }

    #[async_trait]
    impl AddressRepository for MockRepository {
        async fn insert(&self, address: Address) -> Result<Address, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            assert!(!rows.contains_key(&address.uid), "uid reused");
            rows.insert(address.uid.clone(), address.fields.clone());
            Ok(address)
        }

        async fn find_by_uid(&self, uid: &str) -> Result<Option<Address>, DomainError> {
            Ok(self.rows.lock().unwrap().get(uid).map(|fields| Address {
                uid: uid.to_owned(),
                fields: fields.clone(),
            }))
        }

        async fn list_all(&self) -> Result<Vec<Address>, DomainError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .map(|(uid, fields)| Address {
                    uid: uid.clone(),
                    fields: fields.clone(),
                })
                .collect())
        }

        async fn update(&self, address: Address) -> Result<Option<Address>, DomainError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.get_mut(&address.uid) {
                Some(fields) => {
                    *fields = address.fields.clone();
                    Ok(Some(address))
                }
                None => Ok(None),
            }
        }

        async fn delete(&self, uid: &str) -> Result<bool, DomainError> {
            Ok(self.rows.lock().unwrap().remove(uid).is_some())
        }

        async fn count(&self) -> Result<u64, DomainError> {
            Ok(self.rows.lock().unwrap().len() as u64)
        }
    }

    fn service() -> Service<MockRepository> {
        Service::new(Arc::new(MockRepository::default()))
    }

    fn montclair() -> AddressFields {
        AddressFields {
            name: "Test Name".to_owned(),
            latitude: 40.824_428_180_400_41,
            longitude: -74.212_912_145_288_85,
            street_num: "123".to_owned(),
            street_name: "Bloomfield Ave".to_owned(),
            city: "Montclair".to_owned(),
            country: "USA".to_owned(),
        }
    }

    fn union_nj() -> AddressFields {
        AddressFields::new("Union", 40.697_019_3, -74.309_331_7)
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_fields() {
        let svc = service();

        let created = svc.create(montclair()).await.unwrap();
        assert!(!created.uid.is_empty());
        assert_eq!(created.fields, montclair());

        let fetched = svc.get(&created.uid).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_uids() {
        let svc = service();

        let mut uids = std::collections::HashSet::new();
        for _ in 0..20 {
            let created = svc.create(union_nj()).await.unwrap();
            assert!(uids.insert(created.uid), "uid issued twice");
        }
        assert_eq!(svc.count().await.unwrap(), 20);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_latitude() {
        let svc = service();
        let mut fields = montclair();
        fields.latitude = 91.0;

        let err = svc.create(fields).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "latitude"));
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_out_of_range_longitude() {
        let svc = service();
        let mut fields = montclair();
        fields.longitude = 181.0;

        let err = svc.create(fields).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "longitude"));
        assert_eq!(svc.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_boundary_coordinates_are_accepted() {
        let svc = service();
        for (lat, lon) in [(90.0, 180.0), (-90.0, -180.0), (0.0, 0.0)] {
            svc.create(AddressFields::new("edge", lat, lon)).await.unwrap();
        }
        assert_eq!(svc.count().await.unwrap(), 3);
    }

    #[test]
    fn test_nan_coordinates_are_rejected() {
        assert!(validate_coordinates(f64::NAN, 0.0).is_err());
        assert!(validate_coordinates(0.0, f64::NAN).is_err());
    }

    #[tokio::test]
    async fn test_update_replaces_all_fields_but_uid() {
        let svc = service();
        let created = svc.create(montclair()).await.unwrap();

        let mut changed = montclair();
        changed.street_name = "Fairview Lane".to_owned();
        changed.latitude = 40.0;

        let updated = svc.update(&created.uid, changed.clone()).await.unwrap();
        assert_eq!(updated.uid, created.uid);
        assert_eq!(updated.fields, changed);

        let fetched = svc.get(&created.uid).await.unwrap();
        assert_eq!(fetched.fields.street_name, "Fairview Lane");
    }

    #[tokio::test]
    #[traced_test]
    async fn test_update_unknown_uid_is_not_found() {
        let svc = service();
        svc.create(montclair()).await.unwrap();

        let err = svc.update("missing", union_nj()).await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { ref uid } if uid == "missing"));
        assert_eq!(svc.count().await.unwrap(), 1);
        assert!(logs_contain("uid not found for update"));
    }

    #[tokio::test]
    async fn test_update_with_invalid_coordinates_keeps_record() {
        let svc = service();
        let created = svc.create(montclair()).await.unwrap();
        let mut bad = montclair();
        bad.longitude = -181.0;

        let err = svc.update(&created.uid, bad).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
        assert_eq!(svc.get(&created.uid).await.unwrap().fields, montclair());
    }

    #[tokio::test]
    #[traced_test]
    async fn test_delete_then_get_is_not_found() {
        let svc = service();
        let created = svc.create(montclair()).await.unwrap();

        assert!(svc.delete(&created.uid).await.unwrap());

        let err = svc.get(&created.uid).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert!(logs_contain("uid not found"));
    }

    #[tokio::test]
    async fn test_delete_unknown_uid_is_noop() {
        let svc = service();
        svc.create(montclair()).await.unwrap();

        assert!(!svc.delete("missing").await.unwrap());
        assert_eq!(svc.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_within_reference_scenario() {
        let svc = service();
        let near = svc.create(union_nj()).await.unwrap();
        svc.create(montclair()).await.unwrap();

        let found = svc
            .find_within(ProximityQuery {
                latitude: 40.7,
                longitude: -74.3,
                radius_km: 15.0,
            })
            .await
            .unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].address, near);
        assert!((found[0].distance_km - 0.853_655).abs() < 0.01);
    }

    #[tokio::test]
    async fn test_find_within_negative_radius_is_empty() {
        let svc = service();
        svc.create(union_nj()).await.unwrap();

        let found = svc
            .find_within(ProximityQuery {
                latitude: 40.697_019_3,
                longitude: -74.309_331_7,
                radius_km: -0.5,
            })
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_find_within_nan_radius_is_empty() {
        let svc = service();
        svc.create(union_nj()).await.unwrap();

        let found = svc
            .find_within(ProximityQuery {
                latitude: 40.697_019_3,
                longitude: -74.309_331_7,
                radius_km: f64::NAN,
            })
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_find_within_rejects_invalid_center() {
        let svc = service();

        let err = svc
            .find_within(ProximityQuery {
                latitude: -90.5,
                longitude: 0.0,
                radius_km: 10.0,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
