use address_book_sdk::Address;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, TransactionTrait,
};

use crate::domain::error::DomainError;
use crate::domain::repo::AddressRepository;

use super::entity::{ActiveModel as AddressAM, Entity as AddressEntity};

fn db_err(e: DbErr) -> DomainError {
    DomainError::database(e.to_string())
}

/// SeaORM-backed implementation of `AddressRepository`.
///
/// Writes run inside an explicit transaction that is committed on success; an early
/// return drops the transaction, which rolls it back.
#[derive(Clone)]
pub struct SeaOrmAddressRepository {
    db: DatabaseConnection,
}

impl SeaOrmAddressRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AddressRepository for SeaOrmAddressRepository {
    async fn insert(&self, address: Address) -> Result<Address, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let model = AddressAM::from(address)
            .insert(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(model.into())
    }

    async fn find_by_uid(&self, uid: &str) -> Result<Option<Address>, DomainError> {
        let found = AddressEntity::find_by_id(uid.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list_all(&self) -> Result<Vec<Address>, DomainError> {
        let rows = AddressEntity::find().all(&self.db).await.map_err(db_err)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, address: Address) -> Result<Option<Address>, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let exists = AddressEntity::find_by_id(address.uid.clone())
            .one(&txn)
            .await
            .map_err(db_err)?
            .is_some();
        if !exists {
            return Ok(None);
        }

        let model = AddressAM::from(address)
            .update(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(Some(model.into()))
    }

    async fn delete(&self, uid: &str) -> Result<bool, DomainError> {
        let txn = self.db.begin().await.map_err(db_err)?;

        let res = AddressEntity::delete_by_id(uid.to_owned())
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        AddressEntity::find().count(&self.db).await.map_err(db_err)
    }
}
