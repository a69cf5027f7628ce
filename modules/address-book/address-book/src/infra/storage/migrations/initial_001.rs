use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Addresses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Addresses::Uid)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Addresses::Name).string().not_null())
                    .col(ColumnDef::new(Addresses::Latitude).double().not_null())
                    .col(ColumnDef::new(Addresses::Longitude).double().not_null())
                    .col(ColumnDef::new(Addresses::StreetNum).string().not_null())
                    .col(ColumnDef::new(Addresses::StreetName).string().not_null())
                    .col(ColumnDef::new(Addresses::City).string().not_null())
                    .col(ColumnDef::new(Addresses::Country).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_addresses_name")
                    .table(Addresses::Table)
                    .col(Addresses::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_addresses_country")
                    .table(Addresses::Table)
                    .col(Addresses::Country)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Addresses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Addresses {
    Table,
    Uid,
    Name,
    Latitude,
    Longitude,
    StreetNum,
    StreetName,
    City,
    Country,
}
