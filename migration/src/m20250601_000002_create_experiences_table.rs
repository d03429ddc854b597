use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::JobTitle).text().not_null())
                    .col(ColumnDef::new(Experiences::Company).text().not_null())
                    .col(ColumnDef::new(Experiences::StartDate).date().null())
                    .col(ColumnDef::new(Experiences::EndDate).date().null())
                    .col(ColumnDef::new(Experiences::Description).text().not_null())
                    // JSON-encoded array of strings
                    .col(ColumnDef::new(Experiences::Achievements).text().null())
                    .col(
                        ColumnDef::new(Experiences::IsCurrent)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_experiences_start_date")
                    .table(Experiences::Table)
                    .col(Experiences::StartDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Experiences {
    Table,
    Id,
    JobTitle,
    Company,
    StartDate,
    EndDate,
    Description,
    Achievements,
    IsCurrent,
}
