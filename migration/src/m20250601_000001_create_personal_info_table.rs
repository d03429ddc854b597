use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Singleton table: the application only ever writes id = 1.
        manager
            .create_table(
                Table::create()
                    .table(PersonalInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PersonalInfo::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PersonalInfo::FullName).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Title).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Bio).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Location).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Email).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::Phone).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::GithubUrl).text().not_null())
                    .col(ColumnDef::new(PersonalInfo::LinkedinUrl).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PersonalInfo::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PersonalInfo {
    Table,
    Id,
    FullName,
    Title,
    Bio,
    Location,
    Email,
    Phone,
    GithubUrl,
    LinkedinUrl,
}
