use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).text().not_null())
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    // JSON-encoded array of strings
                    .col(ColumnDef::new(Projects::Technologies).text().null())
                    .col(ColumnDef::new(Projects::ProjectUrl).text().not_null())
                    .col(ColumnDef::new(Projects::GithubUrl).text().not_null())
                    .col(ColumnDef::new(Projects::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(Projects::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing order: featured first, newest first
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_projects_featured_created_at")
                    .table(Projects::Table)
                    .col(Projects::Featured)
                    .col(Projects::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Projects {
    Table,
    Id,
    Title,
    Description,
    Technologies,
    ProjectUrl,
    GithubUrl,
    ImageUrl,
    Featured,
    CreatedAt,
}
