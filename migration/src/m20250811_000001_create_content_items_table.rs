use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContentItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ContentItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ContentItems::Title).string_len(200).not_null())
                    .col(
                        ColumnDef::new(ContentItems::Slug)
                            .string_len(200)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ContentItems::Description).text().not_null())
                    .col(ColumnDef::new(ContentItems::Kind).string_len(10).not_null())
                    .col(ColumnDef::new(ContentItems::FilePath).text().null())
                    .col(ColumnDef::new(ContentItems::YoutubeUrl).text().null())
                    .col(ColumnDef::new(ContentItems::CoverImagePath).text().null())
                    .col(ColumnDef::new(ContentItems::UploadedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(ContentItems::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ContentItems::DownloadCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ContentItems::ViewsCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ContentItems::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ContentItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_content_items_uploaded_by")
                            .from(ContentItems::Table, ContentItems::UploadedBy)
                            .to(Accounts::Table, Accounts::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing and search both order newest-first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_content_items_uploaded_at
                ON content_items (uploaded_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_content_items_uploader
                ON content_items (uploaded_by);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_content_items_uploaded_at;
                DROP INDEX IF EXISTS idx_content_items_uploader;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ContentItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContentItems {
    Table,
    Id,
    Title,
    Slug,
    Description,
    Kind,
    FilePath,
    YoutubeUrl,
    CoverImagePath,
    UploadedBy,
    IsFeatured,
    DownloadCount,
    ViewsCount,
    UploadedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Accounts {
    Table,
    Id,
}
