use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todo::Table)
                    .if_not_exists()
                    .col(pk_auto(Todo::Id))
                    .col(string(Todo::Title))
                    .col(text(Todo::Description).default(""))
                    .col(boolean(Todo::Completed).default(false))
                    .col(string(Todo::Priority).default("medium"))
                    .col(timestamp_with_time_zone_null(Todo::DueDate))
                    .col(
                        timestamp_with_time_zone(Todo::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Todo::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Todo::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_todo_deleted_at")
                    .table(Todo::Table)
                    .col(Todo::DeletedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_todo_deleted_at")
                    .table(Todo::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Todo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Todo {
    Table,
    Id,
    Title,
    Description,
    Completed,
    Priority,
    DueDate,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
