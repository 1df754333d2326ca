//! Database migrations for tenant sites

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250105_000001_create_content_documents::Migration),
            Box::new(m20250105_000002_create_prospects::Migration),
            Box::new(m20250105_000003_create_chat_conversations::Migration),
        ]
    }
}

mod m20250105_000001_create_content_documents {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250105_000001_create_content_documents"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ContentDocuments::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ContentDocuments::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ContentDocuments::TenantKey).string().not_null())
                        .col(ColumnDef::new(ContentDocuments::DocType).string().not_null())
                        .col(ColumnDef::new(ContentDocuments::Status).string().not_null())
                        .col(ColumnDef::new(ContentDocuments::Title).string())
                        .col(ColumnDef::new(ContentDocuments::Description).text())
                        .col(ColumnDef::new(ContentDocuments::Body).json().not_null())
                        .col(
                            ColumnDef::new(ContentDocuments::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(ContentDocuments::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_content_documents_tenant_type")
                        .table(ContentDocuments::Table)
                        .col(ContentDocuments::TenantKey)
                        .col(ContentDocuments::DocType)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ContentDocuments::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ContentDocuments {
        Table,
        Id,
        TenantKey,
        DocType,
        Status,
        Title,
        Description,
        Body,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250105_000002_create_prospects {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250105_000002_create_prospects"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Prospects::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Prospects::Id).uuid().not_null().primary_key())
                        .col(ColumnDef::new(Prospects::TenantKey).string().not_null())
                        .col(ColumnDef::new(Prospects::Name).string().not_null())
                        .col(ColumnDef::new(Prospects::Email).string())
                        .col(ColumnDef::new(Prospects::Phone).string())
                        .col(ColumnDef::new(Prospects::ProjectType).string())
                        .col(ColumnDef::new(Prospects::BudgetRange).string())
                        .col(ColumnDef::new(Prospects::Timeline).string())
                        .col(ColumnDef::new(Prospects::Message).text())
                        .col(ColumnDef::new(Prospects::Notes).text())
                        .col(ColumnDef::new(Prospects::Details).json().not_null())
                        .col(
                            ColumnDef::new(Prospects::Status)
                                .string()
                                .not_null()
                                .default("new"),
                        )
                        .col(
                            ColumnDef::new(Prospects::Priority)
                                .string()
                                .not_null()
                                .default("normal"),
                        )
                        .col(
                            ColumnDef::new(Prospects::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .col(
                            ColumnDef::new(Prospects::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_prospects_tenant_key")
                        .table(Prospects::Table)
                        .col(Prospects::TenantKey)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_prospects_created_at")
                        .table(Prospects::Table)
                        .col(Prospects::CreatedAt)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Prospects::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Prospects {
        Table,
        Id,
        TenantKey,
        Name,
        Email,
        Phone,
        ProjectType,
        BudgetRange,
        Timeline,
        Message,
        Notes,
        Details,
        Status,
        Priority,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20250105_000003_create_chat_conversations {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250105_000003_create_chat_conversations"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(ChatConversations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(ChatConversations::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(ChatConversations::TenantKey).string().not_null())
                        .col(ColumnDef::new(ChatConversations::SessionId).string().not_null())
                        .col(ColumnDef::new(ChatConversations::UserMessage).text().not_null())
                        .col(ColumnDef::new(ChatConversations::Response).text().not_null())
                        .col(ColumnDef::new(ChatConversations::Model).string().not_null())
                        .col(
                            ColumnDef::new(ChatConversations::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null()
                                .default(Expr::current_timestamp()),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ChatConversations::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum ChatConversations {
        Table,
        Id,
        TenantKey,
        SessionId,
        UserMessage,
        Response,
        Model,
        CreatedAt,
    }
}
