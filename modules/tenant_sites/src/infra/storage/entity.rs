//! SeaORM entities for database tables

/// Tenant content documents
pub mod content_document {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "content_documents")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,

        /// Brand key of the owning tenant
        pub tenant_key: String,

        /// Body type tag (service, testimonial, ...)
        pub doc_type: String,

        /// draft | published
        pub status: String,

        /// Denormalized from the body for search
        pub title: Option<String>,

        /// Denormalized from the body for search
        pub description: Option<String>,

        /// Tagged document body as JSON
        pub body: Json,

        pub created_at: DateTimeUtc,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Quote form submissions
pub mod prospect {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "prospects")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub tenant_key: String,
        pub name: String,
        pub email: Option<String>,
        pub phone: Option<String>,
        pub project_type: Option<String>,
        pub budget_range: Option<String>,
        pub timeline: Option<String>,
        pub message: Option<String>,
        pub notes: Option<String>,

        /// Extra form fields as a JSON object of strings
        pub details: Json,

        pub status: String,
        pub priority: String,
        pub created_at: DateTimeUtc,
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Chat widget exchanges
pub mod chat_log {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "chat_conversations")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: Uuid,
        pub tenant_key: String,
        pub session_id: String,
        pub user_message: String,
        pub response: String,
        pub model: String,
        pub created_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
