use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ads")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub image_path: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub target_url: String,
    pub cta_text: String,
    pub position: String,
    pub is_active: bool,
    pub show_timer: bool,
    #[sea_orm(nullable)]
    pub start_date: Option<DateTimeWithTimeZone>,
    #[sea_orm(nullable)]
    pub end_date: Option<DateTimeWithTimeZone>,
    #[sea_orm(nullable)]
    pub created_by: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::accounts::adapter::outgoing::sea_orm_entity::accounts::Entity",
        from = "Column::CreatedBy",
        to = "crate::accounts::adapter::outgoing::sea_orm_entity::accounts::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Accounts,
}

impl Related<crate::accounts::adapter::outgoing::sea_orm_entity::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Accounts.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        use chrono::Utc;
        use sea_orm::ActiveValue::Set;

        if !insert {
            self.updated_at = Set(Utc::now().into());
        }

        Ok(self)
    }
}
