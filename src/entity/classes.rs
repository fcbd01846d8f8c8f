//! 班级实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nom: String,
    // 删除教师时被置空，见 storage 层的级联逻辑
    pub professeur_id: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::professeurs::Entity",
        from = "Column::ProfesseurId",
        to = "super::professeurs::Column::Id"
    )]
    Professeur,
}

impl Related<super::professeurs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Professeur.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_classe(self) -> crate::models::classes::entities::Classe {
        use crate::models::classes::entities::Classe;
        use chrono::{DateTime, Utc};

        Classe {
            id: self.id,
            nom: self.nom,
            professeur_id: self.professeur_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
