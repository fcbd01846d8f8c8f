//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "eleves")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub prenom: String,
    pub nom: String,
    pub moyenne: f64,
    pub professeur_id: i64,
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
    pub fn into_eleve(self) -> crate::models::eleves::entities::Eleve {
        use crate::models::eleves::entities::Eleve;
        use chrono::{DateTime, Utc};

        Eleve {
            id: self.id,
            prenom: self.prenom,
            nom: self.nom,
            moyenne: self.moyenne,
            professeur_id: self.professeur_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
