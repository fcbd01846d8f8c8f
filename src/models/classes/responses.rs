use serde::Serialize;

use super::entities::ClasseWithProfesseur;
use crate::models::common::projection::{Links, ProjectionContext, SINCE_CREATED_AT};
use crate::models::professeurs::responses::ProfesseurRef;

// getClasses 分组的班级投影
#[derive(Debug, Clone, Serialize)]
pub struct ClasseView {
    pub id: i64,
    pub nom: String,
    pub professeur: Option<ProfesseurRef>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ClasseView {
    /// (Classe, getClasses, version) 的投影映射
    pub fn project(src: &ClasseWithProfesseur, ctx: &ProjectionContext) -> Self {
        Self {
            id: src.classe.id,
            nom: src.classe.nom.clone(),
            professeur: src.professeur.as_ref().map(|p| ProfesseurRef {
                id: p.id,
                nom: p.nom.clone(),
                prenom: p.prenom.clone(),
            }),
            created_at: ctx
                .includes(SINCE_CREATED_AT)
                .then_some(src.classe.created_at),
            links: Links::for_resource("classes", src.classe.id, ctx),
        }
    }
}
