use serde::Serialize;

use super::entities::EleveWithProfesseur;
use crate::models::common::projection::{Links, ProjectionContext, SINCE_CREATED_AT};
use crate::models::professeurs::responses::ProfesseurRef;

// getEleves 分组的学生投影
#[derive(Debug, Clone, Serialize)]
pub struct EleveView {
    pub id: i64,
    pub prenom: String,
    pub nom: String,
    pub moyenne: f64,
    pub professeur: Option<ProfesseurRef>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl EleveView {
    /// (Eleve, getEleves, version) 的投影映射
    pub fn project(src: &EleveWithProfesseur, ctx: &ProjectionContext) -> Self {
        Self {
            id: src.eleve.id,
            prenom: src.eleve.prenom.clone(),
            nom: src.eleve.nom.clone(),
            moyenne: src.eleve.moyenne,
            professeur: src.professeur.as_ref().map(|p| ProfesseurRef {
                id: p.id,
                nom: p.nom.clone(),
                prenom: p.prenom.clone(),
            }),
            created_at: ctx
                .includes(SINCE_CREATED_AT)
                .then_some(src.eleve.created_at),
            links: Links::for_resource("eleves", src.eleve.id, ctx),
        }
    }
}
