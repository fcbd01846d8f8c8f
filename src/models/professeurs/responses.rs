use serde::Serialize;

use super::entities::ProfesseurWithRelations;
use crate::models::common::projection::{Links, ProjectionContext, SINCE_CREATED_AT};

// 教师裁剪视图，嵌入到学生/班级投影中
//
// 不再携带教师自身的关联集合，避免无界的对象图展开。
#[derive(Debug, Clone, Serialize)]
pub struct ProfesseurRef {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
}

// 班级裁剪视图（getProfesseurs 分组内嵌）
#[derive(Debug, Clone, Serialize)]
pub struct ClasseRef {
    pub id: i64,
    pub nom: String,
}

// 学生裁剪视图（getProfesseurs 分组内嵌）
#[derive(Debug, Clone, Serialize)]
pub struct EleveRef {
    pub id: i64,
    pub prenom: String,
    pub nom: String,
    pub moyenne: f64,
}

// getProfesseurs 分组的完整教师投影
#[derive(Debug, Clone, Serialize)]
pub struct ProfesseurView {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    // 历史遗留的单数字段名，属于对外契约
    pub classe: Vec<ClasseRef>,
    pub eleves: Vec<EleveRef>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl ProfesseurView {
    /// (Professeur, getProfesseurs, version) 的投影映射
    pub fn project(src: &ProfesseurWithRelations, ctx: &ProjectionContext) -> Self {
        Self {
            id: src.professeur.id,
            nom: src.professeur.nom.clone(),
            prenom: src.professeur.prenom.clone(),
            classe: src
                .classes
                .iter()
                .map(|c| ClasseRef {
                    id: c.id,
                    nom: c.nom.clone(),
                })
                .collect(),
            eleves: src
                .eleves
                .iter()
                .map(|e| EleveRef {
                    id: e.id,
                    prenom: e.prenom.clone(),
                    nom: e.nom.clone(),
                    moyenne: e.moyenne,
                })
                .collect(),
            created_at: ctx
                .includes(SINCE_CREATED_AT)
                .then_some(src.professeur.created_at),
            links: Links::for_resource("professeurs", src.professeur.id, ctx),
        }
    }
}
