use serde::{Deserialize, Serialize};

use crate::models::classes::entities::Classe;
use crate::models::eleves::entities::Eleve;

// 教师业务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Professeur {
    // 教师ID
    pub id: i64,
    // 姓
    pub nom: String,
    // 名
    pub prenom: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 教师及其聚合的班级与学生
//
// 教师是聚合根：班级与学生的归属关系只通过教师侧的 attach 操作
// 或子实体的 idProfesseur 赋值变更，存储层保证两侧一致。
#[derive(Debug, Clone)]
pub struct ProfesseurWithRelations {
    pub professeur: Professeur,
    pub classes: Vec<Classe>,
    pub eleves: Vec<Eleve>,
}
