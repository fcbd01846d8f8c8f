use serde::{Deserialize, Serialize};

use crate::models::professeurs::entities::Professeur;

// 学生业务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Eleve {
    // 学生ID
    pub id: i64,
    // 名
    pub prenom: String,
    // 姓
    pub nom: String,
    // 平均分，区间 [0, 20]
    pub moyenne: f64,
    // 所属教师ID
    pub professeur_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学生及其所属教师
#[derive(Debug, Clone)]
pub struct EleveWithProfesseur {
    pub eleve: Eleve,
    pub professeur: Option<Professeur>,
}
