use serde::{Deserialize, Serialize};

use crate::models::professeurs::entities::Professeur;

// 班级业务实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classe {
    // 班级ID
    pub id: i64,
    // 班级名称
    pub nom: String,
    // 所属教师ID，教师被删除后为空
    pub professeur_id: Option<i64>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 班级及其所属教师
#[derive(Debug, Clone)]
pub struct ClasseWithProfesseur {
    pub classe: Classe,
    pub professeur: Option<Professeur>,
}
