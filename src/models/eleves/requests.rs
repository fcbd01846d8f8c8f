use serde::Deserialize;

// 创建学生请求
//
// idProfesseur 无法解析为已有教师时被静默忽略，
// 随后由「教师必填」校验决定请求结果。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEleveRequest {
    pub prenom: Option<String>,
    pub nom: Option<String>,
    pub moyenne: Option<f64>,
    #[serde(rename = "idProfesseur")]
    pub id_professeur: Option<i64>,
}

// 更新学生请求，仅更新请求体中出现的字段
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEleveRequest {
    pub prenom: Option<String>,
    pub nom: Option<String>,
    pub moyenne: Option<f64>,
    #[serde(rename = "idProfesseur")]
    pub id_professeur: Option<i64>,
}
