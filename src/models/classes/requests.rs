use serde::Deserialize;

// 创建班级请求
//
// idProfesseur 无法解析为已有教师时被静默忽略，
// 随后由「教师必填」校验决定请求结果。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClasseRequest {
    pub nom: Option<String>,
    #[serde(rename = "idProfesseur")]
    pub id_professeur: Option<i64>,
}

// 更新班级请求，仅更新请求体中出现的字段
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClasseRequest {
    pub nom: Option<String>,
    #[serde(rename = "idProfesseur")]
    pub id_professeur: Option<i64>,
}
