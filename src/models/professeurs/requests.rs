use serde::Deserialize;

// 创建教师请求
//
// tabClasse / tabEleve 为待挂接的已有班级/学生的 ID 列表；
// 无法解析的 ID 会被静默忽略，不产生错误。
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProfesseurRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    #[serde(rename = "tabClasse")]
    pub tab_classe: Option<Vec<i64>>,
    #[serde(rename = "tabEleve")]
    pub tab_eleve: Option<Vec<i64>>,
}

// 更新教师请求
//
// 仅更新请求体中出现的字段；ID 列表是追加语义，不会解除已有挂接。
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfesseurRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    #[serde(rename = "tabClasse")]
    pub tab_classe: Option<Vec<i64>>,
    #[serde(rename = "tabEleve")]
    pub tab_eleve: Option<Vec<i64>>,
}
