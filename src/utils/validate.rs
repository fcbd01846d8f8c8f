//! 字段约束校验
//!
//! 校验失败返回每个字段的错误列表，端点以 400 原样序列化给调用者。
//! 错误消息沿用对外契约中的法语文案。

use serde::Serialize;

/// 名称类字段的最大长度（按字符计，不是字节）
pub const NAME_MAX_LEN: usize = 255;
/// 平均分下限
pub const MOYENNE_MIN: f64 = 0.0;
/// 平均分上限
pub const MOYENNE_MAX: f64 = 20.0;

/// 单个字段的校验错误
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub property: String,
    pub message: String,
}

impl FieldError {
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            message: message.into(),
        }
    }
}

// 名称类字段校验
//
// partial 模式下缺失的字段不触发必填错误；
// 提供了字段就必须满足非空与长度约束。
fn check_name(
    property: &str,
    value: Option<&str>,
    partial: bool,
    required_message: &str,
    too_long_message: &str,
    errors: &mut Vec<FieldError>,
) {
    match value {
        None => {
            if !partial {
                errors.push(FieldError::new(property, required_message));
            }
        }
        Some(v) => {
            let len = v.chars().count();
            if len == 0 {
                errors.push(FieldError::new(property, required_message));
            } else if len > NAME_MAX_LEN {
                errors.push(FieldError::new(property, too_long_message));
            }
        }
    }
}

/// 教师字段校验
pub fn validate_professeur(
    nom: Option<&str>,
    prenom: Option<&str>,
    partial: bool,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_name(
        "nom",
        nom,
        partial,
        "Le nom du professeur est obligatoire",
        "Le nom du professeur ne peut pas faire plus de 255 caractères",
        &mut errors,
    );
    check_name(
        "prenom",
        prenom,
        partial,
        "Le prénom du professeur est obligatoire",
        "Le prénom du professeur ne peut pas faire plus de 255 caractères",
        &mut errors,
    );
    errors
}

/// 学生字段校验
///
/// professeur_resolved: 请求中的教师引用是否解析到了已有教师
/// （更新时未提供教师引用视为已解析，保持原值）。
pub fn validate_eleve(
    prenom: Option<&str>,
    nom: Option<&str>,
    moyenne: Option<f64>,
    professeur_resolved: bool,
    partial: bool,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_name(
        "prenom",
        prenom,
        partial,
        "Le prénom de l'élève est obligatoire",
        "Le prénom de l'élève ne peut pas faire plus de 255 caractères",
        &mut errors,
    );
    check_name(
        "nom",
        nom,
        partial,
        "Le nom de l'élève est obligatoire",
        "Le nom de l'élève ne peut pas faire plus de 255 caractères",
        &mut errors,
    );
    match moyenne {
        None => {
            if !partial {
                errors.push(FieldError::new(
                    "moyenne",
                    "La moyenne de l'élève est obligatoire",
                ));
            }
        }
        Some(m) => {
            // 边界值 0 与 20 合法
            if !(MOYENNE_MIN..=MOYENNE_MAX).contains(&m) {
                errors.push(FieldError::new(
                    "moyenne",
                    "La moyenne doit être comprise entre 0 et 20",
                ));
            }
        }
    }
    if !professeur_resolved {
        errors.push(FieldError::new(
            "professeur",
            "Le professeur est obligatoire",
        ));
    }
    errors
}

/// 班级字段校验
pub fn validate_classe(
    nom: Option<&str>,
    professeur_resolved: bool,
    partial: bool,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_name(
        "nom",
        nom,
        partial,
        "Le nom de la classe est obligatoire",
        "Le nom de la classe ne peut pas faire plus de 255 caractères",
        &mut errors,
    );
    if !professeur_resolved {
        errors.push(FieldError::new(
            "professeur",
            "Le professeur est obligatoire",
        ));
    }
    errors
}
