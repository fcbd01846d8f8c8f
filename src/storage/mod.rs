use std::sync::Arc;

use crate::models::{
    classes::{
        entities::ClasseWithProfesseur,
        requests::{CreateClasseRequest, UpdateClasseRequest},
    },
    eleves::{
        entities::EleveWithProfesseur,
        requests::{CreateEleveRequest, UpdateEleveRequest},
    },
    professeurs::{
        entities::ProfesseurWithRelations,
        requests::{CreateProfesseurRequest, UpdateProfesseurRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 教师管理方法
    // 创建教师，并在同一事务内挂接请求中解析到的班级/学生
    async fn create_professeur(
        &self,
        professeur: CreateProfesseurRequest,
    ) -> Result<ProfesseurWithRelations>;
    // 通过ID获取教师及其关联
    async fn get_professeur_by_id(&self, id: i64) -> Result<Option<ProfesseurWithRelations>>;
    // 教师是否存在（用于解析请求中的教师引用）
    async fn professeur_exists(&self, id: i64) -> Result<bool>;
    // 分页列出教师，按 ID 升序，越界页返回空列表
    async fn list_professeurs_with_pagination(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<ProfesseurWithRelations>>;
    // 更新教师信息，仅更新提供的字段；ID 列表是追加语义
    async fn update_professeur(
        &self,
        id: i64,
        update: UpdateProfesseurRequest,
    ) -> Result<Option<ProfesseurWithRelations>>;
    // 删除教师：同一事务内先删除其学生，再清除其班级上的引用
    async fn delete_professeur(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    // 创建学生，professeur_id 必须已由服务层解析校验
    async fn create_eleve(
        &self,
        eleve: CreateEleveRequest,
        professeur_id: i64,
    ) -> Result<EleveWithProfesseur>;
    // 通过ID获取学生及其教师
    async fn get_eleve_by_id(&self, id: i64) -> Result<Option<EleveWithProfesseur>>;
    // 分页列出学生
    async fn list_eleves_with_pagination(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<EleveWithProfesseur>>;
    // 更新学生信息，professeur_id 为已解析的新教师（未提供则为 None）
    async fn update_eleve(
        &self,
        id: i64,
        update: UpdateEleveRequest,
        professeur_id: Option<i64>,
    ) -> Result<Option<EleveWithProfesseur>>;
    // 删除学生
    async fn delete_eleve(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    // 创建班级，professeur_id 必须已由服务层解析校验
    async fn create_classe(
        &self,
        classe: CreateClasseRequest,
        professeur_id: i64,
    ) -> Result<ClasseWithProfesseur>;
    // 通过ID获取班级及其教师
    async fn get_classe_by_id(&self, id: i64) -> Result<Option<ClasseWithProfesseur>>;
    // 分页列出班级
    async fn list_classes_with_pagination(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<ClasseWithProfesseur>>;
    // 更新班级信息
    async fn update_classe(
        &self,
        id: i64,
        update: UpdateClasseRequest,
        professeur_id: Option<i64>,
    ) -> Result<Option<ClasseWithProfesseur>>;
    // 删除班级
    async fn delete_classe(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
