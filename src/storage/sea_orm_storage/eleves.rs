//! 学生存储操作

use super::SeaOrmStorage;
use crate::entity::eleves;
use crate::entity::prelude::{EleveActiveModel, Eleves, Professeurs};
use crate::errors::{EcoleError, Result};
use crate::models::eleves::{
    entities::EleveWithProfesseur,
    requests::{CreateEleveRequest, UpdateEleveRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建学生
    ///
    /// professeur_id 必须由服务层解析校验后传入。
    pub async fn create_eleve_impl(
        &self,
        req: CreateEleveRequest,
        professeur_id: i64,
    ) -> Result<EleveWithProfesseur> {
        let now = chrono::Utc::now().timestamp();

        // 必填字段由服务层校验
        let prenom = req.prenom.ok_or_else(|| {
            EcoleError::database_operation("prenom must be validated before create_eleve")
        })?;
        let nom = req.nom.ok_or_else(|| {
            EcoleError::database_operation("nom must be validated before create_eleve")
        })?;
        let moyenne = req.moyenne.ok_or_else(|| {
            EcoleError::database_operation("moyenne must be validated before create_eleve")
        })?;

        let model = EleveActiveModel {
            prenom: Set(prenom),
            nom: Set(nom),
            moyenne: Set(moyenne),
            professeur_id: Set(professeur_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let eleve = model
            .insert(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("创建学生失败: {e}")))?;

        let professeur = Professeurs::find_by_id(professeur_id)
            .one(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(EleveWithProfesseur {
            eleve: eleve.into_eleve(),
            professeur: professeur.map(|p| p.into_professeur()),
        })
    }

    /// 通过 ID 获取学生及其教师
    pub async fn get_eleve_by_id_impl(&self, id: i64) -> Result<Option<EleveWithProfesseur>> {
        let result = Eleves::find_by_id(id)
            .find_also_related(Professeurs)
            .one(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|(eleve, professeur)| EleveWithProfesseur {
            eleve: eleve.into_eleve(),
            professeur: professeur.map(|p| p.into_professeur()),
        }))
    }

    /// 分页列出学生
    pub async fn list_eleves_with_pagination_impl(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<EleveWithProfesseur>> {
        let page = page.max(1);
        let limit = limit.max(1);

        let paginator = Eleves::find()
            .find_also_related(Professeurs)
            .order_by_asc(eleves::Column::Id)
            .paginate(&self.db, limit);

        // 越界页返回空列表，不报错
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(eleve, professeur)| EleveWithProfesseur {
                eleve: eleve.into_eleve(),
                professeur: professeur.map(|p| p.into_professeur()),
            })
            .collect())
    }

    /// 更新学生信息
    ///
    /// 仅更新提供的字段；professeur_id 为已解析的新教师。
    pub async fn update_eleve_impl(
        &self,
        id: i64,
        update: UpdateEleveRequest,
        professeur_id: Option<i64>,
    ) -> Result<Option<EleveWithProfesseur>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EcoleError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Eleves::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询学生失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = EleveActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(prenom) = update.prenom {
            model.prenom = Set(prenom);
        }

        if let Some(nom) = update.nom {
            model.nom = Set(nom);
        }

        if let Some(moyenne) = update.moyenne {
            model.moyenne = Set(moyenne);
        }

        if let Some(pid) = professeur_id {
            model.professeur_id = Set(pid);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("更新学生失败: {e}")))?;

        let refreshed = Eleves::find_by_id(id)
            .find_also_related(Professeurs)
            .one(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询学生失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EcoleError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(refreshed.map(|(eleve, professeur)| EleveWithProfesseur {
            eleve: eleve.into_eleve(),
            professeur: professeur.map(|p| p.into_professeur()),
        }))
    }

    /// 删除学生
    pub async fn delete_eleve_impl(&self, id: i64) -> Result<bool> {
        let result = Eleves::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
