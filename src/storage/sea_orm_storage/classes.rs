//! 班级存储操作

use super::SeaOrmStorage;
use crate::entity::classes;
use crate::entity::prelude::{ClasseActiveModel, Classes, Professeurs};
use crate::errors::{EcoleError, Result};
use crate::models::classes::{
    entities::ClasseWithProfesseur,
    requests::{CreateClasseRequest, UpdateClasseRequest},
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 创建班级
    ///
    /// professeur_id 必须由服务层解析校验后传入。
    pub async fn create_classe_impl(
        &self,
        req: CreateClasseRequest,
        professeur_id: i64,
    ) -> Result<ClasseWithProfesseur> {
        let now = chrono::Utc::now().timestamp();

        // 必填字段由服务层校验
        let nom = req.nom.ok_or_else(|| {
            EcoleError::database_operation("nom must be validated before create_classe")
        })?;

        let model = ClasseActiveModel {
            nom: Set(nom),
            professeur_id: Set(Some(professeur_id)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let classe = model
            .insert(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("创建班级失败: {e}")))?;

        let professeur = Professeurs::find_by_id(professeur_id)
            .one(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(ClasseWithProfesseur {
            classe: classe.into_classe(),
            professeur: professeur.map(|p| p.into_professeur()),
        })
    }

    /// 通过 ID 获取班级及其教师
    pub async fn get_classe_by_id_impl(&self, id: i64) -> Result<Option<ClasseWithProfesseur>> {
        let result = Classes::find_by_id(id)
            .find_also_related(Professeurs)
            .one(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询班级失败: {e}")))?;

        Ok(result.map(|(classe, professeur)| ClasseWithProfesseur {
            classe: classe.into_classe(),
            professeur: professeur.map(|p| p.into_professeur()),
        }))
    }

    /// 分页列出班级
    pub async fn list_classes_with_pagination_impl(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<ClasseWithProfesseur>> {
        let page = page.max(1);
        let limit = limit.max(1);

        let paginator = Classes::find()
            .find_also_related(Professeurs)
            .order_by_asc(classes::Column::Id)
            .paginate(&self.db, limit);

        // 越界页返回空列表，不报错
        let rows = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询班级列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(classe, professeur)| ClasseWithProfesseur {
                classe: classe.into_classe(),
                professeur: professeur.map(|p| p.into_professeur()),
            })
            .collect())
    }

    /// 更新班级信息
    ///
    /// 仅更新提供的字段；professeur_id 为已解析的新教师。
    pub async fn update_classe_impl(
        &self,
        id: i64,
        update: UpdateClasseRequest,
        professeur_id: Option<i64>,
    ) -> Result<Option<ClasseWithProfesseur>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EcoleError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Classes::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询班级失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ClasseActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(nom) = update.nom {
            model.nom = Set(nom);
        }

        if let Some(pid) = professeur_id {
            model.professeur_id = Set(Some(pid));
        }

        model
            .update(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("更新班级失败: {e}")))?;

        let refreshed = Classes::find_by_id(id)
            .find_also_related(Professeurs)
            .one(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询班级失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EcoleError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(refreshed.map(|(classe, professeur)| ClasseWithProfesseur {
            classe: classe.into_classe(),
            professeur: professeur.map(|p| p.into_professeur()),
        }))
    }

    /// 删除班级
    pub async fn delete_classe_impl(&self, id: i64) -> Result<bool> {
        let result = Classes::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("删除班级失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
