//! 教师存储操作
//!
//! 教师是聚合根：创建/更新时的挂接列表与删除时的级联都在
//! 一个事务内完成，保证关联两侧一致。

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::prelude::{
    ClasseActiveModel, Classes, EleveActiveModel, Eleves, ProfesseurActiveModel, ProfesseurModel,
    Professeurs,
};
use crate::entity::{classes, eleves, professeurs};
use crate::errors::{EcoleError, Result};
use crate::models::professeurs::{
    entities::ProfesseurWithRelations,
    requests::{CreateProfesseurRequest, UpdateProfesseurRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建教师
    ///
    /// tabClasse / tabEleve 中解析到的已有班级/学生在同一事务内挂接，
    /// 不存在的 ID 静默跳过。
    pub async fn create_professeur_impl(
        &self,
        req: CreateProfesseurRequest,
    ) -> Result<ProfesseurWithRelations> {
        let now = chrono::Utc::now().timestamp();

        // 必填字段由服务层校验
        let nom = req.nom.ok_or_else(|| {
            EcoleError::database_operation("nom must be validated before create_professeur")
        })?;
        let prenom = req.prenom.ok_or_else(|| {
            EcoleError::database_operation("prenom must be validated before create_professeur")
        })?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EcoleError::database_operation(format!("开启事务失败: {e}")))?;

        let model = ProfesseurActiveModel {
            nom: Set(nom),
            prenom: Set(prenom),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let professeur = model
            .insert(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("创建教师失败: {e}")))?;

        Self::attach_relations(
            &txn,
            professeur.id,
            req.tab_classe.as_deref(),
            req.tab_eleve.as_deref(),
            now,
        )
        .await?;

        let result = Self::load_professeur_with_relations(&txn, professeur).await?;

        txn.commit()
            .await
            .map_err(|e| EcoleError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result)
    }

    /// 通过 ID 获取教师及其关联
    pub async fn get_professeur_by_id_impl(
        &self,
        id: i64,
    ) -> Result<Option<ProfesseurWithRelations>> {
        let result = Professeurs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师失败: {e}")))?;

        match result {
            Some(model) => Ok(Some(
                Self::load_professeur_with_relations(&self.db, model).await?,
            )),
            None => Ok(None),
        }
    }

    /// 教师是否存在
    pub async fn professeur_exists_impl(&self, id: i64) -> Result<bool> {
        let result = Professeurs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师失败: {e}")))?;

        Ok(result.is_some())
    }

    /// 分页列出教师
    pub async fn list_professeurs_with_pagination_impl(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<ProfesseurWithRelations>> {
        let page = page.max(1);
        let limit = limit.max(1);

        let paginator = Professeurs::find()
            .order_by_asc(professeurs::Column::Id)
            .paginate(&self.db, limit);

        // 越界页返回空列表，不报错
        let models = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师列表失败: {e}")))?;

        if models.is_empty() {
            return Ok(Vec::new());
        }

        // 批量加载关联，避免每个教师各查一次
        let ids: Vec<i64> = models.iter().map(|m| m.id).collect();

        let classe_models = Classes::find()
            .filter(classes::Column::ProfesseurId.is_in(ids.clone()))
            .order_by_asc(classes::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询班级列表失败: {e}")))?;

        let eleve_models = Eleves::find()
            .filter(eleves::Column::ProfesseurId.is_in(ids))
            .order_by_asc(eleves::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询学生列表失败: {e}")))?;

        let mut classes_by_prof: HashMap<i64, Vec<_>> = HashMap::new();
        for classe in classe_models {
            if let Some(pid) = classe.professeur_id {
                classes_by_prof.entry(pid).or_default().push(classe.into_classe());
            }
        }

        let mut eleves_by_prof: HashMap<i64, Vec<_>> = HashMap::new();
        for eleve in eleve_models {
            eleves_by_prof
                .entry(eleve.professeur_id)
                .or_default()
                .push(eleve.into_eleve());
        }

        Ok(models
            .into_iter()
            .map(|model| {
                let id = model.id;
                ProfesseurWithRelations {
                    professeur: model.into_professeur(),
                    classes: classes_by_prof.remove(&id).unwrap_or_default(),
                    eleves: eleves_by_prof.remove(&id).unwrap_or_default(),
                }
            })
            .collect())
    }

    /// 更新教师信息
    ///
    /// 仅更新提供的字段；tabClasse / tabEleve 为追加挂接，
    /// 不会解除已有关联。
    pub async fn update_professeur_impl(
        &self,
        id: i64,
        update: UpdateProfesseurRequest,
    ) -> Result<Option<ProfesseurWithRelations>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EcoleError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Professeurs::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师失败: {e}")))?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ProfesseurActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(nom) = update.nom {
            model.nom = Set(nom);
        }

        if let Some(prenom) = update.prenom {
            model.prenom = Set(prenom);
        }

        model
            .update(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("更新教师失败: {e}")))?;

        Self::attach_relations(
            &txn,
            id,
            update.tab_classe.as_deref(),
            update.tab_eleve.as_deref(),
            now,
        )
        .await?;

        let refreshed = Professeurs::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师失败: {e}")))?
            .ok_or_else(|| EcoleError::database_operation("教师在更新事务中消失"))?;

        let result = Self::load_professeur_with_relations(&txn, refreshed).await?;

        txn.commit()
            .await
            .map_err(|e| EcoleError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(Some(result))
    }

    /// 删除教师
    ///
    /// 同一事务内：先删除其学生，再清除其班级上的教师引用，
    /// 最后删除教师本身。
    pub async fn delete_professeur_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EcoleError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Professeurs::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师失败: {e}")))?;
        if existing.is_none() {
            return Ok(false);
        }

        let now = chrono::Utc::now().timestamp();

        Eleves::delete_many()
            .filter(eleves::Column::ProfesseurId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("删除教师的学生失败: {e}")))?;

        Classes::update_many()
            .set(ClasseActiveModel {
                professeur_id: Set(None),
                updated_at: Set(now),
                ..Default::default()
            })
            .filter(classes::Column::ProfesseurId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("清除班级教师引用失败: {e}")))?;

        Professeurs::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| EcoleError::database_operation(format!("删除教师失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EcoleError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(true)
    }

    // 挂接请求中列出的班级/学生：存在的设置教师引用，不存在的静默跳过
    async fn attach_relations<C: ConnectionTrait>(
        db: &C,
        professeur_id: i64,
        classe_ids: Option<&[i64]>,
        eleve_ids: Option<&[i64]>,
        now: i64,
    ) -> Result<()> {
        if let Some(ids) = classe_ids {
            for &classe_id in ids {
                Classes::update_many()
                    .set(ClasseActiveModel {
                        professeur_id: Set(Some(professeur_id)),
                        updated_at: Set(now),
                        ..Default::default()
                    })
                    .filter(classes::Column::Id.eq(classe_id))
                    .exec(db)
                    .await
                    .map_err(|e| {
                        EcoleError::database_operation(format!("挂接班级 {classe_id} 失败: {e}"))
                    })?;
            }
        }

        if let Some(ids) = eleve_ids {
            for &eleve_id in ids {
                Eleves::update_many()
                    .set(EleveActiveModel {
                        professeur_id: Set(professeur_id),
                        updated_at: Set(now),
                        ..Default::default()
                    })
                    .filter(eleves::Column::Id.eq(eleve_id))
                    .exec(db)
                    .await
                    .map_err(|e| {
                        EcoleError::database_operation(format!("挂接学生 {eleve_id} 失败: {e}"))
                    })?;
            }
        }

        Ok(())
    }

    // 加载教师的班级与学生集合
    async fn load_professeur_with_relations<C: ConnectionTrait>(
        db: &C,
        model: ProfesseurModel,
    ) -> Result<ProfesseurWithRelations> {
        let classes = Classes::find()
            .filter(classes::Column::ProfesseurId.eq(model.id))
            .order_by_asc(classes::Column::Id)
            .all(db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师班级失败: {e}")))?
            .into_iter()
            .map(|c| c.into_classe())
            .collect();

        let eleves = Eleves::find()
            .filter(eleves::Column::ProfesseurId.eq(model.id))
            .order_by_asc(eleves::Column::Id)
            .all(db)
            .await
            .map_err(|e| EcoleError::database_operation(format!("查询教师学生失败: {e}")))?
            .into_iter()
            .map(|e| e.into_eleve())
            .collect();

        Ok(ProfesseurWithRelations {
            professeur: model.into_professeur(),
            classes,
            eleves,
        })
    }
}
