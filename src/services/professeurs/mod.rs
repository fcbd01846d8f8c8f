pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ListCache;
use crate::models::PaginationQuery;
use crate::models::professeurs::requests::{CreateProfesseurRequest, UpdateProfesseurRequest};
use crate::storage::Storage;

// 列表缓存名与失效标签
pub const PROFESSEURS_LIST_NAME: &str = "getProfesseurs";
pub const PROFESSEURS_CACHE_TAG: &str = "professeursCache";

pub struct ProfesseurService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfesseurService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> Arc<ListCache> {
        request
            .app_data::<actix_web::web::Data<Arc<ListCache>>>()
            .expect("List cache not found in app data")
            .get_ref()
            .clone()
    }

    // 获取教师列表（缓存、按角色分区）
    pub async fn list_professeurs(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_professeurs(self, request, query).await
    }

    pub async fn create_professeur(
        &self,
        request: &HttpRequest,
        data: CreateProfesseurRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_professeur(self, request, data).await
    }

    // 根据教师 ID 获取教师信息
    pub async fn get_professeur(
        &self,
        request: &HttpRequest,
        professeur_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_professeur(self, request, professeur_id).await
    }

    // 更新教师信息
    pub async fn update_professeur(
        &self,
        request: &HttpRequest,
        professeur_id: i64,
        data: UpdateProfesseurRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_professeur(self, request, professeur_id, data).await
    }

    // 根据教师 ID 删除教师
    pub async fn delete_professeur(
        &self,
        request: &HttpRequest,
        professeur_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_professeur(self, request, professeur_id).await
    }
}
