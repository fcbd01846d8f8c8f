pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ListCache;
use crate::models::PaginationQuery;
use crate::models::eleves::requests::{CreateEleveRequest, UpdateEleveRequest};
use crate::storage::Storage;

// 列表缓存名与失效标签
pub const ELEVES_LIST_NAME: &str = "getEleves";
pub const ELEVES_CACHE_TAG: &str = "elevesCache";

pub struct EleveService {
    storage: Option<Arc<dyn Storage>>,
}

impl EleveService {
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

    // 获取学生列表（缓存、按角色分区）
    pub async fn list_eleves(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_eleves(self, request, query).await
    }

    pub async fn create_eleve(
        &self,
        request: &HttpRequest,
        data: CreateEleveRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_eleve(self, request, data).await
    }

    // 根据学生 ID 获取学生信息
    pub async fn get_eleve(&self, request: &HttpRequest, eleve_id: i64) -> ActixResult<HttpResponse> {
        get::get_eleve(self, request, eleve_id).await
    }

    // 更新学生信息
    pub async fn update_eleve(
        &self,
        request: &HttpRequest,
        eleve_id: i64,
        data: UpdateEleveRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_eleve(self, request, eleve_id, data).await
    }

    // 根据学生 ID 删除学生
    pub async fn delete_eleve(
        &self,
        request: &HttpRequest,
        eleve_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_eleve(self, request, eleve_id).await
    }
}
