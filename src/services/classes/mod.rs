pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ListCache;
use crate::models::PaginationQuery;
use crate::models::classes::requests::{CreateClasseRequest, UpdateClasseRequest};
use crate::storage::Storage;

// 列表缓存名与失效标签
pub const CLASSES_LIST_NAME: &str = "getClasses";
pub const CLASSES_CACHE_TAG: &str = "classesCache";

pub struct ClasseService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClasseService {
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

    // 获取班级列表（缓存、按角色分区）
    pub async fn list_classes(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, request, query).await
    }

    pub async fn create_classe(
        &self,
        request: &HttpRequest,
        data: CreateClasseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classe(self, request, data).await
    }

    // 根据班级 ID 获取班级信息
    pub async fn get_classe(
        &self,
        request: &HttpRequest,
        classe_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_classe(self, request, classe_id).await
    }

    // 更新班级信息
    pub async fn update_classe(
        &self,
        request: &HttpRequest,
        classe_id: i64,
        data: UpdateClasseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classe(self, request, classe_id, data).await
    }

    // 根据班级 ID 删除班级
    pub async fn delete_classe(
        &self,
        request: &HttpRequest,
        classe_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_classe(self, request, classe_id).await
    }
}
