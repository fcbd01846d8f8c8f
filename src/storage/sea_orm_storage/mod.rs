//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod classes;
mod eleves;
mod professeurs;

use crate::config::AppConfig;
use crate::errors::{EcoleError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例（连接 URL 来自配置）
    pub async fn new_async() -> Result<Self> {
        Self::new_with_url(&AppConfig::get().database.url).await
    }

    /// 使用指定连接 URL 创建存储实例（测试中用于内存/临时库）
    pub async fn new_with_url(url: &str) -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| EcoleError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EcoleError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        // 内存库只允许一个常驻连接，连接关闭即丢库
        let is_memory = url.contains(":memory:") || url.contains("mode=memory");
        let max_connections = if is_memory {
            1
        } else {
            config.database.pool_size
        };

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout));

        pool_options = if is_memory {
            pool_options.idle_timeout(None).max_lifetime(None)
        } else {
            pool_options.idle_timeout(Duration::from_secs(300))
        };

        let pool = pool_options
            .connect_with(opt)
            .await
            .map_err(|e| EcoleError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| EcoleError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EcoleError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 教师模块
    async fn create_professeur(
        &self,
        professeur: CreateProfesseurRequest,
    ) -> Result<ProfesseurWithRelations> {
        self.create_professeur_impl(professeur).await
    }

    async fn get_professeur_by_id(&self, id: i64) -> Result<Option<ProfesseurWithRelations>> {
        self.get_professeur_by_id_impl(id).await
    }

    async fn professeur_exists(&self, id: i64) -> Result<bool> {
        self.professeur_exists_impl(id).await
    }

    async fn list_professeurs_with_pagination(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<ProfesseurWithRelations>> {
        self.list_professeurs_with_pagination_impl(page, limit).await
    }

    async fn update_professeur(
        &self,
        id: i64,
        update: UpdateProfesseurRequest,
    ) -> Result<Option<ProfesseurWithRelations>> {
        self.update_professeur_impl(id, update).await
    }

    async fn delete_professeur(&self, id: i64) -> Result<bool> {
        self.delete_professeur_impl(id).await
    }

    // 学生模块
    async fn create_eleve(
        &self,
        eleve: CreateEleveRequest,
        professeur_id: i64,
    ) -> Result<EleveWithProfesseur> {
        self.create_eleve_impl(eleve, professeur_id).await
    }

    async fn get_eleve_by_id(&self, id: i64) -> Result<Option<EleveWithProfesseur>> {
        self.get_eleve_by_id_impl(id).await
    }

    async fn list_eleves_with_pagination(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<EleveWithProfesseur>> {
        self.list_eleves_with_pagination_impl(page, limit).await
    }

    async fn update_eleve(
        &self,
        id: i64,
        update: UpdateEleveRequest,
        professeur_id: Option<i64>,
    ) -> Result<Option<EleveWithProfesseur>> {
        self.update_eleve_impl(id, update, professeur_id).await
    }

    async fn delete_eleve(&self, id: i64) -> Result<bool> {
        self.delete_eleve_impl(id).await
    }

    // 班级模块
    async fn create_classe(
        &self,
        classe: CreateClasseRequest,
        professeur_id: i64,
    ) -> Result<ClasseWithProfesseur> {
        self.create_classe_impl(classe, professeur_id).await
    }

    async fn get_classe_by_id(&self, id: i64) -> Result<Option<ClasseWithProfesseur>> {
        self.get_classe_by_id_impl(id).await
    }

    async fn list_classes_with_pagination(
        &self,
        page: u64,
        limit: u64,
    ) -> Result<Vec<ClasseWithProfesseur>> {
        self.list_classes_with_pagination_impl(page, limit).await
    }

    async fn update_classe(
        &self,
        id: i64,
        update: UpdateClasseRequest,
        professeur_id: Option<i64>,
    ) -> Result<Option<ClasseWithProfesseur>> {
        self.update_classe_impl(id, update, professeur_id).await
    }

    async fn delete_classe(&self, id: i64) -> Result<bool> {
        self.delete_classe_impl(id).await
    }
}
