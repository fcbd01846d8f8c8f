use crate::cache::{ListCache, ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::models::classes::requests::CreateClasseRequest;
use crate::models::eleves::requests::CreateEleveRequest;
use crate::models::professeurs::requests::CreateProfesseurRequest;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<ListCache>,
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>, Box<dyn std::error::Error>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    // 根据配置选择缓存后端
    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Successfully created {} cache backend", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Failed to create {} cache: {}", cache_type, e);

                // 如果配置的缓存失败，尝试回退策略
                if cache_type == "redis" {
                    warn!("Falling back to memory cache");
                    if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                        match fallback_constructor().await {
                            Ok(cache) => {
                                warn!(
                                    "Successfully created fallback Moka (in-memory) cache backend"
                                );
                                return Ok(Arc::from(cache));
                            }
                            Err(fallback_e) => {
                                warn!("Failed to create fallback Moka cache: {}", fallback_e);
                            }
                        }
                    }
                }
            }
        }
    } else {
        warn!("Cache backend '{}' not found in registry", cache_type);

        // 如果找不到配置的缓存类型，尝试默认的内存缓存
        if cache_type != "moka" {
            warn!("Falling back to default memory cache");
            if let Some(fallback_constructor) = get_object_cache_plugin("moka") {
                match fallback_constructor().await {
                    Ok(cache) => {
                        warn!("Successfully created fallback Moka (in-memory) cache backend");
                        return Ok(Arc::from(cache));
                    }
                    Err(fallback_e) => {
                        warn!("Failed to create fallback Moka cache: {}", fallback_e);
                    }
                }
            }
        }
    }

    Err(format!("No cache backend available (tried: {cache_type})").into())
}

/// 初始化演示数据
/// 仅在开发环境且数据库为空时写入示例教师/学生/班级
async fn seed_demo_data(storage: &Arc<dyn Storage>) {
    let config = AppConfig::get();
    if !config.is_development() {
        return;
    }

    // 检查是否已有数据
    match storage.list_professeurs_with_pagination(1, 1).await {
        Ok(professeurs) if !professeurs.is_empty() => {
            debug!("Database already has professeurs, skipping demo seed");
            return;
        }
        Ok(_) => {
            info!("No professeurs found in database, seeding demo data...");
        }
        Err(e) => {
            warn!("Failed to check for existing data: {}, skipping demo seed", e);
            return;
        }
    }

    for i in 0..4 {
        let professeur = match storage
            .create_professeur(CreateProfesseurRequest {
                nom: Some(format!("Nom {i}")),
                prenom: Some(format!("Prénom {i}")),
                tab_classe: None,
                tab_eleve: None,
            })
            .await
        {
            Ok(professeur) => professeur,
            Err(e) => {
                warn!("Failed to seed professeur {}: {}", i, e);
                continue;
            }
        };

        let professeur_id = professeur.professeur.id;

        if let Err(e) = storage
            .create_classe(
                CreateClasseRequest {
                    nom: Some(format!("Classe {i}")),
                    id_professeur: None,
                },
                professeur_id,
            )
            .await
        {
            warn!("Failed to seed classe for professeur {}: {}", professeur_id, e);
        }

        for j in 0..5 {
            if let Err(e) = storage
                .create_eleve(
                    CreateEleveRequest {
                        prenom: Some(format!("Prénom {}", i * 5 + j)),
                        nom: Some(format!("Nom {}", i * 5 + j)),
                        moyenne: Some(((i * 5 + j) % 21) as f64),
                        id_professeur: None,
                    },
                    professeur_id,
                )
                .await
            {
                warn!("Failed to seed eleve for professeur {}: {}", professeur_id, e);
            }
        }
    }

    info!("Demo data seeded");
}

/// 准备服务器启动的上下文
/// 包括存储、缓存等
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Storage backend initialized and migrations completed");

    // 初始化演示数据（如果需要）
    seed_demo_data(&storage).await;

    // 创建缓存实例
    let backend = create_cache().await.expect("Failed to create cache");
    let cache = Arc::new(ListCache::new(
        backend,
        AppConfig::get().cache.default_ttl,
    ));
    warn!("Cache backend initialized");

    StartupContext { storage, cache }
}
