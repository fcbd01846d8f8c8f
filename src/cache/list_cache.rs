//! 列表响应缓存
//!
//! 缓存序列化后的列表响应，键由列表名、页码、每页条数和调用者的
//! 角色集合（排序后逗号拼接）构成，保证不同权限的调用者不会互相
//! 看到对方的投影。每个条目归属一个实体类型标签，任何对该实体的
//! 成功写操作按标签整体失效。
//!
//! 并发未命中同一个键时通过每键互斥锁收敛为一次计算，其余请求
//! 等待后复读。后端故障降级为直接计算，不影响请求。

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::cache::{CacheResult, ObjectCache};
use crate::errors::Result;

pub struct ListCache {
    backend: Arc<dyn ObjectCache>,
    ttl: u64,
    // 标签 -> 归属该标签的键集合
    tags: DashMap<String, HashSet<String>>,
    // 键 -> 单飞锁
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl ListCache {
    pub fn new(backend: Arc<dyn ObjectCache>, ttl: u64) -> Self {
        Self {
            backend,
            ttl,
            tags: DashMap::new(),
            locks: DashMap::new(),
        }
    }

    /// 构造列表缓存键：列表名-页码-条数-排序后的角色
    pub fn list_key(list_name: &str, page: u64, limit: u64, roles: &[String]) -> String {
        let mut roles = roles.to_vec();
        roles.sort();
        format!("{}-{}-{}-{}", list_name, page, limit, roles.join(","))
    }

    /// 读取缓存，未命中时计算并回填
    ///
    /// 同一个键的并发未命中最多触发一次 compute。
    pub async fn get_or_compute<F, Fut>(&self, key: &str, tag: &str, compute: F) -> Result<String>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        match self.backend.get_raw(key).await {
            CacheResult::Found(payload) => return Ok(payload),
            CacheResult::NotFound => {}
            CacheResult::ExistsButNoValue => {
                // 后端异常：降级为非缓存路径
                warn!("Cache backend error for key '{}', serving uncached", key);
                return compute().await;
            }
        }

        let lock = self
            .locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let guard = lock.lock().await;

        // 拿到锁后复查，前一个持锁者可能已完成计算
        if let CacheResult::Found(payload) = self.backend.get_raw(key).await {
            drop(guard);
            return Ok(payload);
        }

        let payload = match compute().await {
            Ok(payload) => payload,
            Err(e) => {
                drop(guard);
                self.locks.remove(key);
                return Err(e);
            }
        };

        self.backend
            .insert_raw(key.to_string(), payload.clone(), self.ttl)
            .await;
        self.tags
            .entry(tag.to_string())
            .or_default()
            .insert(key.to_string());
        debug!("Cached list response under key '{}' (tag: {})", key, tag);

        drop(guard);
        self.locks.remove(key);
        Ok(payload)
    }

    /// 按标签整体失效
    pub async fn invalidate_tag(&self, tag: &str) {
        if let Some((_, keys)) = self.tags.remove(tag) {
            debug!("Invalidating {} cached entries tagged '{}'", keys.len(), tag);
            for key in keys {
                self.backend.remove(&key).await;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    // 内存测试后端
    #[derive(Default)]
    struct TestBackend {
        inner: RwLock<HashMap<String, String>>,
        broken: bool,
    }

    #[async_trait]
    impl ObjectCache for TestBackend {
        async fn get_raw(&self, key: &str) -> CacheResult<String> {
            if self.broken {
                return CacheResult::ExistsButNoValue;
            }
            match self.inner.read().await.get(key) {
                Some(v) => CacheResult::Found(v.clone()),
                None => CacheResult::NotFound,
            }
        }

        async fn insert_raw(&self, key: String, value: String, _ttl: u64) {
            if !self.broken {
                self.inner.write().await.insert(key, value);
            }
        }

        async fn remove(&self, key: &str) {
            self.inner.write().await.remove(key);
        }

        async fn invalidate_all(&self) {
            self.inner.write().await.clear();
        }
    }

    #[test]
    fn test_list_key_sorts_roles() {
        let unordered = vec!["ROLE_USER".to_string(), "ROLE_ADMIN".to_string()];
        let ordered = vec!["ROLE_ADMIN".to_string(), "ROLE_USER".to_string()];
        assert_eq!(
            ListCache::list_key("getClasses", 1, 3, &unordered),
            ListCache::list_key("getClasses", 1, 3, &ordered),
        );
        assert_eq!(
            ListCache::list_key("getClasses", 1, 3, &ordered),
            "getClasses-1-3-ROLE_ADMIN,ROLE_USER"
        );
    }

    #[test]
    fn test_list_key_partitions_by_parameters() {
        let roles = vec!["ROLE_USER".to_string()];
        let base = ListCache::list_key("getEleves", 1, 3, &roles);
        assert_ne!(base, ListCache::list_key("getEleves", 2, 3, &roles));
        assert_ne!(base, ListCache::list_key("getEleves", 1, 5, &roles));
        assert_ne!(base, ListCache::list_key("getProfesseurs", 1, 3, &roles));
    }

    #[tokio::test]
    async fn test_concurrent_misses_compute_once() {
        let cache = Arc::new(ListCache::new(Arc::new(TestBackend::default()), 60));
        let calls = Arc::new(AtomicUsize::new(0));

        let mut futures = Vec::new();
        for _ in 0..8 {
            let cache = cache.clone();
            let calls = calls.clone();
            futures.push(async move {
                cache
                    .get_or_compute("getClasses-1-3-ROLE_USER", "classesCache", || async move {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                        Ok("[]".to_string())
                    })
                    .await
            });
        }

        let results = futures_util::future::join_all(futures).await;
        for result in results {
            assert_eq!(result.unwrap(), "[]");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_tag_invalidation_evicts_all_entries() {
        let cache = ListCache::new(Arc::new(TestBackend::default()), 60);
        let calls = Arc::new(AtomicUsize::new(0));

        let compute = |calls: Arc<AtomicUsize>| {
            move || async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("payload".to_string())
            }
        };

        cache
            .get_or_compute("getClasses-1-3-", "classesCache", compute(calls.clone()))
            .await
            .unwrap();
        cache
            .get_or_compute("getClasses-2-3-", "classesCache", compute(calls.clone()))
            .await
            .unwrap();
        cache
            .get_or_compute("getEleves-1-3-", "elevesCache", compute(calls.clone()))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        // 命中，不会触发计算
        cache
            .get_or_compute("getClasses-1-3-", "classesCache", compute(calls.clone()))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 3);

        cache.invalidate_tag("classesCache").await;

        // 标签下的所有页都被驱逐，其他标签不受影响
        cache
            .get_or_compute("getClasses-1-3-", "classesCache", compute(calls.clone()))
            .await
            .unwrap();
        cache
            .get_or_compute("getClasses-2-3-", "classesCache", compute(calls.clone()))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 5);

        cache
            .get_or_compute("getEleves-1-3-", "elevesCache", compute(calls.clone()))
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_backend_failure_degrades_to_uncached() {
        let backend = Arc::new(TestBackend {
            inner: RwLock::new(HashMap::new()),
            broken: true,
        });
        let cache = ListCache::new(backend, 60);
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..2 {
            let calls = calls.clone();
            let payload = cache
                .get_or_compute("getClasses-1-3-", "classesCache", || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok("direct".to_string())
                })
                .await
                .unwrap();
            assert_eq!(payload, "direct");
        }
        // 后端不可用时每次都直接计算
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_compute_error_is_propagated_and_lock_released() {
        let cache = ListCache::new(Arc::new(TestBackend::default()), 60);

        let err = cache
            .get_or_compute("getClasses-1-3-", "classesCache", || async {
                Err(crate::errors::EcoleError::database_operation("boom"))
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), "E005");

        // 失败不会留下条目或死锁，后续计算正常
        let payload = cache
            .get_or_compute("getClasses-1-3-", "classesCache", || async {
                Ok("ok".to_string())
            })
            .await
            .unwrap();
        assert_eq!(payload, "ok");
    }
}
