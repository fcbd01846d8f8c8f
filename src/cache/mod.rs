//! 缓存层
//!
//! `ObjectCache` 是原始字符串键值缓存的统一抽象，后端（Moka/Redis）
//! 通过 `declare_object_cache_plugin!` 在启动前自注册到插件注册表，
//! 运行时按配置选择。`ListCache` 在其上提供列表响应的标签化缓存。

pub mod list_cache;
pub mod object_cache;
pub mod register;

pub use list_cache::ListCache;

use async_trait::async_trait;

/// 缓存读取结果
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    /// 命中
    Found(T),
    /// 未命中
    NotFound,
    /// 后端异常，无法判断是否存在
    ExistsButNoValue,
}

/// 原始对象缓存抽象
///
/// 写操作吞掉后端错误：缓存故障不允许影响请求处理。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明一个缓存后端插件并在程序启动前注册
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_ $cache:snake _plugin>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            let cache = $cache::new()
                                .map_err($crate::errors::EcoleError::cache_connection)?;
                            Ok(::std::boxed::Box::new(cache)
                                as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                        }) as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
