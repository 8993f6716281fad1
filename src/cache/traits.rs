use async_trait::async_trait;

/// 缓存查询结果
///
/// `ExistsButNoValue` 用于区分「键不存在」和「后端暂时不可用」两种情况，
/// 避免缓存故障时被误判为未命中而反复回源。
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

/// 对象缓存后端接口
///
/// 所有后端以字符串形式存取，序列化由调用方负责。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// ttl 为 0 时使用后端默认的 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);

    async fn remove(&self, key: &str);

    async fn invalidate_all(&self);
}

/// 声明并注册一个缓存插件
///
/// 通过 ctor 在进程启动时将构造函数写入全局注册表，
/// 运行期再按配置名称查找并实例化。
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache_type:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_plugin_ $cache_type:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let cache = $cache_type::new().map_err(|e| {
                                $crate::errors::IntellGradeError::cache_connection(e)
                            })?;
                            Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
