pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明一个对象缓存后端
///
/// 通过 ctor 在程序启动时写入全局注册表，
/// 启动流程按配置中的名称查找并异步构造。
#[macro_export]
macro_rules! declare_cache_backend {
    ($name:expr, $backend:ident) => {
        paste::paste! {
            #[ctor::ctor]
            fn [<__register_cache_backend_ $backend:snake>]() {
                $crate::cache::register::register_cache_backend(
                    $name,
                    std::sync::Arc::new(|| {
                        Box::pin(async {
                            let backend = <$backend>::new()
                                .map_err($crate::errors::ELearnError::cache_connection)?;
                            Ok(Box::new(backend) as Box<dyn $crate::cache::ObjectCache>)
                        })
                            as $crate::cache::register::BoxedCacheBackendFuture
                    }),
                );
            }
        }
    };
}
