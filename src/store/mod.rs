//! 存储层：设置持久化
//!
//! 状态层不直接接触具体存储介质，通过 [`SettingsStore`] trait 注入。
//! 值一律以字符串形式存取，结构化值（主题覆盖）由状态层先行
//! JSON 序列化，与浏览器 localStorage 的存储契约一致。
//!
//! 提供两个适配器：
//! - [`JsonFileStore`]：JSON 文件持久化（生产环境）
//! - [`MemoryStore`]：内存存储（测试与无持久化会话）

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::StateResult;

/// `locale` 设置的存储键
pub const KEY_LOCALE: &str = "locale";

/// 访问令牌的存储键
pub const KEY_ACCESS_TOKEN: &str = "access_token";

/// 主题覆盖的存储键
pub const KEY_THEME: &str = "theme";

/// 设置存储 trait
///
/// 同一会话内保证写后读可见；持久化实现需在重载后保留已写入的值。
/// 存储故障（不可用、配额超限等）原样向调用方传播。
pub trait SettingsStore: Send + Sync {
    /// 读取指定键的值，键不存在时返回 `None`
    fn get(&self, key: &str) -> StateResult<Option<String>>;

    /// 写入指定键的值
    fn set(&self, key: &str, value: &str) -> StateResult<()>;
}
