//! JSON 文件设置存储
//!
//! 将全部设置项存为一个 JSON 对象文件（键 → 字符串值），
//! 默认位于平台配置目录下。

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::{StateError, StateResult};
use crate::store::SettingsStore;

/// 获取配置目录路径
fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("admin-console")
}

/// 获取设置数据文件路径
fn get_settings_file() -> PathBuf {
    get_config_dir().join("settings.json")
}

/// 基于 JSON 文件的设置存储
pub struct JsonFileStore {
    /// 数据文件路径
    path: PathBuf,
    /// 内存缓存（`None` 表示尚未从文件加载）
    cache: Mutex<Option<HashMap<String, String>>>,
}

impl JsonFileStore {
    /// 使用默认路径（平台配置目录）创建
    #[must_use]
    pub fn new() -> Self {
        Self::with_path(get_settings_file())
    }

    /// 使用指定文件路径创建（测试用）
    #[must_use]
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path,
            cache: Mutex::new(None),
        }
    }

    /// 数据文件路径
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 确保数据文件所在目录存在
    fn ensure_parent_dir(&self) -> StateResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| StateError::StorageError(e.to_string()))?;
            }
        }
        Ok(())
    }

    /// 从文件加载设置表
    fn load_from_file(&self) -> StateResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let content =
            fs::read_to_string(&self.path).map_err(|e| StateError::StorageError(e.to_string()))?;

        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .map_err(|e| StateError::SerializationError(e.to_string()))?;

        log::debug!("已从 {} 加载 {} 个设置项", self.path.display(), entries.len());
        Ok(entries)
    }

    /// 保存设置表到文件
    fn save_to_file(&self, entries: &HashMap<String, String>) -> StateResult<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| StateError::SerializationError(e.to_string()))?;

        fs::write(&self.path, content).map_err(|e| StateError::StorageError(e.to_string()))?;

        Ok(())
    }

    /// 取缓存；尚未加载时先从文件加载
    fn load_cache(
        &self,
        cache: &mut Option<HashMap<String, String>>,
    ) -> StateResult<HashMap<String, String>> {
        if let Some(entries) = cache.as_ref() {
            return Ok(entries.clone());
        }
        let entries = self.load_from_file()?;
        *cache = Some(entries.clone());
        Ok(entries)
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> StateResult<Option<String>> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        let entries = self.load_cache(&mut cache)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StateResult<()> {
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.load_cache(&mut cache)?;
        entries.insert(key.to_string(), value.to_string());

        self.save_to_file(&entries)?;

        // 写盘成功后更新缓存
        *cache = Some(entries);
        Ok(())
    }
}
