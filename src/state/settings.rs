//! 用户设置状态
//!
//! 语言、访问令牌和主题覆盖三项持久化设置，外加三个只存在于
//! 内存中的展示变量。持久化通过注入的 [`SettingsStore`] 完成。

use std::sync::Arc;

use crate::error::{StateError, StateResult};
use crate::i18n::Language;
use crate::store::{SettingsStore, KEY_ACCESS_TOKEN, KEY_LOCALE, KEY_THEME};
use crate::theme::{ThemeOverrides, ThemeVars};

/// 默认语言代码
const DEFAULT_LOCALE: &str = "zh_CN";

/// 用户设置状态
///
/// 三项持久化字段在构造时从存储加载（缺失键取默认值），
/// setter 先写穿存储、成功后更新内存值。展示变量不持久化，
/// 只在 [`init_settings`](Self::init_settings) 被调用时从
/// `theme_overrides.common` 镜像一次。
pub struct SettingsState {
    store: Arc<dyn SettingsStore>,

    /// 界面语言代码（持久化键 `locale`）
    locale: String,
    /// 访问令牌（持久化键 `access_token`）
    access_token: String,
    /// 主题覆盖（持久化键 `theme`，JSON 字符串）
    theme_overrides: ThemeOverrides,

    /// 展示变量（不持久化）
    vars: ThemeVars,
}

impl SettingsState {
    /// 从存储加载设置
    ///
    /// 存储读取失败或已存值无法解析时原样返回错误。
    pub fn load(store: Arc<dyn SettingsStore>) -> StateResult<Self> {
        let locale = store
            .get(KEY_LOCALE)?
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        let access_token = store.get(KEY_ACCESS_TOKEN)?.unwrap_or_default();

        let theme_overrides = match store.get(KEY_THEME)? {
            Some(json) => serde_json::from_str(&json)
                .map_err(|e| StateError::SerializationError(e.to_string()))?,
            None => ThemeOverrides::default(),
        };

        Ok(Self {
            store,
            locale,
            access_token,
            theme_overrides,
            vars: ThemeVars::default(),
        })
    }

    /// 当前语言代码
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// 设置语言代码并写穿存储
    pub fn set_locale(&mut self, locale: &str) -> StateResult<()> {
        self.store.set(KEY_LOCALE, locale)?;
        self.locale = locale.to_string();
        Ok(())
    }

    /// 当前语言（无法识别的代码回落到默认语言）
    #[must_use]
    pub fn language(&self) -> Language {
        Language::from_code(&self.locale).unwrap_or_default()
    }

    /// 当前访问令牌（未登录时为空字符串）
    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// 设置访问令牌并写穿存储
    pub fn set_access_token(&mut self, token: &str) -> StateResult<()> {
        self.store.set(KEY_ACCESS_TOKEN, token)?;
        self.access_token = token.to_string();
        Ok(())
    }

    /// 当前主题覆盖
    #[must_use]
    pub fn theme_overrides(&self) -> &ThemeOverrides {
        &self.theme_overrides
    }

    /// 设置主题覆盖并写穿存储
    ///
    /// 展示变量不会自动刷新，调用方在需要时重新执行
    /// [`init_settings`](Self::init_settings)。
    pub fn set_theme_overrides(&mut self, overrides: ThemeOverrides) -> StateResult<()> {
        let json = serde_json::to_string(&overrides)
            .map_err(|e| StateError::SerializationError(e.to_string()))?;
        self.store.set(KEY_THEME, &json)?;
        self.theme_overrides = overrides;
        Ok(())
    }

    /// 初始化展示变量
    ///
    /// 将 `theme_overrides.common` 中的三个颜色字段镜像到展示变量；
    /// 缺失的字段镜像为 `None`，不报错。一次性操作，之后的主题
    /// 变更不会自动传播。
    pub fn init_settings(&mut self) {
        let common = self.theme_overrides.common.as_ref();
        self.vars.primary_color = common.and_then(|c| c.primary_color.clone());
        self.vars.primary_color_hover = common.and_then(|c| c.primary_color_hover.clone());
        self.vars.primary_color_pressed = common.and_then(|c| c.primary_color_pressed.clone());
    }

    /// 当前展示变量
    #[must_use]
    pub fn theme_vars(&self) -> &ThemeVars {
        &self.vars
    }
}
