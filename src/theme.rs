//! 主题覆盖类型定义
//!
//! 持久化的 JSON 形状与前端组件库的主题覆盖结构保持一致：
//! `{"common":{"primaryColor":"#cd18ff",...}}`

use serde::{Deserialize, Serialize};

/// 主题覆盖配置
///
/// 持久化在 `theme` 键下。字段均为可选，缺失字段在反序列化时
/// 保持为 `None`，不会报错。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeOverrides {
    /// 通用颜色覆盖
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<ThemeCommon>,
}

/// 通用颜色覆盖（主色及其交互态）
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeCommon {
    /// 主色
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,

    /// 主色悬停态
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color_hover: Option<String>,

    /// 主色按下态
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color_pressed: Option<String>,
}

impl Default for ThemeOverrides {
    /// 默认三色配色
    fn default() -> Self {
        Self {
            common: Some(ThemeCommon {
                primary_color: Some("#cd18ff".to_string()),
                primary_color_hover: Some("#CF523A".to_string()),
                primary_color_pressed: Some("#963C2A".to_string()),
            }),
        }
    }
}

impl ThemeOverrides {
    /// 空覆盖（不含任何颜色字段）
    #[must_use]
    pub fn empty() -> Self {
        Self { common: None }
    }
}

/// 展示变量
///
/// 渲染层直接消费的三个"活"颜色值（对应 CSS 自定义属性）。
/// 仅在 [`init_settings`](crate::SettingsState::init_settings) 被调用时
/// 从 [`ThemeOverrides`] 镜像一次，之后不会自动同步。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ThemeVars {
    pub primary_color: Option<String>,
    pub primary_color_hover: Option<String>,
    pub primary_color_pressed: Option<String>,
}
