//! 国际化（i18n）模块
//!
//! 语言包本身由视图层装配，这里只维护语言标识：
//! 持久化的 `locale` 字符串与类型安全的 [`Language`] 之间的映射。

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 简体中文（中国）
    #[default]
    ZhCn,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取所有支持的语言
    #[must_use]
    pub fn all() -> &'static [Language] {
        &[Language::ZhCn, Language::EnUs]
    }

    /// 获取语言的显示名称（使用该语言本身的文字）
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::ZhCn => "简体中文",
            Language::EnUs => "English",
        }
    }

    /// 获取语言代码（与持久化的 `locale` 值一致）
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Language::ZhCn => "zh_CN",
            Language::EnUs => "en_US",
        }
    }

    /// 从语言代码解析
    #[must_use]
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "zh_CN" | "zh" => Some(Language::ZhCn),
            "en_US" | "en" => Some(Language::EnUs),
            _ => None,
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(&self) -> Language {
        match self {
            Language::ZhCn => Language::EnUs,
            Language::EnUs => Language::ZhCn,
        }
    }
}
