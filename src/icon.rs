//! 图标描述辅助函数
//!
//! 状态层不渲染图标，只向视图层提供纯数据描述。

/// 默认图标尺寸（像素）
pub const DEFAULT_ICON_SIZE: u32 = 24;

/// 图标描述
///
/// `name` 为图标标识符（如 `"mdi:menu"`），尺寸由视图层解释。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icon {
    pub name: String,
    pub height: u32,
    pub width: u32,
}

/// 按默认尺寸（24×24）生成图标描述
#[must_use]
pub fn render_icon(name: &str) -> Icon {
    render_icon_sized(name, DEFAULT_ICON_SIZE, DEFAULT_ICON_SIZE)
}

/// 按指定尺寸生成图标描述
#[must_use]
pub fn render_icon_sized(name: &str, height: u32, width: u32) -> Icon {
    Icon {
        name: name.to_string(),
        height,
        width,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_size_is_24() {
        let icon = render_icon("mdi:menu");
        assert_eq!(icon.name, "mdi:menu");
        assert_eq!(icon.height, 24);
        assert_eq!(icon.width, 24);
    }

    #[test]
    fn explicit_size_is_kept() {
        let icon = render_icon_sized("mdi:close", 16, 32);
        assert_eq!(icon.height, 16);
        assert_eq!(icon.width, 32);
    }
}
