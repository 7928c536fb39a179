//! 管理菜单状态

/// 管理后台侧边菜单的折叠状态
///
/// 仅存在于内存中，整页重载后回到默认值。
#[derive(Debug, Default)]
pub struct AdminMenuState {
    /// 菜单是否折叠
    pub collapsed: bool,
}

impl AdminMenuState {
    /// 创建默认状态（展开）
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换折叠状态
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_expanded() {
        assert!(!AdminMenuState::new().collapsed);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut menu = AdminMenuState::new();
        for initial in [false, true] {
            menu.collapsed = initial;
            menu.toggle_collapsed();
            assert_eq!(menu.collapsed, !initial);
            menu.toggle_collapsed();
            assert_eq!(menu.collapsed, initial);
        }
    }
}
