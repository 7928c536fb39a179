//! 会话状态模块
//!
//! 定义两块相互独立的共享状态：管理菜单状态与用户设置状态。

mod admin_menu;
mod settings;

pub use admin_menu::AdminMenuState;
pub use settings::SettingsState;
