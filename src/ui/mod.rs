//! UI 模块
//!
//! 采用 MVI (Model-View-Intent) 架构：
//! - Model (state.rs, form.rs): App 结构体、表单及其状态数据
//! - View (view/): 纯函数，将 State 映射为 UI
//! - Intent (actions.rs): 用户交互与接口结果转化为明确的语义化 Action
//! - Update (logic.rs): 纯 reducer；effects.rs 负责执行其产生的接口请求

pub mod actions;
pub mod effects;
pub mod form;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use actions::Action;
pub use effects::drive;
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
