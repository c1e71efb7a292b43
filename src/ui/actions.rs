//! Action 枚举定义 (Intent)
//!
//! 用户交互与接口结果都转化为明确的语义化 Action

use crate::models::VoltagePage;

/// 用户操作与接口结果
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Mount,
    Refresh,
    MoveSelectionUp,
    MoveSelectionDown,
    NextPage,
    PrevPage,
    ChangePage(u32),

    // 触发特定功能
    StartCreate,
    StartEdit,
    StartDelete,

    // 表单/通用交互
    Cancel,      // Esc / n
    Submit,      // Enter / y
    Input(char), // 输入字符
    DeleteChar,  // Backspace
    FocusNext,   // Tab / Down
    FocusPrev,   // BackTab / Up

    // 接口结果
    ListLoaded {
        page: u32,
        page_size: u32,
        data: VoltagePage,
    },
    ListFailed(String),
    MutationDone(Mutation),
    MutationFailed(Mutation, String),
}

/// 写操作类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
}

impl Mutation {
    pub fn pending_text(self) -> &'static str {
        match self {
            Mutation::Create => "正在添加设备",
            Mutation::Update => "正在更新设备",
            Mutation::Delete => "正在删除",
        }
    }

    pub fn success_text(self) -> &'static str {
        match self {
            Mutation::Create => "添加成功",
            Mutation::Update => "更新成功",
            Mutation::Delete => "删除成功",
        }
    }
}
