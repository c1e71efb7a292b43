//! App 状态定义 (Model)
//!
//! 包含应用状态结构体及相关枚举

use super::form::VoltageForm;
use crate::models::{Scope, VoltageRecord};

/// 应用状态
pub struct App {
    pub scope: Scope,
    pub records: Vec<VoltageRecord>,
    pub pagination: PaginationState,
    pub loading: bool,
    pub selected_index: usize,
    pub mode: AppMode,
    pub form: VoltageForm,
    pub toast: Option<Toast>,
}

/// 分页信息，镜像服务端返回的总数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub current: u32,
    pub requested: u32, // 最近一次请求的页，失败后刷新时重试
    pub page_size: u32,
    pub total: u64,
}

impl PaginationState {
    pub fn new(page_size: u32) -> Self {
        Self {
            current: 1,
            requested: 1,
            page_size,
            total: 0,
        }
    }

    /// 总页数，至少为 1
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size.max(1));
        self.total.div_ceil(size).max(1) as u32
    }
}

/// 应用模式
#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Modal(EditTarget),
    Confirm(ConfirmAction),
}

/// 弹窗的编辑对象
#[derive(Debug, Clone, PartialEq)]
pub enum EditTarget {
    Create,
    Edit(VoltageRecord),
}

/// 确认操作类型
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmAction {
    Delete(VoltageRecord),
}

/// 提示消息级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub text: String,
}

impl Toast {
    pub fn loading(text: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Loading,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: ToastLevel::Error,
            text: text.into(),
        }
    }
}

impl App {
    /// 创建新的应用实例
    pub fn new(scope: Scope, page_size: u32) -> Self {
        Self {
            scope,
            records: Vec::new(),
            pagination: PaginationState::new(page_size),
            loading: false,
            selected_index: 0,
            mode: AppMode::Normal,
            form: VoltageForm::new(),
            toast: None,
        }
    }

    /// 获取当前选中的记录
    pub fn selected_record(&self) -> Option<&VoltageRecord> {
        self.records.get(self.selected_index)
    }

    /// 按键后收起已完成的提示；进行中的提示保留
    pub fn dismiss_toast(&mut self) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.level != ToastLevel::Loading)
        {
            self.toast = None;
        }
    }

    /// 确保选中索引有效
    pub fn clamp_selection(&mut self) {
        if self.records.is_empty() {
            self.selected_index = 0;
        } else if self.selected_index >= self.records.len() {
            self.selected_index = self.records.len() - 1;
        }
    }
}
