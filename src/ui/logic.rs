//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑和各种业务处理方法。dispatch 本身不做任何 IO，
//! 需要访问接口时返回 `Command::Request`，由 effects 执行后再以 Action 送回。

use super::actions::{Action, Mutation};
use super::effects::{Command, Request};
use super::state::{App, AppMode, ConfirmAction, EditTarget, Toast};
use crate::models::{CreatePayload, ListQuery, UpdatePayload, VoltagePage};

impl App {
    /// 核心逻辑分发
    pub fn dispatch(&mut self, action: Action) -> Command {
        match action {
            Action::Quit => return Command::Quit,
            Action::Mount => return self.fetch_list(1),
            Action::Refresh => return self.refresh(),
            Action::MoveSelectionUp => self.move_up(),
            Action::MoveSelectionDown => self.move_down(),
            Action::NextPage => return self.next_page(),
            Action::PrevPage => return self.prev_page(),
            Action::ChangePage(page) => return self.change_page(page),

            Action::StartCreate => self.start_create(),
            Action::StartEdit => self.start_edit(),
            Action::StartDelete => self.start_delete(),

            Action::Cancel => self.cancel(),

            Action::Submit => match &self.mode {
                AppMode::Modal(_) => return self.submit_modal(),
                AppMode::Confirm(_) => return self.execute_confirm(),
                AppMode::Normal => {}
            },

            Action::Input(c) => {
                if matches!(self.mode, AppMode::Modal(_)) {
                    self.form.input(c);
                }
            }
            Action::DeleteChar => {
                if matches!(self.mode, AppMode::Modal(_)) {
                    self.form.backspace();
                }
            }
            Action::FocusNext => {
                if matches!(self.mode, AppMode::Modal(_)) {
                    self.form.focus_next();
                }
            }
            Action::FocusPrev => {
                if matches!(self.mode, AppMode::Modal(_)) {
                    self.form.focus_prev();
                }
            }

            Action::ListLoaded {
                page,
                page_size,
                data,
            } => self.apply_list(page, page_size, data),
            Action::ListFailed(message) => {
                self.loading = false;
                self.toast = Some(Toast::error(format!("加载失败: {}", message)));
            }
            Action::MutationDone(mutation) => return self.mutation_done(mutation),
            Action::MutationFailed(_, message) => {
                // 弹窗保持打开，列表不变
                self.toast = Some(Toast::error(message));
            }
        }
        Command::None
    }

    // ============ 列表相关 ============

    /// 请求指定页
    pub fn fetch_list(&mut self, page: u32) -> Command {
        self.loading = true;
        self.pagination.requested = page;
        Command::Request(Request::FetchList(ListQuery {
            page_index: page,
            page_size: self.pagination.page_size,
            scope: self.scope.clone(),
        }))
    }

    fn apply_list(&mut self, page: u32, page_size: u32, data: VoltagePage) {
        self.loading = false;
        self.records = data.voltages;
        self.pagination.total = data.count;
        self.pagination.page_size = page_size;
        self.pagination.current = page;
        self.clamp_selection();
    }

    /// 重新请求最近一次请求的页
    pub fn refresh(&mut self) -> Command {
        self.fetch_list(self.pagination.requested)
    }

    /// 翻页；`current` 在该页加载成功后才更新
    pub fn change_page(&mut self, page: u32) -> Command {
        self.fetch_list(page)
    }

    pub fn next_page(&mut self) -> Command {
        let current = self.pagination.current;
        if current < self.pagination.page_count() {
            self.change_page(current + 1)
        } else {
            Command::None
        }
    }

    pub fn prev_page(&mut self) -> Command {
        let current = self.pagination.current;
        if current > 1 {
            self.change_page(current - 1)
        } else {
            Command::None
        }
    }

    /// 回到第一页并重新加载
    fn reset_to_first_page(&mut self) -> Command {
        self.fetch_list(1)
    }

    // ============ 导航相关 ============

    /// 向上移动选择
    pub fn move_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// 向下移动选择
    pub fn move_down(&mut self) {
        if self.selected_index + 1 < self.records.len() {
            self.selected_index += 1;
        }
    }

    // ============ 弹窗相关 ============

    /// 打开新增弹窗
    pub fn start_create(&mut self) {
        self.form.clear_form();
        self.mode = AppMode::Modal(EditTarget::Create);
    }

    /// 打开编辑弹窗，表单预填选中记录
    pub fn start_edit(&mut self) {
        if let Some(record) = self.selected_record().cloned() {
            self.form.load(&record);
            self.mode = AppMode::Modal(EditTarget::Edit(record));
        }
    }

    /// 提交弹窗表单
    pub fn submit_modal(&mut self) -> Command {
        let AppMode::Modal(target) = &self.mode else {
            return Command::None;
        };
        let scope = &self.scope;
        let submitted = self.form.submit_form(|values| match target {
            EditTarget::Create => (
                Mutation::Create,
                Request::Create(CreatePayload::new(scope, values)),
            ),
            EditTarget::Edit(record) => (
                Mutation::Update,
                Request::Update(UpdatePayload::new(&record.id, values)),
            ),
        });

        match submitted {
            Some((mutation, request)) => {
                self.toast = Some(Toast::loading(mutation.pending_text()));
                Command::Request(request)
            }
            None => Command::None,
        }
    }

    /// 关闭弹窗并清空表单
    pub fn hide_modal_and_clear(&mut self) {
        self.mode = AppMode::Normal;
        self.form.clear_form();
    }

    // ============ 删除相关 ============

    /// 开始删除（弹出确认框）
    pub fn start_delete(&mut self) {
        if let Some(record) = self.selected_record().cloned() {
            self.mode = AppMode::Confirm(ConfirmAction::Delete(record));
        }
    }

    /// 执行确认操作
    pub fn execute_confirm(&mut self) -> Command {
        let mode = std::mem::replace(&mut self.mode, AppMode::Normal);
        match mode {
            AppMode::Confirm(ConfirmAction::Delete(record)) => {
                self.toast = Some(Toast::loading(Mutation::Delete.pending_text()));
                Command::Request(Request::Delete(record.id))
            }
            other => {
                self.mode = other;
                Command::None
            }
        }
    }

    fn mutation_done(&mut self, mutation: Mutation) -> Command {
        self.toast = Some(Toast::success(mutation.success_text()));
        if matches!(mutation, Mutation::Create | Mutation::Update) {
            self.hide_modal_and_clear();
        }
        self.reset_to_first_page()
    }

    // ============ 通用操作 ============

    /// 取消当前操作
    pub fn cancel(&mut self) {
        match self.mode {
            AppMode::Modal(_) => self.hide_modal_and_clear(),
            _ => self.mode = AppMode::Normal,
        }
        self.toast = None;
    }
}
