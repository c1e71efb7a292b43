//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::effects::drive;
use super::state::{App, AppMode};
use crate::api::VoltageApi;

/// 根据当前模式和按键获取对应的 Action
pub fn get_action(mode: &AppMode, key: KeyCode) -> Option<Action> {
    match mode {
        AppMode::Normal => match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveSelectionDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveSelectionUp),
            KeyCode::Char(']') | KeyCode::Char('l') | KeyCode::PageDown => Some(Action::NextPage),
            KeyCode::Char('[') | KeyCode::Char('h') | KeyCode::PageUp => Some(Action::PrevPage),
            KeyCode::Char('g') => Some(Action::Refresh),
            KeyCode::Char('a') => Some(Action::StartCreate),
            KeyCode::Char('e') | KeyCode::Enter => Some(Action::StartEdit),
            KeyCode::Char('d') => Some(Action::StartDelete),
            _ => None,
        },
        AppMode::Modal(_) => match key {
            KeyCode::Esc => Some(Action::Cancel),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        AppMode::Confirm(_) => match key {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(Action::Submit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::Cancel),
            _ => None,
        },
    }
}

/// 处理按键事件，返回 `true` 表示退出
pub fn handle_key_event<A, F>(app: &mut App, api: &A, key: KeyCode, on_pending: F) -> io::Result<bool>
where
    A: VoltageApi + ?Sized,
    F: FnMut(&App) -> io::Result<()>,
{
    app.dismiss_toast();
    match get_action(&app.mode, key) {
        Some(action) => drive(app, api, action, on_pending),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::{
        CreatePayload, ListQuery, Scope, UpdatePayload, VoltagePage, VoltageRecord,
    };
    use crate::ui::state::{ConfirmAction, EditTarget, Toast};

    /// 不应被调用的接口
    struct OfflineApi;

    impl VoltageApi for OfflineApi {
        fn get_list(&self, _: &ListQuery) -> Result<VoltagePage, ApiError> {
            Err(ApiError::Decode("offline".to_string()))
        }
        fn create(&self, _: &CreatePayload) -> Result<(), ApiError> {
            Err(ApiError::Decode("offline".to_string()))
        }
        fn update(&self, _: &UpdatePayload) -> Result<(), ApiError> {
            Err(ApiError::Decode("offline".to_string()))
        }
        fn delete(&self, _: &str) -> Result<(), ApiError> {
            Err(ApiError::Decode("offline".to_string()))
        }
    }

    #[test]
    fn test_key_press_dismisses_finished_toast() {
        let mut app = App::new(Scope::None, 8);
        app.toast = Some(Toast::success("删除成功"));

        let quit = handle_key_event(&mut app, &OfflineApi, KeyCode::Char('j'), |_| Ok(())).unwrap();
        assert!(!quit);
        assert_eq!(app.toast, None);

        // 未映射的按键同样收起提示
        app.toast = Some(Toast::error("调度号重复"));
        handle_key_event(&mut app, &OfflineApi, KeyCode::F(5), |_| Ok(())).unwrap();
        assert_eq!(app.toast, None);
    }

    #[test]
    fn test_normal_mode_keys() {
        let mode = AppMode::Normal;
        assert_eq!(get_action(&mode, KeyCode::Char('a')), Some(Action::StartCreate));
        assert_eq!(get_action(&mode, KeyCode::PageDown), Some(Action::NextPage));
        assert_eq!(get_action(&mode, KeyCode::Char('[')), Some(Action::PrevPage));
        assert_eq!(get_action(&mode, KeyCode::Char('x')), None);
    }

    #[test]
    fn test_modal_keys_type_text() {
        let mode = AppMode::Modal(EditTarget::Create);
        // 弹窗中 q 是普通字符
        assert_eq!(get_action(&mode, KeyCode::Char('q')), Some(Action::Input('q')));
        assert_eq!(get_action(&mode, KeyCode::BackTab), Some(Action::FocusPrev));
        assert_eq!(get_action(&mode, KeyCode::Esc), Some(Action::Cancel));
    }

    #[test]
    fn test_confirm_keys() {
        let record = VoltageRecord {
            id: "r1".to_string(),
            number: "K-1".to_string(),
            range: None,
            model: None,
            sub_id: None,
            trans_id: None,
        };
        let mode = AppMode::Confirm(ConfirmAction::Delete(record));
        assert_eq!(get_action(&mode, KeyCode::Char('y')), Some(Action::Submit));
        assert_eq!(get_action(&mode, KeyCode::Char('n')), Some(Action::Cancel));
        assert_eq!(get_action(&mode, KeyCode::Char('d')), None);
    }
}
