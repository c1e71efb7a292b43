//! 电压设备表单
//!
//! 三个带标签的输入项（调度号、供电范围、设备型号），负责字段焦点、校验与重置。

use crate::models::{VoltageFields, VoltageRecord};

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Number,
    Range,
    Model,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Number, FormField::Range, FormField::Model];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Number => "调度号",
            FormField::Range => "供电范围",
            FormField::Model => "设备型号",
        }
    }

    pub fn required(self) -> bool {
        matches!(self, FormField::Number)
    }

    fn index(self) -> usize {
        match self {
            FormField::Number => 0,
            FormField::Range => 1,
            FormField::Model => 2,
        }
    }
}

/// 校验状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Pristine,
    Valid,
    Invalid,
}

#[derive(Debug, Clone)]
pub struct VoltageForm {
    values: [String; 3],
    errors: [Option<String>; 3],
    pub focus: FormField,
    pub status: FormStatus,
}

impl Default for VoltageForm {
    fn default() -> Self {
        Self::new()
    }
}

impl VoltageForm {
    pub fn new() -> Self {
        Self {
            values: Default::default(),
            errors: Default::default(),
            focus: FormField::Number,
            status: FormStatus::Pristine,
        }
    }

    /// 用已有记录填充表单（编辑模式）
    pub fn load(&mut self, record: &VoltageRecord) {
        self.clear_form();
        self.values = [
            record.number.clone(),
            record.range_or_empty().to_string(),
            record.model_or_empty().to_string(),
        ];
    }

    pub fn value(&self, field: FormField) -> &str {
        &self.values[field.index()]
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors[field.index()].as_deref()
    }

    pub fn input(&mut self, c: char) {
        let idx = self.focus.index();
        self.values[idx].push(c);
        self.errors[idx] = None;
    }

    pub fn backspace(&mut self) {
        let idx = self.focus.index();
        self.values[idx].pop();
        self.errors[idx] = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = FormField::ALL[(self.focus.index() + 1) % FormField::ALL.len()];
    }

    pub fn focus_prev(&mut self) {
        let len = FormField::ALL.len();
        self.focus = FormField::ALL[(self.focus.index() + len - 1) % len];
    }

    /// 校验所有字段；通过时把字段值交给 `on_valid`，否则返回 `None` 且不调用回调
    pub fn submit_form<R>(&mut self, on_valid: impl FnOnce(VoltageFields) -> R) -> Option<R> {
        if !self.validate() {
            return None;
        }
        Some(on_valid(self.values()))
    }

    /// 重置所有字段
    pub fn clear_form(&mut self) {
        *self = Self::new();
    }

    fn values(&self) -> VoltageFields {
        VoltageFields {
            number: self.values[0].clone(),
            range: self.values[1].clone(),
            model: self.values[2].clone(),
        }
    }

    fn validate(&mut self) -> bool {
        let mut valid = true;
        for field in FormField::ALL {
            let idx = field.index();
            if field.required() && self.values[idx].trim().is_empty() {
                self.errors[idx] = Some(format!("请输入{}", field.label()));
                valid = false;
            } else {
                self.errors[idx] = None;
            }
        }
        self.status = if valid {
            FormStatus::Valid
        } else {
            FormStatus::Invalid
        };
        valid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut VoltageForm, s: &str) {
        s.chars().for_each(|c| form.input(c));
    }

    #[test]
    fn test_empty_number_blocks_callback() {
        let mut form = VoltageForm::new();
        form.focus = FormField::Range;
        type_str(&mut form, "北区");

        let mut called = false;
        let result = form.submit_form(|_| called = true);

        assert!(result.is_none());
        assert!(!called);
        assert_eq!(form.status, FormStatus::Invalid);
        assert_eq!(form.error(FormField::Number), Some("请输入调度号"));
    }

    #[test]
    fn test_whitespace_number_is_invalid() {
        let mut form = VoltageForm::new();
        type_str(&mut form, "   ");
        assert!(form.submit_form(|v| v).is_none());
    }

    #[test]
    fn test_valid_submit_yields_values() {
        let mut form = VoltageForm::new();
        type_str(&mut form, "K-9");
        form.focus_next();
        type_str(&mut form, "南区");
        form.focus_next();
        type_str(&mut form, "S13");

        let values = form.submit_form(|v| v).unwrap();
        assert_eq!(values.number, "K-9");
        assert_eq!(values.range, "南区");
        assert_eq!(values.model, "S13");
        assert_eq!(form.status, FormStatus::Valid);
    }

    #[test]
    fn test_typing_clears_field_error() {
        let mut form = VoltageForm::new();
        assert!(form.submit_form(|v| v).is_none());
        form.input('K');
        assert_eq!(form.error(FormField::Number), None);
    }

    #[test]
    fn test_load_and_clear() {
        let record = VoltageRecord {
            id: "r1".to_string(),
            number: "K-1".to_string(),
            range: Some("西区".to_string()),
            model: None,
            sub_id: None,
            trans_id: None,
        };
        let mut form = VoltageForm::new();
        form.load(&record);
        assert_eq!(form.value(FormField::Number), "K-1");
        assert_eq!(form.value(FormField::Range), "西区");
        assert_eq!(form.value(FormField::Model), "");

        form.clear_form();
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.focus, FormField::Number);
        assert_eq!(form.status, FormStatus::Pristine);
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = VoltageForm::new();
        form.focus_prev();
        assert_eq!(form.focus, FormField::Model);
        form.focus_next();
        assert_eq!(form.focus, FormField::Number);
    }
}
