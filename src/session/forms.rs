use rand::Rng;

pub const ROOM_CODE_LEN: usize = 6;

/// Random 6-digit room code in `[100000, 999999]`. Uniqueness is not checked.
pub fn generate_room_code() -> String {
    rand::thread_rng().gen_range(100_000..=999_999).to_string()
}

/// Keeps the digits of `raw`, capped at `ROOM_CODE_LEN`.
pub fn filter_room_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(ROOM_CODE_LEN)
        .collect()
}

/// Create screen state. The code is rolled once when the form is built.
#[derive(Debug, Clone)]
pub struct CreateForm {
    code: String,
    pub name: String,
}

impl CreateForm {
    pub fn new() -> Self {
        Self {
            code: generate_room_code(),
            name: String::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// `(room_code, user_name)` when the form is complete.
    pub fn submit(&self) -> Option<(String, String)> {
        self.can_submit()
            .then(|| (self.code.clone(), self.name.trim().to_string()))
    }
}

impl Default for CreateForm {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default)]
pub struct JoinForm {
    code: String,
    pub name: String,
}

impl JoinForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Replaces the code with the filtered contents of the input box.
    pub fn set_code(&mut self, raw: &str) {
        self.code = filter_room_code(raw);
    }

    pub fn can_submit(&self) -> bool {
        self.code.len() == ROOM_CODE_LEN && !self.name.trim().is_empty()
    }

    pub fn submit(&self) -> Option<(String, String)> {
        self.can_submit()
            .then(|| (self.code.clone(), self.name.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_code_is_six_digits_in_range() {
        for _ in 0..500 {
            let code = generate_room_code();
            assert_eq!(code.len(), 6);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            let value: u32 = code.parse().unwrap();
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn create_form_keeps_its_code() {
        let mut form = CreateForm::new();
        let code = form.code().to_string();
        form.name.push_str("Alex");
        assert_eq!(form.code(), code);
    }

    #[test]
    fn create_form_requires_name() {
        let mut form = CreateForm::new();
        assert!(form.submit().is_none());

        form.name = "   ".to_string();
        assert!(!form.can_submit());

        form.name = " Alex ".to_string();
        let (code, name) = form.submit().unwrap();
        assert_eq!(code, form.code());
        assert_eq!(name, "Alex");
    }

    #[test]
    fn filter_strips_non_digits_and_caps_length() {
        assert_eq!(filter_room_code("48a2-91 3"), "482913");
        assert_eq!(filter_room_code("12345678"), "123456");
        assert_eq!(filter_room_code("abc"), "");
        assert_eq!(filter_room_code("١٢٣"), "");
    }

    #[test]
    fn join_code_never_holds_non_digits_or_exceeds_six() {
        let mut form = JoinForm::new();
        let mut typed = String::new();
        for key in "4x8 2!9133377abc".chars() {
            typed.push(key);
            form.set_code(&typed);
            assert!(form.code().len() <= ROOM_CODE_LEN);
            assert!(form.code().chars().all(|c| c.is_ascii_digit()));
            typed = form.code().to_string();
        }
        assert_eq!(form.code(), "482913");
    }

    #[test]
    fn join_form_requires_full_code_and_name() {
        let mut form = JoinForm::new();
        form.set_code("48291");
        form.name = "Maria".to_string();
        assert!(!form.can_submit());

        form.set_code("482913");
        assert_eq!(
            form.submit(),
            Some(("482913".to_string(), "Maria".to_string()))
        );

        form.name = " ".to_string();
        assert!(form.submit().is_none());
    }
}
