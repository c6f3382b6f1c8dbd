use auto_subject::{Subject, assert_about};

#[derive(Subject)]
pub struct Account {
    pub limit: Option<i64>,
}

pub fn test_case() {
    let account = Account { limit: None };

    assert_about(AutoAccount::account())
        .that(&account)
        .limit()
        .has_value(&500i64);
}
