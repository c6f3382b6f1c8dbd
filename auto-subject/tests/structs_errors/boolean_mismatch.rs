use auto_subject::{Subject, assert_about};

#[derive(Subject)]
pub struct Account {
    pub is_admin: bool,
}

pub fn test_case() {
    let account = Account { is_admin: false };

    assert_about(AutoAccount::account()).that(&account).is_admin();
}
