use auto_subject::{Subject, assert_about};

#[derive(Subject)]
pub struct User {
    pub roles: Vec<String>,
}

pub fn test_case() {
    let user = User {
        roles: vec!["editor".to_string()],
    };

    assert_about(AutoUser::user()).that(&user).roles().has_size(3);
}
