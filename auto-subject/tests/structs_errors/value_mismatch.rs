use auto_subject::{Subject, assert_about};

#[derive(Subject)]
pub struct User {
    pub name: String,
    pub age: u32,
}

pub fn test_case() {
    let user = User {
        name: "Alice".to_string(),
        age: 30,
    };

    assert_about(AutoUser::user()).that(&user).has_name("Bob");
}
