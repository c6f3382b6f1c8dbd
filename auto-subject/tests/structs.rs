#![allow(dead_code)]
use auto_subject::{Subject, assert_about};

#[macro_use]
mod util;

#[derive(Debug, Subject)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub is_admin: bool,
    pub verified: Box<bool>,
    pub roles: Vec<String>,
    pub nickname: Option<String>,
    pub unit: (),
    password: String,
    pub __cache: u64,
}

fn alice() -> User {
    User {
        name: "Alice".to_string(),
        age: 30,
        is_admin: false,
        verified: Box::new(true),
        roles: vec!["editor".to_string(), "viewer".to_string()],
        nickname: Some("Al".to_string()),
        unit: (),
        password: "hunter2".to_string(),
        __cache: 0,
    }
}

#[test]
fn equality() {
    let user = alice();
    let subject = assert_about(AutoUser::user()).that(&user);

    subject.has_name("Alice");
    subject.has_name("Alice".to_string());
    subject.has_age(30u32);
}

#[test]
fn booleans() {
    let user = alice();
    let subject = assert_about(AutoUser::user()).that(&user);

    subject.is_not_admin();
    subject.is_verified();
}

#[test]
fn collections_delegate_and_check_membership() {
    let user = alice();
    let subject = assert_about(AutoUser::user()).that(&user);

    subject.roles().has_size(2);
    subject.roles().contains(&"editor".to_string());
    subject
        .roles()
        .contains_exactly(&["editor".to_string(), "viewer".to_string()]);

    subject.has_roles(&["viewer"]);
    subject.has_roles(&["editor", "viewer"]);
    subject.does_not_have_roles(&["owner"]);
}

#[test]
fn options_delegate() {
    let user = alice();
    let subject = assert_about(AutoUser::user()).that(&user);

    subject.nickname().is_present();
    subject.nickname().has_value(&"Al".to_string());

    let anonymous = User {
        nickname: None,
        ..alice()
    };
    assert_about(AutoUser::user())
        .that(&anonymous)
        .nickname()
        .is_empty();
}

#[test]
fn subjects_can_be_built_directly() {
    let user = alice();
    let subject = AutoUser::new(auto_subject::FailureMetadata::new("alice"), &user);

    subject.has_age(30u32);
}

#[test]
fn configured_names() {
    #[derive(Subject)]
    #[subject(prefix = "", suffix = "Subject")]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }

    #[derive(Subject)]
    #[subject(prefix = "Checked")]
    pub struct Size {
        pub width: u32,
    }

    let point = Point { x: 1, y: -2 };
    let subject = assert_about(PointSubject::point()).that(&point);
    subject.has_x(1);
    subject.has_y(-2);

    assert_about(CheckedSize::size())
        .that(&Size { width: 4 })
        .has_width(4u32);
}

#[test]
fn generic_value_types() {
    #[derive(Subject)]
    pub struct Page<'a, T> {
        pub title: &'a str,
        pub items: Vec<T>,
        pub selected: Option<T>,
    }

    let page = Page {
        title: "inbox",
        items: vec![1u64, 2, 3],
        selected: Some(2u64),
    };
    let subject = assert_about(AutoPage::page()).that(&page);

    subject.has_title("inbox");
    subject.items().contains(&2u64);
    subject.has_items(&[1u64, 3]);
    subject.selected().has_value(&2u64);
}

#[test]
fn raw_and_keyword_names() {
    #[derive(Subject)]
    pub struct Token {
        pub r#type: String,
        pub r#match: bool,
    }

    let token = Token {
        r#type: "ident".to_string(),
        r#match: true,
    };
    let subject = assert_about(AutoToken::token()).that(&token);

    subject.has_type("ident");
    subject.is_match();
}

error_message_test!("structs_errors/value_mismatch.rs", value_mismatch);

error_message_test!("structs_errors/boolean_mismatch.rs", boolean_mismatch);

error_message_test!("structs_errors/negated_boolean.rs", negated_boolean);

error_message_test!("structs_errors/membership_mismatch.rs", membership_mismatch);

error_message_test!("structs_errors/nested_size_mismatch.rs", nested_size_mismatch);
