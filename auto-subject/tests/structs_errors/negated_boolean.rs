use auto_subject::{Subject, assert_about};

#[derive(Subject)]
pub struct Session {
    pub expired: Box<bool>,
}

pub fn test_case() {
    let session = Session {
        expired: Box::new(true),
    };

    assert_about(AutoSession::session()).that(&session).is_not_expired();
}
