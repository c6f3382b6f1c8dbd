use auto_subject::{Subject, assert_about};
use std::fmt::Debug;

#[derive(Subject)]
pub struct Labelled<'a, T>
where
    T: Debug + Clone,
{
    pub label: &'a str,
    pub values: Vec<T>,
    pub first: Option<T>,
    pub active: &'a bool,
}

fn main() {
    let values = vec![3u8, 1, 2];
    let labelled = Labelled {
        label: "digits",
        first: values.first().cloned(),
        values,
        active: &true,
    };

    let subject = assert_about(AutoLabelled::labelled()).that(&labelled);
    subject.has_label("digits");
    subject.is_active();
    subject.values().contains(&1u8);
    subject.has_values(&[2u8, 3]);
    subject.first().has_value(&3u8);
}
