// An iterator trait object field cannot be cloned, so it is compared as a
// value instead of being streamed.
use auto_subject::{Subject, assert_about};

#[derive(Subject)]
pub struct Feed {
    pub items: Box<dyn Iterator<Item = u8>>,
    pub name: String,
}

fn main() {
    let feed = Feed {
        items: Box::new(vec![1u8, 2].into_iter()),
        name: "news".to_string(),
    };

    assert_about(AutoFeed::feed()).that(&feed).has_name("news");
}
