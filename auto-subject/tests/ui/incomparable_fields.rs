// Fields without `PartialEq` or `Debug` still get a subject; only calling
// their equality method would need them.
use auto_subject::{Subject, assert_about};

struct Opaque;

#[derive(Subject)]
struct Envelope {
    pub payload: Opaque,
    pub sealed: bool,
}

fn main() {
    let envelope = Envelope {
        payload: Opaque,
        sealed: true,
    };

    assert_about(AutoEnvelope::envelope()).that(&envelope).is_sealed();
}
