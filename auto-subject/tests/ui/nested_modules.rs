mod model {
    use auto_subject::Subject;

    #[derive(Subject)]
    pub struct Order {
        pub id: u64,
        pub lines: Vec<Line>,
    }

    #[derive(Debug, PartialEq, Subject)]
    pub struct Line {
        pub sku: String,
        pub quantity: u32,
    }
}

use auto_subject::assert_about;
use model::{AutoLine, AutoOrder, Line, Order};

fn main() {
    let order = Order {
        id: 7,
        lines: vec![Line {
            sku: "A-1".to_string(),
            quantity: 2,
        }],
    };

    let subject = assert_about(AutoOrder::order()).that(&order);
    subject.has_id(7u64);
    subject.lines().has_size(1);

    let line = &order.lines[0];
    let line = assert_about(AutoLine::line()).that(line);
    line.has_sku("A-1");
    line.has_quantity(2u32);
}
