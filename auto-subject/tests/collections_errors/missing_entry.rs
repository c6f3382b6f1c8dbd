use auto_subject::{Subject, assert_about};
use std::collections::BTreeMap;

#[derive(Subject)]
pub struct Warehouse {
    pub stock: BTreeMap<String, u32>,
}

pub fn test_case() {
    let warehouse = Warehouse {
        stock: BTreeMap::from([("bolt".to_string(), 40)]),
    };

    assert_about(AutoWarehouse::warehouse())
        .that(&warehouse)
        .stock()
        .contains_entry(&"bolt".to_string(), &12u32);
}
