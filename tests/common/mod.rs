#![allow(dead_code)]

use fileunity::{TableBuilder, TsvUnit};

/// `name`/`age` table with two rows.
pub fn people() -> TsvUnit {
    TableBuilder::with_columns(["name", "age"])
        .add_row(["Ann", "30"])
        .add_row(["Bo", "40"])
        .build()
        .unwrap()
}

/// Three columns, four rows; cell text is `<column><row>`.
pub fn grid() -> TsvUnit {
    let mut builder = TableBuilder::with_columns(["a", "b", "c"]);
    for row in 0..4 {
        builder = builder.add_row(["a", "b", "c"].map(|c| format!("{c}{row}")));
    }
    builder.build().unwrap()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
