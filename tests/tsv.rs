use fileunity::{
    ErrorKind, Key, Record, RowSlice, Selection, TableBuilder, TableData, TsvUnit, Unit,
    UnitError,
};

mod common;

use common::{grid, people, strings};

#[test]
fn read_cell_column_and_row() {
    let table = people();

    assert_eq!(Some("30"), table.get(("age", 0_usize)).unwrap().as_value());
    assert_eq!(
        Selection::Values(strings(&["30", "40"])),
        table.get("age").unwrap()
    );

    let row = table.get(0_usize).unwrap().into_record().unwrap();
    let expected: Record = [("name", "Ann"), ("age", "30")]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(expected, row);
    assert_eq!(vec!["name", "age"], row.keys().collect::<Vec<_>>());
}

#[test]
fn read_label_list() {
    let table = grid();

    assert_eq!(
        Selection::Values(strings(&["c2", "a2"])),
        table.get((vec!["c", "a"], 2_usize)).unwrap()
    );

    let sub = table
        .get((vec!["c", "a"], vec![3_usize, 1]))
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(strings(&["c", "a"]), sub.fieldnames());
    assert_eq!("c3\ta3\nc1\ta1", sub.to_text().unwrap().split_once('\n').unwrap().1);

    let columns = table.get(vec!["b"]).unwrap().into_table().unwrap();
    assert_eq!((4, 1), columns.shape());
}

#[test]
fn read_rows() {
    let table = grid();

    let sliced = table.get(1_usize..3).unwrap().into_table().unwrap();
    assert_eq!(2, sliced.height());
    assert_eq!("a1", sliced.cell("a", 0).unwrap());
    assert_eq!("c2", sliced.cell("c", 1).unwrap());

    let reversed = table
        .get(RowSlice::default().step_by(-1))
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!("a3", reversed.cell("a", 0).unwrap());

    let fancy = table
        .get(Key::List(vec![Key::Index(3), Key::from(0_usize..2)]))
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(
        Selection::Values(strings(&["b3", "b0", "b1"])),
        fancy.get("b").unwrap()
    );
}

#[test]
fn read_rows_past_the_end() {
    let table = people();

    let none = table.get(Key::from(usize::MAX..)).unwrap().into_table().unwrap();
    assert_eq!(0, none.height());

    let stepped = table
        .get(RowSlice::new(Some(1), None, Some(isize::MAX)))
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(1, stepped.height());
    assert_eq!("Bo", stepped.cell("name", 0).unwrap());

    let mut table = table;
    table.delete(0_usize..=usize::MAX).unwrap();
    assert_eq!((0, 2), table.shape());
}

#[test]
fn repeated_rows_are_kept() {
    let table = people();
    let result = table
        .get((vec!["name"], vec![0_usize, 0]))
        .unwrap()
        .into_table()
        .unwrap();

    assert_eq!((2, 1), result.shape());
    assert_eq!("Ann", result.cell("name", 0).unwrap());
    assert_eq!("Ann", result.cell("name", 1).unwrap());
}

#[test]
fn read_errors() {
    let table = people();

    let err = table.get(("height", 0_usize)).unwrap_err();
    assert_eq!(ErrorKind::Key, err.kind());

    let err = table.get(("age", 2_usize)).unwrap_err();
    assert!(matches!(err, UnitError::IndexOutOfRange { index: 2, len: 2 }));
    assert_eq!(ErrorKind::Index, err.kind());

    let err = table
        .get(Key::List(vec![Key::from("age"), Key::Index(0)]))
        .unwrap_err();
    assert_eq!(ErrorKind::Type, err.kind());

    let err = table.get((vec!["age", "age"], vec![0_usize])).unwrap_err();
    assert!(matches!(err, UnitError::DuplicateColumn(_)));
}

#[test]
fn write_cell() {
    let mut table = people();

    table.set(("age", 1_usize), 41_u32).unwrap();
    table.set_cell("name", 0, "Anna").unwrap();
    assert_eq!("41", table.cell("age", 1).unwrap());
    assert_eq!("Anna", table.cell("name", 0).unwrap());

    assert_eq!(
        ErrorKind::Key,
        table.set_cell("height", 0, 1.8).unwrap_err().kind()
    );
    assert_eq!(
        ErrorKind::Index,
        table.set_cell("age", 5, 1).unwrap_err().kind()
    );
}

#[test]
fn update_row_by_record() {
    let mut table = people();

    table.set(1_usize, [("name", "Bea")]).unwrap();

    assert_eq!("Bea", table.cell("name", 1).unwrap());
    assert_eq!("40", table.cell("age", 1).unwrap());
    assert_eq!("Ann", table.cell("name", 0).unwrap());
}

#[test]
fn write_column_and_row_elements() {
    let mut table = grid();

    table
        .set(("b", vec![3_usize, 0]), vec!["x3", "x0"])
        .unwrap();
    assert_eq!(
        Selection::Values(strings(&["x0", "b1", "b2", "x3"])),
        table.get("b").unwrap()
    );

    table.set((vec!["c", "a"], 1_usize), vec!["y", "z"]).unwrap();
    let row = table.row(1).unwrap();
    assert_eq!(vec!["z", "b1", "y"], row.values().collect::<Vec<_>>());
}

#[test]
fn bulk_length_mismatch_writes_nothing() {
    let mut table = grid();
    let before = table.clone();

    let err = table
        .set_column_elements("a", &[0, 1, 2], &["1", "2"])
        .unwrap_err();
    assert!(matches!(
        err,
        UnitError::LengthMismatch {
            targets: 3,
            values: 2
        }
    ));
    assert_eq!(ErrorKind::Value, err.kind());

    assert!(table.set_row_elements(&["a"], 0, &["1", "2"]).is_err());
    assert_eq!(before, table);
}

#[test]
fn bulk_write_is_not_atomic() {
    let mut table = people();

    let err = table
        .set_column_elements("age", &[0, 7], &["1", "2"])
        .unwrap_err();
    assert_eq!(ErrorKind::Index, err.kind());
    assert_eq!("1", table.cell("age", 0).unwrap());
}

#[test]
fn write_block() {
    let mut table = grid();
    let block = TableBuilder::with_columns(["c", "a", "unused"])
        .add_row(["C", "A", "-"])
        .add_row(["CC", "AA", "-"])
        .build()
        .unwrap();

    table
        .set((vec!["a", "c"], vec![2_usize, 0]), &block)
        .unwrap();

    assert_eq!("A", table.cell("a", 2).unwrap());
    assert_eq!("C", table.cell("c", 2).unwrap());
    assert_eq!("AA", table.cell("a", 0).unwrap());
    assert_eq!("CC", table.cell("c", 0).unwrap());
    assert_eq!("b0", table.cell("b", 0).unwrap());
    assert_eq!("a1", table.cell("a", 1).unwrap());
}

#[test]
fn write_block_checks_shape_first() {
    let mut table = grid();
    let before = table.clone();
    let block = TableBuilder::with_columns(["a"])
        .add_row(["A"])
        .build()
        .unwrap();

    let err = table.set_block(&["a", "b"], &[0], &block).unwrap_err();
    assert_eq!(ErrorKind::Key, err.kind());

    let err = table.set_block(&["a"], &[0, 1], &block).unwrap_err();
    assert!(matches!(err, UnitError::LengthMismatch { .. }));
    assert_eq!(before, table);
}

#[test]
fn write_shape_errors() {
    let mut table = people();

    assert!(matches!(
        table.set(0_usize..2, [("name", "X")]),
        Err(UnitError::MultiRowReplace)
    ));
    assert_eq!(
        ErrorKind::NotImplemented,
        table.set(Key::All, [("name", "X")]).unwrap_err().kind()
    );
    assert!(matches!(
        table.set(0_usize, "X"),
        Err(UnitError::UnsupportedValue {
            target: "row",
            found: "value"
        })
    ));
    assert_eq!(
        ErrorKind::Type,
        table.set(("age", 0_usize), vec!["1"]).unwrap_err().kind()
    );
}

#[test]
fn delete_column() {
    let mut table = people();
    table.delete("age").unwrap();

    assert_eq!(strings(&["name"]), table.fieldnames());
    assert_eq!(2, table.height());
    assert_eq!(
        Selection::Values(strings(&["Ann", "Bo"])),
        table.get("name").unwrap()
    );
}

#[test]
fn delete_rows() {
    let mut table = grid();
    table.delete(Key::List(vec![Key::Index(2), Key::Index(0), Key::Index(2)])).unwrap();

    assert_eq!((2, 3), table.shape());
    assert_eq!("a1", table.cell("a", 0).unwrap());
    assert_eq!("a3", table.cell("a", 1).unwrap());

    table.delete(1_usize).unwrap();
    assert_eq!((1, 3), table.shape());
}

#[test]
fn delete_both_axes() {
    let mut table = grid();
    table.delete((vec!["a", "b"], 1_usize..)).unwrap();
    assert_eq!(strings(&["c"]), table.fieldnames());
    assert_eq!(1, table.height());
    assert_eq!("c0", table.cell("c", 0).unwrap());

    table.delete(Key::All).unwrap();
    assert!(table.is_empty());
}

#[test]
fn delete_validates_first() {
    let mut table = grid();
    let before = table.clone();

    assert_eq!(
        ErrorKind::Key,
        table.delete(vec!["a", "zzz"]).unwrap_err().kind()
    );
    assert_eq!(
        ErrorKind::Index,
        table.delete(vec![0_usize, 9]).unwrap_err().kind()
    );
    assert_eq!(before, table);
}

#[test]
fn rename_columns() {
    let mut table = people();
    table.set_fieldnames(["who", "years"]).unwrap();
    assert_eq!("30", table.cell("years", 0).unwrap());

    assert!(matches!(
        table.set_fieldnames(["x", "x"]),
        Err(UnitError::DuplicateColumn(_))
    ));
    assert!(matches!(
        table.set_fieldnames(["x"]),
        Err(UnitError::LengthMismatch { .. })
    ));
    assert_eq!(strings(&["who", "years"]), table.fieldnames());
}

#[test]
fn text_form() {
    let table = people();
    let text = table.to_text().unwrap();
    assert_eq!("name\tage\nAnn\t30\nBo\t40", text);

    let parsed = TsvUnit::by_str(&text).unwrap();
    assert_eq!(table, parsed);
    assert_eq!(table.data(), parsed.data());
}

#[test]
fn text_form_rejects_forbidden() {
    for bad in ["tab\there", "quote\"", "new\nline"] {
        let mut table = people();
        table.set_cell("name", 1, bad).unwrap();
        let err = table.to_text().unwrap_err();
        assert_eq!(ErrorKind::Value, err.kind(), "{bad:?}");
    }
}

#[test]
fn duplicate_labels_on_load() {
    for text in ["a\ta", "a\tb\ta\n1\t2\t3", "x\tx\n1\t2\n3\t4"] {
        assert!(matches!(
            TsvUnit::by_str(text),
            Err(UnitError::DuplicateColumn(_))
        ));
    }
}

#[test]
fn data_is_a_copy() {
    let original = people();
    let mut copy = original.clone();

    let mut data = copy.data();
    data.rows[0][0] = "changed".to_string();
    assert_eq!("Ann", copy.cell("name", 0).unwrap());

    copy.set_cell("name", 0, "Zed").unwrap();
    assert_eq!("Ann", original.cell("name", 0).unwrap());

    copy.set_data(data.clone()).unwrap();
    data.rows[1][0] = "again".to_string();
    assert_eq!("changed", copy.cell("name", 0).unwrap());
    assert_eq!("Bo", copy.cell("name", 1).unwrap());
}

#[test]
fn set_data_validates() {
    let mut table = people();
    let ragged = TableData {
        columns: strings(&["a", "b"]),
        rows: vec![strings(&["1"])],
    };
    assert!(matches!(
        table.set_data(ragged),
        Err(UnitError::RaggedRow { .. })
    ));

    let quoted = TableData {
        columns: strings(&["a"]),
        rows: vec![strings(&["\""])],
    };
    assert_eq!(ErrorKind::Value, table.set_data(quoted).unwrap_err().kind());
    assert_eq!(people(), table);
}

#[test]
fn builder_round_trip() {
    let table = grid();
    let rebuilt = TableBuilder::from(table.clone())
        .add_column("d")
        .set_rows(vec![strings(&["1", "2", "3", "4"])])
        .build()
        .unwrap();
    assert_eq!((1, 4), rebuilt.shape());
    assert_eq!(4, rebuilt.records().next().unwrap().len());
}
