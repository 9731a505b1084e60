#[cfg(test)]
mod tests {
    use memdb::{
        COLUMN_EMAIL_SIZE, COLUMN_USERNAME_SIZE, Error, ExecuteError, Executed, MetaCommand,
        PrepareError, Row, Statement, TABLE_MAX_ROWS, Table, execute, execute_insert, execute_select,
        prepare,
    };

    fn insert(table: &mut Table, line: &str) -> Result<(), ExecuteError> {
        let statement = prepare(line)
            .expect("statement should prepare")
            .expect("statement should not be empty");
        match execute(&statement, table)? {
            Executed::Inserted => Ok(()),
            Executed::Selected(_) => panic!("expected an insert"),
        }
    }

    fn select(table: &mut Table) -> Vec<Row> {
        match execute(&Statement::Select, table).expect("select never fails") {
            Executed::Selected(rows) => rows.collect(),
            Executed::Inserted => panic!("expected a select"),
        }
    }

    #[test]
    fn it_prepares_a_noop_for_empty_input() {
        assert_eq!(prepare(""), Ok(None));
    }

    #[test]
    fn it_prepares_select_by_prefix() {
        assert_eq!(prepare("select"), Ok(Some(Statement::Select)));
        assert_eq!(prepare("select * from users"), Ok(Some(Statement::Select)));
    }

    #[test]
    fn it_prepares_an_insert() {
        assert_eq!(
            prepare("insert 1 alice a@b.com"),
            Ok(Some(Statement::Insert(Row::new(1, "alice", "a@b.com"))))
        );
        assert_eq!(
            prepare("insert   2\talice  a@b.com trailing"),
            Ok(Some(Statement::Insert(Row::new(2, "alice", "a@b.com"))))
        );
    }

    #[test]
    fn it_rejects_a_negative_id() {
        assert_eq!(prepare("insert -1 alice a@b.com"), Err(PrepareError::NegativeId));
        assert_eq!(
            prepare("insert -99999999999999999999 alice a@b.com"),
            Err(PrepareError::NegativeId)
        );
    }

    #[test]
    fn it_treats_a_negative_id_with_trailing_text_as_negative() {
        assert_eq!(prepare("insert -5abc alice a@b.com"), Err(PrepareError::NegativeId));
        assert!(matches!(
            prepare("insert 12abc alice a@b.com"),
            Err(PrepareError::MalformedInsert(_))
        ));
        assert!(matches!(
            prepare("insert -0abc alice a@b.com"),
            Err(PrepareError::MalformedInsert(_))
        ));
        assert!(matches!(
            prepare("insert -abc alice a@b.com"),
            Err(PrepareError::MalformedInsert(_))
        ));
        assert_eq!(
            prepare("insert -0 alice a@b.com"),
            Ok(Some(Statement::Insert(Row::new(0, "alice", "a@b.com"))))
        );
    }

    #[test]
    fn it_rejects_fields_that_are_too_long() {
        let username = "a".repeat(COLUMN_USERNAME_SIZE + 1);
        assert_eq!(
            prepare(&format!("insert 1 {username} a@b.com")),
            Err(PrepareError::FieldTooLong)
        );

        let email = "a".repeat(COLUMN_EMAIL_SIZE + 1);
        assert_eq!(
            prepare(&format!("insert 1 alice {email}")),
            Err(PrepareError::FieldTooLong)
        );
    }

    #[test]
    fn it_rejects_an_insert_with_missing_fields() {
        assert_eq!(
            prepare("insert 1 alice"),
            Err(PrepareError::MalformedInsert("insert 1 alice".to_string()))
        );
        assert_eq!(
            prepare("insert"),
            Err(PrepareError::MalformedInsert("insert".to_string()))
        );
    }

    #[test]
    fn it_rejects_an_id_that_is_not_a_u32() {
        assert!(matches!(
            prepare("insert one alice a@b.com"),
            Err(PrepareError::MalformedInsert(_))
        ));
        assert!(matches!(
            prepare("insert 4294967296 alice a@b.com"),
            Err(PrepareError::MalformedInsert(_))
        ));
    }

    #[test]
    fn it_rejects_unknown_statements() {
        let mut table = Table::new();
        assert_eq!(
            prepare("foo"),
            Err(PrepareError::UnrecognizedStatement("foo".to_string()))
        );
        assert_eq!(table.num_rows(), 0);
        assert!(select(&mut table).is_empty());
    }

    #[test]
    fn it_formats_errors_as_user_messages() {
        assert_eq!(PrepareError::NegativeId.to_string(), "Id cannot be negative.");
        assert_eq!(PrepareError::FieldTooLong.to_string(), "String is too long.");
        assert_eq!(
            PrepareError::MalformedInsert("insert 1".to_string()).to_string(),
            "Unrecognized statement: 'insert 1'."
        );
        assert_eq!(ExecuteError::TableFull.to_string(), "Error: Table full.");
    }

    #[test]
    fn it_keeps_user_messages_when_wrapped_in_the_crate_error() {
        let err: Error = PrepareError::UnrecognizedStatement("foo".to_string()).into();
        assert!(matches!(err, Error::Prepare(_)));
        assert_eq!(err.to_string(), "Unrecognized statement: 'foo'.");

        let err: Error = ExecuteError::TableFull.into();
        assert!(matches!(err, Error::Execute(ExecuteError::TableFull)));
        assert_eq!(err.to_string(), "Error: Table full.");
    }

    #[test]
    fn it_parses_meta_commands() {
        assert_eq!(MetaCommand::parse(".exit"), Some(MetaCommand::Exit));
        assert_eq!(MetaCommand::parse(".tables"), Some(MetaCommand::Unrecognized));
        assert_eq!(MetaCommand::parse("select"), None);
    }

    #[test]
    fn it_selects_rows_in_insertion_order() {
        let mut table = Table::new();
        let mut expected = Vec::new();
        for i in (0..30u32).rev() {
            insert(&mut table, &format!("insert {i} user{i} person{i}@example.com"))
                .expect("insert should succeed");
            expected.push(Row::new(i, format!("user{i}"), format!("person{i}@example.com")));
        }

        assert_eq!(select(&mut table), expected);
    }

    #[test]
    fn it_selects_the_same_rows_twice() {
        let mut table = Table::new();
        insert(&mut table, "insert 1 alice a@b.com").expect("insert should succeed");
        insert(&mut table, "insert 2 bob b@c.com").expect("insert should succeed");

        let first: Vec<Row> = execute_select(&table).collect();
        let second: Vec<Row> = execute_select(&table).collect();
        assert_eq!(first, second);
        assert_eq!(execute_select(&table).len(), 2);
    }

    #[test]
    fn it_selects_nothing_from_an_empty_table() {
        let table = Table::new();
        assert_eq!(execute_select(&table).next(), None);
    }

    #[test]
    fn it_rejects_inserts_once_the_table_is_full() {
        let mut table = Table::new();
        for i in 0..TABLE_MAX_ROWS as u32 {
            execute_insert(&Row::new(i, "user", "user@example.com"), &mut table)
                .expect("insert should succeed");
        }
        assert_eq!(table.num_rows(), TABLE_MAX_ROWS);

        let extra = Row::new(u32::MAX, "extra", "extra@example.com");
        assert_eq!(execute_insert(&extra, &mut table), Err(ExecuteError::TableFull));
        assert_eq!(table.num_rows(), TABLE_MAX_ROWS);

        let rows: Vec<Row> = execute_select(&table).collect();
        assert_eq!(rows.len(), TABLE_MAX_ROWS);
        assert!(rows.iter().all(|row| row.id != u32::MAX));
        assert_eq!(rows.last().map(|row| row.id), Some(TABLE_MAX_ROWS as u32 - 1));
    }
}
