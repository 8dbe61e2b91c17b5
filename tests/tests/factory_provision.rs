use schemata::{db::Pool, Factory, Statement};
use tests::{
    assert_err, assert_ok,
    mem::{app_fixture, Table},
    LoggingDriver, MemDriver,
};

fn factory(driver: &MemDriver) -> Factory {
    tests::init_logging();

    Factory::builder()
        .source_schema("app")
        .prefix("fixture")
        .build(Pool::new(driver.clone()).unwrap())
        .unwrap()
}

#[tokio::test]
async fn provision_copies_named_tables_without_rows() {
    let driver = app_fixture();
    let factory = factory(&driver);

    let mut conn = assert_ok!(factory.provision(["users", "posts"]).await);

    assert_eq!(conn.schema(), "fixture_0");
    assert_eq!(
        assert_ok!(conn.current_schema().await).as_deref(),
        Some("fixture_0")
    );
    assert_eq!(
        driver.tables("fixture_0").unwrap(),
        ["posts", "users"].map(String::from)
    );

    for name in ["users", "posts"] {
        let source = driver.table("app", name).unwrap();
        let copy = driver.table("fixture_0", name).unwrap();

        assert_eq!(copy.columns, source.columns);
        assert_eq!(copy.indexes, source.indexes);
        assert_eq!(copy.constraints, source.constraints);
        assert_eq!(copy.rows, 0);
    }

    // The source is untouched.
    assert_eq!(driver.table("app", "users").unwrap().rows, 5);
}

#[tokio::test]
async fn provision_without_tables_creates_an_empty_schema() {
    let driver = app_fixture();
    let factory = factory(&driver);

    let conn = assert_ok!(factory.provision(Vec::<String>::new()).await);

    assert_eq!(driver.tables(conn.schema()), Some(vec![]));
}

#[tokio::test]
async fn provision_twice_yields_independent_schemas() {
    let driver = app_fixture();
    let factory = factory(&driver);

    let one = assert_ok!(factory.provision(["users"]).await);
    let two = assert_ok!(factory.provision(["users", "comments"]).await);

    assert_ne!(one.schema(), two.schema());
    assert_eq!(driver.tables(one.schema()).unwrap(), ["users"]);
    assert_eq!(driver.tables(two.schema()).unwrap(), ["comments", "users"]);

    // Changing one copy does not show up in the other.
    driver.create_table(one.schema(), "users", Table::new(["id"]).rows(1));
    assert_eq!(driver.table(two.schema(), "users").unwrap().rows, 0);
    assert_eq!(driver.table(two.schema(), "users").unwrap().columns.len(), 3);
}

#[tokio::test]
async fn provision_runs_statements_in_order() {
    let driver = app_fixture();
    let logging = LoggingDriver::new(driver.clone());
    let log = logging.ops_log_handle();
    let factory = Factory::new(Pool::new(logging).unwrap(), "app", "fixture");

    assert_ok!(factory.provision(["posts", "users", "comments"]).await);

    assert_eq!(
        log.statements(),
        [
            Statement::create_schema("fixture_0"),
            Statement::set_schema("fixture_0"),
            Statement::create_table_like("fixture_0", "posts", "app"),
            Statement::create_table_like("fixture_0", "users", "app"),
            Statement::create_table_like("fixture_0", "comments", "app"),
        ]
    );
}

#[tokio::test]
async fn missing_table_fails_at_table_creation_and_leaks_the_schema() {
    let driver = app_fixture();
    let logging = LoggingDriver::new(driver.clone());
    let log = logging.ops_log_handle();
    let factory = Factory::new(Pool::new(logging).unwrap(), "app", "fixture");

    let err = assert_err!(factory.provision(["users", "missing", "posts"]).await);

    assert!(err.is_driver());
    assert_eq!(
        err.to_string(),
        "failed to create table `missing` like `app.missing` in schema `fixture_0`: \
         relation \"app.missing\" does not exist"
    );

    // Schema creation and binding succeeded; the failure happened on the second table.
    let ops = log.ops();
    assert_eq!(ops.len(), 4);
    assert!(ops[..3].iter().all(|op| op.response.is_ok()));
    assert!(ops[3].response.is_err());
    assert!(ops[3].stmt.is_create_table_like());

    // The partially populated schema is left behind, not rolled back.
    assert!(driver.has_schema("fixture_0"));
    assert_eq!(driver.tables("fixture_0").unwrap(), ["users"]);

    // The failed session is closed rather than returned to the pool.
    assert_eq!(driver.open_connections(), 0);
}

#[tokio::test]
async fn create_schema_failure_creates_nothing() {
    let driver = app_fixture();
    let factory = factory(&driver);
    driver.fail_when(Statement::is_create_schema, "permission denied for database");

    let err = assert_err!(factory.provision(["users"]).await);

    assert!(err.is_driver());
    assert_eq!(
        err.to_string(),
        "failed to create schema `fixture_0`: permission denied for database"
    );
    assert!(!driver.has_schema("fixture_0"));
    assert_eq!(driver.open_connections(), 0);
}

#[tokio::test]
async fn set_schema_failure_leaks_an_empty_schema() {
    let driver = app_fixture();
    let factory = factory(&driver);
    driver.fail_when(Statement::is_set_schema, "invalid value for parameter");

    let err = assert_err!(factory.provision(["users"]).await);

    assert_eq!(
        err.to_string(),
        "failed to set current schema to `fixture_0`: invalid value for parameter"
    );
    assert_eq!(driver.tables("fixture_0"), Some(vec![]));
    assert_eq!(driver.open_connections(), 0);
}

#[tokio::test]
async fn acquire_failure_creates_nothing() {
    let driver = app_fixture();
    let factory = factory(&driver);
    driver.refuse_connections(true);

    let err = assert_err!(factory.provision(["users"]).await);

    assert!(err.is_connection_pool());
    assert!(err.to_string().contains("connection refused"));
    assert_eq!(driver.schema_names(), ["app", "public"]);

    // The name was never handed out.
    driver.refuse_connections(false);
    let conn = assert_ok!(factory.provision(["users"]).await);
    assert_eq!(conn.schema(), "fixture_0");
}

#[tokio::test]
async fn names_are_not_reused_after_a_failure() {
    let driver = app_fixture();
    let factory = factory(&driver);

    assert_err!(factory.provision(["missing"]).await);
    let conn = assert_ok!(factory.provision(["users"]).await);

    assert_eq!(conn.schema(), "fixture_1");
}
