use notes_api::{
    app::App,
    model::ModelError,
    models::notes::{Model, NoteParams},
    testing,
};
use rstest::rstest;
use serial_test::serial;

fn params(title: Option<&str>, content: Option<&str>) -> NoteParams {
    NoteParams {
        title: title.map(ToString::to_string),
        content: content.map(ToString::to_string),
    }
}

#[tokio::test]
#[serial]
async fn can_create_note() {
    let boot = testing::boot_test::<App>().await.unwrap();

    let note = Model::create(&boot.app_context.db, &params(None, Some("buy milk")))
        .await
        .unwrap();
    assert_eq!(note.title, None);
    assert_eq!(note.content, "buy milk");

    let found = Model::find_by_id(&boot.app_context.db, note.id)
        .await
        .unwrap();
    assert_eq!(found, note);
}

#[rstest]
#[case(params(Some("title"), Some("")))]
#[case(params(Some("title"), None))]
#[tokio::test]
#[serial]
async fn create_requires_content(#[case] params: NoteParams) {
    let boot = testing::boot_test::<App>().await.unwrap();

    let err = Model::create(&boot.app_context.db, &params)
        .await
        .unwrap_err();
    assert!(matches!(err, ModelError::Validation(_)), "{err:?}");
    assert!(Model::list(&boot.app_context.db).await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn edit_ignores_empty_fields() {
    let boot = testing::boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let note = Model::create(db, &params(Some("a"), Some("first")))
        .await
        .unwrap();

    let edited = Model::edit(db, note.id, &params(Some(""), Some("second")))
        .await
        .unwrap();
    assert_eq!(edited.title.as_deref(), Some("a"));
    assert_eq!(edited.content, "second");

    let untouched = Model::edit(db, note.id, &params(None, None)).await.unwrap();
    assert_eq!(untouched, edited);
    assert_eq!(Model::find_by_id(db, note.id).await.unwrap(), edited);
}

#[tokio::test]
#[serial]
async fn missing_notes_are_not_found() {
    let boot = testing::boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;
    let id = uuid::Uuid::new_v4();

    assert!(matches!(
        Model::find_by_id(db, id).await,
        Err(ModelError::EntityNotFound)
    ));
    assert!(matches!(
        Model::edit(db, id, &params(Some("x"), Some("y"))).await,
        Err(ModelError::EntityNotFound)
    ));
    assert!(matches!(
        Model::remove(db, id).await,
        Err(ModelError::EntityNotFound)
    ));
}

#[tokio::test]
#[serial]
async fn can_remove_note() {
    let boot = testing::boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    let keep = Model::create(db, &params(None, Some("keep"))).await.unwrap();
    let gone = Model::create(db, &params(None, Some("drop"))).await.unwrap();

    Model::remove(db, gone.id).await.unwrap();

    assert_eq!(Model::list(db).await.unwrap(), vec![keep]);
    assert!(matches!(
        Model::remove(db, gone.id).await,
        Err(ModelError::EntityNotFound)
    ));
}

#[rstest]
#[case("Groc", vec!["milk"])]
#[case("plumb", vec!["call the plumber"])]
#[case("e", vec!["milk", "call the plumber", "deadline friday"])]
#[case("absent", vec![])]
#[tokio::test]
#[serial]
async fn can_search_title_and_content(#[case] query: &str, #[case] expected: Vec<&str>) {
    let boot = testing::boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    Model::create(db, &params(Some("Groceries"), Some("milk")))
        .await
        .unwrap();
    Model::create(db, &params(None, Some("call the plumber")))
        .await
        .unwrap();
    Model::create(db, &params(Some("Work"), Some("deadline friday")))
        .await
        .unwrap();

    let contents = Model::search(db, query)
        .await
        .unwrap()
        .into_iter()
        .map(|note| note.content)
        .collect::<Vec<_>>();
    assert_eq!(contents, expected);
}

#[rstest]
#[case("groceries", vec![])]
#[case("MILK", vec![])]
#[case("m_lk", vec![])]
#[case("5%f", vec![])]
#[case("_", vec!["rename to snake_case"])]
#[case("50%", vec!["50% off"])]
#[case("snake_case", vec!["rename to snake_case"])]
#[tokio::test]
#[serial]
async fn search_matches_exact_characters(#[case] query: &str, #[case] expected: Vec<&str>) {
    let boot = testing::boot_test::<App>().await.unwrap();
    let db = &boot.app_context.db;

    for (title, content) in [
        (Some("Groceries"), "milk"),
        (None, "50% off"),
        (Some("refactor"), "rename to snake_case"),
    ] {
        Model::create(db, &params(title, Some(content))).await.unwrap();
    }

    let contents = Model::search(db, query)
        .await
        .unwrap()
        .into_iter()
        .map(|note| note.content)
        .collect::<Vec<_>>();
    assert_eq!(contents, expected);
}
