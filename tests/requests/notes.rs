use axum::body::Bytes;
use insta::{assert_snapshot, with_settings};
use notes_api::{
    app::App,
    models::_entities::notes::Entity,
    testing::{self, TestServer},
    views::notes::NoteResponse,
};
use rstest::rstest;
use sea_orm::{EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use serial_test::serial;

async fn add_note(request: &TestServer, payload: Value) -> NoteResponse {
    let response = request.post("/api/notes").json(&payload).await;
    assert_eq!(response.status_code(), 200, "{}", response.text());
    response.json::<NoteResponse>()
}

#[tokio::test]
#[serial]
async fn can_add_note_without_title() {
    testing::request::<App, _, _>(|request, _ctx| async move {
        let response = request
            .post("/api/notes")
            .json(&json!({"content": "Hello world"}))
            .await;

        assert_eq!(response.status_code(), 200);
        with_settings!({
            filters => testing::cleanup_note_model()
        }, {
            assert_snapshot!(response.text(), @r#"{"id":"ID","title":null,"content":"Hello world"}"#);
        });
    })
    .await;
}

#[tokio::test]
#[serial]
async fn can_add_and_get_note() {
    testing::request::<App, _, _>(|request, _ctx| async move {
        let created = add_note(&request, json!({"title": "Groceries", "content": "milk, eggs"})).await;
        assert_eq!(created.title.as_deref(), Some("Groceries"));

        let response = request.get(&format!("/api/notes/{}", created.id)).await;
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.json::<NoteResponse>(), created);
    })
    .await;
}

#[rstest]
#[case(json!({"title": "empty", "content": ""}))]
#[case(json!({"title": "missing"}))]
#[tokio::test]
#[serial]
async fn rejects_note_without_content(#[case] payload: Value) {
    testing::request::<App, _, _>(|request, ctx| async move {
        let response = request.post("/api/notes").json(&payload).await;

        assert_eq!(response.status_code(), 400);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["description"], "content: content is required");
        assert_eq!(body["errors"]["content"][0]["code"], "length");

        assert_eq!(Entity::find().count(&ctx.db).await.unwrap(), 0);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn rejects_malformed_json() {
    testing::request::<App, _, _>(|request, ctx| async move {
        let response = request
            .post("/api/notes")
            .content_type("application/json")
            .bytes(Bytes::from_static(b"{ not json"))
            .await;

        assert_eq!(response.status_code(), 400);
        assert_eq!(response.json::<Value>()["error"], "bad_request");
        assert_eq!(Entity::find().count(&ctx.db).await.unwrap(), 0);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn list_and_get_derive_titles_of_different_length() {
    testing::request::<App, _, _>(|request, _ctx| async move {
        let created = add_note(&request, json!({"title": "", "content": "Hello world"})).await;
        assert_eq!(created.title.as_deref(), Some(""));

        let listed = request.get("/api/notes").await.json::<Vec<NoteResponse>>();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title.as_deref(), Some("Hello wor"));
        assert_eq!(listed[0].content, "Hello world");

        let single = request
            .get(&format!("/api/notes/{}", created.id))
            .await
            .json::<NoteResponse>();
        assert_eq!(single.title.as_deref(), Some("Hello worl"));
        assert_eq!(single.content, "Hello world");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn can_list_every_note() {
    testing::request::<App, _, _>(|request, _ctx| async move {
        assert_eq!(
            request.get("/api/notes").await.json::<Vec<NoteResponse>>(),
            vec![]
        );

        add_note(&request, json!({"title": "first", "content": "one"})).await;
        add_note(&request, json!({"content": "short"})).await;

        let titles = request
            .get("/api/notes")
            .await
            .json::<Vec<NoteResponse>>()
            .into_iter()
            .map(|note| note.title)
            .collect::<Vec<_>>();
        assert_eq!(titles.len(), 2);
        assert!(titles.contains(&Some("first".to_string())));
        assert!(titles.contains(&Some("short".to_string())));
    })
    .await;
}

#[rstest]
#[case("Groc", vec!["Groceries"])]
#[case("plumb", vec!["call the "])]
#[case("deadline", vec!["Work"])]
#[case("nothing-like-this", vec![])]
#[tokio::test]
#[serial]
async fn can_search_notes(#[case] query: &str, #[case] expected: Vec<&str>) {
    testing::request::<App, _, _>(|request, _ctx| async move {
        add_note(&request, json!({"title": "Groceries", "content": "milk"})).await;
        add_note(&request, json!({"content": "call the plumber"})).await;
        add_note(&request, json!({"title": "Work", "content": "deadline friday"})).await;

        let response = request
            .get("/api/notes")
            .add_query_param("query", query)
            .await;
        assert_eq!(response.status_code(), 200);

        let titles = response
            .json::<Vec<NoteResponse>>()
            .into_iter()
            .filter_map(|note| note.title)
            .collect::<Vec<_>>();
        assert_eq!(titles, expected);
    })
    .await;
}

async fn search(request: &TestServer, query: &str) -> Vec<NoteResponse> {
    let response = request
        .get("/api/notes")
        .add_query_param("query", query)
        .await;
    assert_eq!(response.status_code(), 200, "{}", response.text());
    response.json::<Vec<NoteResponse>>()
}

#[rstest]
#[case("a_c", vec![])]
#[case("%", vec!["100% sure"])]
#[case("%s", vec![])]
#[case("hello", vec![])]
#[case("Hello", vec!["Hello"])]
#[case("0% s", vec!["100% sure"])]
#[case("b", vec!["abc"])]
#[tokio::test]
#[serial]
async fn search_is_case_sensitive_and_literal(#[case] query: &str, #[case] expected: Vec<&str>) {
    testing::request::<App, _, _>(|request, _ctx| async move {
        for content in ["abc", "Hello", "100% sure"] {
            add_note(&request, json!({"content": content})).await;
        }

        let contents = search(&request, query)
            .await
            .into_iter()
            .map(|note| note.content)
            .collect::<Vec<_>>();
        assert_eq!(contents, expected);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn search_finds_untitled_note_by_content() {
    testing::request::<App, _, _>(|request, _ctx| async move {
        add_note(&request, json!({"content": "pick up the parcel"})).await;
        add_note(&request, json!({"title": "parcel", "content": "tracking 42"})).await;
        add_note(&request, json!({"title": "other", "content": "unrelated"})).await;

        let found = search(&request, "parcel").await;
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].content, "pick up the parcel");
        assert_eq!(found[0].title.as_deref(), Some("pick up t"));
        assert_eq!(found[1].title.as_deref(), Some("parcel"));
    })
    .await;
}

#[tokio::test]
#[serial]
async fn can_edit_title_and_content_separately() {
    testing::request::<App, _, _>(|request, _ctx| async move {
        let created = add_note(&request, json!({"title": "a", "content": "first"})).await;
        let url = format!("/api/notes/{}", created.id);

        let response = request.put(&url).json(&json!({"title": "b"})).await;
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.text(), "");

        let note = request.get(&url).await.json::<NoteResponse>();
        assert_eq!(note.title.as_deref(), Some("b"));
        assert_eq!(note.content, "first");

        let response = request
            .put(&url)
            .json(&json!({"title": "", "content": "second"}))
            .await;
        assert_eq!(response.status_code(), 200);

        let note = request.get(&url).await.json::<NoteResponse>();
        assert_eq!(note.title.as_deref(), Some("b"));
        assert_eq!(note.content, "second");

        let response = request.put(&url).json(&json!({"content": ""})).await;
        assert_eq!(response.status_code(), 200);
        assert_eq!(request.get(&url).await.json::<NoteResponse>().content, "second");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn edit_of_unknown_note_is_not_found() {
    testing::request::<App, _, _>(|request, _ctx| async move {
        let created = add_note(&request, json!({"content": "keep me"})).await;

        let response = request
            .put(&format!("/api/notes/{}", uuid::Uuid::new_v4()))
            .json(&json!({"content": "changed"}))
            .await;

        assert_eq!(response.status_code(), 404);
        assert_eq!(
            response.json::<Value>(),
            json!({"error": "not_found", "description": "note not found"})
        );

        let listed = request.get("/api/notes").await.json::<Vec<NoteResponse>>();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].content, "keep me");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn can_delete_note() {
    testing::request::<App, _, _>(|request, ctx| async move {
        let created = add_note(&request, json!({"content": "short lived"})).await;
        let url = format!("/api/notes/{}", created.id);

        let response = request.delete(&url).await;
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.text(), "");
        assert_eq!(Entity::find().count(&ctx.db).await.unwrap(), 0);

        assert_eq!(request.get(&url).await.status_code(), 404);
        assert_eq!(request.delete(&url).await.status_code(), 404);
    })
    .await;
}

#[rstest]
#[case("/api/notes/not-a-uuid")]
#[case("/api/notes/12345")]
#[tokio::test]
#[serial]
async fn rejects_malformed_id(#[case] url: &str) {
    testing::request::<App, _, _>(|request, _ctx| async move {
        assert_eq!(request.get(url).await.status_code(), 400);
        assert_eq!(request.delete(url).await.status_code(), 400);
    })
    .await;
}
