use super::*;

/// Tests an ESV passage request.
///
/// Verifies the full response document: one paragraph whose verses carry sids built from
/// the reference in the query string.
///
/// Expected: 200 OK with structured passage
#[tokio::test]
async fn returns_structured_esv_passage() {
    let test = TestBuilder::new()
        .with_json(
            "/passage/text/",
            factory::esv::passage(
                "John 3:16–17",
                "John 3:16–17\n\n  [16] For God so loved the world,\n  [17] For God did not send his Son (ESV)",
            ),
        )
        .build()
        .await
        .unwrap();

    let (status, body) = get(app(&test), "/api/passage/ESV?q=JHN.3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": {
                "content": [
                    {
                        "name": "para",
                        "items": [
                            {
                                "name": "verse",
                                "attrs": { "sid": "JHN.3.16" },
                                "items": [ { "type": "text", "text": "For God so loved the world," } ]
                            },
                            {
                                "name": "verse",
                                "attrs": { "sid": "JHN.3.17" },
                                "items": [ { "type": "text", "text": "For God did not send his Son (ESV)" } ]
                            }
                        ]
                    }
                ]
            }
        })
    );

    let request = test.last_request().await.unwrap();
    assert_eq!(request.query_param("q").as_deref(), Some("John 3"));
    assert_eq!(request.header("authorization"), Some("Token esv-token"));
}

/// Tests that a space-separated reference produces dotted sids.
///
/// Only dots separate segments when building the ESV query, so the spaced reference
/// reaches the ESV API unchanged while the sids are still dotted.
///
/// Expected: 200 OK with sid `RUT.1.1` and the ESV queried for `RUT 1`
#[tokio::test]
async fn accepts_space_separated_reference() {
    let test = TestBuilder::new()
        .with_json(
            "/passage/text/",
            factory::esv::passage("Ruth 1", "[1] In the days when the judges ruled"),
        )
        .build()
        .await
        .unwrap();

    let (status, body) = get(app(&test), "/api/passage/ESV?q=RUT%201").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["content"][0]["items"][0]["attrs"]["sid"],
        "RUT.1.1"
    );
    assert_eq!(
        test.last_request().await.unwrap().query_param("q").as_deref(),
        Some("RUT 1")
    );
}

/// Tests an ESV passage with no verse markers.
///
/// Expected: 200 OK with an empty `items` array, never `null`
#[tokio::test]
async fn returns_empty_items_for_empty_esv_passage() {
    let test = TestBuilder::new()
        .with_json("/passage/text/", factory::esv::empty())
        .build()
        .await
        .unwrap();

    let (status, body) = get(app(&test), "/api/passage/ESV?q=XYZ.1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "data": { "content": [ { "name": "para", "items": [] } ] } })
    );
}

/// Tests a non-ESV passage request.
///
/// Expected: 200 OK with the scripture.api.bible document forwarded as-is
#[tokio::test]
async fn forwards_structured_chapter() {
    let test = TestBuilder::new()
        .with_json(
            "/bibles/kjv/chapters/JHN.1",
            factory::scripture::chapter("kjv", "JHN.1"),
        )
        .build()
        .await
        .unwrap();

    let (status, body) = get(app(&test), "/api/passage/kjv?q=JHN.1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, factory::scripture::chapter("kjv", "JHN.1"));
    assert_eq!(
        test.last_request()
            .await
            .unwrap()
            .query_param("content-type")
            .as_deref(),
        Some("json")
    );
}

/// Tests a passage request without a reference.
///
/// Expected: 400 Bad Request and no upstream request made
#[tokio::test]
async fn rejects_missing_reference() {
    let test = TestBuilder::new().build().await.unwrap();

    let (status, body) = get(app(&test), "/api/passage/ESV").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("q"));
    assert_eq!(test.request_count().await, 0);
}

/// Tests a failing ESV API.
///
/// Expected: 500 Internal Server Error naming the ESV passage
#[tokio::test]
async fn reports_esv_failure() {
    let test = TestBuilder::new()
        .with_status("/passage/text/", 403, json!({ "detail": "Invalid token." }))
        .build()
        .await
        .unwrap();

    let (status, body) = get(app(&test), "/api/passage/ESV?q=JHN.3").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch ESV passage" }));
}

/// Tests a failing structured chapter request.
///
/// Expected: 500 Internal Server Error naming the structured chapter
#[tokio::test]
async fn reports_structured_chapter_failure() {
    let test = TestBuilder::new().build().await.unwrap();

    let (status, body) = get(app(&test), "/api/passage/kjv?q=JHN.1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch structured chapter" }));
}

/// Tests a structured chapter whose body is not JSON.
///
/// Expected: 500 Internal Server Error with "Failed to parse JSON"
#[tokio::test]
async fn reports_unparsable_structured_chapter() {
    let test = TestBuilder::new()
        .with_text("/bibles/kjv/chapters/JHN.1", "<html>Bad Gateway</html>")
        .build()
        .await
        .unwrap();

    let (status, body) = get(app(&test), "/api/passage/kjv?q=JHN.1").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to parse JSON" }));
}

/// Tests that the OpenAPI document lists the passage route.
///
/// Expected: 200 OK with `/api/passage/{translation_id}` under `paths`
#[tokio::test]
async fn documents_routes_in_openapi() {
    let test = TestBuilder::new().build().await.unwrap();

    let (status, body) = get(app(&test), "/api/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/passage/{translation_id}"].is_object());
    assert!(body["paths"]["/api/bible/translations"].is_object());
}
