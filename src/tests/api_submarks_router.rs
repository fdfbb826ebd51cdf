use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use crate::features::submarks::sub_marks_router;
use crate::tests::mock_repo::{
    MockRepository, empty_request, json_request, response_json, setup_api_test_state,
};

// upsert without a roll is a 400
#[tokio::test]
async fn test_upsert_missing_roll() {
    let repo = MockRepository::new();
    let app = sub_marks_router().with_state(setup_api_test_state(&repo));

    let response = app
        .oneshot(json_request("POST", "/createjp", json!({ "jp": 7 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Roll is required");
    assert!(repo.sub_marks.lock().unwrap().is_empty());
}

// the concrete scenario from the service contract: the same upsert twice
// leaves exactly one row
#[tokio::test]
async fn test_upsert_idempotent() {
    let repo = MockRepository::new();
    let app = sub_marks_router().with_state(setup_api_test_state(&repo));

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/createjp",
                json!({ "roll": "R1", "jp": 7 }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(empty_request("GET", "/jpstudent")).await.unwrap();
    let rows = response_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["ROLL"], "R1");
    assert_eq!(rows[0]["JP"], 7);
}

// a later upsert for the same roll overwrites the earlier one
#[tokio::test]
async fn test_upsert_last_write_wins() {
    let repo = MockRepository::new();
    let app = sub_marks_router().with_state(setup_api_test_state(&repo));

    for jp in [5, 8] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/createjp",
                json!({ "roll": "R1", "jp": jp }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(empty_request("GET", "/jpstudent")).await.unwrap();
    let rows = response_json(response).await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["JP"], 8);
}

// the optional name field is stored and returned
#[tokio::test]
async fn test_upsert_with_name() {
    let repo = MockRepository::new();
    let app = sub_marks_router().with_state(setup_api_test_state(&repo));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/createjp",
            json!({ "roll": "R1", "name": "Asha", "jp": 7 }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(empty_request("GET", "/jpstudent")).await.unwrap();
    let rows = response_json(response).await;
    assert_eq!(rows[0]["NAME"], "Asha");
}

// deleting by roll removes the row; a second delete for the same roll is a 404
#[tokio::test]
async fn test_delete_sub_mark() {
    let repo = MockRepository::new();
    let app = sub_marks_router().with_state(setup_api_test_state(&repo));

    app.clone()
        .oneshot(json_request(
            "POST",
            "/createjp",
            json!({ "roll": "R1", "jp": 7 }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/deletejp/R1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(empty_request("DELETE", "/deletejp/R1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// delete-alljp empties the table including the zero-row case
#[tokio::test]
async fn test_delete_all_sub_marks() {
    let repo = MockRepository::new();
    let app = sub_marks_router().with_state(setup_api_test_state(&repo));

    for roll in ["R1", "R2"] {
        app.clone()
            .oneshot(json_request(
                "POST",
                "/createjp",
                json!({ "roll": roll, "jp": 7 }),
            ))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/delete-alljp"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(repo.sub_marks.lock().unwrap().is_empty());

    let response = app
        .oneshot(empty_request("DELETE", "/delete-alljp"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
