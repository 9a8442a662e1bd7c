mod common;

use common::initial_blogs;
use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use serde_json::Value;

async fn seeded_app() -> (TestApp, String, String) {
    let app = TestApp::spawn().await;
    let (user_id, token) = app.signed_in_user("root").await;

    for blog in initial_blogs() {
        app.create_blog(&token, blog).await;
    }

    (app, user_id, token)
}

#[tokio::test]
async fn test_blogs_are_returned_as_json() {
    let (app, _, _) = seeded_app().await;

    let response = app
        .get("/api/blogs")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("application/json"));

    let blogs: Vec<Value> = response.json().await.expect("Failed to parse response");
    assert_eq!(blogs.len(), initial_blogs().len());
}

#[tokio::test]
async fn test_blogs_expose_id_and_owner() {
    let (app, user_id, _) = seeded_app().await;

    let blogs = app.blogs().await;
    let blog = &blogs[0];

    assert!(blog["id"].is_string());
    assert!(blog.get("_id").is_none());
    assert_eq!(
        blog["user"],
        json!({ "id": user_id, "username": "root", "name": "Test User" })
    );
    assert_eq!(blog["comments"], json!([]));
}

#[tokio::test]
async fn test_repeated_listing_is_stable() {
    let (app, _, _) = seeded_app().await;

    assert_eq!(app.blogs().await, app.blogs().await);
}

#[tokio::test]
async fn test_create_blog() {
    let (app, user_id, token) = seeded_app().await;

    let response = app
        .post_authenticated("/api/blogs", &token)
        .json(&json!({
            "title": "First class tests",
            "author": "Robert C. Martin",
            "url": "http://blog.cleancoder.com/uncle-bob/2017/05/05/TestDefinitions.htmll",
            "likes": 10
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let created: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(created["title"], "First class tests");
    assert_eq!(created["likes"], 10);
    assert_eq!(created["user"]["id"], user_id.as_str());

    let blogs = app.blogs().await;
    assert_eq!(blogs.len(), initial_blogs().len() + 1);
    assert!(blogs.iter().any(|blog| blog["title"] == "First class tests"));

    let users = app.users().await;
    let blog_ids: Vec<&Value> = users[0]["blogs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|blog| &blog["id"])
        .collect();
    assert!(blog_ids.contains(&&created["id"]));
}

#[tokio::test]
async fn test_create_blog_defaults_likes_to_zero() {
    let (app, _, token) = seeded_app().await;

    let created = app
        .create_blog(
            &token,
            json!({ "title": "TDD harms architecture", "url": "http://blog.cleancoder.com/" }),
        )
        .await;

    assert_eq!(created["likes"], 0);
    assert!(created.get("author").is_none());
}

#[tokio::test]
async fn test_create_blog_requires_title_and_url() {
    let (app, _, token) = seeded_app().await;

    let cases = [
        (json!({ "author": "a", "url": "u" }), "A blog must contain a title"),
        (json!({ "title": "", "url": "u" }), "A blog must contain a title"),
        (json!({ "title": "t", "author": "a" }), "A blog must contain a url"),
        (json!({}), "A blog must contain a title"),
    ];

    for (blog, message) in cases {
        let response = app
            .post_authenticated("/api/blogs", &token)
            .json(&blog)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "error": message }));
    }

    assert_eq!(app.blogs().await.len(), initial_blogs().len());
}

#[tokio::test]
async fn test_create_blog_rejects_unparseable_body() {
    let (app, _, token) = seeded_app().await;

    let response = app
        .post_authenticated("/api/blogs", &token)
        .header("content-type", "application/json")
        .body("{\"title\": ")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_create_blog_requires_token() {
    let (app, _, _) = seeded_app().await;
    let blog = json!({ "title": "Type wars", "url": "http://blog.cleancoder.com/" });

    let unauthenticated = app.post("/api/blogs").json(&blog);
    let wrong_scheme = app
        .post("/api/blogs")
        .header("authorization", "Basic cm9vdDpzZWNyZXQ=")
        .json(&blog);
    let garbage = app.post_authenticated("/api/blogs", "not-a-token").json(&blog);

    for request in [unauthenticated, wrong_scheme, garbage] {
        let response = request.send().await.expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "error": "token missing or invalid" }));
    }

    assert_eq!(app.blogs().await.len(), initial_blogs().len());
}

#[tokio::test]
async fn test_expired_or_foreign_tokens_are_rejected() {
    let (app, user_id, _) = seeded_app().await;
    let blog = json!({ "title": "Type wars", "url": "http://blog.cleancoder.com/" });

    let now = chrono::Utc::now().timestamp();
    let expired = app
        .jwt_handler
        .encode(
            &auth::Claims::new()
                .with_id(&user_id)
                .with_username("root")
                .with_issued_at(now - 7200)
                .with_expiration(now - 3600),
        )
        .unwrap();
    let foreign = auth::JwtHandler::new(b"another-secret-key-that-is-also-32-bytes!")
        .encode(&auth::Claims::for_user(
            &user_id,
            "root",
            chrono::Duration::hours(1),
        ))
        .unwrap();
    let without_id = app
        .jwt_handler
        .encode(&auth::Claims::new().with_username("root").with_expiration(now + 3600))
        .unwrap();

    for token in [expired, foreign, without_id] {
        let response = app
            .post_authenticated("/api/blogs", &token)
            .json(&blog)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_lowercase_bearer_scheme_is_accepted() {
    let (app, _, token) = seeded_app().await;

    let response = app
        .post("/api/blogs")
        .header("authorization", format!("bearer {}", token))
        .json(&json!({ "title": "Type wars", "url": "http://blog.cleancoder.com/" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_token_of_removed_user_is_rejected() {
    let (app, _, token) = seeded_app().await;

    let response = app
        .post("/api/testing/reset")
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .post_authenticated("/api/blogs", &token)
        .json(&json!({ "title": "Type wars", "url": "http://blog.cleancoder.com/" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(app.blogs().await.is_empty());
}

#[tokio::test]
async fn test_delete_blog_by_owner() {
    let (app, _, token) = seeded_app().await;
    let blogs = app.blogs().await;
    let id = blogs[0]["id"].as_str().unwrap();

    let response = app
        .delete_authenticated(&format!("/api/blogs/{}", id), &token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining = app.blogs().await;
    assert_eq!(remaining.len(), initial_blogs().len() - 1);
    assert!(remaining.iter().all(|blog| blog["id"] != id));
}

#[tokio::test]
async fn test_delete_blog_by_other_user_is_forbidden() {
    let (app, _, _) = seeded_app().await;
    let (_, other_token) = app.signed_in_user("mluukkai").await;
    let blogs = app.blogs().await;
    let id = blogs[0]["id"].as_str().unwrap();

    let response = app
        .delete_authenticated(&format!("/api/blogs/{}", id), &other_token)
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body,
        json!({ "error": "you do not have permission to delete this blog" })
    );
    assert_eq!(app.blogs().await.len(), initial_blogs().len());
}

#[tokio::test]
async fn test_delete_blog_requires_token() {
    let (app, _, _) = seeded_app().await;
    let blogs = app.blogs().await;
    let id = blogs[0]["id"].as_str().unwrap();

    let response = app
        .delete(&format!("/api/blogs/{}", id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(app.blogs().await.len(), initial_blogs().len());
}

#[tokio::test]
async fn test_delete_missing_or_malformed_blog() {
    let (app, _, token) = seeded_app().await;

    let response = app
        .delete_authenticated(&format!("/api/blogs/{}", uuid::Uuid::new_v4()), &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "unknown endpoint" }));

    let response = app
        .delete_authenticated("/api/blogs/5a3d5da59070081a82a3445", &token)
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "error": "malformatted id" }));
}

#[tokio::test]
async fn test_update_likes() {
    let (app, _, _) = seeded_app().await;
    let blogs = app.blogs().await;
    let id = blogs[0]["id"].as_str().unwrap();

    // no token needed
    let response = app
        .put(&format!("/api/blogs/{}", id))
        .json(&json!({ "likes": 100, "title": "ignored" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(updated["likes"], 100);
    assert_eq!(updated["title"], blogs[0]["title"]);
    assert_eq!(updated["user"]["username"], "root");

    let response = app
        .put(&format!("/api/blogs/{}", id))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");
    let unchanged: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(unchanged["likes"], 100);
}

#[tokio::test]
async fn test_update_missing_or_malformed_blog() {
    let (app, _, _) = seeded_app().await;

    let response = app
        .put(&format!("/api/blogs/{}", uuid::Uuid::new_v4()))
        .json(&json!({ "likes": 1 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .put("/api/blogs/not-an-id")
        .json(&json!({ "likes": 1 }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comments_are_appended_in_order() {
    let (app, _, _) = seeded_app().await;
    let blogs = app.blogs().await;
    let path = format!("/api/blogs/{}/comments", blogs[0]["id"].as_str().unwrap());

    let response = app
        .post(&path)
        .json(&json!({ "comment": "test comment" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .post(&path)
        .json(&json!({ "comment": "second test comment" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(
        body["comments"],
        json!(["test comment", "second test comment"])
    );
    assert_eq!(body["user"]["username"], "root");
}

#[tokio::test]
async fn test_comment_validation() {
    let (app, _, _) = seeded_app().await;
    let blogs = app.blogs().await;
    let path = format!("/api/blogs/{}/comments", blogs[0]["id"].as_str().unwrap());

    for body in [json!({}), json!({ "comment": "" })] {
        let response = app
            .post(&path)
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(error, json!({ "error": "Must contain a comment" }));
    }

    let response = app
        .post(&format!("/api/blogs/{}/comments", uuid::Uuid::new_v4()))
        .json(&json!({ "comment": "lost" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .post("/api/blogs/12345/comments")
        .json(&json!({ "comment": "lost" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_endpoint() {
    let app = TestApp::spawn().await;

    let requests = [
        app.get("/api/nothing-here"),
        app.get("/"),
        app.post("/api/blogs/some-id"),
        app.delete("/api/users"),
    ];

    for request in requests {
        let response = request.send().await.expect("Failed to execute request");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = response.json().await.expect("Failed to parse response");
        assert_eq!(body, json!({ "error": "unknown endpoint" }));
    }
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let (app, _, _) = seeded_app().await;

    let response = app
        .post("/api/testing/reset")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(app.blogs().await.is_empty());
    assert!(app.users().await.is_empty());
}
