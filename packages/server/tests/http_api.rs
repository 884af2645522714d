//! Integration tests for the HTTP endpoints.

mod common;

use std::sync::Arc;

use agora_server::infrastructure::repository::JsonFileUserRepository;
use common::{register, spawn_server, spawn_server_with};
use reqwest::{StatusCode, redirect::Policy};
use serde_json::{Value, json};

async fn login(addr: std::net::SocketAddr, email: &str, password: &str) -> Value {
    reqwest::Client::new()
        .post(format!("http://{}/login", addr))
        .json(&json!({"email": email, "password": password}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_register_then_login() {
    // テスト項目: 登録したユーザーでログインでき、表示名が返る
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let registered = register(addr, "Ana", "u1", "secret", "🦊").await;
    let logged_in = login(addr, "u1", "secret").await;

    // then (期待する結果):
    assert_eq!(
        registered,
        json!({"success": true, "message": "Registration successful!"})
    );
    assert_eq!(
        logged_in,
        json!({"success": true, "message": "Login successful.", "name": "Ana"})
    );
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    // テスト項目: 同じメールアドレスでの 2 回目の登録は失敗し、最初の認証情報が有効なまま
    // given (前提条件):
    let addr = spawn_server().await;
    register(addr, "Ana", "u1", "secret", "🦊").await;

    // when (操作):
    let duplicate = register(addr, "Eve", "u1", "other", "🐱").await;

    // then (期待する結果):
    assert_eq!(
        duplicate,
        json!({"success": false, "message": "This email is already in use."})
    );
    assert_eq!(login(addr, "u1", "secret").await["name"], "Ana");
    assert_eq!(login(addr, "u1", "other").await["success"], false);
}

#[tokio::test]
async fn test_login_failures() {
    // テスト項目: 未登録ユーザー・パスワード違いでそれぞれのメッセージが返る
    // given (前提条件):
    let addr = spawn_server().await;
    register(addr, "Ana", "u1", "secret", "🦊").await;

    // when (操作):
    let unknown = login(addr, "nobody", "secret").await;
    let wrong = login(addr, "u1", "Secret").await;

    // then (期待する結果):
    assert_eq!(
        unknown,
        json!({"success": false, "message": "User not found."})
    );
    assert_eq!(
        wrong,
        json!({"success": false, "message": "Incorrect password."})
    );
}

#[tokio::test]
async fn test_register_requires_email() {
    // テスト項目: メールアドレスなしの登録は失敗する
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let response = register(addr, "Ana", "", "secret", "🦊").await;

    // then (期待する結果):
    assert_eq!(
        response,
        json!({"success": false, "message": "Email is required."})
    );
}

#[tokio::test]
async fn test_forgot_password_response_does_not_reveal_users() {
    // テスト項目: 既存・未登録どちらの識別子でも同じ応答が返る
    // given (前提条件):
    let addr = spawn_server().await;
    register(addr, "Ana", "u1", "secret", "🦊").await;
    let client = reqwest::Client::new();

    // when (操作):
    let mut responses = Vec::new();
    for email in ["u1", "nobody"] {
        let response = client
            .post(format!("http://{}/forgot-password", addr))
            .json(&json!({"email": email}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        responses.push(response.json::<Value>().await.unwrap());
    }

    // then (期待する結果):
    assert_eq!(responses[0], responses[1]);
    assert_eq!(
        responses[0],
        json!({"message": "If your email exists, a recovery link has been sent."})
    );
}

#[tokio::test]
async fn test_chat_page_requires_registered_user() {
    // テスト項目: チャット画面は登録済みの id のときだけ表示され、それ以外は / へリダイレクトされる
    // given (前提条件):
    let addr = spawn_server().await;
    register(addr, "<Ana>", "u1", "secret", "🦊").await;
    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap();

    // when (操作):
    let page = client
        .get(format!("http://{}/chat?id=u1", addr))
        .send()
        .await
        .unwrap();
    let unknown = client
        .get(format!("http://{}/chat?id=nobody", addr))
        .send()
        .await
        .unwrap();
    let missing = client
        .get(format!("http://{}/chat", addr))
        .send()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(page.status(), StatusCode::OK);
    let body = page.text().await.unwrap();
    assert!(body.contains("&lt;Ana&gt;"));
    for response in [unknown, missing] {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
    }
}

#[tokio::test]
async fn test_landing_page_and_health() {
    // テスト項目: トップページとヘルスチェックが応答する
    // given (前提条件):
    let addr = spawn_server().await;

    // when (操作):
    let index = reqwest::get(format!("http://{}/", addr)).await.unwrap();
    let health: Value = reqwest::get(format!("http://{}/api/health", addr))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // then (期待する結果):
    assert_eq!(index.status(), StatusCode::OK);
    assert!(index.text().await.unwrap().contains("registerForm"));
    assert_eq!(health, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_registration_is_persisted_to_user_file() {
    // テスト項目: JSON ファイルストアでは登録内容が元のフィールド名でファイルに保存される
    // given (前提条件):
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    let repository = JsonFileUserRepository::open(path.clone()).await.unwrap();
    let addr = spawn_server_with(Arc::new(repository)).await;

    // when (操作):
    register(addr, "Ana", "u1", "secret", "🦊").await;

    // then (期待する結果):
    let stored: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        stored,
        json!({
            "u1": {
                "name": "Ana",
                "email": "u1",
                "password": "secret",
                "avatar": "🦊",
                "isOnline": false,
            }
        })
    );
}

#[tokio::test]
async fn test_identifiers_are_not_normalised() {
    // テスト項目: 前後に空白を含むメールアドレスは別のユーザーとして登録・ログインされる
    // given (前提条件):
    let addr = spawn_server().await;
    register(addr, "Ana", "u1", "secret", "🦊").await;

    // when (操作):
    let padded = register(addr, "Eve", " u1", "other", "🐱").await;

    // then (期待する結果):
    assert_eq!(padded["success"], true);
    assert_eq!(login(addr, "u1", "secret").await["name"], "Ana");
    assert_eq!(login(addr, " u1", "other").await["name"], "Eve");
}
