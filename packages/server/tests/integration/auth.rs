use serde_json::json;

use crate::common::{TestApp, routes};

mod signup {
    use super::*;

    fn body(username: &str, email: &str, password: &str, confirm: &str) -> serde_json::Value {
        json!({
            "username": username,
            "email": email,
            "password": password,
            "confirm_password": confirm,
        })
    }

    #[tokio::test]
    async fn new_user_can_sign_up_and_is_logged_in() {
        let app = TestApp::spawn().await;
        let session = app.session();

        let res = session
            .post(
                routes::SIGNUP,
                &body("alice", "alice@example.com", "securepass", "securepass"),
            )
            .await;

        assert_eq!(res.status, 201, "{}", res.text);
        assert!(res.body["id"].is_number());
        assert_eq!(res.body["username"], "alice");
        let cookie = res.set_cookie.expect("signup should set a session cookie");
        assert!(cookie.starts_with("session="));
        assert!(cookie.contains("HttpOnly"));

        let me = session.get(routes::ME).await;
        assert_eq!(me.status, 200);
        assert_eq!(me.body["username"], "alice");
    }

    #[tokio::test]
    async fn cannot_sign_up_with_missing_fields() {
        let app = TestApp::spawn().await;

        let res = app
            .session()
            .post(routes::SIGNUP, &json!({"username": "alice", "password": "x"}))
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
        assert_eq!(res.body["error"], "All fields are required");
    }

    #[tokio::test]
    async fn cannot_sign_up_with_mismatched_passwords() {
        let app = TestApp::spawn().await;

        let res = app
            .session()
            .post(
                routes::SIGNUP,
                &body("alice", "alice@example.com", "securepass", "securepasx"),
            )
            .await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "PASSWORD_MISMATCH");
    }

    #[tokio::test]
    async fn cannot_sign_up_with_a_taken_username() {
        let app = TestApp::spawn().await;
        app.signed_up("alice").await;

        let res = app
            .session()
            .post(
                routes::SIGNUP,
                &body("alice", "other@example.com", "securepass", "securepass"),
            )
            .await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "USERNAME_TAKEN");
    }

    #[tokio::test]
    async fn cannot_sign_up_with_a_registered_email() {
        let app = TestApp::spawn().await;
        app.signed_up("alice").await;

        let res = app
            .session()
            .post(
                routes::SIGNUP,
                &body("bob", "alice@example.com", "securepass", "securepass"),
            )
            .await;

        assert_eq!(res.status, 409);
        assert_eq!(res.body["code"], "EMAIL_TAKEN");
    }
}

mod login {
    use super::*;

    #[tokio::test]
    async fn registered_user_can_log_in() {
        let app = TestApp::spawn().await;
        app.signed_up("alice").await;
        let session = app.session();

        let res = session
            .post(
                routes::LOGIN,
                &json!({"username": "alice", "password": "securepass"}),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["username"], "alice");
        assert!(res.body["token"].is_string());
        assert_eq!(session.get(routes::ME).await.status, 200);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let app = TestApp::spawn().await;
        app.signed_up("alice").await;

        let res = app
            .session()
            .post(routes::LOGIN, &json!({"username": "alice", "password": "nope"}))
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
        assert!(res.set_cookie.is_none());
    }

    #[tokio::test]
    async fn unknown_user_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .session()
            .post(
                routes::LOGIN,
                &json!({"username": "ghost", "password": "securepass"}),
            )
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn bearer_token_authenticates_without_cookie() {
        let app = TestApp::spawn().await;
        app.signed_up("alice").await;
        let login = app
            .session()
            .post(
                routes::LOGIN,
                &json!({"username": "alice", "password": "securepass"}),
            )
            .await;
        let token = login.body["token"].as_str().unwrap().to_string();

        let res = app
            .session()
            .post_with_token(routes::GENERATE, &json!({"link": "https://youtu.be/abc"}), &token)
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    async fn logout_ends_the_session() {
        let app = TestApp::spawn().await;
        let session = app.signed_up("alice").await;
        assert_eq!(session.get(routes::ME).await.status, 200);

        let res = session.post(routes::LOGOUT, &json!({})).await;
        assert_eq!(res.status, 200);
        assert_eq!(res.body["success"], true);

        let me = session.get(routes::ME).await;
        assert_eq!(me.status, 401);
        assert_eq!(me.body["code"], "TOKEN_MISSING");
    }

    #[tokio::test]
    async fn forged_token_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .session()
            .post_with_token(routes::GENERATE, &json!({"link": "x"}), "not.a.token")
            .await;

        assert_eq!(res.status, 401);
        assert_eq!(res.body["code"], "TOKEN_INVALID");
    }
}
