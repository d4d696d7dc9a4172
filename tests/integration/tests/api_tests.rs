//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with the site schema applied
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Admin Auth Tests
// ============================================================================

#[tokio::test]
async fn test_admin_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_admin_login_wrong_password() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post("/api/v1/admin/auth/login", &json!({ "password": "wrong" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_admin_route_requires_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/admin/publications").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_admin_route_rejects_garbage_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get_auth("/api/v1/admin/publications", "not-a-token")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Publication Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_read_publication() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreatePublicationBody::unique();
    let response = server
        .post_auth("/api/v1/admin/publications", &token, &request)
        .await
        .unwrap();
    let created: PublicationBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.title, request.title);
    assert!(created.published);

    // Visible on the public site by slug
    let response = server
        .get(&format!("/api/v1/publications/{}", created.slug))
        .await
        .unwrap();
    let fetched: PublicationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn test_draft_publication_hidden_from_public() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreatePublicationBody::draft();
    let response = server
        .post_auth("/api/v1/admin/publications", &token, &request)
        .await
        .unwrap();
    let created: PublicationBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Hidden from the public slug endpoint
    let response = server
        .get(&format!("/api/v1/publications/{}", created.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Still visible to the admin listing
    let response = server
        .get_auth("/api/v1/admin/publications", &token)
        .await
        .unwrap();
    let all: Vec<PublicationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|p| p.id == created.id));
}

#[tokio::test]
async fn test_publish_draft_via_update() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/admin/publications",
            &token,
            &CreatePublicationBody::draft(),
        )
        .await
        .unwrap();
    let created: PublicationBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/publications/{}", created.id),
            &token,
            &json!({ "published": true }),
        )
        .await
        .unwrap();
    let updated: PublicationBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(updated.published);

    let response = server
        .get(&format!("/api/v1/publications/{}", created.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_featured_publications_capped_at_three() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    for _ in 0..4 {
        let request = CreatePublicationBody {
            featured: true,
            ..CreatePublicationBody::unique()
        };
        let response = server
            .post_auth("/api/v1/admin/publications", &token, &request)
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/v1/publications/featured").await.unwrap();
    let featured: Vec<PublicationBody> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(featured.len() <= 3);
    assert!(featured.iter().all(|p| p.featured && p.published));
    assert!(featured
        .windows(2)
        .all(|w| w[0].published_at >= w[1].published_at));
}

#[tokio::test]
async fn test_delete_publication() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/admin/publications",
            &token,
            &CreatePublicationBody::unique(),
        )
        .await
        .unwrap();
    let created: PublicationBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/admin/publications/{}", created.id), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/publications/{}", created.slug))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_read_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let request = CreateEventBody::unique();
    let response = server
        .post_auth("/api/v1/admin/events", &token, &request)
        .await
        .unwrap();
    let created: EventBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.title, request.title);
    assert_eq!(created.status, "upcoming");

    let response = server
        .get(&format!("/api/v1/events/{}", created.id))
        .await
        .unwrap();
    let fetched: EventBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
}

#[tokio::test]
async fn test_upcoming_events_sorted_ascending() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    for _ in 0..3 {
        let response = server
            .post_auth("/api/v1/admin/events", &token, &CreateEventBody::unique())
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get("/api/v1/events?status=upcoming").await.unwrap();
    let events: Vec<EventBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(events.iter().all(|e| e.status == "upcoming"));
    assert!(events.windows(2).all(|w| w[0].date <= w[1].date));
}

#[tokio::test]
async fn test_past_events_sorted_descending() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    for days in [10, 20, 30] {
        let response = server
            .post_auth(
                "/api/v1/admin/events",
                &token,
                &CreateEventBody::days_from_now(days),
            )
            .await
            .unwrap();
        let created: EventBody = assert_json(response, StatusCode::CREATED).await.unwrap();

        let response = server
            .patch_auth(
                &format!("/api/v1/admin/events/{}", created.id),
                &token,
                &json!({ "status": "past" }),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/api/v1/events?status=past").await.unwrap();
    let events: Vec<EventBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(events.iter().all(|e| e.status == "past"));
    assert!(events.windows(2).all(|w| w[0].date >= w[1].date));
}

#[tokio::test]
async fn test_event_status_filter_rejects_unknown_value() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/events?status=someday").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Registration Tests
// ============================================================================

#[tokio::test]
async fn test_register_for_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth("/api/v1/admin/events", &token, &CreateEventBody::unique())
        .await
        .unwrap();
    let event: EventBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = RegisterBody::unique();
    let response = server
        .post(
            &format!("/api/v1/events/{}/registrations", event.id),
            &request,
        )
        .await
        .unwrap();
    let participant: ParticipantBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(participant.event_id, event.id);
    assert_eq!(participant.email, request.email);
    assert_eq!(participant.status, "pending");
}

#[tokio::test]
async fn test_registration_does_not_bump_participant_count() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth("/api/v1/admin/events", &token, &CreateEventBody::unique())
        .await
        .unwrap();
    let event: EventBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/events/{}/registrations", event.id),
            &RegisterBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // The stored counter stays where it was; registrations are counted
    // from the participants table when needed
    let response = server
        .get(&format!("/api/v1/events/{}", event.id))
        .await
        .unwrap();
    let after: EventBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(after.current_participants, event.current_participants);
}

#[tokio::test]
async fn test_register_for_missing_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            &format!("/api/v1/events/{}/registrations", uuid::Uuid::new_v4()),
            &RegisterBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_admin_lists_registrations_for_event() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth("/api/v1/admin/events", &token, &CreateEventBody::unique())
        .await
        .unwrap();
    let event: EventBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = RegisterBody::unique();
    server
        .post(
            &format!("/api/v1/events/{}/registrations", event.id),
            &request,
        )
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/admin/registrations?event_id={}", event.id),
            &token,
        )
        .await
        .unwrap();
    let participants: Vec<ParticipantBody> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(participants.len(), 1);
    assert_eq!(participants[0].email, request.email);
}

// ============================================================================
// Contact Message Tests
// ============================================================================

#[tokio::test]
async fn test_submit_contact_message() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = ContactBody::unique();
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    let message: ContactMessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(message.help_type, "volunteer");
    assert!(!message.read);
}

#[tokio::test]
async fn test_contact_message_unknown_help_type() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = ContactBody {
        help_type: "sponsorship".to_string(),
        ..ContactBody::unique()
    };
    let response = server.post("/api/v1/messages", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_mark_message_read() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post("/api/v1/messages", &ContactBody::unique())
        .await
        .unwrap();
    let message: ContactMessageBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth_empty(
            &format!("/api/v1/admin/messages/{}/read", message.id),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get_auth("/api/v1/admin/messages", &token).await.unwrap();
    let all: Vec<ContactMessageBody> = assert_json(response, StatusCode::OK).await.unwrap();
    let found = all.iter().find(|m| m.id == message.id).unwrap();
    assert!(found.read);
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_category_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let name = format!("Category {}", unique_suffix());
    let response = server
        .post_auth(
            "/api/v1/admin/categories",
            &token,
            &json!({ "name": name, "description": "For tests" }),
        )
        .await
        .unwrap();
    let created: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let id = created["id"].as_str().unwrap().to_string();

    // Publicly listed
    let response = server.get("/api/v1/categories").await.unwrap();
    let all: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|c| c["name"] == name.as_str()));

    let response = server
        .delete_auth(&format!("/api/v1/admin/categories/{id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_event_type() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/admin/event-types/{}", uuid::Uuid::new_v4()),
            &token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Media Tests
// ============================================================================

#[tokio::test]
async fn test_upload_and_delete_media() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .upload_auth(
            "/api/v1/admin/media",
            &token,
            "photo.jpg",
            "image/jpeg",
            vec![0xFF, 0xD8, 0xFF, 0xE0],
        )
        .await
        .unwrap();
    let uploaded: serde_json::Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(uploaded["original_name"], "photo.jpg");
    let id = uploaded["media"]["id"].as_str().unwrap().to_string();
    let url = uploaded["media"]["url"].as_str().unwrap();
    assert!(url.contains("/uploads/"));

    let response = server
        .delete_auth(&format!("/api/v1/admin/media/{id}"), &token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_upload_without_file_field() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let url = format!("{}/api/v1/admin/media", server.base_url());
    let form = reqwest::multipart::Form::new().text("note", "no file here");
    let response = server
        .client
        .post(&url)
        .header("Authorization", format!("Bearer {token}"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Admin Log Tests
// ============================================================================

#[tokio::test]
async fn test_admin_actions_are_logged() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let token = server.admin_token().await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/admin/publications",
            &token,
            &CreatePublicationBody::unique(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/v1/admin/logs", &token).await.unwrap();
    let logs: Vec<serde_json::Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(logs.iter().any(|l| l["action"] == "publication.create"));
}
