use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::{json, Value};
use wiremock::MockServer;

use preferences_portal::privacy::ProfileVisibility;
use preferences_portal_client::{
    controller::{PanelPhase, PrivacyController, SubmitError},
    form::{FormValues, MessageKind},
    panel::privacy::{fields, PrivacyPanel, INVALID_VISIBILITY_MESSAGE},
};

use crate::helpers::{
    error_response, expect_no_request, host, json_response, mock_get_service, mock_put_service,
    mock_server, request_body, settings_api, RecordingFormHost,
};

#[fixture]
fn privacy_preferences_response() -> Value {
    json!({
        "profile_visibility": "friends",
        "show_email": false,
        "data_sharing": true,
        "search_indexing": false
    })
}

#[rstest]
#[tokio::test]
async fn test_submit_privacy_preferences(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
    privacy_preferences_response: Value,
) {
    let mock_server = mock_server.await;
    mock_get_service(&mock_server, "privacy/", &privacy_preferences_response).await;
    mock_put_service(
        &mock_server,
        "privacy/update/",
        json_response(200, &json!({ "profile_visibility": "private", "show_email": true })),
        1,
    )
    .await;
    let controller = PrivacyController::new(PrivacyPanel, settings_api(&mock_server));
    controller.on_display(&host).await;
    assert_eq!(host.text(fields::PROFILE_VISIBILITY), "friends");
    host.edit(
        FormValues::new()
            .with_text(fields::PROFILE_VISIBILITY, "private")
            .with_flag(fields::SHOW_EMAIL, true),
    );

    let saved = controller.on_submit(&host).await.unwrap();

    assert_eq!(
        request_body(&mock_server, 1).await,
        json!({
            "profile_visibility": "private",
            "show_email": true,
            "data_sharing": true,
            "search_indexing": false
        })
    );
    assert_eq!(saved.profile_visibility, ProfileVisibility::Private);
    assert!(saved.show_email);
    assert_eq!(
        host.messages(),
        vec![(MessageKind::Success, "Privacy settings saved".to_string())]
    );
}

#[rstest]
#[tokio::test]
async fn test_unknown_visibility_is_not_sent(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
) {
    let mock_server = mock_server.await;
    expect_no_request(&mock_server).await;
    let controller = PrivacyController::new(PrivacyPanel, settings_api(&mock_server));
    host.edit(FormValues::new().with_text(fields::PROFILE_VISIBILITY, "everyone"));

    let result = controller.on_submit(&host).await;

    assert!(matches!(result, Err(SubmitError::Validation(_))));
    assert_eq!(controller.phase(), PanelPhase::Idle);
    assert_eq!(
        host.messages(),
        vec![(MessageKind::Error, INVALID_VISIBILITY_MESSAGE.to_string())]
    );
}

#[rstest]
#[tokio::test]
async fn test_rejected_submit_restores_the_previous_state(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
    privacy_preferences_response: Value,
) {
    let mock_server = mock_server.await;
    mock_get_service(&mock_server, "privacy/", &privacy_preferences_response).await;
    mock_put_service(
        &mock_server,
        "privacy/update/",
        error_response(403, "Private profiles require a verified email"),
        1,
    )
    .await;
    let controller = PrivacyController::new(PrivacyPanel, settings_api(&mock_server));
    controller.on_display(&host).await;
    let loaded = controller.settings();
    host.edit(FormValues::new().with_text(fields::PROFILE_VISIBILITY, "private"));

    let result = controller.on_submit(&host).await;

    assert!(matches!(
        result,
        Err(SubmitError::Rejected { ref source, .. }) if source.status().map(|status| status.as_u16()) == Some(403)
    ));
    assert_eq!(controller.phase(), PanelPhase::Populated);
    assert_eq!(controller.settings(), loaded);
    assert_eq!(host.text(fields::PROFILE_VISIBILITY), "private");
    assert_eq!(
        controller.last_error(),
        Some("Private profiles require a verified email".to_string())
    );
    assert_eq!(
        host.messages(),
        vec![(
            MessageKind::Error,
            "Private profiles require a verified email".to_string()
        )]
    );
}
