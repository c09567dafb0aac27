use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::{json, Value};
use wiremock::MockServer;

use preferences_portal_client::{
    controller::{LoadOutcome, NotificationsController, PanelPhase},
    form::{FormValue, FormValues, MessageKind},
    panel::notifications::NotificationsPanel,
};

use crate::helpers::{
    host, json_response, mock_get_service, mock_put_service, mock_server, request_body,
    settings_api, RecordingFormHost,
};

#[fixture]
fn notification_preferences_response() -> Value {
    json!({
        "push_messages": true,
        "push_comments": false,
        "push_reminders": true,
        "email_news": false,
        "email_messages": true,
        "email_reminders": false,
        "quiet_hours": "22:00-07:00"
    })
}

#[rstest]
#[tokio::test]
async fn test_load_maps_channels_to_toggles(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
    notification_preferences_response: Value,
) {
    let mock_server = mock_server.await;
    mock_get_service(&mock_server, "notifications/", &notification_preferences_response).await;
    let controller = NotificationsController::new(NotificationsPanel, settings_api(&mock_server));

    assert!(matches!(
        controller.on_display(&host).await,
        LoadOutcome::Loaded
    ));

    let values = host.values.borrow();
    assert_eq!(values.get("push_messages"), Some(&FormValue::Toggle(1)));
    assert_eq!(values.get("push_comments"), Some(&FormValue::Toggle(0)));
    assert_eq!(values.get("email_messages"), Some(&FormValue::Toggle(1)));
    assert_eq!(values.get("quiet_hours"), None);
}

#[rstest]
#[tokio::test]
async fn test_submit_converts_toggles_back_to_booleans(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
    notification_preferences_response: Value,
) {
    let mock_server = mock_server.await;
    mock_get_service(&mock_server, "notifications/", &notification_preferences_response).await;
    mock_put_service(
        &mock_server,
        "notifications/update/",
        json_response(200, &json!({ "email_news": true })),
        1,
    )
    .await;
    let controller = NotificationsController::new(NotificationsPanel, settings_api(&mock_server));
    controller.on_display(&host).await;
    host.edit(
        FormValues::new()
            .with_flag("push_messages", false)
            .with_flag("email_news", true),
    );

    let saved = controller.on_submit(&host).await.unwrap();

    assert_eq!(
        request_body(&mock_server, 1).await,
        json!({
            "push_messages": false,
            "push_comments": false,
            "push_reminders": true,
            "email_news": true,
            "email_messages": true,
            "email_reminders": false,
            "quiet_hours": "22:00-07:00"
        })
    );
    assert_eq!(
        serde_json::to_value(&saved).unwrap()["quiet_hours"],
        json!("22:00-07:00")
    );
    assert_eq!(controller.phase(), PanelPhase::Populated);
    assert_eq!(
        host.messages(),
        vec![(MessageKind::Success, "Notification settings saved".to_string())]
    );
}

#[rstest]
#[tokio::test]
async fn test_submit_before_load_sends_every_channel(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
) {
    let mock_server = mock_server.await;
    mock_put_service(
        &mock_server,
        "notifications/update/",
        json_response(200, &json!({})),
        1,
    )
    .await;
    let controller = NotificationsController::new(NotificationsPanel, settings_api(&mock_server));
    host.edit(FormValues::new().with_flag("push_reminders", true));

    controller.on_submit(&host).await.unwrap();

    assert_eq!(
        request_body(&mock_server, 0).await,
        json!({
            "push_messages": false,
            "push_comments": false,
            "push_reminders": true,
            "email_news": false,
            "email_messages": false,
            "email_reminders": false
        })
    );
    assert_eq!(controller.phase(), PanelPhase::Populated);
}
