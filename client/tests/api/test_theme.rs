use std::rc::Rc;

use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::{json, Value};
use wiremock::MockServer;

use preferences_portal::theme::{FontFamily, PrimaryColor, Skin};
use preferences_portal_client::{
    controller::{LoadOutcome, SubmitError, ThemeController},
    form::{FormValues, MessageKind},
    panel::theme::{bootstrap_theme, fields, ThemePanel, INVALID_COLOR_MESSAGE},
    theme_override::{
        MemoryDocument, StyleNode, ThemeOverrideManager, COLOR_OVERRIDE_ID, FONT_OVERRIDE_ID,
        SKIN_STYLESHEET_ID, THEME_ATTRIBUTE,
    },
};

use crate::helpers::{
    expect_no_request, host, json_response, mock_failing_get_service, mock_get_service,
    mock_put_service, mock_server, request_body, settings_api, RecordingFormHost,
};

#[fixture]
fn theme_preferences_response() -> Value {
    json!({
        "skin": "willow",
        "primary_color": "#4b7bec",
        "font_family": "system",
        "theme_mode": "dark",
        "density": "comfortable"
    })
}

#[fixture]
fn overrides() -> Rc<ThemeOverrideManager<MemoryDocument>> {
    Rc::new(ThemeOverrideManager::new(MemoryDocument::new(), "/skins"))
}

#[rstest]
#[tokio::test]
async fn test_bootstrap_applies_the_saved_theme(
    #[future] mock_server: MockServer,
    theme_preferences_response: Value,
    overrides: Rc<ThemeOverrideManager<MemoryDocument>>,
) {
    let mock_server = mock_server.await;
    mock_get_service(&mock_server, "theme/", &theme_preferences_response).await;

    let preferences = bootstrap_theme(settings_api(&mock_server).as_ref(), &*overrides)
        .await
        .unwrap();

    assert_eq!(preferences.skin, Skin::Willow);
    assert_eq!(preferences.font_family, FontFamily::Default);
    let document = overrides.document();
    assert_eq!(
        document.node(SKIN_STYLESHEET_ID),
        Some(StyleNode::Stylesheet {
            href: "/skins/willow.css".to_string()
        })
    );
    assert!(document.node(COLOR_OVERRIDE_ID).is_some());
    assert_eq!(document.node(FONT_OVERRIDE_ID), None);
    assert_eq!(
        document.root_attribute(THEME_ATTRIBUTE),
        Some("dark".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn test_bootstrap_failure_leaves_the_document_untouched(
    #[future] mock_server: MockServer,
    overrides: Rc<ThemeOverrideManager<MemoryDocument>>,
) {
    let mock_server = mock_server.await;
    mock_failing_get_service(&mock_server, "theme/", 503).await;

    let result = bootstrap_theme(settings_api(&mock_server).as_ref(), &*overrides).await;

    assert!(result.is_err());
    assert_eq!(overrides.document().node_count(), 0);
}

#[rstest]
#[tokio::test]
async fn test_saving_the_default_color_removes_the_override(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
    theme_preferences_response: Value,
    overrides: Rc<ThemeOverrideManager<MemoryDocument>>,
) {
    let mock_server = mock_server.await;
    mock_get_service(&mock_server, "theme/", &theme_preferences_response).await;
    mock_put_service(&mock_server, "theme/update/", json_response(200, &json!({})), 1).await;
    let controller = ThemeController::new(
        ThemePanel::new(Rc::clone(&overrides)),
        settings_api(&mock_server),
    );
    assert!(matches!(
        controller.on_display(&host).await,
        LoadOutcome::Loaded
    ));
    assert!(overrides.document().node(COLOR_OVERRIDE_ID).is_some());
    host.edit(FormValues::new().with_text(fields::PRIMARY_COLOR, "default"));

    let saved = controller.on_submit(&host).await.unwrap();

    assert_eq!(saved.primary_color, PrimaryColor::Default);
    assert_eq!(
        request_body(&mock_server, 1).await,
        json!({
            "skin": "willow",
            "primary_color": "default",
            "font_family": "default",
            "theme_mode": "dark",
            "density": "comfortable"
        })
    );
    assert_eq!(overrides.document().node(COLOR_OVERRIDE_ID), None);
    assert!(overrides.document().node(SKIN_STYLESHEET_ID).is_some());
    assert_eq!(
        host.messages(),
        vec![(MessageKind::Success, "Theme settings saved".to_string())]
    );
}

#[rstest]
#[tokio::test]
async fn test_preview_applies_unsaved_values(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
    theme_preferences_response: Value,
    overrides: Rc<ThemeOverrideManager<MemoryDocument>>,
) {
    let mock_server = mock_server.await;
    mock_get_service(&mock_server, "theme/", &theme_preferences_response).await;
    let controller = ThemeController::new(
        ThemePanel::new(Rc::clone(&overrides)),
        settings_api(&mock_server),
    );
    controller.on_display(&host).await;
    host.edit(
        FormValues::new()
            .with_text(fields::SKIN, "contrast")
            .with_text(fields::FONT_FAMILY, "mono"),
    );

    controller.preview(&host);

    assert_eq!(
        overrides.document().node(SKIN_STYLESHEET_ID),
        Some(StyleNode::Stylesheet {
            href: "/skins/contrast.css".to_string()
        })
    );
    assert!(overrides.document().node(FONT_OVERRIDE_ID).is_some());
    assert_eq!(controller.settings().map(|theme| theme.skin), Some(Skin::Willow));
}

#[rstest]
#[tokio::test]
async fn test_invalid_color_is_not_sent(
    #[future] mock_server: MockServer,
    host: RecordingFormHost,
    theme_preferences_response: Value,
    overrides: Rc<ThemeOverrideManager<MemoryDocument>>,
) {
    let mock_server = mock_server.await;
    mock_get_service(&mock_server, "theme/", &theme_preferences_response).await;
    let controller = ThemeController::new(
        ThemePanel::new(Rc::clone(&overrides)),
        settings_api(&mock_server),
    );
    controller.on_display(&host).await;
    mock_server.reset().await;
    expect_no_request(&mock_server).await;
    host.edit(FormValues::new().with_text(fields::PRIMARY_COLOR, "#12345"));

    let result = controller.on_submit(&host).await;

    assert!(matches!(result, Err(SubmitError::Validation(_))));
    assert_eq!(
        host.messages(),
        vec![(MessageKind::Error, INVALID_COLOR_MESSAGE.to_string())]
    );
}
