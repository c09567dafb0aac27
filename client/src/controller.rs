use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use log::{debug, error, warn};

use preferences_portal::user::ProfilePictureUpload;

use crate::{
    api::{ApiError, SettingsApi},
    form::{FormHost, FormValues, MessageKind},
    panel::{
        account::{
            fields::PROFILE_PICTURE_URL, AccountPanel, UPLOAD_FAILURE_MESSAGE,
            UPLOAD_SUCCESS_MESSAGE,
        },
        notifications::NotificationsPanel,
        privacy::PrivacyPanel,
        theme::ThemePanel,
        SettingsPanel, SubmitOutcome, ValidationError, SUBMIT_IN_PROGRESS_MESSAGE,
    },
    theme_override::StyleDocument,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelPhase {
    #[default]
    Idle,
    Loading,
    Populated,
    Submitting,
    Failed,
}

#[derive(Debug)]
pub enum LoadOutcome {
    Loaded,
    Failed(ApiError),
    /// The panel was hidden, or displayed again, before the response came back.
    Stale,
    /// A submit is in flight, its result will populate the form.
    Skipped,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("A submit is already in progress")]
    Busy,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Rejected {
        message: String,
        #[source]
        source: ApiError,
    },
    /// Some steps of the save were applied before one failed.
    #[error("{message}")]
    PartiallyApplied {
        message: String,
        #[source]
        source: ApiError,
    },
}

#[derive(Debug, Default)]
struct PanelState<S> {
    phase: PanelPhase,
    settings: Option<S>,
    last_error: Option<String>,
}

impl<S> PanelState<S> {
    /// Phase to go back to when a load or submit does not complete.
    fn resting_phase(&self) -> PanelPhase {
        if self.settings.is_some() {
            PanelPhase::Populated
        } else {
            PanelPhase::Idle
        }
    }
}

/// Marks a submit or upload in flight for as long as it lives. Dropping it,
/// including when the owning future is cancelled mid-request, clears the
/// flag and leaves `Submitting` for the phase the panel had before.
struct InFlightGuard<'a, P: SettingsPanel> {
    controller: &'a SettingsFormController<P>,
    previous_phase: PanelPhase,
}

impl<'a, P: SettingsPanel> InFlightGuard<'a, P> {
    fn new(controller: &'a SettingsFormController<P>, previous_phase: PanelPhase) -> Self {
        controller.submit_in_flight.set(true);
        Self {
            controller,
            previous_phase,
        }
    }
}

impl<P: SettingsPanel> Drop for InFlightGuard<'_, P> {
    fn drop(&mut self) {
        self.controller.submit_in_flight.set(false);
        if self.controller.phase() == PanelPhase::Submitting {
            warn!(
                "{} panel: submit abandoned before completion",
                self.controller.panel.kind()
            );
            self.controller.set_phase(self.previous_phase);
        }
    }
}

/// Drives one settings panel: loads its values when displayed, validates
/// and saves them on submit, and keeps the form in sync with the server.
///
/// State is only borrowed between awaits, never across one.
pub struct SettingsFormController<P: SettingsPanel> {
    panel: P,
    api: Rc<dyn SettingsApi>,
    state: RefCell<PanelState<P::Settings>>,
    generation: Cell<u64>,
    submit_in_flight: Cell<bool>,
}

pub type AccountController = SettingsFormController<AccountPanel>;
pub type NotificationsController = SettingsFormController<NotificationsPanel>;
pub type PrivacyController = SettingsFormController<PrivacyPanel>;
pub type ThemeController<D> = SettingsFormController<ThemePanel<D>>;

impl<P: SettingsPanel> SettingsFormController<P> {
    pub fn new(panel: P, api: Rc<dyn SettingsApi>) -> Self {
        Self {
            panel,
            api,
            state: RefCell::new(PanelState::default()),
            generation: Cell::new(0),
            submit_in_flight: Cell::new(false),
        }
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn phase(&self) -> PanelPhase {
        self.state.borrow().phase
    }

    /// Last entity known to be saved on the server.
    pub fn settings(&self) -> Option<P::Settings> {
        self.state.borrow().settings.clone()
    }

    /// Last message shown to the user for a failed submit or upload.
    pub fn last_error(&self) -> Option<String> {
        self.state.borrow().last_error.clone()
    }

    pub fn is_submitting(&self) -> bool {
        self.submit_in_flight.get()
    }

    fn set_phase(&self, phase: PanelPhase) {
        let mut state = self.state.borrow_mut();
        if state.phase != phase {
            debug!("{} panel: {:?} -> {:?}", self.panel.kind(), state.phase, phase);
            state.phase = phase;
        }
    }

    fn next_generation(&self) -> u64 {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        generation
    }

    fn store(&self, settings: P::Settings) {
        let mut state = self.state.borrow_mut();
        state.settings = Some(settings);
        state.last_error = None;
    }

    fn report_error(&self, host: &dyn FormHost, message: String) {
        host.show_message(MessageKind::Error, &message);
        self.state.borrow_mut().last_error = Some(message);
    }

    pub async fn on_display(&self, host: &dyn FormHost) -> LoadOutcome {
        if self.submit_in_flight.get() {
            debug!("{} panel: not reloading while submitting", self.panel.kind());
            return LoadOutcome::Skipped;
        }

        let generation = self.next_generation();
        self.set_phase(PanelPhase::Loading);

        let result = self.panel.load(self.api.as_ref()).await;

        if self.generation.get() != generation {
            warn!("{} panel: dropping stale load response", self.panel.kind());
            return LoadOutcome::Stale;
        }

        match result {
            Ok(settings) => {
                host.set_values(self.panel.to_form(&settings));
                self.panel.on_loaded(&settings);
                self.store(settings);
                self.set_phase(PanelPhase::Populated);
                LoadOutcome::Loaded
            }
            Err(error) => {
                error!("{} panel: failed to load settings: {error:?}", self.panel.kind());
                let resting_phase = self.state.borrow().resting_phase();
                self.set_phase(resting_phase);
                LoadOutcome::Failed(error)
            }
        }
    }

    pub fn on_hide(&self) {
        self.next_generation();
        if self.phase() == PanelPhase::Loading {
            let resting_phase = self.state.borrow().resting_phase();
            self.set_phase(resting_phase);
        }
    }

    pub async fn on_submit(&self, host: &dyn FormHost) -> Result<P::Settings, SubmitError> {
        if self.submit_in_flight.get() {
            warn!("{} panel: submit rejected, another one is in flight", self.panel.kind());
            host.show_message(MessageKind::Info, SUBMIT_IN_PROGRESS_MESSAGE);
            return Err(SubmitError::Busy);
        }

        let values = host.get_values();
        let base = self.settings().unwrap_or_default();
        let settings = match self.panel.from_form(&base, &values) {
            Ok(settings) => settings,
            Err(error) => {
                warn!("{} panel: invalid form: {error}", self.panel.kind());
                self.report_error(host, error.0.clone());
                return Err(SubmitError::Validation(error));
            }
        };

        // A load still in flight would overwrite what is being saved
        self.next_generation();
        let pre_submit_phase = match self.phase() {
            PanelPhase::Loading => self.state.borrow().resting_phase(),
            phase => phase,
        };
        let _in_flight = InFlightGuard::new(self, pre_submit_phase);
        self.set_phase(PanelPhase::Submitting);

        let outcome = self.panel.save(self.api.as_ref(), &settings, &values).await;

        match outcome {
            SubmitOutcome::Saved(saved) => {
                let mut form = self.panel.to_form(&saved);
                for field in self.panel.ephemeral_fields() {
                    form.set_text(field, "");
                }
                self.saved(host, &saved, form);
                Ok(saved)
            }
            SubmitOutcome::PartiallySaved {
                saved,
                error,
                fallback_message,
            } => {
                error!("{} panel: save partially applied: {error:?}", self.panel.kind());
                self.saved(host, &saved, self.panel.to_form(&saved));
                let message = error.user_message(fallback_message);
                self.report_error(host, message.clone());
                Err(SubmitError::PartiallyApplied {
                    message,
                    source: error,
                })
            }
            SubmitOutcome::Failed(error) => {
                error!("{} panel: failed to save settings: {error:?}", self.panel.kind());
                self.set_phase(PanelPhase::Failed);
                let message = error.user_message(self.panel.failure_message());
                host.set_values(values);
                self.report_error(host, message.clone());
                self.set_phase(pre_submit_phase);
                Err(SubmitError::Rejected {
                    message,
                    source: error,
                })
            }
        }
    }

    fn saved(&self, host: &dyn FormHost, saved: &P::Settings, form: FormValues) {
        host.set_values(form);
        self.panel.on_saved(saved);
        self.store(saved.clone());
        self.set_phase(PanelPhase::Populated);
        host.show_message(MessageKind::Success, self.panel.success_message());
    }
}

impl SettingsFormController<AccountPanel> {
    /// Shows `upload` as the profile picture right away, then uploads it.
    /// The previous picture comes back if the upload fails.
    pub async fn upload_profile_picture(
        &self,
        host: &dyn FormHost,
        upload: ProfilePictureUpload,
    ) -> Result<String, SubmitError> {
        if self.submit_in_flight.get() {
            warn!("Profile picture upload rejected, a save is in flight");
            host.show_message(MessageKind::Info, SUBMIT_IN_PROGRESS_MESSAGE);
            return Err(SubmitError::Busy);
        }
        let _in_flight = InFlightGuard::new(self, self.phase());

        let previous_url = host.get_values().text(PROFILE_PICTURE_URL).to_string();
        let preview_url = upload.preview_url();
        host.set_values(FormValues::new().with_text(PROFILE_PICTURE_URL, preview_url.clone()));

        debug!("Uploading profile picture {upload:?}");
        match self.api.upload_profile_picture(&upload).await {
            Ok(response) => {
                let picture_url = match response.profile_picture {
                    Some(reference) => {
                        let picture_url = self.panel.picture_url(Some(&reference));
                        if let Some(profile) = self.state.borrow_mut().settings.as_mut() {
                            profile.profile_picture = Some(reference);
                        }
                        picture_url
                    }
                    None => preview_url,
                };
                host.set_values(
                    FormValues::new().with_text(PROFILE_PICTURE_URL, picture_url.clone()),
                );
                host.show_message(MessageKind::Success, UPLOAD_SUCCESS_MESSAGE);
                Ok(picture_url)
            }
            Err(error) => {
                error!("Failed to upload profile picture: {error:?}");
                host.set_values(FormValues::new().with_text(PROFILE_PICTURE_URL, previous_url));
                let message = error.user_message(UPLOAD_FAILURE_MESSAGE);
                self.report_error(host, message.clone());
                Err(SubmitError::Rejected {
                    message,
                    source: error,
                })
            }
        }
    }
}

impl<D: StyleDocument> SettingsFormController<ThemePanel<D>> {
    /// Live preview of the theme form's unsaved values.
    pub fn preview(&self, host: &dyn FormHost) {
        let base = self.settings().unwrap_or_default();
        self.panel.preview(&base, &host.get_values());
    }
}
