//! Sign-in and sign-up: the only writers of a new session.

use std::future::Future;

use shared_types::{AppError, Identity, SignInRequest, SignUpRequest};
use validator::Validate;

use crate::session::SharedSessionStore;

/// Resolves submitted credentials to an identity.
///
/// The real provider is an external service; the shell only needs the
/// outcome.
pub trait IdentityProvider {
    fn sign_in(&self, request: &SignInRequest)
        -> impl Future<Output = Result<Identity, AppError>>;

    fn sign_up(&self, request: &SignUpRequest)
        -> impl Future<Output = Result<Identity, AppError>>;
}

/// Accepts any credentials.
///
/// The display name is the request `name`, or the default when none was
/// typed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedIdentityProvider;

impl IdentityProvider for SimulatedIdentityProvider {
    async fn sign_in(&self, request: &SignInRequest) -> Result<Identity, AppError> {
        let name = request.name.as_deref().unwrap_or_default();
        Ok(Identity::new(name, request.email.trim(), request.role))
    }

    async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, AppError> {
        Ok(Identity::new(
            &request.name,
            request.email.trim(),
            request.role,
        ))
    }
}

/// Progress of one form submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
    Succeeded(Identity),
    Failed(AppError),
}

impl SubmitState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmitState::Pending)
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SubmitState::Succeeded(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            SubmitState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

/// A transient toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub tone: Tone,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: Tone::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone: Tone::Error,
        }
    }

    /// Toast for a finished submission. `None` while idle or pending.
    pub fn for_outcome(state: &SubmitState) -> Option<Self> {
        match state {
            SubmitState::Succeeded(identity) => Some(Self::success(
                "Welcome to EduMap",
                format!("Signed in as {} ({})", identity.name(), identity.role().label()),
            )),
            SubmitState::Failed(error) => {
                Some(Self::error("Unable to continue", error.friendly_message()))
            }
            SubmitState::Idle | SubmitState::Pending => None,
        }
    }
}

/// Runs a submission against a provider and records the result in the store.
pub struct AuthAction<P> {
    provider: P,
    store: SharedSessionStore,
}

impl<P: IdentityProvider> AuthAction<P> {
    pub fn new(provider: P, store: SharedSessionStore) -> Self {
        Self { provider, store }
    }

    pub fn store(&self) -> &SharedSessionStore {
        &self.store
    }

    /// Sign in. `on_state` sees `Pending` before the provider is awaited and
    /// the final state after.
    pub async fn sign_in(
        &self,
        request: &SignInRequest,
        mut on_state: impl FnMut(&SubmitState),
    ) -> SubmitState {
        on_state(&SubmitState::Pending);
        let outcome = self.provider.sign_in(request).await;
        let state = self.finish(outcome);
        on_state(&state);
        state
    }

    /// Sign up. An invalid form fails before anything is submitted or stored.
    pub async fn sign_up(
        &self,
        request: &SignUpRequest,
        mut on_state: impl FnMut(&SubmitState),
    ) -> SubmitState {
        if let Err(errors) = request.validate() {
            let error = AppError::from(errors);
            tracing::debug!(fields = ?error.field_errors.keys().collect::<Vec<_>>(), "sign-up rejected");
            let state = SubmitState::Failed(error);
            on_state(&state);
            return state;
        }

        on_state(&SubmitState::Pending);
        let outcome = self.provider.sign_up(request).await;
        let state = self.finish(outcome);
        on_state(&state);
        state
    }

    fn finish(&self, outcome: Result<Identity, AppError>) -> SubmitState {
        let identity = match outcome {
            Ok(identity) => identity,
            Err(error) => {
                tracing::warn!(%error, "identity provider refused credentials");
                return SubmitState::Failed(error);
            }
        };

        match self.store.establish(identity.clone()) {
            Ok(()) => SubmitState::Succeeded(identity),
            Err(error) => {
                tracing::error!(%error, "failed to persist session");
                SubmitState::Failed(error.into())
            }
        }
    }
}
