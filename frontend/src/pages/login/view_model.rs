use crate::{api::UserRecord, state::auth::AuthHandle};
use leptos::*;

pub const INVALID_CREDENTIALS_MESSAGE: &str = "Credenciales incorrectas";

/// Outcome of the most recent submit. Only a submit moves between variants.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginStatus {
    #[default]
    Idle,
    Error(String),
}

impl LoginStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, LoginStatus::Error(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            LoginStatus::Idle => None,
            LoginStatus::Error(msg) => Some(msg.as_str()),
        }
    }
}

/// Controlled values of the two credential inputs.
#[derive(Clone, Copy, Debug)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn on_email_change(&self, value: String) {
        self.email.set(value);
    }

    pub fn on_password_change(&self, value: String) {
        self.password.set(value);
    }
}

#[derive(Clone)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub status: RwSignal<LoginStatus>,
    auth: AuthHandle,
    on_authenticated: Option<Callback<UserRecord>>,
}

impl LoginViewModel {
    /// Calls the authenticator exactly once with the current field values.
    /// Editing the fields afterwards leaves `status` alone.
    pub fn submit(&self) -> Option<UserRecord> {
        let email = self.form.email.get_untracked();
        let password = self.form.password.get_untracked();

        match self.auth.login(&email, &password) {
            Some(user) => {
                self.status.set(LoginStatus::Idle);
                if let Some(callback) = &self.on_authenticated {
                    callback.call(user.clone());
                }
                Some(user)
            }
            None => {
                self.status
                    .set(LoginStatus::Error(INVALID_CREDENTIALS_MESSAGE.into()));
                None
            }
        }
    }
}

pub fn use_login_view_model(
    auth: AuthHandle,
    on_authenticated: Option<Callback<UserRecord>>,
) -> LoginViewModel {
    LoginViewModel {
        form: LoginFormState::default(),
        status: create_rw_signal(LoginStatus::Idle),
        auth,
        on_authenticated,
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{cliente_user, SpyAuthenticator};
    use crate::test_support::ssr::with_runtime;
    use std::{cell::RefCell, rc::Rc};

    fn fill(vm: &LoginViewModel) {
        vm.form.on_email_change("test@gmail.com".into());
        vm.form.on_password_change("pass123".into());
    }

    fn expected_call() -> Vec<(String, String)> {
        vec![("test@gmail.com".to_string(), "pass123".to_string())]
    }

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let spy = SpyAuthenticator::rejecting();
            let vm = use_login_view_model(spy.handle(), None);
            assert!(vm.form.email.get().is_empty());
            assert!(vm.form.password.get().is_empty());
            assert_eq!(vm.status.get(), LoginStatus::Idle);
            assert!(spy.calls().is_empty());
        });
    }

    #[test]
    fn field_changes_are_stored_verbatim() {
        with_runtime(|| {
            let vm = use_login_view_model(SpyAuthenticator::rejecting().handle(), None);
            for value in ["test@gmail.com", "  spaced  ", "", "ñandú@correo.cl"] {
                vm.form.on_email_change(value.to_string());
                assert_eq!(vm.form.email.get(), value);
            }
            for value in ["pass123", " p a s s ", "\t"] {
                vm.form.on_password_change(value.to_string());
                assert_eq!(vm.form.password.get(), value);
            }
        });
    }

    #[test]
    fn failed_login_sets_error_and_calls_once() {
        with_runtime(|| {
            let spy = SpyAuthenticator::rejecting();
            let vm = use_login_view_model(spy.handle(), None);
            fill(&vm);

            assert!(vm.submit().is_none());
            assert_eq!(
                vm.status.get(),
                LoginStatus::Error("Credenciales incorrectas".into())
            );
            assert_eq!(spy.calls(), expected_call());
        });
    }

    #[test]
    fn successful_login_keeps_idle_and_hands_off_user() {
        with_runtime(|| {
            let spy = SpyAuthenticator::accepting(cliente_user());
            let received = Rc::new(RefCell::new(Vec::new()));
            let sink = Rc::clone(&received);
            let on_authenticated = Callback::new(move |user: UserRecord| {
                sink.borrow_mut().push(user);
            });
            let vm = use_login_view_model(spy.handle(), Some(on_authenticated));
            fill(&vm);

            assert_eq!(vm.submit(), Some(cliente_user()));
            assert_eq!(vm.status.get(), LoginStatus::Idle);
            assert_eq!(spy.calls(), expected_call());
            assert_eq!(*received.borrow(), vec![cliente_user()]);
        });
    }

    #[test]
    fn editing_after_failure_keeps_error() {
        with_runtime(|| {
            let vm = use_login_view_model(SpyAuthenticator::rejecting().handle(), None);
            fill(&vm);
            vm.submit();

            vm.form.on_email_change("otro@gmail.com".into());
            vm.form.on_password_change(String::new());
            assert!(vm.status.get().is_error());
        });
    }

    #[test]
    fn later_success_clears_error() {
        with_runtime(|| {
            let spy = SpyAuthenticator::rejecting();
            let vm = use_login_view_model(spy.handle(), None);
            fill(&vm);
            vm.submit();
            assert!(vm.status.get().is_error());

            spy.respond_with(Some(cliente_user()));
            vm.submit();
            assert_eq!(vm.status.get(), LoginStatus::Idle);
            assert_eq!(spy.calls().len(), 2);
        });
    }

    #[test]
    fn retyping_same_value_changes_nothing() {
        with_runtime(|| {
            let vm = use_login_view_model(SpyAuthenticator::rejecting().handle(), None);
            vm.form.on_email_change("test@gmail.com".into());
            vm.form.on_email_change("test@gmail.com".into());
            assert_eq!(vm.form.email.get(), "test@gmail.com");
            assert_eq!(vm.status.get(), LoginStatus::Idle);

            vm.submit();
            vm.form.on_password_change("pass123".into());
            vm.form.on_password_change("pass123".into());
            assert_eq!(vm.form.password.get(), "pass123");
            assert!(vm.status.get().is_error());
        });
    }
}
