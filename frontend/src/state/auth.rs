use crate::api::{AccountRecord, UserRecord};
use std::{cell::RefCell, fmt, rc::Rc};

/// Verifies a pair of credentials.
///
/// `None` means "not authenticated"; implementations collapse wrong
/// credentials and an unavailable backend into the same outcome.
pub trait Authenticator {
    fn login(&self, email: &str, password: &str) -> Option<UserRecord>;
}

/// Shared handle to the authenticator the app was wired with.
#[derive(Clone)]
pub struct AuthHandle(Rc<dyn Authenticator>);

impl AuthHandle {
    pub fn new<A: Authenticator + 'static>(authenticator: A) -> Self {
        Self(Rc::new(authenticator))
    }

    pub fn login(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.0.login(email, password)
    }
}

impl<A: Authenticator + 'static> From<Rc<A>> for AuthHandle {
    fn from(inner: Rc<A>) -> Self {
        Self(inner)
    }
}

impl fmt::Debug for AuthHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthHandle")
    }
}

/// In-memory account list used as the production authenticator.
#[derive(Clone, Default)]
pub struct AccountDirectory {
    accounts: Rc<RefCell<Vec<AccountRecord>>>,
}

impl AccountDirectory {
    pub fn new(accounts: Vec<AccountRecord>) -> Self {
        Self {
            accounts: Rc::new(RefCell::new(accounts)),
        }
    }

    pub fn with_demo_accounts() -> Self {
        Self::new(demo_accounts())
    }

    pub fn replace(&self, accounts: Vec<AccountRecord>) {
        *self.accounts.borrow_mut() = accounts;
    }

    pub fn len(&self) -> usize {
        self.accounts.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.borrow().is_empty()
    }
}

impl Authenticator for AccountDirectory {
    fn login(&self, email: &str, password: &str) -> Option<UserRecord> {
        self.accounts
            .borrow()
            .iter()
            .find(|account| account.email == email && account.password == password)
            .map(AccountRecord::to_user)
    }
}

fn demo_accounts() -> Vec<AccountRecord> {
    vec![
        AccountRecord {
            email: "admin@tienda.cl".into(),
            password: "admin123".into(),
            name: "Administrador".into(),
            role: "admin".into(),
        },
        AccountRecord {
            email: "cliente@tienda.cl".into(),
            password: "cliente123".into(),
            name: "Cliente".into(),
            role: "cliente".into(),
        },
    ]
}
