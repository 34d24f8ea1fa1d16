use std::mem;

use crate::domain::order::{Order, OrderError, OrderStore};
use super::action::{Action, Field};
use super::screen::Screen;

// ============================================================================
// Session - which screen is active, what is typed, which order is open
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("'{action}' is not available on the {screen} screen")]
    ActionNotAvailable { screen: Screen, action: &'static str },

    #[error("No order is open for editing")]
    NoOrderSelected,

    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Input buffers of the active screen. Cleared whenever the screen changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drafts {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub clothes_count: String,
    pub address: String,
}

impl Drafts {
    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::ClothesCount => &mut self.clothes_count,
            Field::Address => &mut self.address,
        };
        *slot = value;
    }
}

/// Result of a successful dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
    /// Order events the action appended to the store
    pub recorded_events: usize,
}

impl Transition {
    pub fn changed_screen(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    editing: Option<u64>,
    drafts: Drafts,
}

impl Session {
    pub fn new(start: Screen) -> Self {
        Self {
            screen: start,
            editing: None,
            drafts: Drafts::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn drafts(&self) -> &Drafts {
        &self.drafts
    }

    /// Id of the order open on the update screen
    pub fn editing(&self) -> Option<u64> {
        self.editing
    }

    /// The order open for editing, read from the store so it is never stale
    pub fn edited_order<'a>(&self, store: &'a OrderStore) -> Option<&'a Order> {
        self.editing.and_then(|id| store.get_order(id))
    }

    /// Apply one user action.
    ///
    /// On error the session is left as it was.
    pub fn dispatch(&mut self, store: &mut OrderStore, action: Action) -> Result<Transition, NavigationError> {
        let from = self.screen;
        let events_before = store.event_count();

        let to = match (from, action) {
            (screen, Action::Input { field, value }) if field.is_on(screen) => {
                self.drafts.set(field, value);
                screen
            }

            // Authentication is a placeholder: nothing is checked
            (Screen::Login, Action::Login | Action::GoogleLogin) => {
                tracing::warn!(email = %self.drafts.email, "Login accepted without verifying credentials");
                Screen::Home
            }
            (Screen::Login, Action::OpenSignup) => Screen::Signup,

            (Screen::Signup, Action::CreateAccount) => {
                tracing::warn!(email = %self.drafts.email, "Account not created: sign-up is a placeholder");
                Screen::Login
            }
            (Screen::Signup, Action::Back) => Screen::Login,

            (Screen::Home, Action::NewOrder) => Screen::NewOrder,
            (Screen::Home, Action::ViewOrders) => Screen::OrderList,
            (Screen::Home, Action::Logout) => Screen::Login,

            (Screen::NewOrder, Action::SubmitOrder) => {
                let drafts = mem::take(&mut self.drafts);
                store.create_order(drafts.clothes_count, drafts.address);
                Screen::OrderList
            }
            (Screen::NewOrder, Action::Back) => Screen::Home,

            (Screen::OrderList, Action::SelectOrder(order_id)) => {
                if store.get_order(order_id).is_none() {
                    return Err(OrderError::NotFound(order_id).into());
                }
                self.editing = Some(order_id);
                Screen::UpdateOrder
            }
            (Screen::OrderList, Action::Back) => Screen::Home,

            (Screen::UpdateOrder, Action::SetStatus(status)) => {
                let order_id = self.editing.ok_or(NavigationError::NoOrderSelected)?;
                store.update_status(order_id, &status)?;
                Screen::OrderList
            }
            (Screen::UpdateOrder, Action::Back) => Screen::OrderList,

            (screen, action) => {
                return Err(NavigationError::ActionNotAvailable {
                    screen,
                    action: action.name(),
                });
            }
        };

        self.go_to(to);

        tracing::debug!(from = %from, to = %to, "Dispatched action");
        Ok(Transition {
            from,
            to,
            recorded_events: store.event_count() - events_before,
        })
    }

    fn go_to(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        if self.screen == Screen::UpdateOrder {
            self.editing = None;
        }
        self.drafts = Drafts::default();
        self.screen = screen;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
