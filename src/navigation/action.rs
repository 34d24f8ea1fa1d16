use super::screen::Screen;

/// Text input boxes across the screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    ClothesCount,
    Address,
}

impl Field {
    /// Whether the screen shows this input
    pub fn is_on(&self, screen: Screen) -> bool {
        matches!(
            (screen, self),
            (Screen::Login, Field::Email | Field::Password)
                | (Screen::Signup, Field::Email | Field::Password | Field::ConfirmPassword)
                | (Screen::NewOrder, Field::ClothesCount | Field::Address)
        )
    }
}

/// One user action. Which screen accepts which action is decided by
/// `Session::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Input { field: Field, value: String },

    // Login
    Login,
    GoogleLogin,
    OpenSignup,

    // Signup
    CreateAccount,

    // Home
    NewOrder,
    ViewOrders,
    Logout,

    // NewOrder
    SubmitOrder,

    // OrderList
    SelectOrder(u64),

    // UpdateOrder
    SetStatus(String),

    Back,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Input { .. } => "input",
            Action::Login => "login",
            Action::GoogleLogin => "google_login",
            Action::OpenSignup => "open_signup",
            Action::CreateAccount => "create_account",
            Action::NewOrder => "new_order",
            Action::ViewOrders => "view_orders",
            Action::Logout => "logout",
            Action::SubmitOrder => "submit_order",
            Action::SelectOrder(_) => "select_order",
            Action::SetStatus(_) => "set_status",
            Action::Back => "back",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_per_screen() {
        assert!(Field::Email.is_on(Screen::Login));
        assert!(Field::ConfirmPassword.is_on(Screen::Signup));
        assert!(!Field::ConfirmPassword.is_on(Screen::Login));
        assert!(Field::Address.is_on(Screen::NewOrder));
        assert!(!Field::Address.is_on(Screen::OrderList));
        assert!(!Field::Email.is_on(Screen::Home));
    }
}
