use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Login,
    Signup,
    Home,
    NewOrder,
    OrderList,
    UpdateOrder,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login => "login",
            Screen::Signup => "signup",
            Screen::Home => "home",
            Screen::NewOrder => "order",
            Screen::OrderList => "list",
            Screen::UpdateOrder => "update",
        }
    }

    /// Heading shown at the top of the screen
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "QuickWash Login",
            Screen::Signup => "Create Account",
            Screen::Home => "QuickWash Laundry",
            Screen::NewOrder => "Place Laundry Order",
            Screen::OrderList => "Order List",
            Screen::UpdateOrder => "Update Order",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
