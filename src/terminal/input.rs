use crate::navigation::{Action, Field, Screen};
use crate::domain::order::OrderStatus;

/// What one typed line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Action),
    Help,
    /// Event log of the given order, or of the one open for editing
    History(Option<u64>),
    Json,
    Metrics,
    Quit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Nothing entered")]
    Empty,

    #[error("Unknown command '{0}' (type 'help')")]
    UnknownCommand(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("'{0}' is not an order number")]
    InvalidOrderId(String),
}

/// Parse one input line.
///
/// Text after a field keyword is kept as typed, minus the separating
/// whitespace. On the order list a bare number opens that order; on the
/// update screen a bare status name sets it.
pub fn parse_line(screen: Screen, line: &str) -> Result<Command, InputError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    if trimmed.trim_end().is_empty() {
        return Err(InputError::Empty);
    }

    let (keyword, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, Some(rest.trim_start())),
        None => (trimmed, None),
    };
    let text = || rest.unwrap_or_default().to_string();

    let action = match keyword {
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "json" => return Ok(Command::Json),
        "metrics" => return Ok(Command::Metrics),
        "history" => {
            let order_id = rest
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(parse_order_id)
                .transpose()?;
            return Ok(Command::History(order_id));
        }

        "email" => Action::Input { field: Field::Email, value: text() },
        "password" => Action::Input { field: Field::Password, value: text() },
        "confirm" => Action::Input { field: Field::ConfirmPassword, value: text() },
        "clothes" => Action::Input { field: Field::ClothesCount, value: text() },
        "address" => Action::Input { field: Field::Address, value: text() },

        "login" => Action::Login,
        "google" => Action::GoogleLogin,
        "signup" => Action::OpenSignup,
        "create" => Action::CreateAccount,
        "new" => Action::NewOrder,
        "orders" => Action::ViewOrders,
        "logout" => Action::Logout,
        "submit" => Action::SubmitOrder,
        "back" => Action::Back,

        "open" => {
            let raw = rest.map(str::trim).filter(|s| !s.is_empty()).ok_or(InputError::MissingArgument("open"))?;
            Action::SelectOrder(parse_order_id(raw)?)
        }
        "set" => {
            let status = rest.map(str::trim).filter(|s| !s.is_empty()).ok_or(InputError::MissingArgument("set"))?;
            Action::SetStatus(status.to_string())
        }

        other if screen == Screen::OrderList && rest.is_none() && parse_order_id(other).is_ok() => {
            Action::SelectOrder(parse_order_id(other)?)
        }
        other if screen == Screen::UpdateOrder && rest.is_none() && other.parse::<OrderStatus>().is_ok() => {
            Action::SetStatus(other.to_string())
        }

        other => return Err(InputError::UnknownCommand(other.to_string())),
    };

    Ok(Command::Dispatch(action))
}

fn parse_order_id(raw: &str) -> Result<u64, InputError> {
    raw.trim_start_matches('#')
        .parse()
        .map_err(|_| InputError::InvalidOrderId(raw.to_string()))
}
