use std::fmt::Write;

use crate::domain::order::{Order, OrderEvent, OrderStatus, OrderStore};
use crate::event_sourcing::EventEnvelope;
use crate::navigation::{Screen, Session};

/// Commands offered on each screen, shown under the screen body
pub fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Login => "email <text> | password <text> | login | google | signup",
        Screen::Signup => "email <text> | password <text> | confirm <text> | create | back",
        Screen::Home => "new | orders | logout",
        Screen::NewOrder => "clothes <text> | address <text> | submit | back",
        Screen::OrderList => "open <id> | back | json | history <id>",
        Screen::UpdateOrder => "set Pending | set Processing | set Completed | history | back",
    }
}

/// Plain-text rendering of the active screen
pub fn render_screen(session: &Session, store: &OrderStore) -> String {
    let mut out = String::new();
    let screen = session.screen();
    let drafts = session.drafts();

    match screen {
        Screen::UpdateOrder => match session.edited_order(store) {
            Some(order) => {
                let _ = writeln!(out, "== Order #{} ==", order.id);
                let _ = writeln!(out, "  Clothes: {}", order.clothes_count);
                let _ = writeln!(out, "  Address: {}", order.address);
                let _ = writeln!(out, "  Status:  {}", order.status);
                let _ = writeln!(out, "  Set: {}", status_buttons());
            }
            None => {
                let _ = writeln!(out, "== {} ==", screen.title());
                let _ = writeln!(out, "  (no order selected)");
            }
        },
        _ => {
            let _ = writeln!(out, "== {} ==", screen.title());
        }
    }

    match screen {
        Screen::Login => {
            let _ = writeln!(out, "  Email:    {}", drafts.email);
            let _ = writeln!(out, "  Password: {}", mask(&drafts.password));
        }
        Screen::Signup => {
            let _ = writeln!(out, "  Email:            {}", drafts.email);
            let _ = writeln!(out, "  Password:         {}", mask(&drafts.password));
            let _ = writeln!(out, "  Confirm Password: {}", mask(&drafts.confirm_password));
        }
        Screen::Home => {
            let _ = writeln!(out, "  [new]    Place New Order");
            let _ = writeln!(out, "  [orders] Track / View Orders");
        }
        Screen::NewOrder => {
            let _ = writeln!(out, "  Clothes count:  {}", drafts.clothes_count);
            let _ = writeln!(out, "  Pickup address: {}", drafts.address);
        }
        Screen::OrderList => {
            if store.is_empty() {
                let _ = writeln!(out, "  (no orders yet)");
            }
            for order in store.list_orders() {
                let _ = writeln!(out, "  {}", order_row(order));
            }
        }
        Screen::UpdateOrder => {}
    }

    let _ = write!(out, "> {}", hints(screen));
    out
}

/// `Order #N  <clothes> clothes | <address>  [<status>]`
pub fn order_row(order: &Order) -> String {
    format!(
        "Order #{}  {} clothes | {}  [{}]",
        order.id, order.clothes_count, order.address, order.status
    )
}

pub fn render_history(order_id: u64, events: &[EventEnvelope<OrderEvent>]) -> String {
    if events.is_empty() {
        return format!("No history for order #{order_id}");
    }

    let mut out = format!("History of order #{order_id}:");
    for envelope in events {
        let detail = match &envelope.event_data {
            OrderEvent::Placed(e) => format!("placed: {} clothes | {}", e.clothes_count, e.address),
            OrderEvent::StatusChanged(e) => format!("{} -> {}", e.from, e.to),
        };
        let _ = write!(
            out,
            "\n  {:>3}  {}  {:<14} {}",
            envelope.sequence_number,
            envelope.timestamp.format("%Y-%m-%d %H:%M:%S"),
            envelope.event_type,
            detail
        );
    }
    out
}

fn status_buttons() -> String {
    OrderStatus::ALL
        .iter()
        .map(OrderStatus::as_str)
        .collect::<Vec<_>>()
        .join(" / ")
}

fn mask(secret: &str) -> String {
    "*".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::Action;

    #[test]
    fn test_order_row() {
        let mut store = OrderStore::new();
        let order = store.create_order("3", "12 Elm St");
        assert_eq!(order_row(&order), "Order #1  3 clothes | 12 Elm St  [Pending]");
    }

    #[test]
    fn test_list_screen() {
        let mut store = OrderStore::new();
        let session = Session::new(Screen::OrderList);

        let text = render_screen(&session, &store);
        assert!(text.starts_with("== Order List =="));
        assert!(text.contains("(no orders yet)"));

        store.create_order("1", "a");
        store.create_order("2", "b");
        let text = render_screen(&session, &store);
        assert!(!text.contains("(no orders yet)"));
        let first = text.find("Order #1").unwrap();
        let second = text.find("Order #2").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_passwords_are_masked() {
        let mut store = OrderStore::new();
        let mut session = Session::new(Screen::Login);
        session
            .dispatch(&mut store, Action::Input {
                field: crate::navigation::Field::Password,
                value: "hunter2".into(),
            })
            .unwrap();

        let text = render_screen(&session, &store);
        assert!(text.contains("Password: *******"));
        assert!(!text.contains("hunter2"));
    }

    #[test]
    fn test_update_screen_shows_live_status() {
        let mut store = OrderStore::new();
        store.create_order("4", "Oak Ave");
        let mut session = Session::new(Screen::OrderList);
        session.dispatch(&mut store, Action::SelectOrder(1)).unwrap();
        store.update_status(1, "Processing").unwrap();

        let text = render_screen(&session, &store);
        assert!(text.starts_with("== Order #1 =="));
        assert!(text.contains("Status:  Processing"));
        assert!(text.contains("Pending / Processing / Completed"));
    }

    #[test]
    fn test_history_rendering() {
        let mut store = OrderStore::new();
        store.create_order("4", "Oak Ave");
        store.update_status(1, "Completed").unwrap();

        let text = render_history(1, store.history(1));
        assert!(text.starts_with("History of order #1:"));
        assert!(text.contains("OrderPlaced"));
        assert!(text.contains("Pending -> Completed"));

        assert_eq!(render_history(5, store.history(5)), "No history for order #5");
    }
}
