// ============================================================================
// Order Commands - Represent user intent against an existing order
// ============================================================================
//
// Placing an order has no command: the aggregate does not exist yet and the
// inputs are taken verbatim (see `Order::place`).
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderCommand {
    /// Raw status name as chosen by the caller, parsed by the aggregate
    UpdateStatus {
        status: String,
    },
}
