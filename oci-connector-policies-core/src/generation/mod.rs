//! Policy statement generation (deterministic string templating).

mod templates;

pub use templates::{emission_order, generate_policies, Role, STATEMENT_SEPARATOR};
