pub mod aggregate;

pub use aggregate::{
    is_terminal_status, status_label, Order, OrderCustomer, OrderItem, OrderStatusUpdate,
    ORDER_STATUSES,
};
