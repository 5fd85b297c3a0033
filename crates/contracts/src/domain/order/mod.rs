pub mod aggregate;

pub use aggregate::{
    Order, OrderId, OrderItem, OrderItemProduct, OrderStatus, PaymentStatus,
};
