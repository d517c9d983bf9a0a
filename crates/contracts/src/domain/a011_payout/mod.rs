pub mod aggregate;

pub use aggregate::{
    payout_status_label, AggregatedPayout, OrderPayout, PayoutRow, PayoutStatusUpdate, PayoutView,
    PromotorRef,
};
