pub mod aggregate;

pub use aggregate::{seed, Subscription, SubscriptionKind};
