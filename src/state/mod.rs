mod manager;

pub use manager::OrderManager;
