pub mod check;
pub mod links;
pub mod match_;
pub mod rules_loader;
