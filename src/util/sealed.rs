/// A marker supertrait which prevents traits in this crate from being implemented downstream.
/// The module is crate-private, so external code can name the traits bounded by it but never
/// satisfy the bound.
pub trait Sealed {}
