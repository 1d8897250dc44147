/// Core value type.
///
/// Defines [`core::Value`], the integer and boolean results of evaluation,
/// together with truthiness and display.
pub mod core;
/// The name → value/definition mapping.
///
/// Defines [`environment::Environment`] and the bindings it stores.
pub mod environment;
