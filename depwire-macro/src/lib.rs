use proc_macro::TokenStream;

mod injectable;

/// Derive macro describing a struct's fields as constructor parameters
///
/// Generates a `depwire::Reflect` impl. Each named field becomes one
/// parameter of `__construct`, typed after the field:
///
/// - `Arc<T>`, `Box<T>`, `Rc<T>`, `Mutex<T>`, `RwLock<T>` and `&T` are looked through
/// - `Option<T>` makes the parameter nullable
/// - integers, floats, `bool`, `String` and collections map to builtins
/// - any other type (including `dyn Trait`) is a class named after its last path segment
///
/// # Example
/// ```ignore
/// use depwire::{Injectable, Value};
/// use std::sync::Arc;
///
/// #[derive(Injectable)]
/// #[inject(extends = "Vehicle", implements(Drivable))]
/// pub struct Car {
///     engine: Arc<dyn Engine>,
///     #[inject(union(Wheel, Track))]
///     traction: Arc<dyn Traction>,
///     #[inject(default = "red")]
///     color: String,
///     #[inject(default = Value::Null)]
///     driver: Option<Arc<Driver>>,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}
