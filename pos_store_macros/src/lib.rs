mod model;

use proc_macro::TokenStream;

/// Derive macro for the `Model` trait (and the `Record` trait it builds on).
///
/// # Usage
///
/// ```ignore
/// #[derive(Clone, Serialize, Deserialize, Model)]
/// #[model(collection = "products")]
/// struct Product {
///     pub id: String,
///     pub name: String,
///     #[serde(flatten)]
///     pub timestamps: Timestamps,
/// }
/// ```
///
/// - `#[model(collection = "...")]` sets the collection name.
///   If omitted, defaults to snake_case struct name + "s".
/// - The struct must have a `String` field named `id`; it is the record
///   identity and is persisted under the `"id"` key.
/// - A field named `timestamps` additionally derives `Timestamped`.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    model::derive_model(input)
}
