//! Inspectable runtime values.
//!
//! Any `T: Serialize` is captured as a [`Value`] tree through a custom serde
//! serializer. The assertions operate only on `Value`, which is what lets
//! them work across arbitrary user-defined record types.
//!
//! ## Entry point
//!
//! ```
//! use shouldx_core::value::{to_value, Value};
//!
//! let value = to_value(&vec![1u8, 2]).unwrap();
//! assert_eq!(value, Value::Seq(vec![Value::Uint(1), Value::Uint(2)]));
//! ```

pub mod extract;
pub mod model;
pub mod serializer;

pub use extract::{check_element_shape, get_key};
pub use model::{KeyValue, Kind, Record, Value, Variant};
pub use serializer::{to_value, ValueSerializer};
