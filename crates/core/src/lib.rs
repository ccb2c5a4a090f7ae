mod macros;
mod number;
mod primitive;
mod traits;
mod types;
mod value;

use fxhash::FxBuildHasher;

pub type IndexMap<K, V> = indexmap::map::IndexMap<K, V, FxBuildHasher>;

pub use number::*;
pub use primitive::*;
pub use traits::*;
pub use types::*;
pub use value::*;
