//! Built-in attributes
//!
//! | Attribute | Scope | Phase |
//! |---|---|---|
//! | [`MapFrom`] | field | pre-hydration |
//! | [`GroupFrom`] | field | pre-hydration |
//! | [`CastWith`] | field | pre-hydration |
//! | [`ConvertEmptyToNull`] | field, class | pre-hydration |
//! | [`SnakeCase`] | field, class | pre-hydration, serialization |
//! | [`MapTo`] | field | serialization |
//! | [`Hidden`] | field, class | serialization |
//! | [`EnumSerialize`] | field | serialization |

pub mod cast_with;
pub mod convert_empty;
pub mod enum_serialize;
pub mod group_from;
pub mod hidden;
pub mod map_from;
pub mod map_to;
pub mod snake_case;

pub use cast_with::CastWith;
pub use convert_empty::ConvertEmptyToNull;
pub use enum_serialize::{EnumSerialize, EnumStrategy};
pub use group_from::GroupFrom;
pub use hidden::Hidden;
pub use map_from::MapFrom;
pub use map_to::MapTo;
pub use snake_case::{SnakeCase, to_snake};
