//! A set of builders used to make using methods on certain structs simpler to use.
//!
//! These are used when not all parameters are required, all parameters are optional, and/or sane
//! default values for required parameters can be applied by a builder.

mod input_file;
mod input_sticker;

pub use self::input_file::InputFile;
pub(crate) use self::input_sticker::attach_stickers;
pub use self::input_sticker::InputSticker;
