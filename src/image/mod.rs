pub mod io;
pub mod rgb;
pub mod traits;

pub use self::rgb::{ImageRgb8, Pixel3};
pub use self::traits::{ImageView, Pixels, Rows};
