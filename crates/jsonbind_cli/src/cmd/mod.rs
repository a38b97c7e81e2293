/// Record binding command.
pub mod bind;
/// Key path lookup command.
pub mod get;
/// Kind tree command.
pub mod kinds;

mod records;
mod util;
