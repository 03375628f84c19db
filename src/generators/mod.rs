pub mod memorable;
pub mod numeric;
pub mod random_string;
pub mod selector;
pub mod traits;

pub use memorable::{Capitalization, MemorablePassphraseGenerator};
pub use numeric::{NumericCodeGenerator, PinCodeGenerator};
pub use random_string::RandomStringGenerator;
pub use selector::{GeneratorKind, create_generator};
pub use traits::PasswordGenerator;
