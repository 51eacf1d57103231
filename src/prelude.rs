pub use base::error::*;
pub use base::options::WindowOptions;
pub use base::scalar::F64;
pub use window::RankedWindow;
