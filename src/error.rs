/// There is but one – malformed input.
///
/// Arithmetic itself never fails (it wraps); only parsing can.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error;

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
