//! Error macros for arbor

/// Macro for returning a structural violation from tree assembly
#[macro_export]
macro_rules! bail_structural {
    ($($arg:tt)*) => {
        return Err($crate::error::ArborError::StructuralViolation {
            reason: format!($($arg)*),
        })
    };
}
