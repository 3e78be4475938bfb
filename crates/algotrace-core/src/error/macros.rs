//! Error macros for algotrace

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::TraceError::invalid_value($context, $value))
    };
}

/// Macro for creating usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::TraceError::UsageError($msg.to_string()))
    };
}

/// Macro for rejecting a raw graph during validation
#[macro_export]
macro_rules! bail_validation {
    ($err:expr) => {
        return Err($crate::error::TraceError::Validation($err))
    };
}
