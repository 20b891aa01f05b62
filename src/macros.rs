#[macro_export]
macro_rules! bail {
    ($arg:tt) => {
        return Err($arg.into())
    };
    ($($arg:tt)+) => {
        return Err(format!($($arg)*).into())
    };
}
