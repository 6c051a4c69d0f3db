/// Print `$fmt` with the error and exit with status 1 when `$result` is `Err`.
#[macro_export]
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod commands;
pub mod input;
pub mod process_tokenizer;
pub mod trace_init;
