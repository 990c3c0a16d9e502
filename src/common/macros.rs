#[macro_export]
macro_rules! log_err {
    // Usage: log_err!(err, "rendering homepage");
    ($err:expr, $context:expr) => {{
        ::log::error!(
            "{}:{}: {} failed: {}",
            file!(),
            line!(),
            $context,
            $err
        );
    }};
}
