#[macro_export]
macro_rules! debug {
    ($context:expr, $template:literal $(, $value:expr)* $(,)?) => {
        if $context.options().debug {
            $crate::log!($context, $template $(, $value)*);
        }
    };
}

#[macro_export]
macro_rules! profile {
    ($context:expr, $template:literal $(, $value:expr)* $(,)?) => {
        if $context.options().profile {
            $crate::log!($context, $template $(, $value)*);
        }
    };
}

#[macro_export]
macro_rules! log {
    ($context:expr, $template:literal $(, $value:expr)* $(,)?) => {
        $context
            .console()
            .lock()
            .await
            .write_stderr(format!(concat!("weft: ", $template, "\n") $(, $value)*).as_bytes())
            .await?;
    };
}
