//! Macros for declarative configuration construction.

/// Assemble a [`Configuration`](crate::Configuration) from a declarative
/// table.
///
/// Expands to a [`ConfigurationBuilder`](crate::builder::ConfigurationBuilder)
/// chain and yields its `Result`, so missing and duplicate declarations are
/// still caught at build time.
///
/// # Example
///
/// ```rust
/// use turnstile::configuration;
///
/// let config = configuration! {
///     initial: "locked",
///     states: {
///         "locked" => { "unlock" => "closed" },
///         "closed" => { "lock" => "locked", "open" => "open" },
///         "open" => { "close" => "closed" },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.initial, "locked");
/// assert_eq!(config.state_names(), vec!["locked", "closed", "open"]);
/// ```
#[macro_export]
macro_rules! configuration {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        $crate::builder::ConfigurationBuilder::new()
            .initial($initial)
            $(
                .state(
                    $crate::builder::StateBuilder::new($state)
                        $(.on($event, $target))*
                )
            )*
            .build()
    }};
}
