use std::sync::LazyLock;

mod macros;

/// Returns the version of the ezform workspace, including the git revision if
/// `EZFORM_GIT_REV` was set at build time.
pub fn ezform_version() -> &'static str {
    static VERSION: LazyLock<String> = LazyLock::new(|| match option_env!("EZFORM_GIT_REV") {
        Some(rev) if !rev.is_empty() => format!("{}-{rev}", env!("CARGO_PKG_VERSION")),
        _ => env!("CARGO_PKG_VERSION").into(),
    });

    &VERSION
}
