//! Test fixtures - reusable content constants for tests.

/// Site config pointing at a port nothing listens on
pub fn site_config(name: &str, port: u16) -> String {
    format!(
        "site_name: {name}\n\
         ftp:\n  host: 127.0.0.1\n  port: {port}\n  user: deployer\n  password: secret\n  path: /www/{name}\n"
    )
}

/// Generator that fails like a broken template
pub const FAILING_GENERATOR: &str = "echo 'template error' >&2\nexit 2";

/// Generator that writes a small site into ./public
pub const WORKING_GENERATOR: &str =
    "mkdir -p public/posts && echo home > public/index.html && echo post > public/posts/a.html";
